use std::time::Duration;

use tokio::{
    runtime::Handle,
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

/// The real-time timer of a single run.
///
/// The interval task publishes how many times it has fired; the owner keeps
/// track of how many of those it has consumed, so no firing is ever lost when
/// the owner drains late. Dropping the ticker cancels the task.
pub(crate) struct Ticker {
    token: CancellationToken,
    fired: watch::Receiver<u64>,
    consumed: u64,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawns a ticker that fires every `period`, starting one period from now.
    ///
    /// # Arguments
    /// * `runtime` - The runtime that drives the timer task.
    /// * `period` - Time between ticks.
    pub(crate) fn spawn(runtime: &Handle, period: Duration) -> Self {
        let token = CancellationToken::new();
        let (tx, fired) = watch::channel(0);
        let task = runtime.spawn(run(period, tx, token.clone()));

        Self {
            token,
            fired,
            consumed: 0,
            task,
        }
    }

    /// Takes every tick that fired since the last call, without waiting.
    ///
    /// # Returns
    /// The amount of ticks taken.
    pub(crate) fn take_pending(&mut self) -> u64 {
        let fired = *self.fired.borrow();
        let pending = fired - self.consumed;
        self.consumed = fired;
        pending
    }

    /// Waits for the next tick and takes it. Returns `false` if the timer task is gone.
    pub(crate) async fn tick(&mut self) -> bool {
        loop {
            if *self.fired.borrow_and_update() > self.consumed {
                self.consumed += 1;
                return true;
            }
            if self.fired.changed().await.is_err() {
                return false;
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.token.cancel();
        self.task.abort();
    }
}

async fn run(period: Duration, tx: watch::Sender<u64>, token: CancellationToken) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                tx.send_modify(|fired| *fired += 1);
                if tx.is_closed() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_arrives_after_one_period() {
        let start = Instant::now();
        let mut ticker = Ticker::spawn(&Handle::current(), Duration::from_millis(100));

        assert_eq!(ticker.take_pending(), 0);
        assert!(ticker.tick().await);
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn late_drains_see_every_firing() {
        let mut ticker = Ticker::spawn(&Handle::current(), Duration::from_millis(2));

        time::sleep(Duration::from_millis(101)).await;
        assert_eq!(ticker.take_pending(), 50);
        assert_eq!(ticker.take_pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_ticker_stops_the_task() {
        let ticker = Ticker::spawn(&Handle::current(), Duration::from_millis(10));
        let token = ticker.token.clone();

        drop(ticker);
        assert!(token.is_cancelled());
    }
}
