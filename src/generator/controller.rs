use std::collections::VecDeque;

use log::{debug, info};
use tokio::{runtime::Handle, sync::watch};

use super::{
    model::{GenerationMode, GenerationParameters, GenerationState, Snapshot},
    timer::Ticker,
};
use crate::bit::{BitSource, BitValue, RngBitSource};

/// Owns the generated values and drives generation runs.
///
/// This is the only writer of the result list. The list lives in the
/// published [`Snapshot`]; views observe it through
/// [`GenerationController::subscribe`].
pub struct GenerationController<S: BitSource = RngBitSource> {
    source: S,
    runtime: Handle,
    requested: usize,
    state: GenerationState,
    mode: Option<GenerationMode>,
    ticker: Option<Ticker>,
    snapshots: watch::Sender<Snapshot>,
}

impl<S: BitSource> GenerationController<S> {
    /// Creates a new idle controller with an empty result list.
    ///
    /// # Arguments
    /// * `source` - Where bits are drawn from.
    /// * `runtime` - The runtime that drives real-time timers.
    pub fn new(source: S, runtime: Handle) -> Self {
        let (snapshots, _) = watch::channel(Snapshot::default());

        Self {
            source,
            runtime,
            requested: 0,
            state: GenerationState::Idle,
            mode: None,
            ticker: None,
            snapshots,
        }
    }

    /// Starts a generation run.
    ///
    /// Instant runs complete before this returns. Real-time runs leave the
    /// controller `Running` until enough ticks were applied or the run is
    /// stopped.
    ///
    /// # Arguments
    /// * `params` - The requested count and interval.
    /// * `mode` - How values are produced.
    ///
    /// # Returns
    /// `false` if a run was already in progress, in which case nothing changes.
    pub fn start(&mut self, params: GenerationParameters, mode: GenerationMode) -> bool {
        if self.state == GenerationState::Running {
            debug!("start ignored: a run is already in progress");
            return false;
        }

        self.mode = Some(mode);
        self.requested = params.count();

        match mode {
            GenerationMode::Instant => {
                let mut results = VecDeque::with_capacity(params.count());
                for _ in 0..params.count() {
                    results.push_front(self.source.next_bit());
                }
                self.state = GenerationState::Idle;
                self.publish(|list| *list = results);
                info!("instant run finished: count={}", params.count());
            }
            GenerationMode::RealTime => {
                self.state = GenerationState::Running;
                self.ticker = Some(Ticker::spawn(&self.runtime, params.interval()));
                self.publish(|list| list.clear());
                info!(
                    "real-time run started: count={} interval_ms={}",
                    params.count(),
                    params.interval_ms()
                );
            }
        }

        true
    }

    /// Stops a real-time run, keeping the values generated so far.
    ///
    /// Does nothing while idle.
    pub fn stop(&mut self) {
        if self.state == GenerationState::Idle {
            debug!("stop ignored: no run in progress");
            return;
        }

        self.ticker = None;
        self.state = GenerationState::Idle;
        info!(
            "run stopped: generated={} requested={}",
            self.len(),
            self.requested
        );
        self.publish(|_| {});
    }

    /// Stops any run and clears all values and the mode.
    pub fn reset(&mut self) {
        self.ticker = None;
        self.state = GenerationState::Idle;
        self.mode = None;
        self.requested = 0;
        info!("generator reset");
        self.publish(|list| *list = VecDeque::new());
    }

    /// Applies every tick that has fired since the last call, without waiting.
    ///
    /// Meant to be called once per frame of the event loop. Ticks beyond the
    /// requested count are discarded along with the finished run.
    ///
    /// # Returns
    /// The amount of values appended.
    pub fn pump(&mut self) -> usize {
        let Some(ticker) = self.ticker.as_mut() else {
            return 0;
        };

        let pending = usize::try_from(ticker.take_pending()).unwrap_or(usize::MAX);
        let remaining = self.requested.saturating_sub(self.len());
        let applied = pending.min(remaining);

        if applied > 0 {
            let bits = (0..applied)
                .map(|_| self.source.next_bit())
                .collect::<Vec<_>>();
            self.append(bits);
        }

        applied
    }

    /// Waits for the next tick of the current run and applies it.
    ///
    /// # Returns
    /// `false` right away if no real-time run is in progress.
    pub async fn next_tick(&mut self) -> bool {
        let Some(ticker) = self.ticker.as_mut() else {
            return false;
        };

        if !ticker.tick().await {
            return false;
        }

        let bit = self.source.next_bit();
        self.append(vec![bit]);
        true
    }

    /// Registers a new observer. It immediately sees the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// Returns a copy of the latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Returns a copy of the generated values, newest first.
    pub fn results(&self) -> Vec<BitValue> {
        self.snapshots.borrow().results.iter().copied().collect()
    }

    /// Amount of values generated so far.
    pub fn len(&self) -> usize {
        self.snapshots.borrow().results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn mode(&self) -> Option<GenerationMode> {
        self.mode
    }

    /// Prepends `bits` (oldest first) and ends the run once the list is full.
    fn append(&mut self, bits: Vec<BitValue>) {
        let len = self.len() + bits.len();
        debug!("applied {} tick(s): {len}/{}", bits.len(), self.requested);

        if len >= self.requested {
            self.ticker = None;
            self.state = GenerationState::Idle;
            info!("real-time run finished: count={len}");
        }

        self.publish(|list| {
            for bit in bits {
                list.push_front(bit);
            }
        });
    }

    /// Edits the result list in place and publishes the controller state with it.
    fn publish(&self, edit: impl FnOnce(&mut VecDeque<BitValue>)) {
        self.snapshots.send_modify(|snapshot| {
            edit(&mut snapshot.results);
            snapshot.state = self.state;
            snapshot.mode = self.mode;
            snapshot.requested = self.requested;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alternating(bool);

    impl BitSource for Alternating {
        fn next_bit(&mut self) -> BitValue {
            self.0 = !self.0;
            BitValue::from(self.0)
        }
    }

    #[tokio::test]
    async fn instant_results_are_newest_first() {
        let mut controller = GenerationController::new(Alternating(false), Handle::current());

        assert!(controller.start(GenerationParameters::new(3, 1), GenerationMode::Instant));

        // Draws are 1, 0, 1; the last draw is listed first.
        assert_eq!(
            controller.results(),
            vec![BitValue::One, BitValue::Zero, BitValue::One]
        );
        assert_eq!(controller.state(), GenerationState::Idle);
        assert_eq!(controller.mode(), Some(GenerationMode::Instant));
    }

    #[tokio::test(start_paused = true)]
    async fn pumped_ticks_are_newest_first() {
        let mut controller = GenerationController::new(Alternating(false), Handle::current());
        controller.start(GenerationParameters::new(5, 10), GenerationMode::RealTime);

        tokio::time::sleep(std::time::Duration::from_millis(35)).await;
        assert_eq!(controller.pump(), 3);
        assert_eq!(
            controller.results(),
            vec![BitValue::One, BitValue::Zero, BitValue::One]
        );
    }

    #[tokio::test]
    async fn subscribers_see_every_published_change() {
        let mut controller = GenerationController::new(Alternating(false), Handle::current());
        let mut view = controller.subscribe();
        assert!(view.borrow_and_update().results.is_empty());

        controller.start(GenerationParameters::new(4, 1), GenerationMode::Instant);
        assert!(view.has_changed().unwrap_or(false));
        assert_eq!(view.borrow_and_update().results.len(), 4);

        controller.reset();
        let snapshot = view.borrow_and_update().clone();
        assert!(snapshot.results.is_empty());
        assert_eq!(snapshot.mode, None);
        assert_eq!(snapshot.requested, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn new_run_replaces_previous_results() {
        let mut controller = GenerationController::new(Alternating(false), Handle::current());
        controller.start(GenerationParameters::new(5, 1), GenerationMode::Instant);

        controller.start(GenerationParameters::new(2, 10), GenerationMode::RealTime);
        assert!(controller.is_empty());
        assert!(controller.next_tick().await);
        assert_eq!(controller.len(), 1);
    }
}
