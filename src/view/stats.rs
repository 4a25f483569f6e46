use crate::bit::BitValue;

/// Counts and shares of each value in a result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub zeros: usize,
    pub ones: usize,
    pub zero_pct: f64,
    pub one_pct: f64,
}

impl Stats {
    /// Derives the statistics of a result list.
    ///
    /// An empty list reports 0% zeros and 100% ones.
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a BitValue>,
    {
        let (total, zeros) = results
            .into_iter()
            .fold((0, 0), |(total, zeros), bit| {
                (total + 1, zeros + usize::from(bit.is_zero()))
            });
        let zero_pct = if total == 0 {
            0.0
        } else {
            100.0 * zeros as f64 / total as f64
        };

        Self {
            total,
            zeros,
            ones: total - zeros,
            zero_pct,
            one_pct: 100.0 - zero_pct,
        }
    }

    /// Formats a percentage with two decimals, e.g. `33.33%`.
    pub fn format_pct(pct: f64) -> String {
        format!("{pct:.2}%")
    }
}

/// Splits `width` columns between the zero and one segments of the bar.
///
/// The two widths always add up to `width`.
pub fn split_width(width: u16, zero_pct: f64) -> (u16, u16) {
    let share = (zero_pct.clamp(0.0, 100.0) / 100.0) * f64::from(width);
    let zero = (share.round() as u16).min(width);
    (zero, width - zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    use BitValue::{One, Zero};

    #[test]
    fn empty_list_is_all_ones() {
        let stats = Stats::from_results(&Vec::<BitValue>::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.zeros, 0);
        assert_eq!(stats.ones, 0);
        assert_eq!(Stats::format_pct(stats.zero_pct), "0.00%");
        assert_eq!(Stats::format_pct(stats.one_pct), "100.00%");
    }

    #[test]
    fn counts_and_percentages() {
        let stats = Stats::from_results(&[Zero, One, One]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.zeros, 1);
        assert_eq!(stats.ones, 2);
        assert_eq!(Stats::format_pct(stats.zero_pct), "33.33%");
        assert_eq!(Stats::format_pct(stats.one_pct), "66.67%");
        assert!((stats.zero_pct + stats.one_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn split_width_covers_the_whole_bar() {
        assert_eq!(split_width(40, 0.0), (0, 40));
        assert_eq!(split_width(40, 100.0), (40, 0));
        assert_eq!(split_width(40, 25.0), (10, 30));

        for width in [0, 1, 7, 80] {
            let (a, b) = split_width(width, 33.3333);
            assert_eq!(a + b, width);
        }
    }
}
