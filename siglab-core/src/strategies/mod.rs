//! Strategy signal functions — five independent views over one price series.
//!
//! Strategies are pure: series in, `StrategySignal` out. A series shorter
//! than `min_bars()` yields a neutral zero-confidence signal with no
//! computation. All threshold comparisons use the latest bar's value of each
//! computed series; a NaN comparison fails and the strategy stays neutral.
//!
//! # Architecture invariant
//! Strategies never see batch state, sibling strategy output, or external
//! collaborators. The trait signature enforces it.

pub mod mean_reversion;
pub mod momentum;
pub mod stat_arb;
pub mod trend;
pub mod volatility;

pub use mean_reversion::MeanReversion;
pub use momentum::Momentum;
pub use stat_arb::StatArb;
pub use trend::TrendFollowing;
pub use volatility::Volatility;

use crate::domain::{PriceSeries, StrategySignal};

/// Trait for strategy signal functions.
pub trait Strategy: Send + Sync {
    /// Report key for this strategy (e.g., "trend_following").
    fn name(&self) -> &'static str;

    /// Minimum bar count before the strategy produces a real signal.
    fn min_bars(&self) -> usize;

    /// Evaluate the strategy over the full series.
    ///
    /// Returns `StrategySignal::insufficient_history()` when the series is
    /// shorter than `min_bars()`.
    fn evaluate(&self, series: &PriceSeries) -> StrategySignal;
}

/// Latest value of an indicator series, or NaN for an empty one.
pub(crate) fn latest(values: &[f64]) -> f64 {
    values.last().copied().unwrap_or(f64::NAN)
}

/// Metric values mirror the indicator output but never leak NaN/inf into
/// reports; undefined values collapse to 0.0.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_strategies() -> Vec<Box<dyn Strategy>> {
        vec![
            Box::new(TrendFollowing),
            Box::new(MeanReversion),
            Box::new(Momentum),
            Box::new(Volatility),
            Box::new(StatArb),
        ]
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<_> = all_strategies().iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn latest_of_empty_is_nan() {
        assert!(latest(&[]).is_nan());
        assert_eq!(latest(&[1.0, 2.0]), 2.0);
    }

    #[test]
    fn finite_or_zero_scrubs() {
        assert_eq!(finite_or_zero(1.5), 1.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
    }
}
