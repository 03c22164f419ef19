//! Statistical arbitrage — return-distribution shape plus Hurst memory.
//!
//! Directional only when the Hurst exponent says the series mean-reverts
//! (H < 0.4) and the 63-bar return skew is pronounced: positive skew reads
//! bullish, negative skew bearish. Confidence is (0.5 - H) * 2 when
//! directional, 0.5 otherwise.

use std::collections::BTreeMap;

use crate::domain::{PriceSeries, SignalKind, StrategySignal};
use crate::indicators::{hurst_exponent, pct_change, rolling_kurtosis, rolling_skew};
use crate::strategies::{finite_or_zero, latest, Strategy};

const MIN_BARS: usize = 63;
const SHAPE_WINDOW: usize = 63;
const HURST_MAX_LAG: usize = 20;
const HURST_THRESHOLD: f64 = 0.4;

pub struct StatArb;

impl Strategy for StatArb {
    fn name(&self) -> &'static str {
        "statistical_arbitrage"
    }

    fn min_bars(&self) -> usize {
        MIN_BARS
    }

    fn evaluate(&self, series: &PriceSeries) -> StrategySignal {
        if series.len() < self.min_bars() {
            return StrategySignal::insufficient_history();
        }

        let closes = series.closes();
        let returns = pct_change(&closes);

        let skew = latest(&rolling_skew(&returns, SHAPE_WINDOW));
        let kurtosis = latest(&rolling_kurtosis(&returns, SHAPE_WINDOW));
        let hurst = hurst_exponent(&closes, HURST_MAX_LAG);

        let (signal, confidence) = if hurst < HURST_THRESHOLD && skew > 1.0 {
            (SignalKind::Bullish, (0.5 - hurst) * 2.0)
        } else if hurst < HURST_THRESHOLD && skew < -1.0 {
            (SignalKind::Bearish, (0.5 - hurst) * 2.0)
        } else {
            (SignalKind::Neutral, 0.5)
        };

        let mut metrics = BTreeMap::new();
        metrics.insert("hurst_exponent".to_string(), finite_or_zero(hurst));
        metrics.insert("skewness".to_string(), finite_or_zero(skew));
        metrics.insert("kurtosis".to_string(), finite_or_zero(kurtosis));

        StrategySignal::new(signal, confidence, metrics)
    }
}
