//! Mean reversion — z-score against the 50-bar mean plus Bollinger position.
//!
//! Bullish when the close sits more than two standard deviations below its
//! 50-bar mean AND in the lower 20% of the Bollinger(20) band; bearish in
//! the mirrored case. Confidence is min(|z|/4, 1), 0.5 when neutral.

use std::collections::BTreeMap;

use crate::domain::{PriceSeries, SignalKind, StrategySignal};
use crate::indicators::{bollinger_bands, rolling_mean, rolling_std, rsi};
use crate::strategies::{finite_or_zero, latest, Strategy};

const MIN_BARS: usize = 50;
const Z_WINDOW: usize = 50;
const BOLLINGER_WINDOW: usize = 20;

pub struct MeanReversion;

impl Strategy for MeanReversion {
    fn name(&self) -> &'static str {
        "mean_reversion"
    }

    fn min_bars(&self) -> usize {
        MIN_BARS
    }

    fn evaluate(&self, series: &PriceSeries) -> StrategySignal {
        if series.len() < self.min_bars() {
            return StrategySignal::insufficient_history();
        }

        let closes = series.closes();
        let close_now = latest(&closes);

        let mean_50 = latest(&rolling_mean(&closes, Z_WINDOW));
        let std_50 = latest(&rolling_std(&closes, Z_WINDOW));
        let z_score = (close_now - mean_50) / std_50;

        let (upper, lower) = bollinger_bands(&closes, BOLLINGER_WINDOW);
        let upper_now = latest(&upper);
        let lower_now = latest(&lower);
        // Position within the band: 0 at the lower band, 1 at the upper.
        let price_vs_bb = (close_now - lower_now) / (upper_now - lower_now);

        let rsi_14 = latest(&rsi(&closes, 14));
        let rsi_28 = latest(&rsi(&closes, 28));

        let (signal, confidence) = if z_score < -2.0 && price_vs_bb < 0.2 {
            (SignalKind::Bullish, (z_score.abs() / 4.0).min(1.0))
        } else if z_score > 2.0 && price_vs_bb > 0.8 {
            (SignalKind::Bearish, (z_score.abs() / 4.0).min(1.0))
        } else {
            (SignalKind::Neutral, 0.5)
        };

        let mut metrics = BTreeMap::new();
        metrics.insert("z_score".to_string(), finite_or_zero(z_score));
        metrics.insert("price_vs_bb".to_string(), finite_or_zero(price_vs_bb));
        metrics.insert("rsi_14".to_string(), finite_or_zero(rsi_14));
        metrics.insert("rsi_28".to_string(), finite_or_zero(rsi_28));

        StrategySignal::new(signal, confidence, metrics)
    }
}
