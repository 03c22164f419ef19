//! Momentum — multi-horizon return score with volume confirmation.
//!
//! Cumulative 1/3/6-month returns (21/63/126 bars) weighted 0.4/0.3/0.3.
//! A directional call additionally requires the latest volume to run above
//! its 21-bar mean. Confidence is min(|score| * 5, 1), 0.5 when neutral.

use std::collections::BTreeMap;

use crate::domain::{PriceSeries, SignalKind, StrategySignal};
use crate::indicators::{pct_change, rolling_mean, rolling_sum};
use crate::strategies::{finite_or_zero, latest, Strategy};

const MIN_BARS: usize = 126;
const SCORE_THRESHOLD: f64 = 0.05;

pub struct Momentum;

impl Strategy for Momentum {
    fn name(&self) -> &'static str {
        "momentum"
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

        let mom_1m = latest(&rolling_sum(&returns, 21));
        let mom_3m = latest(&rolling_sum(&returns, 63));
        let mom_6m = latest(&rolling_sum(&returns, 126));
        let momentum_score = 0.4 * mom_1m + 0.3 * mom_3m + 0.3 * mom_6m;

        let volumes = series.volumes();
        let volume_momentum = latest(&volumes) / latest(&rolling_mean(&volumes, 21));
        let volume_confirms = volume_momentum > 1.0;

        let (signal, confidence) = if momentum_score > SCORE_THRESHOLD && volume_confirms {
            (SignalKind::Bullish, (momentum_score.abs() * 5.0).min(1.0))
        } else if momentum_score < -SCORE_THRESHOLD && volume_confirms {
            (SignalKind::Bearish, (momentum_score.abs() * 5.0).min(1.0))
        } else {
            (SignalKind::Neutral, 0.5)
        };

        let mut metrics = BTreeMap::new();
        metrics.insert("momentum_1m".to_string(), finite_or_zero(mom_1m));
        metrics.insert("momentum_3m".to_string(), finite_or_zero(mom_3m));
        metrics.insert("momentum_6m".to_string(), finite_or_zero(mom_6m));
        metrics.insert(
            "volume_momentum".to_string(),
            finite_or_zero(volume_momentum),
        );

        StrategySignal::new(signal, confidence, metrics)
    }
}
