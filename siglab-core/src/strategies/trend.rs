//! Trend following — EMA stack across three timeframes with ADX strength.
//!
//! Bullish when EMA(8) > EMA(21) > EMA(55), bearish when both relations are
//! reversed. Confidence is ADX/100 when directional (clamped; ADX can
//! numerically exceed 100), 0.5 otherwise.

use std::collections::BTreeMap;

use crate::domain::{PriceSeries, SignalKind, StrategySignal};
use crate::indicators::{adx, ewm_mean};
use crate::strategies::{finite_or_zero, latest, Strategy};

const MIN_BARS: usize = 55;
const ADX_PERIOD: usize = 14;

pub struct TrendFollowing;

impl Strategy for TrendFollowing {
    fn name(&self) -> &'static str {
        "trend_following"
    }

    fn min_bars(&self) -> usize {
        MIN_BARS
    }

    fn evaluate(&self, series: &PriceSeries) -> StrategySignal {
        if series.len() < self.min_bars() {
            return StrategySignal::insufficient_history();
        }

        let closes = series.closes();
        let ema_8 = latest(&ewm_mean(&closes, 8));
        let ema_21 = latest(&ewm_mean(&closes, 21));
        let ema_55 = latest(&ewm_mean(&closes, 55));
        let adx_now = latest(&adx(series, ADX_PERIOD).adx);

        let short_up = ema_8 > ema_21;
        let medium_up = ema_21 > ema_55;
        let trend_strength = adx_now / 100.0;

        let (signal, confidence) = if short_up && medium_up {
            (SignalKind::Bullish, trend_strength)
        } else if !short_up && !medium_up {
            (SignalKind::Bearish, trend_strength)
        } else {
            (SignalKind::Neutral, 0.5)
        };

        let mut metrics = BTreeMap::new();
        metrics.insert("adx".to_string(), finite_or_zero(adx_now));
        metrics.insert("trend_strength".to_string(), finite_or_zero(trend_strength));

        StrategySignal::new(signal, confidence, metrics)
    }
}
