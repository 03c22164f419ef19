//! Volatility regime — realized volatility against its own recent history.
//!
//! 21-bar annualized realized volatility, compared to its 63-bar mean
//! (regime ratio) and standardized against its 63-bar std (vol z-score).
//! A quiet regime with falling vol (regime < 0.8, z < -1) reads bullish —
//! expansion potential; an elevated regime with rising vol (regime > 1.2,
//! z > 1) reads bearish. Confidence is min(|z|/3, 1), 0.5 when neutral.

use std::collections::BTreeMap;

use crate::domain::{PriceSeries, SignalKind, StrategySignal};
use crate::indicators::{atr, pct_change, rolling_mean, rolling_std};
use crate::strategies::{finite_or_zero, latest, Strategy};

const MIN_BARS: usize = 63;
const VOL_WINDOW: usize = 21;
const REGIME_WINDOW: usize = 63;
const ATR_PERIOD: usize = 14;
const TRADING_DAYS: f64 = 252.0;

pub struct Volatility;

impl Strategy for Volatility {
    fn name(&self) -> &'static str {
        "volatility"
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

        let annualize = TRADING_DAYS.sqrt();
        let hist_vol: Vec<f64> = rolling_std(&returns, VOL_WINDOW)
            .into_iter()
            .map(|v| v * annualize)
            .collect();

        let vol_now = latest(&hist_vol);
        let vol_ma = latest(&rolling_mean(&hist_vol, REGIME_WINDOW));
        let vol_regime = vol_now / vol_ma;
        let vol_z = (vol_now - vol_ma) / latest(&rolling_std(&hist_vol, REGIME_WINDOW));

        let atr_ratio = latest(&atr(series, ATR_PERIOD)) / latest(&closes);

        let (signal, confidence) = if vol_regime < 0.8 && vol_z < -1.0 {
            (SignalKind::Bullish, (vol_z.abs() / 3.0).min(1.0))
        } else if vol_regime > 1.2 && vol_z > 1.0 {
            (SignalKind::Bearish, (vol_z.abs() / 3.0).min(1.0))
        } else {
            (SignalKind::Neutral, 0.5)
        };

        let mut metrics = BTreeMap::new();
        metrics.insert(
            "historical_volatility".to_string(),
            finite_or_zero(vol_now),
        );
        metrics.insert("volatility_regime".to_string(), finite_or_zero(vol_regime));
        metrics.insert("volatility_z_score".to_string(), finite_or_zero(vol_z));
        metrics.insert("atr_ratio".to_string(), finite_or_zero(atr_ratio));

        StrategySignal::new(signal, confidence, metrics)
    }
}
