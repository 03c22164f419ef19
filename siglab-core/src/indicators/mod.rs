//! Indicator library — stateless numeric functions over price data.
//!
//! Every function returns series aligned to the input index, with `f64::NAN`
//! in the undefined leading region (standard rolling-window warmup). Callers
//! are responsible for minimum-length gating; nothing here panics on short
//! or degenerate input.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod ewm;
pub mod hurst;
pub mod rolling;
pub mod rsi;

pub use adx::{adx, AdxOutput};
pub use atr::{atr, true_range};
pub use bollinger::bollinger_bands;
pub use ewm::ewm_mean;
pub use hurst::hurst_exponent;
pub use rolling::{
    pct_change, rolling_kurtosis, rolling_mean, rolling_skew, rolling_std, rolling_sum,
};
pub use rsi::rsi;

/// Create a synthetic series from close prices for testing.
///
/// Generates plausible OHLV: open = prev close (or close for the first bar),
/// high = max(open, close) + 1.0, low = min(open, close) - 1.0,
/// volume = 1000.
#[cfg(test)]
pub(crate) fn make_series(closes: &[f64]) -> crate::domain::PriceSeries {
    make_series_with_volume(closes, &vec![1000.0; closes.len()])
}

/// Same as `make_series` but with explicit per-bar volume.
#[cfg(test)]
pub(crate) fn make_series_with_volume(
    closes: &[f64],
    volumes: &[f64],
) -> crate::domain::PriceSeries {
    use crate::domain::{PriceBar, PriceSeries};
    let base_date = chrono::NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceBar {
                timestamp: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume,
            }
        })
        .collect();
    PriceSeries::from_bars(bars)
}

/// Create a series from explicit (open, high, low, close) rows.
#[cfg(test)]
pub(crate) fn make_ohlc_series(rows: &[(f64, f64, f64, f64)]) -> crate::domain::PriceSeries {
    use crate::domain::{PriceBar, PriceSeries};
    let base_date = chrono::NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| PriceBar {
            timestamp: base_date + chrono::Duration::days(i as i64),
            open,
            high,
            low,
            close,
            volume: 1000.0,
        })
        .collect();
    PriceSeries::from_bars(bars)
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-10;
