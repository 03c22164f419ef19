//! Relative Strength Index over plain rolling means.
//!
//! Average gain and average loss are simple `period`-bar rolling means of
//! the positive and negative close-to-close deltas (not Wilder smoothing).
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//!
//! A zero average loss sends RS to +inf and RSI to 100; when both averages
//! are zero the output is NaN. Neither case panics — callers compare the
//! value against thresholds and a NaN comparison simply fails.

use crate::indicators::rolling::rolling_mean;

pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];

    // The first bar has no delta and counts as zero change.
    for i in 1..n {
        let delta = closes[i] - closes[i - 1];
        if delta.is_nan() {
            gains[i] = f64::NAN;
            losses[i] = f64::NAN;
        } else if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    let avg_gain = rolling_mean(&gains, period);
    let avg_loss = rolling_mean(&losses, period);

    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&gain, &loss)| {
            if gain.is_nan() || loss.is_nan() {
                f64::NAN
            } else {
                let rs = gain / loss;
                100.0 - 100.0 / (1.0 + rs)
            }
        })
        .collect()
}
