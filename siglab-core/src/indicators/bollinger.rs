//! Bollinger Bands — rolling mean ± 2 × rolling sample standard deviation.

use crate::indicators::rolling::{rolling_mean, rolling_std};

const BAND_MULTIPLIER: f64 = 2.0;

/// Returns (upper, lower) bands aligned to the input index.
pub fn bollinger_bands(closes: &[f64], window: usize) -> (Vec<f64>, Vec<f64>) {
    let mean = rolling_mean(closes, window);
    let std = rolling_std(closes, window);

    let upper = mean
        .iter()
        .zip(&std)
        .map(|(&m, &s)| m + BAND_MULTIPLIER * s)
        .collect();
    let lower = mean
        .iter()
        .zip(&std)
        .map(|(&m, &s)| m - BAND_MULTIPLIER * s)
        .collect();
    (upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn bands_from_known_window() {
        // Window {10,11,12}: mean 11, sample std 1 → bands at 13 and 9.
        let (upper, lower) = bollinger_bands(&[10.0, 11.0, 12.0, 13.0], 3);
        assert!(upper[1].is_nan());
        assert_approx(upper[2], 13.0, DEFAULT_EPSILON);
        assert_approx(lower[2], 9.0, DEFAULT_EPSILON);
    }

    #[test]
    fn bands_symmetric_about_mean() {
        let closes = [10.0, 11.0, 12.0, 13.0, 14.0];
        let (upper, lower) = bollinger_bands(&closes, 3);
        let mean = rolling_mean(&closes, 3);
        for i in 2..closes.len() {
            assert_approx(upper[i] - mean[i], mean[i] - lower[i], DEFAULT_EPSILON);
        }
    }

    #[test]
    fn constant_prices_collapse_bands() {
        let (upper, lower) = bollinger_bands(&[100.0, 100.0, 100.0, 100.0], 3);
        assert_approx(upper[3], 100.0, DEFAULT_EPSILON);
        assert_approx(lower[3], 100.0, DEFAULT_EPSILON);
    }
}
