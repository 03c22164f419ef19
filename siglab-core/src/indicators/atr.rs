//! Average True Range — simple rolling mean of the true range.
//!
//! True range: max(high - low, |high - prev_close|, |low - prev_close|).
//! The first bar has no previous close, so TR[0] = high - low.

use crate::domain::PriceSeries;
use crate::indicators::rolling::rolling_mean;

/// True range series for a bar sequence.
pub fn true_range(series: &PriceSeries) -> Vec<f64> {
    let bars = series.bars();
    let mut tr = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        let value = if i == 0 {
            bar.high - bar.low
        } else {
            let prev_close = bars[i - 1].close;
            (bar.high - bar.low)
                .max((bar.high - prev_close).abs())
                .max((bar.low - prev_close).abs())
        };
        tr.push(value);
    }

    tr
}

/// ATR: rolling mean of true range over `period` bars.
pub fn atr(series: &PriceSeries, period: usize) -> Vec<f64> {
    rolling_mean(&true_range(series), period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc_series, DEFAULT_EPSILON};

    #[test]
    fn true_range_basic() {
        let series = make_ohlc_series(&[
            (100.0, 105.0, 95.0, 102.0),  // TR = 105-95 = 10
            (102.0, 108.0, 100.0, 106.0), // TR = max(8, 6, 2) = 8
            (106.0, 107.0, 98.0, 99.0),   // TR = max(9, 1, 8) = 9
        ]);
        let tr = true_range(&series);
        assert_approx(tr[0], 10.0, DEFAULT_EPSILON);
        assert_approx(tr[1], 8.0, DEFAULT_EPSILON);
        assert_approx(tr[2], 9.0, DEFAULT_EPSILON);
    }

    #[test]
    fn true_range_captures_gap_up() {
        let series = make_ohlc_series(&[
            (98.0, 102.0, 97.0, 100.0),
            (110.0, 115.0, 108.0, 112.0), // TR = max(7, 15, 8) = 15
        ]);
        let tr = true_range(&series);
        assert_approx(tr[1], 15.0, DEFAULT_EPSILON);
    }

    #[test]
    fn atr_rolling_mean_of_tr() {
        let series = make_ohlc_series(&[
            (100.0, 105.0, 95.0, 102.0),  // TR = 10
            (102.0, 108.0, 100.0, 106.0), // TR = 8
            (106.0, 107.0, 98.0, 99.0),   // TR = 9
            (99.0, 103.0, 97.0, 101.0),   // TR = 6
            (101.0, 106.0, 100.0, 105.0), // TR = 6
        ]);
        let result = atr(&series, 3);
        assert!(result[1].is_nan());
        assert_approx(result[2], 9.0, DEFAULT_EPSILON);
        assert_approx(result[3], 23.0 / 3.0, DEFAULT_EPSILON);
        assert_approx(result[4], 7.0, DEFAULT_EPSILON);
    }

    #[test]
    fn empty_series() {
        let series = make_ohlc_series(&[]);
        assert!(atr(&series, 14).is_empty());
    }
}
