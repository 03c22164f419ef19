//! ADX — Average Directional Index (Wilder's directional movement).
//!
//! Steps:
//! 1. +DM / -DM from consecutive highs and lows, gated by sign and by which
//!    move dominates
//! 2. Smooth +DM, -DM, and true range with an exponential mean (span = period)
//! 3. ±DI = 100 * smoothed(±DM) / smoothed(TR)
//! 4. DX = 100 * |+DI - -DI| / (+DI + -DI)
//! 5. ADX = exponential mean of DX
//!
//! Where both DI values are zero, DX is NaN and the ADX smoothing carries
//! its previous value across the gap.

use crate::domain::PriceSeries;
use crate::indicators::atr::true_range;
use crate::indicators::ewm::ewm_mean;

/// ADX plus the two directional indicator series it is derived from.
#[derive(Debug, Clone)]
pub struct AdxOutput {
    pub adx: Vec<f64>,
    pub plus_di: Vec<f64>,
    pub minus_di: Vec<f64>,
}

pub fn adx(series: &PriceSeries, period: usize) -> AdxOutput {
    let bars = series.bars();
    let n = bars.len();

    let mut plus_dm = vec![0.0; n];
    let mut minus_dm = vec![0.0; n];
    for i in 1..n {
        let up_move = bars[i].high - bars[i - 1].high;
        let down_move = bars[i - 1].low - bars[i].low;
        if up_move > down_move && up_move > 0.0 {
            plus_dm[i] = up_move;
        }
        if down_move > up_move && down_move > 0.0 {
            minus_dm[i] = down_move;
        }
    }

    let tr_smooth = ewm_mean(&true_range(series), period);
    let plus_smooth = ewm_mean(&plus_dm, period);
    let minus_smooth = ewm_mean(&minus_dm, period);

    let di = |dm: &[f64]| -> Vec<f64> {
        dm.iter()
            .zip(&tr_smooth)
            .map(|(&d, &tr)| 100.0 * d / tr)
            .collect()
    };
    let plus_di = di(&plus_smooth);
    let minus_di = di(&minus_smooth);

    let dx: Vec<f64> = plus_di
        .iter()
        .zip(&minus_di)
        .map(|(&p, &m)| 100.0 * (p - m).abs() / (p + m))
        .collect();

    AdxOutput {
        adx: ewm_mean(&dx, period),
        plus_di,
        minus_di,
    }
}
