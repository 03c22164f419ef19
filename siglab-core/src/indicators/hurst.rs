//! Hurst exponent — long-memory statistic of a price series.
//!
//! H < 0.5 suggests mean reversion, H = 0.5 a random walk, H > 0.5 a
//! trending series. Estimated as the least-squares slope of ln(tau) against
//! ln(lag), where tau = sqrt(pop_std(diff(series, lag))) floored at a small
//! epsilon to keep the logarithm defined.
//!
//! Degenerate input — too few points, a flat tau profile, a non-finite fit —
//! returns the random-walk default of 0.5. In particular a constant series
//! carries no scaling information and yields exactly 0.5.

/// Floor for tau before taking logs.
const TAU_FLOOR: f64 = 1e-8;

/// Hurst exponent over lags 2..max_lag (exclusive).
pub fn hurst_exponent(closes: &[f64], max_lag: usize) -> f64 {
    let mut log_lags = Vec::new();
    let mut log_taus = Vec::new();

    for lag in 2..max_lag {
        if closes.len() <= lag {
            break;
        }
        let diffs: Vec<f64> = (lag..closes.len())
            .map(|i| closes[i] - closes[i - lag])
            .collect();
        let std = population_std(&diffs);
        if !std.is_finite() {
            continue;
        }
        let tau = std.sqrt().max(TAU_FLOOR);
        log_lags.push((lag as f64).ln());
        log_taus.push(tau.ln());
    }

    slope(&log_lags, &log_taus).unwrap_or(0.5)
}

fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n;
    variance.sqrt()
}

/// Least-squares slope of ys on xs. None when the fit is degenerate: fewer
/// than two points, no variation in xs, or a flat ys profile (which carries
/// no scaling information).
fn slope(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    if ys.iter().all(|&y| (y - y_mean).abs() < 1e-12) {
        return None;
    }

    let mut num = 0.0;
    let mut den = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        num += (x - x_mean) * (y - y_mean);
        den += (x - x_mean) * (x - x_mean);
    }
    if den == 0.0 {
        return None;
    }
    let slope = num / den;
    slope.is_finite().then_some(slope)
}
