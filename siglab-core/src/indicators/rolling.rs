//! Rolling-window statistics with standard warmup semantics.
//!
//! The first `window - 1` outputs are NaN, and a NaN anywhere inside a
//! window makes that window's output NaN. Standard deviation is the sample
//! flavor (ddof = 1); skew and kurtosis carry the usual small-sample bias
//! corrections.

/// Sum of each value with the window preceding it.
pub fn rolling_sum(values: &[f64], window: usize) -> Vec<f64> {
    rolling_apply(values, window, |w| w.iter().sum())
}

/// Arithmetic mean over a rolling window.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling_apply(values, window, |w| {
        w.iter().sum::<f64>() / w.len() as f64
    })
}

/// Sample standard deviation (ddof = 1) over a rolling window.
/// A window of 1 has no degrees of freedom and yields NaN.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling_apply(values, window, |w| sample_std(w))
}

/// Adjusted Fisher-Pearson skewness over a rolling window (needs >= 3 points;
/// zero-variance windows yield NaN).
pub fn rolling_skew(values: &[f64], window: usize) -> Vec<f64> {
    rolling_apply(values, window, |w| {
        let n = w.len() as f64;
        if w.len() < 3 {
            return f64::NAN;
        }
        let mean = w.iter().sum::<f64>() / n;
        let std = sample_std(w);
        if std == 0.0 || std.is_nan() {
            return f64::NAN;
        }
        let m3: f64 = w.iter().map(|&x| ((x - mean) / std).powi(3)).sum();
        n / ((n - 1.0) * (n - 2.0)) * m3
    })
}

/// Bias-corrected excess kurtosis over a rolling window (needs >= 4 points;
/// zero-variance windows yield NaN).
pub fn rolling_kurtosis(values: &[f64], window: usize) -> Vec<f64> {
    rolling_apply(values, window, |w| {
        let n = w.len() as f64;
        if w.len() < 4 {
            return f64::NAN;
        }
        let mean = w.iter().sum::<f64>() / n;
        let std = sample_std(w);
        if std == 0.0 || std.is_nan() {
            return f64::NAN;
        }
        let m4: f64 = w.iter().map(|&x| ((x - mean) / std).powi(4)).sum();
        n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0)) * m4
            - 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0))
    })
}

/// Simple returns: r[t] = x[t] / x[t-1] - 1, with r[0] = NaN.
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    let mut result = vec![f64::NAN; values.len()];
    for i in 1..values.len() {
        result[i] = values[i] / values[i - 1] - 1.0;
    }
    result
}

fn sample_std(window: &[f64]) -> f64 {
    let n = window.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean = window.iter().sum::<f64>() / n as f64;
    let variance = window
        .iter()
        .map(|&x| (x - mean) * (x - mean))
        .sum::<f64>()
        / (n - 1) as f64;
    variance.sqrt()
}

fn rolling_apply(values: &[f64], window: usize, f: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if window == 0 || n < window {
        return result;
    }
    for i in (window - 1)..n {
        let slice = &values[i + 1 - window..=i];
        if slice.iter().any(|v| v.is_nan()) {
            continue;
        }
        result[i] = f(slice);
    }
    result
}
