//! Exponential weighted mean with span-style smoothing.
//!
//! alpha = 2 / (span + 1). Recursive: m[t] = alpha * x[t] + (1 - alpha) * m[t-1],
//! seeded from the first finite observation — there is no minimum-periods
//! gate, so output is defined from the first bar onward. A NaN input emits
//! the carried mean without updating the state.

/// Exponential weighted mean of a series.
pub fn ewm_mean(values: &[f64], span: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; values.len()];
    if span == 0 {
        return result;
    }
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut state: Option<f64> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            if let Some(mean) = state {
                result[i] = mean;
            }
            continue;
        }
        let mean = match state {
            None => v,
            Some(prev) => alpha * v + (1.0 - alpha) * prev,
        };
        state = Some(mean);
        result[i] = mean;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn seeds_from_first_observation() {
        // span=3 → alpha = 0.5
        let result = ewm_mean(&[10.0, 11.0, 12.0], 3);
        assert_approx(result[0], 10.0, DEFAULT_EPSILON);
        assert_approx(result[1], 10.5, DEFAULT_EPSILON);
        assert_approx(result[2], 11.25, DEFAULT_EPSILON);
    }

    #[test]
    fn span_1_tracks_input() {
        let result = ewm_mean(&[5.0, 7.0, 3.0], 1);
        assert_eq!(result, vec![5.0, 7.0, 3.0]);
    }

    #[test]
    fn nan_emits_carried_mean_without_update() {
        let result = ewm_mean(&[f64::NAN, 10.0, f64::NAN, 12.0], 3);
        assert!(result[0].is_nan());
        assert_approx(result[1], 10.0, DEFAULT_EPSILON);
        assert_approx(result[2], 10.0, DEFAULT_EPSILON);
        assert_approx(result[3], 11.0, DEFAULT_EPSILON);
    }

    #[test]
    fn empty_and_zero_span() {
        assert!(ewm_mean(&[], 5).is_empty());
        assert!(ewm_mean(&[1.0, 2.0], 0).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn converges_to_constant() {
        let values = vec![42.0; 200];
        let result = ewm_mean(&values, 21);
        assert_approx(result[199], 42.0, DEFAULT_EPSILON);
    }
}
