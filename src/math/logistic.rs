//! Logistic link: linear decision function and sigmoid.

use nalgebra::DVector;

/// `dot(x, w) + b`.
///
/// Callers are responsible for matching dimensions; see `model::LinearModel`.
pub fn logit(features: &DVector<f64>, weights: &DVector<f64>, intercept: f64) -> f64 {
    weights.dot(features) + intercept
}

/// `1 / (1 + e^-x)`.
///
/// Saturates to exactly `0.0` / `1.0` for large `|x|` instead of producing NaN.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_midpoint_and_symmetry() {
        assert_eq!(sigmoid(0.0), 0.5);
        for &x in &[0.1, 1.0, 3.5, 12.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sigmoid_saturates_without_nan() {
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert_eq!(sigmoid(1000.0), 1.0);
    }

    #[test]
    fn logit_is_dot_plus_intercept() {
        let x = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        let w = DVector::from_row_slice(&[0.5, -1.0, 2.0]);
        assert!((logit(&x, &w, 0.25) - 4.75).abs() < 1e-12);
    }
}
