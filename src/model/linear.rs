//! Linear scorer: the logit of a feature vector.

use nalgebra::DVector;

use crate::error::AppError;
use crate::features::FeatureVector;
use crate::math::logit;

/// Logistic regression weights.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: DVector<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients: DVector::from_vec(coefficients),
            intercept,
        }
    }

    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of features the weights expect.
    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    /// `dot(features, coefficients) + intercept`.
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64, AppError> {
        if features.len() != self.dimension() {
            return Err(AppError::schema(format!(
                "Feature vector has {} values but the model has {} coefficients.",
                features.len(),
                self.dimension()
            )));
        }
        Ok(logit(features.values(), &self.coefficients, self.intercept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sigmoid;

    fn vector(values: &[f64]) -> FeatureVector {
        let names = (0..values.len()).map(|i| format!("f{i}")).collect();
        FeatureVector::new(names, values.to_vec())
    }

    #[test]
    fn zero_logit_is_even_odds() {
        let model = LinearModel::new(vec![1.0, -1.0], 0.0);
        let z = model.decision_function(&vector(&[2.0, 2.0])).unwrap();
        assert_eq!(z, 0.0);
        assert_eq!(sigmoid(z), 0.5);
    }

    #[test]
    fn decision_function_adds_intercept() {
        let model = LinearModel::new(vec![2.0, 0.5], -1.0);
        let z = model.decision_function(&vector(&[1.0, 4.0])).unwrap();
        assert!((z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn dimension_mismatch_is_schema_error() {
        let model = LinearModel::new(vec![1.0, 2.0, 3.0], 0.0);
        let err = model.decision_function(&vector(&[1.0, 2.0])).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
