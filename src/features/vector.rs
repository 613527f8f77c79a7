//! Named feature containers.

use nalgebra::DVector;

use crate::error::AppError;

/// Named feature values in insertion order, before reindexing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFeatures {
    entries: Vec<(&'static str, f64)>,
}

impl RawFeatures {
    /// Set `name` to `value`, replacing any earlier value.
    pub fn insert(&mut self, name: &'static str, value: f64) {
        match self.entries.iter().position(|(n, _)| *n == name) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut f64> {
        self.entries.iter_mut().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reindex into `order`, dropping features the model does not use.
    ///
    /// Every name in `order` must be present; a missing one is a schema error,
    /// never a silent default.
    pub fn align(&self, order: &[String]) -> Result<FeatureVector, AppError> {
        let mut values = Vec::with_capacity(order.len());
        for name in order {
            let value = self.get(name).ok_or_else(|| {
                AppError::schema(format!(
                    "Model expects feature '{name}' but the applicant vectorizer does not produce it."
                ))
            })?;
            values.push(value);
        }
        Ok(FeatureVector::new(order.to_vec(), values))
    }
}

/// Feature values in the model's canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Vec<String>,
    values: DVector<f64>,
}

impl FeatureVector {
    /// Built only by `RawFeatures::align`, which keeps both sides the same length.
    pub(crate) fn new(names: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self {
            names,
            values: DVector::from_vec(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        let idx = self.names.iter().position(|n| n == name)?;
        self.values.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_value() {
        let mut raw = RawFeatures::default();
        raw.insert("age", 30.0);
        raw.insert("age", 31.0);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.get("age"), Some(31.0));
    }

    #[test]
    fn align_follows_requested_order() {
        let mut raw = RawFeatures::default();
        raw.insert("a", 1.0);
        raw.insert("b", 2.0);
        raw.insert("c", 3.0);
        let order = vec!["c".to_string(), "a".to_string()];
        let vector = raw.align(&order).unwrap();
        let pairs: Vec<_> = vector.iter().collect();
        assert_eq!(pairs, vec![("c", 3.0), ("a", 1.0)]);
    }

    #[test]
    fn align_missing_feature_is_schema_error() {
        let raw = RawFeatures::default();
        let err = raw.align(&["zipcode_band".to_string()]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().contains("zipcode_band"));
    }
}
