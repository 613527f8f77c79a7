//! Normalizer: the fitted min-max scaler over a named subset of features.

use crate::error::AppError;
use crate::features::RawFeatures;
use crate::math::AffineMap;

/// Per-column affine transforms, in the order the scaler was fit.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    columns: Vec<(String, AffineMap)>,
}

impl MinMaxScaler {
    /// Build from parallel `columns` / `data_min` / `data_max` slices.
    ///
    /// Lengths are checked by `TrainedArtifact` before this is called.
    pub fn new(columns: &[String], data_min: &[f64], data_max: &[f64]) -> Self {
        let columns = columns
            .iter()
            .zip(data_min.iter().zip(data_max))
            .map(|(name, (&min, &max))| (name.clone(), AffineMap::min_max(min, max)))
            .collect();
        Self { columns }
    }

    /// Names of the scaled columns.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn map_for(&self, column: &str) -> Option<&AffineMap> {
        self.columns.iter().find(|(name, _)| name == column).map(|(_, map)| map)
    }

    /// Rescale every fitted column in place; other features are left untouched.
    ///
    /// A fitted column the raw features do not carry means the artifact and
    /// the vectorizer disagree on the schema.
    pub fn transform(&self, raw: &mut RawFeatures) -> Result<(), AppError> {
        for (name, map) in &self.columns {
            let value = raw.get_mut(name).ok_or_else(|| {
                AppError::schema(format!(
                    "Artifact scales column '{name}' but the applicant vectorizer does not produce it."
                ))
            })?;
            *value = map.apply(*value);
        }
        Ok(())
    }
}
