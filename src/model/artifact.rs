//! Validated trained artifact.
//!
//! Loading is the only I/O in the system and fails fast: a bundle that is
//! missing, unreadable, or structurally incomplete never produces a
//! `TrainedArtifact`, so no scoring call can run against it.

use std::collections::HashSet;
use std::path::Path;

use crate::error::AppError;
use crate::io::artifact::{ArtifactFile, ArtifactMetadata, read_artifact_json};
use crate::model::{LinearModel, MinMaxScaler};

/// Immutable model bundle shared by all scoring calls.
#[derive(Debug, Clone)]
pub struct TrainedArtifact {
    model: LinearModel,
    scaler: MinMaxScaler,
    features: Vec<String>,
    metadata: ArtifactMetadata,
}

impl TrainedArtifact {
    /// Read and validate an artifact JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = read_artifact_json(path)?;
        let artifact = Self::from_file(file)
            .map_err(|e| AppError::new(e.exit_code(), format!("Artifact '{}': {e}", path.display())))?;
        tracing::info!(
            path = %path.display(),
            features = artifact.features.len(),
            scaled_columns = artifact.scaler.len(),
            "loaded trained artifact"
        );
        Ok(artifact)
    }

    /// Validate a deserialized bundle.
    pub fn from_file(file: ArtifactFile) -> Result<Self, AppError> {
        if file.features.is_empty() {
            return Err(AppError::invalid("feature list is empty."));
        }
        check_unique("features", &file.features)?;
        check_unique("cols_to_scale", &file.cols_to_scale)?;

        if file.model.coefficients.len() != file.features.len() {
            return Err(AppError::invalid(format!(
                "model has {} coefficients for {} features.",
                file.model.coefficients.len(),
                file.features.len()
            )));
        }
        if file.scaler.data_min.len() != file.cols_to_scale.len()
            || file.scaler.data_max.len() != file.cols_to_scale.len()
        {
            return Err(AppError::invalid(format!(
                "scaler bounds ({} min, {} max) do not match {} scaled columns.",
                file.scaler.data_min.len(),
                file.scaler.data_max.len(),
                file.cols_to_scale.len()
            )));
        }

        check_finite("coefficients", &file.model.coefficients)?;
        check_finite("intercept", &[file.model.intercept])?;
        check_finite("scaler data_min", &file.scaler.data_min)?;
        check_finite("scaler data_max", &file.scaler.data_max)?;

        for ((name, min), max) in file
            .cols_to_scale
            .iter()
            .zip(&file.scaler.data_min)
            .zip(&file.scaler.data_max)
        {
            if min == max {
                tracing::warn!(column = %name, value = *min, "scaler column has zero range; using unit scale");
            }
        }

        let scaler = MinMaxScaler::new(&file.cols_to_scale, &file.scaler.data_min, &file.scaler.data_max);
        let model = LinearModel::new(file.model.coefficients, file.model.intercept);

        Ok(Self {
            model,
            scaler,
            features: file.features,
            metadata: file.metadata,
        })
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn scaler(&self) -> &MinMaxScaler {
        &self.scaler
    }

    /// Canonical feature order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn metadata(&self) -> &ArtifactMetadata {
        &self.metadata
    }

    /// `(feature, weight)` pairs in canonical order.
    pub fn weights(&self) -> impl Iterator<Item = (&str, f64)> {
        self.features
            .iter()
            .map(String::as_str)
            .zip(self.model.coefficients().iter().copied())
    }
}

fn check_unique(label: &str, names: &[String]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(AppError::invalid(format!("{label} lists '{name}' more than once.")));
        }
    }
    Ok(())
}

fn check_finite(label: &str, values: &[f64]) -> Result<(), AppError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(AppError::invalid(format!("{label}[{idx}] is not a finite number."))),
        None => Ok(()),
    }
}
