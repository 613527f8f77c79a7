//! Read trained artifact JSON files.
//!
//! The artifact bundle is the serialized output of model training:
//! - logistic model weights and intercept
//! - fitted min-max scaler bounds, one pair per scaled column
//! - the canonical feature order the weights are indexed against
//! - the columns the scaler was fit on
//!
//! This module only deals with the on-disk shape. Structural checks live in
//! `model::TrainedArtifact`.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// On-disk artifact bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactFile {
    pub model: ModelSection,
    pub scaler: ScalerSection,
    pub features: Vec<String>,
    pub cols_to_scale: Vec<String>,
    #[serde(default)]
    pub metadata: ArtifactMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSection {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Min-max scaler bounds, aligned with `cols_to_scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerSection {
    pub data_min: Vec<f64>,
    pub data_max: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub trained_on: Option<NaiveDate>,
}

/// Read an artifact JSON file.
pub fn read_artifact_json(path: &Path) -> Result<ArtifactFile, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::invalid(format!("Failed to open artifact '{}': {e}", path.display())))?;
    parse_artifact_json(&text).map_err(|e| AppError::invalid(format!("{} ({})", e.message(), path.display())))
}

/// Parse an artifact from an in-memory JSON string.
pub fn parse_artifact_json(json: &str) -> Result<ArtifactFile, AppError> {
    serde_json::from_str(json).map_err(|e| AppError::invalid(format!("Invalid artifact JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_bundle_without_metadata() {
        let json = r#"{
            "model": { "coefficients": [0.5], "intercept": -1.0 },
            "scaler": { "data_min": [18.0], "data_max": [70.0] },
            "features": ["age"],
            "cols_to_scale": ["age"]
        }"#;
        let file = parse_artifact_json(json).unwrap();
        assert_eq!(file.features, vec!["age".to_string()]);
        assert!(file.metadata.name.is_none());
        assert!(file.metadata.trained_on.is_none());
    }

    #[test]
    fn parses_metadata_date() {
        let json = r#"{
            "model": { "coefficients": [], "intercept": 0.0 },
            "scaler": { "data_min": [], "data_max": [] },
            "features": [],
            "cols_to_scale": [],
            "metadata": { "name": "lr-v1", "trained_on": "2024-03-01" }
        }"#;
        let file = parse_artifact_json(json).unwrap();
        assert_eq!(file.metadata.trained_on, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn rejects_missing_section() {
        let json = r#"{ "features": ["age"], "cols_to_scale": [] }"#;
        let err = parse_artifact_json(json).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().expect("tmpdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"features\": ").expect("write");
        let err = read_artifact_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().starts_with("Invalid artifact JSON"));
        assert!(err.message().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_invalid() {
        let err = read_artifact_json(Path::new("does/not/exist.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("does/not/exist.json"));
    }
}
