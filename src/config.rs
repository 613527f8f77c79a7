//! Environment-derived settings.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory:
//!
//! - `CREDISURE_ARTIFACT`: path to the trained artifact JSON
//! - `CREDISURE_LOG`: tracing filter directive (falls back to `RUST_LOG`)

use std::path::PathBuf;

pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/model_data.json";

const ARTIFACT_VAR: &str = "CREDISURE_ARTIFACT";
const LOG_VAR: &str = "CREDISURE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub artifact_path: PathBuf,
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let artifact_path = lookup(ARTIFACT_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH));
        let log_filter = lookup(LOG_VAR)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|s| !s.trim().is_empty());

        Self {
            artifact_path,
            log_filter,
        }
    }

    /// Apply a CLI `--artifact` override.
    pub fn with_artifact_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.artifact_path = path;
        }
        self
    }
}
