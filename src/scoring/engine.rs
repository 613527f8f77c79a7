//! The scoring engine.
//!
//! One operation, `score`, runs the full pipeline against a shared artifact:
//! vectorize → normalize → reindex → logit → sigmoid → score/rating.
//!
//! The engine holds no mutable state. Clones share the same `Arc`'d artifact,
//! so handles can be passed to other threads and scored concurrently.

use std::path::Path;
use std::sync::Arc;

use crate::domain::{ApplicantInput, ScoreResult};
use crate::error::AppError;
use crate::features::{FeatureVector, vectorize};
use crate::model::TrainedArtifact;
use crate::scoring::map_probability;

#[derive(Debug, Clone)]
pub struct ScoringEngine {
    artifact: Arc<TrainedArtifact>,
}

impl ScoringEngine {
    pub fn new(artifact: Arc<TrainedArtifact>) -> Self {
        Self { artifact }
    }

    /// Load the artifact from disk and wrap it in an engine.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let artifact = TrainedArtifact::load(path)?;
        Ok(Self::new(Arc::new(artifact)))
    }

    pub fn artifact(&self) -> &TrainedArtifact {
        &self.artifact
    }

    /// Normalized feature vector in canonical order.
    pub fn feature_vector(&self, input: &ApplicantInput) -> Result<FeatureVector, AppError> {
        let mut raw = vectorize(input);
        self.artifact.scaler().transform(&mut raw)?;
        raw.align(self.artifact.features())
    }

    /// Score one applicant.
    ///
    /// Inputs are not range-checked here; out-of-range values extrapolate
    /// through the scaler and model. Callers that collect user input should run
    /// `ApplicantInput::validate` first.
    pub fn score(&self, input: &ApplicantInput) -> Result<ScoreResult, AppError> {
        let features = self.feature_vector(input)?;
        let model = self.artifact.model();
        let logit = model.decision_function(&features)?;
        let probability = crate::math::sigmoid(logit);
        let result = map_probability(probability)?;

        tracing::debug!(
            logit,
            probability,
            credit_score = result.credit_score,
            rating = %result.rating,
            "scored applicant"
        );

        Ok(result)
    }
}
