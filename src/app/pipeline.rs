//! Shared scoring workflow used by both the CLI and the terminal form.
//!
//! Keeping this in one place avoids duplicating the caller-side steps:
//! load artifact -> validate form values -> score
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::config::Settings;
use crate::domain::{ApplicantInput, ScoreResult};
use crate::error::AppError;
use crate::scoring::ScoringEngine;

/// Load the configured artifact once and build the engine.
///
/// Any problem with the artifact stops the program here, before a single
/// applicant is scored.
pub fn load_engine(settings: &Settings) -> Result<ScoringEngine, AppError> {
    ScoringEngine::from_path(&settings.artifact_path)
}

/// Validate user-entered values against the form bounds, then score.
pub fn score_applicant(engine: &ScoringEngine, input: &ApplicantInput) -> Result<ScoreResult, AppError> {
    input.validate()?;
    engine.score(input)
}
