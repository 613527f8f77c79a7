//! `credisure` library crate.
//!
//! Scores a single credit applicant against a pre-trained logistic model and
//! maps the default probability onto a 300–900 credit score and rating.
//!
//! The binary (`credisure`) is a thin wrapper around this library so that:
//!
//! - the scoring core is testable without spawning processes
//! - the CLI and the terminal form share one engine
//! - tests can build synthetic artifacts instead of reading files

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod io;
pub mod math;
pub mod model;
pub mod report;
pub mod scoring;
pub mod tui;

pub use domain::{ApplicantInput, LoanPurpose, LoanType, Rating, ResidenceType, ScoreResult};
pub use error::AppError;
pub use model::TrainedArtifact;
pub use scoring::ScoringEngine;
