//! Domain types used throughout the scoring pipeline.
//!
//! This module defines:
//!
//! - the applicant record a caller submits (`ApplicantInput`)
//! - categorical enums (`ResidenceType`, `LoanPurpose`, `LoanType`)
//! - scoring outputs (`ScoreResult`, `Rating`)

pub mod types;

pub use types::*;
