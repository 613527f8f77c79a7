//! Feature vectorization.
//!
//! Turns an `ApplicantInput` into the named feature set the artifact was
//! trained on, then reindexes it into the model's canonical order:
//!
//! ```text
//! ApplicantInput -> RawFeatures -> (scaler, in place) -> FeatureVector
//! ```

pub mod vector;
pub mod vectorizer;

pub use vector::*;
pub use vectorizer::*;
