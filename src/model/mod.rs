//! The trained artifact in its validated, in-memory form.
//!
//! `TrainedArtifact` is built once at startup and never mutated. It owns:
//! - the logistic model (`LinearModel`)
//! - the fitted normalization transform (`MinMaxScaler`)
//! - the canonical feature order the model's weights are indexed against

pub mod artifact;
pub mod linear;
pub mod scaler;

pub use artifact::*;
pub use linear::*;
pub use scaler::*;
