//! Mathematical utilities: min-max affine scaling and the logistic link.

pub mod affine;
pub mod logistic;

pub use affine::*;
pub use logistic::*;
