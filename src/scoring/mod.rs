//! Scoring: the engine callers invoke and the probability → score mapping.

pub mod engine;
pub mod mapper;

pub use engine::*;
pub use mapper::*;
