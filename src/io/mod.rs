//! Input/output helpers.
//!
//! - trained artifact JSON read (`artifact`)

pub mod artifact;

pub use artifact::*;
