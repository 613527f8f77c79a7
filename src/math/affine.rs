//! Min-max scaling as an affine map.
//!
//! A fitted min-max scaler maps `x` to `(x - min) / (max - min)`. We store it in
//! the equivalent affine form
//!
//! ```text
//! scale  = 1 / (max - min)
//! offset = -min * scale
//! x'     = x * scale + offset
//! ```
//!
//! which is how the scaler evaluates it at training time, so serving reproduces
//! the same floating-point values.
//!
//! Numerical notes:
//! - A zero-width range (`max == min`) would divide by zero. The training-time
//!   convention replaces the range with `1`, so the column maps to `x - min`.
//! - Values outside `[min, max]` are not clamped; they extrapolate linearly.

/// One column's affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    pub scale: f64,
    pub offset: f64,
}

impl AffineMap {
    /// Build the min-max transform for observed bounds `[min, max]`.
    pub fn min_max(min: f64, max: f64) -> Self {
        let range = max - min;
        let range = if range == 0.0 { 1.0 } else { range };
        let scale = 1.0 / range;
        Self {
            scale,
            offset: -min * scale,
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        x * self.scale + self.offset
    }
}
