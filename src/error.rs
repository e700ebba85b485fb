//! Error type for the few operations that can fail outright.
//!
//! Most of the kernel reports numerical trouble the way floats do (NaN and
//! infinity). Only operations that have no meaningful fallback return a
//! [`MathError`].

/// Errors returned by fallible math operations.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MathError {
    /// The matrix has no inverse.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// The determinant that was found, zero or not finite.
        determinant: f32,
    },
    /// A screen-space query was given a viewport without area.
    #[error("viewport {width}x{height} has no area")]
    DegenerateViewport { width: f32, height: f32 },
}

/// Shorthand for results carrying a [`MathError`].
pub type Result<T> = std::result::Result<T, MathError>;
