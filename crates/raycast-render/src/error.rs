//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur before any pixel is traced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The scene declared no camera, so the view plane is undefined.
    #[error("no camera defined in scene")]
    NoCamera,

    /// Output resolution with a zero dimension, or too many pixels to hold.
    #[error("invalid resolution {width}x{height}: dimensions must be nonzero and fit in memory")]
    InvalidResolution {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
}
