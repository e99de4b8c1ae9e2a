//! Error types for PPM encoding and decoding.

use thiserror::Error;

/// Errors that can occur while writing or reading PPM data.
#[derive(Error, Debug)]
pub enum PpmError {
    /// I/O error writing or reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pixel count does not match the declared dimensions.
    #[error("expected {expected} pixels for the declared size, got {actual}")]
    SizeMismatch {
        /// width × height.
        expected: usize,
        /// Pixels supplied.
        actual: usize,
    },

    /// Dimensions too large to address in memory.
    #[error("image dimensions {width}x{height} are too large")]
    DimensionsTooLarge {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },

    /// Max value outside what 8-bit pixels can express.
    #[error("max value must be between 1 and 255, got {0}")]
    InvalidMaxValue(u32),

    /// A sample larger than the declared max value.
    #[error("sample {value} exceeds max value {max_value}")]
    SampleOutOfRange {
        /// The offending sample.
        value: u8,
        /// The declared max value.
        max_value: u32,
    },

    /// A header that does not follow `P<n> <width> <height> <max>`.
    #[error("invalid PPM header: {0}")]
    InvalidHeader(String),

    /// An ASCII sample that is not a number within the max value.
    #[error("invalid sample {0:?}")]
    InvalidSample(String),

    /// A magic number other than `P3` or `P6`.
    #[error("unsupported PPM format: P{0}")]
    UnsupportedFormat(char),

    /// Pixel data ended early.
    #[error("pixel data truncated: expected {expected} samples, got {actual}")]
    Truncated {
        /// Samples expected (3 per pixel).
        expected: usize,
        /// Samples found.
        actual: usize,
    },
}
