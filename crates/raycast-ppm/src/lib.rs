#![warn(missing_docs)]

//! PPM image output for the raycast renderer.
//!
//! Writes 8-bit RGB pixels as either variant of the portable pixmap format:
//! - `P3`: ASCII, one decimal sample per line
//! - `P6`: binary, three raw bytes per pixel
//!
//! Both share the text header `P<n>\n<width> <height>\n<max>\n`. A reader for
//! the same two variants is included so written images can be checked.

mod error;
mod reader;
mod writer;

pub use error::PpmError;
pub use reader::{read_ppm, read_ppm_header};
pub use writer::{write_ppm, write_ppm_file};

/// An 8-bit RGB pixel.
pub type Pixel = [u8; 3];

/// PPM encoding variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PpmFormat {
    /// `P3`: ASCII samples.
    Ascii,
    /// `P6`: raw byte samples.
    #[default]
    Binary,
}

impl PpmFormat {
    /// The digit after `P` in the magic number.
    pub fn magic(self) -> char {
        match self {
            PpmFormat::Ascii => '3',
            PpmFormat::Binary => '6',
        }
    }

    /// Look up a variant by its magic digit.
    pub fn from_magic(magic: char) -> Option<Self> {
        match magic {
            '3' => Some(PpmFormat::Ascii),
            '6' => Some(PpmFormat::Binary),
            _ => None,
        }
    }
}

/// Image dimensions and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmMeta {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Largest sample value.
    pub max_value: u32,
    /// Encoding variant.
    pub format: PpmFormat,
}

impl PpmMeta {
    /// Binary (`P6`) image with max value 255.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            max_value: 255,
            format: PpmFormat::Binary,
        }
    }

    /// Same dimensions, different encoding.
    pub fn with_format(mut self, format: PpmFormat) -> Self {
        self.format = format;
        self
    }

    /// Number of pixels the dimensions call for, or `None` if the byte size
    /// of the image would not fit in a `usize`.
    pub fn pixel_count(&self) -> Option<usize> {
        let count = self.width.checked_mul(self.height)?;
        count.checked_mul(3)?;
        Some(count)
    }
}
