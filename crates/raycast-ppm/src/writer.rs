//! PPM writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PpmError;
use crate::{Pixel, PpmFormat, PpmMeta};

/// Write `pixels` (row-major, top row first) as a PPM image.
///
/// Fails without writing anything if the pixel count does not match the
/// dimensions, the max value is outside `1..=255`, or a sample exceeds it.
pub fn write_ppm<W: Write>(out: &mut W, pixels: &[Pixel], meta: &PpmMeta) -> Result<(), PpmError> {
    if meta.max_value == 0 || meta.max_value > 255 {
        return Err(PpmError::InvalidMaxValue(meta.max_value));
    }
    let expected = meta.pixel_count().ok_or(PpmError::DimensionsTooLarge {
        width: meta.width,
        height: meta.height,
    })?;
    if pixels.len() != expected {
        return Err(PpmError::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    if let Some(&value) = pixels.iter().flatten().find(|&&s| u32::from(s) > meta.max_value) {
        return Err(PpmError::SampleOutOfRange {
            value,
            max_value: meta.max_value,
        });
    }

    write!(out, "P{}\n{} {}\n{}\n", meta.format.magic(), meta.width, meta.height, meta.max_value)?;

    match meta.format {
        PpmFormat::Ascii => {
            for pixel in pixels {
                for sample in pixel {
                    writeln!(out, "{sample}")?;
                }
            }
        }
        PpmFormat::Binary => {
            for pixel in pixels {
                out.write_all(pixel)?;
            }
        }
    }

    Ok(())
}

/// Write a PPM image to a file, creating or truncating it.
pub fn write_ppm_file(
    path: impl AsRef<Path>,
    pixels: &[Pixel],
    meta: &PpmMeta,
) -> Result<(), PpmError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_ppm(&mut out, pixels, meta)?;
    out.flush()?;
    Ok(())
}
