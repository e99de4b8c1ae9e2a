//! PPM reader for the `P3` and `P6` variants.

use crate::error::PpmError;
use crate::{Pixel, PpmFormat, PpmMeta};

/// Position in a PPM byte buffer.
struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Skip whitespace and `#` comments (which run to end of line).
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.pos += 1;
            } else if ch == b'#' {
                while let Some(ch) = self.peek() {
                    self.pos += 1;
                    if ch == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Read an unsigned decimal integer after optional whitespace.
    fn read_uint(&mut self, what: &str) -> Result<Option<u64>, PpmError> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if start == self.pos {
            return match self.peek() {
                None => Ok(None),
                Some(ch) => Err(PpmError::InvalidHeader(format!(
                    "expected {what}, found {:?}",
                    ch as char
                ))),
            };
        }

        let text = std::str::from_utf8(&self.data[start..self.pos])
            .map_err(|_| PpmError::InvalidHeader(format!("invalid {what}")))?;
        text.parse()
            .map(Some)
            .map_err(|_| PpmError::InvalidHeader(format!("{what} out of range: {text}")))
    }

    fn require_uint(&mut self, what: &str) -> Result<u64, PpmError> {
        self.read_uint(what)?
            .ok_or_else(|| PpmError::InvalidHeader(format!("missing {what}")))
    }
}

/// Parse a PPM header.
///
/// Returns the metadata and the byte offset where pixel data begins.
pub fn read_ppm_header(data: &[u8]) -> Result<(PpmMeta, usize), PpmError> {
    if data.first() != Some(&b'P') {
        return Err(PpmError::InvalidHeader("missing 'P' magic".into()));
    }
    let magic = data
        .get(1)
        .map(|&b| b as char)
        .ok_or_else(|| PpmError::InvalidHeader("missing format digit".into()))?;
    let format = PpmFormat::from_magic(magic).ok_or(PpmError::UnsupportedFormat(magic))?;

    let mut scanner = Scanner::new(data);
    scanner.pos = 2;

    let width = scanner.require_uint("width")?;
    let height = scanner.require_uint("height")?;
    let max_value = scanner.require_uint("max value")?;

    if !(1..=255).contains(&max_value) {
        return Err(PpmError::InvalidMaxValue(max_value.min(u64::from(u32::MAX)) as u32));
    }

    // Exactly one whitespace byte separates the header from the samples
    match scanner.peek() {
        Some(ch) if ch.is_ascii_whitespace() => scanner.pos += 1,
        Some(ch) => {
            return Err(PpmError::InvalidHeader(format!(
                "expected whitespace after max value, found {:?}",
                ch as char
            )))
        }
        None => {}
    }

    let to_usize = |v: u64, what: &str| {
        usize::try_from(v).map_err(|_| PpmError::InvalidHeader(format!("{what} too large")))
    };

    let meta = PpmMeta {
        width: to_usize(width, "width")?,
        height: to_usize(height, "height")?,
        max_value: max_value as u32,
        format,
    };
    Ok((meta, scanner.pos))
}

/// Decode a whole PPM image.
pub fn read_ppm(data: &[u8]) -> Result<(PpmMeta, Vec<Pixel>), PpmError> {
    let (meta, offset) = read_ppm_header(data)?;
    let expected = meta
        .pixel_count()
        .ok_or(PpmError::DimensionsTooLarge {
            width: meta.width,
            height: meta.height,
        })?
        * 3;

    let samples = match meta.format {
        PpmFormat::Binary => {
            let body = &data[offset..];
            if body.len() < expected {
                return Err(PpmError::Truncated {
                    expected,
                    actual: body.len(),
                });
            }
            body[..expected].to_vec()
        }
        PpmFormat::Ascii => {
            let mut scanner = Scanner::new(data);
            scanner.pos = offset;
            let mut samples = Vec::with_capacity(expected);
            while samples.len() < expected {
                let sample = scanner
                    .read_uint("sample")
                    .map_err(|_| PpmError::InvalidSample(format!("at byte {}", scanner.pos)))?;
                match sample {
                    None => {
                        return Err(PpmError::Truncated {
                            expected,
                            actual: samples.len(),
                        })
                    }
                    Some(v) if v <= u64::from(meta.max_value) => samples.push(v as u8),
                    Some(v) => return Err(PpmError::InvalidSample(v.to_string())),
                }
            }
            samples
        }
    };

    let pixels = samples
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();
    Ok((meta, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::write_ppm;

    #[test]
    fn test_header_round_trip() {
        for format in [PpmFormat::Binary, PpmFormat::Ascii] {
            let meta = PpmMeta::new(3, 2).with_format(format);
            let pixels = vec![[12, 34, 56]; 6];
            let mut buf: Vec<u8> = Vec::new();
            write_ppm(&mut buf, &pixels, &meta).unwrap();

            let (read, offset) = read_ppm_header(&buf).unwrap();
            assert_eq!(read, meta);
            assert_eq!(offset, "P6\n3 2\n255\n".len());
        }
    }

    #[test]
    fn test_pixels_round_trip() {
        let pixels = vec![[0, 0, 0], [255, 128, 1], [9, 10, 11], [200, 100, 50]];
        for format in [PpmFormat::Binary, PpmFormat::Ascii] {
            let meta = PpmMeta::new(2, 2).with_format(format);
            let mut buf: Vec<u8> = Vec::new();
            write_ppm(&mut buf, &pixels, &meta).unwrap();

            let (read_meta, read_pixels) = read_ppm(&buf).unwrap();
            assert_eq!(read_meta, meta);
            assert_eq!(read_pixels, pixels);
        }
    }

    #[test]
    fn test_header_with_comments() {
        let data = b"P6\n# made by hand\n2 1 # trailing\n255\n\x01\x02\x03\x04\x05\x06";
        let (meta, pixels) = read_ppm(data).unwrap();
        assert_eq!(meta.width, 2);
        assert_eq!(meta.height, 1);
        assert_eq!(pixels, vec![[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn test_unsupported_format() {
        assert!(matches!(
            read_ppm_header(b"P5\n1 1\n255\n"),
            Err(PpmError::UnsupportedFormat('5'))
        ));
        assert!(matches!(
            read_ppm_header(b"Q6\n1 1\n255\n"),
            Err(PpmError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_missing_dimensions() {
        assert!(matches!(
            read_ppm_header(b"P6\n1"),
            Err(PpmError::InvalidHeader(_))
        ));
        assert!(matches!(
            read_ppm_header(b"P6\nx 1 255\n"),
            Err(PpmError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_oversized_header_is_rejected() {
        let data = format!("P6\n{} 2\n255\n", usize::MAX);
        assert!(matches!(
            read_ppm(data.as_bytes()),
            Err(PpmError::DimensionsTooLarge { height: 2, .. })
        ));
    }

    #[test]
    fn test_truncated_pixels() {
        assert!(matches!(
            read_ppm(b"P6\n2 1\n255\n\x01\x02\x03"),
            Err(PpmError::Truncated { expected: 6, actual: 3 })
        ));
        assert!(matches!(
            read_ppm(b"P3\n1 1\n255\n1 2\n"),
            Err(PpmError::Truncated { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_ascii_sample_above_max() {
        assert!(matches!(
            read_ppm(b"P3\n1 1\n100\n1 2 101\n"),
            Err(PpmError::InvalidSample(_))
        ));
    }
}
