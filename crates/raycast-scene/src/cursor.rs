//! Byte cursor with one character of lookahead.
//!
//! Tokenizes the scene format on demand. Handles:
//! - Whitespace skipping with line tracking
//! - Strings (e.g., `"sphere"`), printable ASCII only
//! - Numbers (e.g., `-3.5`, `1e-3`)
//! - Single punctuation characters (`[`, `]`, `{`, `}`, `:`, `,`)

use crate::error::SceneError;

/// Cursor over the raw scene bytes.
///
/// The line counter belongs to the cursor, so independent parses never share
/// state.
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Current line (1-indexed).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume and return the next byte.
    pub fn advance(&mut self) -> Option<u8> {
        let ch = self.input.get(self.pos).copied()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Consume the next byte, failing at end of input.
    pub fn next_char(&mut self) -> Result<u8, SceneError> {
        self.advance()
            .ok_or(SceneError::UnexpectedEof { line: self.line })
    }

    /// Look at the next byte, failing at end of input.
    pub fn peek_char(&self) -> Result<u8, SceneError> {
        self.peek().ok_or(SceneError::UnexpectedEof { line: self.line })
    }

    /// Consume `expected` or fail.
    pub fn expect_char(&mut self, expected: u8) -> Result<(), SceneError> {
        let ch = self.next_char()?;
        if ch == expected {
            Ok(())
        } else {
            // Report against the line the bad character sits on
            let line = if ch == b'\n' { self.line - 1 } else { self.line };
            Err(SceneError::unexpected(
                line,
                format!("'{}'", expected as char),
                ch,
            ))
        }
    }

    /// Skip spaces, tabs, carriage returns and newlines.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if matches!(ch, b' ' | b'\t' | b'\r' | b'\n') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// True once only whitespace remains.
    pub fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.peek().is_none()
    }

    /// Read a `"`-delimited string of printable ASCII.
    pub fn read_string(&mut self) -> Result<String, SceneError> {
        let start_line = self.line;
        let ch = self.next_char()?;
        if ch != b'"' {
            return Err(SceneError::unexpected(self.line, "'\"'", ch));
        }

        let mut content = String::new();
        loop {
            match self.advance() {
                None => return Err(SceneError::UnterminatedString { line: start_line }),
                Some(b'"') => break,
                Some(ch @ 32..=126) => content.push(ch as char),
                Some(byte) => {
                    let line = if byte == b'\n' { self.line - 1 } else { self.line };
                    return Err(SceneError::InvalidStringByte { line, byte });
                }
            }
        }

        Ok(content)
    }

    /// Read a decimal number: optional sign, digits with optional fraction,
    /// optional exponent.
    pub fn read_number(&mut self) -> Result<f64, SceneError> {
        let line = self.line;
        let mut text = String::new();
        let mut digits = 0usize;

        if let Some(ch @ (b'-' | b'+')) = self.peek() {
            text.push(ch as char);
            self.advance();
        }

        digits += self.take_digits(&mut text);

        if self.peek() == Some(b'.') {
            text.push('.');
            self.advance();
            digits += self.take_digits(&mut text);
        }

        if digits == 0 {
            return match self.peek() {
                None => Err(SceneError::UnexpectedEof { line }),
                Some(ch) if text.is_empty() => Err(SceneError::unexpected(line, "a number", ch)),
                Some(_) => Err(SceneError::InvalidNumber { line, text }),
            };
        }

        if let Some(ch @ (b'e' | b'E')) = self.peek() {
            text.push(ch as char);
            self.advance();
            if let Some(ch @ (b'-' | b'+')) = self.peek() {
                text.push(ch as char);
                self.advance();
            }
            if self.take_digits(&mut text) == 0 {
                return Err(SceneError::InvalidNumber { line, text });
            }
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(SceneError::InvalidNumber { line, text }),
        }
    }

    fn take_digits(&mut self, text: &mut String) -> usize {
        let mut count = 0;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch as char);
                self.advance();
                count += 1;
            } else {
                break;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new(b"a\nb\n\nc");
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some(b'b'));
        cursor.advance();
        cursor.skip_whitespace();
        assert_eq!(cursor.line(), 4);
        assert_eq!(cursor.peek(), Some(b'c'));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new(b"xy");
        assert_eq!(cursor.peek(), Some(b'x'));
        assert_eq!(cursor.peek(), Some(b'x'));
        assert_eq!(cursor.advance(), Some(b'x'));
        assert_eq!(cursor.peek(), Some(b'y'));
    }

    #[test]
    fn test_read_string() {
        let mut cursor = Cursor::new(b"\"sphere\" rest");
        assert_eq!(cursor.read_string().unwrap(), "sphere");
        assert_eq!(cursor.peek(), Some(b' '));
    }

    #[test]
    fn test_read_string_rejects_control_bytes() {
        let mut cursor = Cursor::new(b"\"ab\tc\"");
        let err = cursor.read_string().unwrap_err();
        assert!(matches!(
            err,
            SceneError::InvalidStringByte { line: 1, byte: b'\t' }
        ));
    }

    #[test]
    fn test_read_string_newline_is_rejected() {
        let mut cursor = Cursor::new(b"\"ab\ncd\"");
        assert!(matches!(
            cursor.read_string(),
            Err(SceneError::InvalidStringByte { line: 1, byte: b'\n' })
        ));
    }

    #[test]
    fn test_unterminated_string() {
        let mut cursor = Cursor::new(b"\n\"abc");
        cursor.skip_whitespace();
        assert!(matches!(
            cursor.read_string(),
            Err(SceneError::UnterminatedString { line: 2 })
        ));
    }

    #[test]
    fn test_read_numbers() {
        let cases: &[(&[u8], f64)] = &[
            (b"42", 42.0),
            (b"-3.5", -3.5),
            (b"+0.25", 0.25),
            (b".5", 0.5),
            (b"7.", 7.0),
            (b"1e3", 1000.0),
            (b"-2.5E-1", -0.25),
        ];
        for &(input, expected) in cases {
            let mut cursor = Cursor::new(input);
            let value = cursor.read_number().unwrap();
            assert!((value - expected).abs() < 1e-12, "{input:?}");
        }
    }

    #[test]
    fn test_read_number_stops_at_delimiter() {
        let mut cursor = Cursor::new(b"12, 3");
        assert!((cursor.read_number().unwrap() - 12.0).abs() < 1e-12);
        assert_eq!(cursor.peek(), Some(b','));
    }

    #[test]
    fn test_read_number_errors() {
        let mut cursor = Cursor::new(b"abc");
        assert!(matches!(
            cursor.read_number(),
            Err(SceneError::UnexpectedChar { found: 'a', .. })
        ));

        let mut cursor = Cursor::new(b"-x");
        assert!(matches!(
            cursor.read_number(),
            Err(SceneError::InvalidNumber { .. })
        ));

        let mut cursor = Cursor::new(b"1e");
        assert!(matches!(
            cursor.read_number(),
            Err(SceneError::InvalidNumber { .. })
        ));

        // Overflows to infinity
        let mut cursor = Cursor::new(b"1e999");
        assert!(matches!(
            cursor.read_number(),
            Err(SceneError::InvalidNumber { .. })
        ));

        let mut cursor = Cursor::new(b"");
        assert!(matches!(
            cursor.read_number(),
            Err(SceneError::UnexpectedEof { line: 1 })
        ));
    }

    #[test]
    fn test_expect_char() {
        let mut cursor = Cursor::new(b"[x");
        assert!(cursor.expect_char(b'[').is_ok());
        assert!(matches!(
            cursor.expect_char(b']'),
            Err(SceneError::UnexpectedChar { found: 'x', line: 1, .. })
        ));
        assert!(matches!(
            cursor.expect_char(b']'),
            Err(SceneError::UnexpectedEof { .. })
        ));
    }
}
