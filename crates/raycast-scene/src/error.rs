//! Error types for scene parsing.

use thiserror::Error;

use crate::scene::ObjectKind;

/// Errors that can occur while reading a scene description.
///
/// Every parse error carries the 1-indexed line the cursor was on when the
/// problem was detected.
#[derive(Error, Debug)]
pub enum SceneError {
    /// I/O error reading the scene file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended where more characters were required.
    #[error("unexpected end of input on line {line}")]
    UnexpectedEof {
        /// Line number (1-indexed).
        line: usize,
    },

    /// A character other than the one the grammar requires.
    #[error("expected {expected}, got {found:?} on line {line}")]
    UnexpectedChar {
        /// Line number (1-indexed).
        line: usize,
        /// Description of what the parser was looking for.
        expected: String,
        /// The offending character.
        found: char,
    },

    /// Input ended inside a string literal.
    #[error("unterminated string starting on line {line}")]
    UnterminatedString {
        /// Line the string started on.
        line: usize,
    },

    /// A non-printable byte inside a string literal.
    #[error("only printable ASCII characters are allowed in strings (found byte {byte:#04x}) on line {line}")]
    InvalidStringByte {
        /// Line number (1-indexed).
        line: usize,
        /// The offending byte.
        byte: u8,
    },

    /// A numeric literal that does not parse.
    #[error("invalid number {text:?} on line {line}")]
    InvalidNumber {
        /// Line number (1-indexed).
        line: usize,
        /// The text that was read.
        text: String,
    },

    /// An object whose first key is not `"type"`.
    #[error("expected \"type\" key, got {found:?} on line {line}")]
    ExpectedTypeKey {
        /// Line number (1-indexed).
        line: usize,
        /// The key that was found instead.
        found: String,
    },

    /// An object type other than camera, sphere or plane.
    #[error("unknown type {name:?} on line {line}")]
    UnknownType {
        /// Line number (1-indexed).
        line: usize,
        /// The type name that was given.
        name: String,
    },

    /// A field key the format does not define.
    #[error("unknown property {key:?} on line {line}")]
    UnknownField {
        /// Line number (1-indexed).
        line: usize,
        /// The key that was given.
        key: String,
    },

    /// An object closed without one of its required fields.
    #[error("{kind} is missing required field {field:?} on line {line}")]
    MissingField {
        /// Line number (1-indexed).
        line: usize,
        /// Kind of the incomplete object.
        kind: ObjectKind,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A sphere with a negative radius.
    #[error("sphere must have a non-negative radius (got {radius}) on line {line}")]
    NegativeRadius {
        /// Line number (1-indexed).
        line: usize,
        /// The radius that was given.
        radius: f64,
    },

    /// A camera whose view-plane extent is not strictly positive.
    #[error("camera width and height must be positive (got {width} x {height}) on line {line}")]
    InvalidCameraExtent {
        /// Line number (1-indexed).
        line: usize,
        /// The width that was given.
        width: f64,
        /// The height that was given.
        height: f64,
    },

    /// More than one camera in a scene.
    #[error("scene defines more than one camera (second camera on line {line})")]
    DuplicateCamera {
        /// Line the second camera closed on.
        line: usize,
    },

    /// Non-whitespace content after the closing `]`.
    #[error("unexpected content after the end of the scene on line {line}")]
    TrailingCharacters {
        /// Line number (1-indexed).
        line: usize,
    },
}

impl SceneError {
    /// Create an unexpected-character error.
    pub fn unexpected(line: usize, expected: impl Into<String>, found: u8) -> Self {
        Self::UnexpectedChar {
            line,
            expected: expected.into(),
            found: found as char,
        }
    }

    /// The line the error was detected on, if it came from the parser.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::UnexpectedEof { line }
            | Self::UnexpectedChar { line, .. }
            | Self::UnterminatedString { line }
            | Self::InvalidStringByte { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::ExpectedTypeKey { line, .. }
            | Self::UnknownType { line, .. }
            | Self::UnknownField { line, .. }
            | Self::MissingField { line, .. }
            | Self::NegativeRadius { line, .. }
            | Self::InvalidCameraExtent { line, .. }
            | Self::DuplicateCamera { line }
            | Self::TrailingCharacters { line } => Some(*line),
        }
    }
}
