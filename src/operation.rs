//! Path command classification.
//!
//! [`OperationParser`] turns a command token (`"M"`, `"l"`, ...) into a typed
//! [`Operation`]. Case picks absolute vs. relative coordinates in the path
//! mini-language; the parser keeps the original character so callers can make
//! that decision, but does not act on it itself.

use std::fmt;

use crate::errors::OperationError;

/// Kind of path operation, independent of coordinate mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    MoveTo,
    LineTo,
    CurveTo,
    ContinueCurveTo,
    ArcTo,
    Close,
}

impl OperationType {
    /// Number of numeric operands one instance of this operation consumes
    pub fn arity(self) -> usize {
        match self {
            OperationType::MoveTo | OperationType::LineTo => 2,
            OperationType::CurveTo => 6,
            OperationType::ContinueCurveTo => 4,
            OperationType::ArcTo => 7,
            OperationType::Close => 0,
        }
    }

    /// Canonical (uppercase) command letter
    pub fn letter(self) -> char {
        match self {
            OperationType::MoveTo => 'M',
            OperationType::LineTo => 'L',
            OperationType::CurveTo => 'C',
            OperationType::ContinueCurveTo => 'S',
            OperationType::ArcTo => 'A',
            OperationType::Close => 'Z',
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationType::MoveTo => "MoveTo",
            OperationType::LineTo => "LineTo",
            OperationType::CurveTo => "CurveTo",
            OperationType::ContinueCurveTo => "ContinueCurveTo",
            OperationType::ArcTo => "ArcTo",
            OperationType::Close => "Close",
        };
        f.write_str(name)
    }
}

/// A classified path command: its type plus the character it was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    op_type: OperationType,
    original: char,
}

impl Operation {
    /// The operation a command letter of this type would produce, lowercase
    /// when `relative`
    pub fn new(op_type: OperationType, relative: bool) -> Self {
        let letter = op_type.letter();
        let original = if relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        };
        Self { op_type, original }
    }

    pub fn op_type(&self) -> OperationType {
        self.op_type
    }

    /// The command character exactly as it appeared in the input
    pub fn original_value(&self) -> char {
        self.original
    }

    /// Lowercase commands take coordinates relative to the current point
    pub fn is_relative(&self) -> bool {
        self.original.is_ascii_lowercase()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.op_type, self.original)
    }
}

/// Classifier for path command tokens
pub struct OperationParser;

impl OperationParser {
    /// Classify a command token. Only the first character is significant.
    pub fn parse(token: &str) -> Result<Operation, OperationError> {
        let original = token.chars().next().ok_or(OperationError::Empty)?;
        Self::parse_char(original)
    }

    pub fn parse_char(original: char) -> Result<Operation, OperationError> {
        let op_type = match original.to_ascii_uppercase() {
            'M' => OperationType::MoveTo,
            'L' => OperationType::LineTo,
            'C' => OperationType::CurveTo,
            'S' => OperationType::ContinueCurveTo,
            'A' => OperationType::ArcTo,
            'Z' => OperationType::Close,
            _ => return Err(OperationError::Unsupported { command: original }),
        };
        Ok(Operation { op_type, original })
    }
}
