//! Error types with diagnostics using miette
//!
//! Every failure in the scene core is fail-fast and surfaced to the immediate
//! caller. Path-data errors carry source spans so they render with the
//! offending command underlined.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::transform::Transform;

// ============================================================================
// Operation Errors
// ============================================================================

/// Errors from classifying a single path command token
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("empty path command")]
    #[diagnostic(code(vecscene::operation::empty))]
    Empty,

    #[error("operation {command} not supported")]
    #[diagnostic(
        code(vecscene::operation::unsupported),
        help("supported commands are M, L, C, S, A and Z (either case)")
    )]
    Unsupported { command: char },
}

// ============================================================================
// Transform Errors
// ============================================================================

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("matrix is singular and cannot be inverted: {transform}")]
    #[diagnostic(code(vecscene::transform::singular))]
    Singular { transform: Transform },
}

// ============================================================================
// Path Data Errors
// ============================================================================

/// Errors from parsing a path-data string such as `"M 0 0 L 10 10 Z"`
#[derive(Error, Diagnostic, Debug)]
pub enum PathDataError {
    #[error("invalid path data: {message}")]
    #[diagnostic(code(vecscene::path_data::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("operation {command} not supported")]
    #[diagnostic(
        code(vecscene::path_data::unsupported_operation),
        help("supported commands are M, L, C, S, A and Z (either case)")
    )]
    UnsupportedOperation {
        command: char,
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported command")]
        span: SourceSpan,
    },

    #[error("command {command} takes operands in groups of {arity}, got {count}")]
    #[diagnostic(code(vecscene::path_data::operand_count))]
    OperandCount {
        command: char,
        arity: usize,
        count: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("wrong number of operands")]
        span: SourceSpan,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(code(vecscene::path_data::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a finite number, or 0 or 1 for an arc flag")]
        span: SourceSpan,
    },
}

// ============================================================================
// Canvas / Draw Errors
// ============================================================================

/// Errors reported by a canvas backend
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CanvasError {
    #[error("canvas backend failed: {message}")]
    #[diagnostic(code(vecscene::canvas::backend))]
    Backend { message: String },

    #[error("{operation} is not supported by this backend")]
    #[diagnostic(code(vecscene::canvas::unsupported))]
    Unsupported { operation: &'static str },
}

impl CanvasError {
    pub fn backend(message: impl Into<String>) -> Self {
        CanvasError::Backend {
            message: message.into(),
        }
    }
}

/// Errors that abort drawing an element tree
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Canvas(#[from] CanvasError),
}
