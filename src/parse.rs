//! Parse path data strings into paths.
//!
//! The pest grammar only splits the input into command letters and numbers.
//! Classification goes through [`OperationParser`], and operand counts are
//! checked per command afterwards, so every error points at the segment that
//! caused it.

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::{OperationError, PathDataError};
use crate::log::debug;
use crate::operation::{Operation, OperationParser, OperationType};
use crate::render::Path;
use crate::types::Size;

#[derive(Parser)]
#[grammar = "path_data.pest"]
pub struct PathDataParser;

const SOURCE_NAME: &str = "path data";

/// One command letter and the numbers that follow it
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub operation: Operation,
    pub operands: Vec<f64>,
    /// Byte range of the segment in the input
    pub span: (usize, usize),
}

fn named_source(data: &str) -> NamedSource<String> {
    NamedSource::new(SOURCE_NAME, data.to_string())
}

fn source_span(start: usize, end: usize) -> SourceSpan {
    (start, end.saturating_sub(start)).into()
}

/// Split path data into classified, arity-checked segments
pub fn parse_path_data(data: &str) -> Result<Vec<PathSegment>, PathDataError> {
    let pairs = PathDataParser::parse(Rule::path_data, data).map_err(|e| {
        let (start, end) = match e.location {
            pest::error::InputLocation::Pos(p) => (p, p),
            pest::error::InputLocation::Span(span) => span,
        };
        PathDataError::Syntax {
            message: e.variant.message().into_owned(),
            src: named_source(data),
            span: source_span(start, end),
        }
    })?;

    let mut segments = Vec::new();
    for pair in pairs {
        if pair.as_rule() != Rule::path_data {
            continue;
        }
        for inner in pair.into_inner() {
            if inner.as_rule() == Rule::segment {
                segments.push(parse_segment(data, inner)?);
            }
        }
    }
    Ok(segments)
}

fn parse_segment(data: &str, pair: Pair<Rule>) -> Result<PathSegment, PathDataError> {
    let span = (pair.as_span().start(), pair.as_span().end());
    let mut inner = pair.into_inner();

    let command = inner.next().ok_or_else(|| PathDataError::Syntax {
        message: "expected a command".to_string(),
        src: named_source(data),
        span: source_span(span.0, span.1),
    })?;
    let command_span = source_span(command.as_span().start(), command.as_span().end());
    let operation = OperationParser::parse(command.as_str()).map_err(|e| match e {
        OperationError::Unsupported { command } => PathDataError::UnsupportedOperation {
            command,
            src: named_source(data),
            span: command_span,
        },
        OperationError::Empty => PathDataError::Syntax {
            message: e.to_string(),
            src: named_source(data),
            span: command_span,
        },
    })?;

    // Arc groups nest their numbers and flags one level deeper
    let tokens: Vec<Pair<Rule>> = inner
        .flat_map(|p| match p.as_rule() {
            Rule::arc_group => p.into_inner().collect::<Vec<_>>(),
            _ => vec![p],
        })
        .collect();

    let mut operands = Vec::with_capacity(tokens.len());
    for token in &tokens {
        match token.as_str().parse::<f64>() {
            Ok(value) if value.is_finite() => operands.push(value),
            _ => return Err(invalid_number(data, token)),
        }
    }

    let arity = operation.op_type().arity();
    let count = operands.len();
    let well_formed = if arity == 0 {
        count == 0
    } else {
        count > 0 && count % arity == 0
    };
    if !well_formed {
        return Err(PathDataError::OperandCount {
            command: operation.original_value(),
            arity,
            count,
            src: named_source(data),
            span: source_span(span.0, span.1),
        });
    }

    if operation.op_type() == OperationType::ArcTo {
        let bad_flag = tokens
            .iter()
            .enumerate()
            .find(|(i, t)| matches!(i % arity, 3 | 4) && !matches!(t.as_str(), "0" | "1"));
        if let Some((_, token)) = bad_flag {
            return Err(invalid_number(data, token));
        }
    }

    Ok(PathSegment {
        operation,
        operands,
        span,
    })
}

fn invalid_number(data: &str, token: &Pair<Rule>) -> PathDataError {
    PathDataError::InvalidNumber {
        text: token.as_str().to_string(),
        src: named_source(data),
        span: source_span(token.as_span().start(), token.as_span().end()),
    }
}

/// Parse path data into a [`Path`] with no pen, brush or transform
pub fn parse_path(data: &str) -> Result<Path, PathDataError> {
    let segments = parse_path_data(data)?;
    let mut path = Path::new();
    for segment in &segments {
        apply_segment(&mut path, segment);
    }
    debug!(
        segments = segments.len(),
        commands = path.commands().len(),
        "parsed path data"
    );
    Ok(path)
}

/// Feed one segment to the path builder. Operand groups after the first
/// repeat the command; for MoveTo they are implicit LineTo.
fn apply_segment(path: &mut Path, segment: &PathSegment) {
    let relative = segment.operation.is_relative();
    let op_type = segment.operation.op_type();

    if op_type == OperationType::Close {
        path.close_as(segment.operation);
        return;
    }

    for (i, a) in segment.operands.chunks_exact(op_type.arity()).enumerate() {
        match op_type {
            OperationType::MoveTo if i == 0 => {
                path.move_to((a[0], a[1]), relative);
            }
            OperationType::MoveTo | OperationType::LineTo => {
                path.line_to((a[0], a[1]), relative);
            }
            OperationType::CurveTo => {
                path.curve_to((a[0], a[1]), (a[2], a[3]), (a[4], a[5]), relative);
            }
            OperationType::ContinueCurveTo => {
                path.continue_curve_to((a[0], a[1]), (a[2], a[3]), relative);
            }
            OperationType::ArcTo => {
                path.arc_to(
                    Size::new(a[0], a[1]),
                    a[2],
                    a[3] != 0.0,
                    a[4] != 0.0,
                    (a[5], a[6]),
                    relative,
                );
            }
            OperationType::Close => {}
        }
    }
}
