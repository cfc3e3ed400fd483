//! Path builder for path elements.
//!
//! This module implements the state machine behind the path mini-language:
//! every builder call takes its operands plus a `relative` flag and appends
//! commands in absolute coordinates.
//!
//! # Key Concepts
//!
//! - **current point**: where the pen is. Updated by every command that moves
//!   the pen; relative operands are offsets from it.
//! - **subpath start**: recorded on MoveTo. `close` draws back to it and makes
//!   it the current point again.
//! - **open subpath**: drawing commands issued with no open subpath (at the
//!   very beginning, or after a close) first emit an implicit MoveTo at the
//!   current point.
//! - **last control point**: the second control point of the previous curve,
//!   reflected by `continue_curve_to` to get its first control point.
//! - **source operation**: every stored command keeps the [`Operation`] it
//!   came from, so a smooth curve still reports `S`/`s` after being resolved
//!   to a full `CurveTo`.

use std::fmt;

use crate::operation::{Operation, OperationType};
use crate::types::{Point, Size};

/// One stored path command, always in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier segment
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Elliptical arc segment with mini-language endpoint parameters
    ArcTo {
        radius: Size,
        rotation_degrees: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

impl PathCommand {
    pub fn op_type(&self) -> OperationType {
        match self {
            PathCommand::MoveTo(_) => OperationType::MoveTo,
            PathCommand::LineTo(_) => OperationType::LineTo,
            PathCommand::CurveTo { .. } => OperationType::CurveTo,
            PathCommand::ArcTo { .. } => OperationType::ArcTo,
            PathCommand::Close => OperationType::Close,
        }
    }

    /// Where the pen is after this command, if it says so itself
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CurveTo { end, .. } | PathCommand::ArcTo { end, .. } => Some(end),
            PathCommand::Close => None,
        }
    }
}

/// Formats as absolute path data, e.g. `C 1 2 3 4 5 6`
impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            PathCommand::CurveTo {
                control1,
                control2,
                end,
            } => write!(
                f,
                "C {} {} {} {} {} {}",
                control1.x, control1.y, control2.x, control2.y, end.x, end.y
            ),
            PathCommand::ArcTo {
                radius,
                rotation_degrees,
                large_arc,
                sweep,
                end,
            } => write!(
                f,
                "A {} {} {} {} {} {} {}",
                radius.width,
                radius.height,
                rotation_degrees,
                u8::from(*large_arc),
                u8::from(*sweep),
                end.x,
                end.y
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Builder for the command list of a path.
///
/// # Example
///
/// ```
/// use vecscene::{PathBuilder, PathCommand, Point};
///
/// let mut builder = PathBuilder::new();
/// builder.move_to(Point::new(0.0, 0.0), false);
/// builder.line_to(Point::new(10.0, 0.0), true);
/// builder.line_to(Point::new(0.0, 10.0), true);
/// builder.close();
///
/// let commands = builder.build();
/// assert_eq!(commands[2], PathCommand::LineTo(Point::new(10.0, 10.0)));
/// assert_eq!(commands[3], PathCommand::Close);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,

    /// Parallel to `commands`
    operations: Vec<Operation>,

    current: Point,

    /// Set by MoveTo, restored by Close
    subpath_start: Point,

    /// False before the first command and after Close
    subpath_open: bool,

    /// Second control point of the previous command, if it was a curve
    last_control: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building on top of existing commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        let mut builder = Self::new();
        for command in commands {
            let operation = Operation::new(command.op_type(), false);
            match command {
                PathCommand::Close => builder.close_as(operation),
                _ => builder.push(operation, command),
            }
        }
        builder
    }

    fn resolve(&self, p: Point, relative: bool) -> Point {
        if relative { self.current + p } else { p }
    }

    /// Implicit MoveTo when drawing without an open subpath
    fn ensure_subpath(&mut self) {
        if !self.subpath_open {
            self.record(
                Operation::new(OperationType::MoveTo, false),
                PathCommand::MoveTo(self.current),
            );
            self.subpath_start = self.current;
            self.subpath_open = true;
        }
    }

    fn record(&mut self, operation: Operation, command: PathCommand) {
        self.operations.push(operation);
        self.commands.push(command);
    }

    /// Append an absolute drawing command, keeping the builder state in sync
    fn push(&mut self, operation: Operation, command: PathCommand) {
        match command {
            PathCommand::MoveTo(p) => {
                self.record(operation, command);
                self.current = p;
                self.subpath_start = p;
                self.subpath_open = true;
                self.last_control = None;
            }
            PathCommand::LineTo(p) | PathCommand::ArcTo { end: p, .. } => {
                self.ensure_subpath();
                self.record(operation, command);
                self.current = p;
                self.last_control = None;
            }
            PathCommand::CurveTo { control2, end, .. } => {
                self.ensure_subpath();
                self.record(operation, command);
                self.current = end;
                self.last_control = Some(control2);
            }
            PathCommand::Close => self.close_as(operation),
        }
    }

    /// Start a new subpath
    pub fn move_to(&mut self, p: Point, relative: bool) {
        let p = self.resolve(p, relative);
        self.push(
            Operation::new(OperationType::MoveTo, relative),
            PathCommand::MoveTo(p),
        );
    }

    pub fn line_to(&mut self, p: Point, relative: bool) {
        let p = self.resolve(p, relative);
        self.push(
            Operation::new(OperationType::LineTo, relative),
            PathCommand::LineTo(p),
        );
    }

    /// Cubic Bézier. With `relative`, all three points are offsets from the
    /// current point at the start of the segment.
    pub fn curve_to(&mut self, control1: Point, control2: Point, end: Point, relative: bool) {
        let control1 = self.resolve(control1, relative);
        let control2 = self.resolve(control2, relative);
        let end = self.resolve(end, relative);
        self.push(
            Operation::new(OperationType::CurveTo, relative),
            PathCommand::CurveTo {
                control1,
                control2,
                end,
            },
        );
    }

    /// Smooth cubic Bézier: the first control point is the reflection of the
    /// previous curve's second control point, or the current point when the
    /// previous command was not a curve.
    pub fn continue_curve_to(&mut self, control2: Point, end: Point, relative: bool) {
        let control1 = match self.last_control {
            Some(prev) if self.subpath_open => prev.reflect_about(self.current),
            _ => self.current,
        };
        let control2 = self.resolve(control2, relative);
        let end = self.resolve(end, relative);
        self.push(
            Operation::new(OperationType::ContinueCurveTo, relative),
            PathCommand::CurveTo {
                control1,
                control2,
                end,
            },
        );
    }

    /// Elliptical arc to `end`. Radii are stored as absolute values.
    pub fn arc_to(
        &mut self,
        radius: Size,
        rotation_degrees: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
        relative: bool,
    ) {
        let end = self.resolve(end, relative);
        self.push(
            Operation::new(OperationType::ArcTo, relative),
            PathCommand::ArcTo {
                radius: Size::new(radius.width.abs(), radius.height.abs()),
                rotation_degrees,
                large_arc,
                sweep,
                end,
            },
        );
    }

    /// Close the open subpath. A no-op when nothing is open.
    pub fn close(&mut self) {
        self.close_as(Operation::new(OperationType::Close, false));
    }

    /// Close, recording `operation` (`Z` or `z`) as the source
    pub(crate) fn close_as(&mut self, operation: Operation) {
        if !self.subpath_open {
            return;
        }
        self.record(operation, PathCommand::Close);
        self.current = self.subpath_start;
        self.subpath_open = false;
        self.last_control = None;
    }

    pub fn current_point(&self) -> Point {
        self.current
    }

    pub fn subpath_start(&self) -> Point {
        self.subpath_start
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Source operation of each command, index for index
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn build(self) -> Vec<PathCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_absolute_triangle() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(0.0, 0.0), false);
        builder.line_to(pt(100.0, 0.0), false);
        builder.line_to(pt(50.0, 100.0), false);
        builder.close();

        assert_eq!(
            builder.build(),
            vec![
                PathCommand::MoveTo(pt(0.0, 0.0)),
                PathCommand::LineTo(pt(100.0, 0.0)),
                PathCommand::LineTo(pt(50.0, 100.0)),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_relative_offsets_accumulate() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(10.0, 10.0), false);
        builder.line_to(pt(5.0, 0.0), true);
        builder.line_to(pt(0.0, 5.0), true);

        assert_eq!(builder.current_point(), pt(15.0, 15.0));
        assert_eq!(builder.commands()[2], PathCommand::LineTo(pt(15.0, 15.0)));
    }

    #[test]
    fn test_relative_move_from_origin() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(3.0, 4.0), true);
        assert_eq!(builder.commands()[0], PathCommand::MoveTo(pt(3.0, 4.0)));
    }

    #[test]
    fn test_close_restores_subpath_start() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(1.0, 2.0), false);
        builder.line_to(pt(10.0, 2.0), false);
        builder.close();

        assert_eq!(builder.current_point(), pt(1.0, 2.0));
        assert_eq!(builder.subpath_start(), pt(1.0, 2.0));
    }

    #[test]
    fn test_drawing_after_close_starts_new_subpath() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(1.0, 2.0), false);
        builder.line_to(pt(10.0, 2.0), false);
        builder.close();
        builder.line_to(pt(5.0, 5.0), true);

        assert_eq!(
            builder.build(),
            vec![
                PathCommand::MoveTo(pt(1.0, 2.0)),
                PathCommand::LineTo(pt(10.0, 2.0)),
                PathCommand::Close,
                PathCommand::MoveTo(pt(1.0, 2.0)),
                PathCommand::LineTo(pt(6.0, 7.0)),
            ]
        );
    }

    #[test]
    fn test_line_without_move_starts_at_origin() {
        let mut builder = PathBuilder::new();
        builder.line_to(pt(4.0, 4.0), false);

        assert_eq!(
            builder.build(),
            vec![PathCommand::MoveTo(Point::ORIGIN), PathCommand::LineTo(pt(4.0, 4.0))]
        );
    }

    #[test]
    fn test_close_without_subpath_is_noop() {
        let mut builder = PathBuilder::new();
        builder.close();
        assert!(builder.is_empty());

        builder.move_to(pt(1.0, 1.0), false);
        builder.close();
        builder.close();
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_relative_curve_uses_segment_start() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(10.0, 10.0), false);
        builder.curve_to(pt(0.0, 5.0), pt(5.0, 10.0), pt(10.0, 10.0), true);

        assert_eq!(
            builder.commands()[1],
            PathCommand::CurveTo {
                control1: pt(10.0, 15.0),
                control2: pt(15.0, 20.0),
                end: pt(20.0, 20.0),
            }
        );
    }

    #[test]
    fn test_continue_curve_reflects_previous_control() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(0.0, 0.0), false);
        builder.curve_to(pt(0.0, 10.0), pt(10.0, 10.0), pt(20.0, 0.0), false);
        builder.continue_curve_to(pt(40.0, -10.0), pt(40.0, 0.0), false);

        assert_eq!(
            builder.commands()[2],
            PathCommand::CurveTo {
                control1: pt(30.0, -10.0),
                control2: pt(40.0, -10.0),
                end: pt(40.0, 0.0),
            }
        );
    }

    #[test]
    fn test_continue_curve_after_line_uses_current_point() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(0.0, 0.0), false);
        builder.line_to(pt(5.0, 0.0), false);
        builder.continue_curve_to(pt(5.0, 5.0), pt(10.0, 5.0), true);

        assert_eq!(
            builder.commands()[2],
            PathCommand::CurveTo {
                control1: pt(5.0, 0.0),
                control2: pt(10.0, 5.0),
                end: pt(15.0, 5.0),
            }
        );
    }

    #[test]
    fn test_arc_radii_are_absolute() {
        let mut builder = PathBuilder::new();
        builder.move_to(pt(0.0, 0.0), false);
        builder.arc_to(Size::new(-5.0, 3.0), 30.0, true, false, pt(10.0, 0.0), true);

        assert_eq!(
            builder.commands()[1],
            PathCommand::ArcTo {
                radius: Size::new(5.0, 3.0),
                rotation_degrees: 30.0,
                large_arc: true,
                sweep: false,
                end: pt(10.0, 0.0),
            }
        );
        assert_eq!(builder.current_point(), pt(10.0, 0.0));
    }

    #[test]
    fn test_from_commands_resumes_state() {
        let mut builder = PathBuilder::from_commands(vec![
            PathCommand::MoveTo(pt(2.0, 2.0)),
            PathCommand::LineTo(pt(4.0, 2.0)),
        ]);
        builder.line_to(pt(0.0, 2.0), true);
        assert_eq!(builder.current_point(), pt(4.0, 4.0));
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn test_display_as_path_data() {
        let arc = PathCommand::ArcTo {
            radius: Size::new(5.0, 3.0),
            rotation_degrees: 0.0,
            large_arc: false,
            sweep: true,
            end: pt(1.5, -2.0),
        };
        assert_eq!(arc.to_string(), "A 5 3 0 0 1 1.5 -2");
        assert_eq!(PathCommand::Close.to_string(), "Z");
    }

    #[test]
    fn test_operations_keep_source_type_and_case() {
        let mut builder = PathBuilder::new();
        builder.line_to(pt(5.0, 0.0), true);
        builder.curve_to(pt(0.0, 1.0), pt(1.0, 1.0), pt(2.0, 0.0), true);
        builder.continue_curve_to(pt(3.0, -1.0), pt(4.0, 0.0), true);
        builder.continue_curve_to(pt(9.0, -1.0), pt(10.0, 0.0), false);
        builder.close();

        let originals: String = builder
            .operations()
            .iter()
            .map(Operation::original_value)
            .collect();
        assert_eq!(originals, "MlcsSZ");
        assert_eq!(
            builder.operations()[3].op_type(),
            OperationType::ContinueCurveTo
        );
        assert_eq!(builder.commands()[3].op_type(), OperationType::CurveTo);
        assert_eq!(builder.operations().len(), builder.commands().len());
    }

    #[test]
    fn test_close_as_keeps_lowercase() {
        let mut builder = PathBuilder::new();
        builder.close_as(Operation::new(OperationType::Close, true));
        assert!(builder.operations().is_empty());

        builder.move_to(pt(1.0, 1.0), true);
        builder.close_as(Operation::new(OperationType::Close, true));
        assert_eq!(builder.operations()[1].original_value(), 'z');
    }
}
