//! Path: the leaf geometry element

use std::fmt;

use crate::canvas::Canvas;
use crate::errors::{DrawError, PathDataError};
use crate::operation::{Operation, OperationType};
use crate::transform::Transform;
use crate::types::{Point, Size};

use super::Drawable;
use super::path_builder::{PathBuilder, PathCommand};
use super::style::{Brush, Pen};

/// One or more subpaths, stroked with `pen` and filled with `brush`.
///
/// Geometry is accumulated through the builder methods, which mirror the
/// path mini-language, or parsed from path data with [`Path::parse`].
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub pen: Option<Pen>,
    pub brush: Option<Brush>,
    pub transform: Transform,
    builder: PathBuilder,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self {
            builder: PathBuilder::from_commands(commands),
            ..Self::default()
        }
    }

    /// Parse path data such as `"M 0 0 L 100 0 L 50 100 Z"`
    pub fn parse(data: &str) -> Result<Self, PathDataError> {
        crate::parse::parse_path(data)
    }

    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = Some(pen);
        self
    }

    pub fn with_brush(mut self, brush: impl Into<Brush>) -> Self {
        self.brush = Some(brush.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn move_to(&mut self, p: impl Into<Point>, relative: bool) -> &mut Self {
        self.builder.move_to(p.into(), relative);
        self
    }

    pub fn line_to(&mut self, p: impl Into<Point>, relative: bool) -> &mut Self {
        self.builder.line_to(p.into(), relative);
        self
    }

    pub fn curve_to(
        &mut self,
        control1: impl Into<Point>,
        control2: impl Into<Point>,
        end: impl Into<Point>,
        relative: bool,
    ) -> &mut Self {
        self.builder
            .curve_to(control1.into(), control2.into(), end.into(), relative);
        self
    }

    pub fn continue_curve_to(
        &mut self,
        control2: impl Into<Point>,
        end: impl Into<Point>,
        relative: bool,
    ) -> &mut Self {
        self.builder
            .continue_curve_to(control2.into(), end.into(), relative);
        self
    }

    pub fn arc_to(
        &mut self,
        radius: Size,
        rotation_degrees: f64,
        large_arc: bool,
        sweep: bool,
        end: impl Into<Point>,
        relative: bool,
    ) -> &mut Self {
        self.builder
            .arc_to(radius, rotation_degrees, large_arc, sweep, end.into(), relative);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.builder.close();
        self
    }

    pub(crate) fn close_as(&mut self, operation: Operation) -> &mut Self {
        self.builder.close_as(operation);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        self.builder.commands()
    }

    /// The operation each stored command came from, in order. A smooth curve
    /// reports `ContinueCurveTo` here even though it is stored as `CurveTo`.
    pub fn operations(&self) -> &[Operation] {
        self.builder.operations()
    }

    pub fn operation_types(&self) -> impl Iterator<Item = OperationType> + '_ {
        self.operations().iter().map(Operation::op_type)
    }

    pub fn current_point(&self) -> Point {
        self.builder.current_point()
    }

    pub fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }

    /// Absolute path data for the stored commands
    pub fn to_path_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl Drawable for Path {
    fn local_transform(&self) -> Transform {
        self.transform
    }

    fn draw_element(&self, canvas: &mut dyn Canvas, transform: Transform) -> Result<(), DrawError> {
        if self.is_empty() {
            return Ok(());
        }
        canvas.draw_path(
            self.commands(),
            self.pen.as_ref(),
            self.brush.as_ref(),
            transform,
        )?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "path"
    }
}
