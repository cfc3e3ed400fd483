//! A canvas that records primitive calls instead of painting.
//!
//! Each call becomes one [`DrawCommand`]. The log prints one command per
//! line, which makes it convenient for snapshot tests of whole scenes.

use std::fmt;

use crate::errors::CanvasError;
use crate::log::trace;
use crate::render::path_builder::PathCommand;
use crate::render::style::{Brush, Color, Pen};
use crate::transform::Transform;
use crate::types::{Point, Rect, Size};

use super::{Canvas, Image, ImageCanvas, Platform, pixel_buffer_size};

/// A recorded primitive call with owned copies of its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        pen: Pen,
        transform: Transform,
    },
    Rectangle {
        frame: Rect,
        pen: Option<Pen>,
        brush: Option<Brush>,
        transform: Transform,
    },
    Ellipse {
        frame: Rect,
        pen: Option<Pen>,
        brush: Option<Brush>,
        transform: Transform,
    },
    Path {
        commands: Vec<PathCommand>,
        pen: Option<Pen>,
        brush: Option<Brush>,
        transform: Transform,
    },
    Image {
        image_size: Size,
        frame: Rect,
        transform: Transform,
    },
}

impl DrawCommand {
    pub fn transform(&self) -> Transform {
        match self {
            DrawCommand::Line { transform, .. }
            | DrawCommand::Rectangle { transform, .. }
            | DrawCommand::Ellipse { transform, .. }
            | DrawCommand::Path { transform, .. }
            | DrawCommand::Image { transform, .. } => *transform,
        }
    }
}

struct OptPen<'a>(&'a Option<Pen>);

impl fmt::Display for OptPen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(pen) => write!(f, "{pen}"),
            None => f.write_str("none"),
        }
    }
}

struct OptBrush<'a>(&'a Option<Brush>);

impl fmt::Display for OptBrush<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(brush) => write!(f, "{brush}"),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Line {
                from,
                to,
                pen,
                transform,
            } => write!(f, "line {from} {to} pen={pen} {transform}"),
            DrawCommand::Rectangle {
                frame,
                pen,
                brush,
                transform,
            } => write!(
                f,
                "rect {frame} pen={} brush={} {transform}",
                OptPen(pen),
                OptBrush(brush)
            ),
            DrawCommand::Ellipse {
                frame,
                pen,
                brush,
                transform,
            } => write!(
                f,
                "ellipse {frame} pen={} brush={} {transform}",
                OptPen(pen),
                OptBrush(brush)
            ),
            DrawCommand::Path {
                commands,
                pen,
                brush,
                transform,
            } => {
                f.write_str("path \"")?;
                for (i, command) in commands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{command}")?;
                }
                write!(
                    f,
                    "\" pen={} brush={} {transform}",
                    OptPen(pen),
                    OptBrush(brush)
                )
            }
            DrawCommand::Image {
                image_size,
                frame,
                transform,
            } => write!(f, "image {image_size} {frame} {transform}"),
        }
    }
}

/// Canvas that appends every primitive call to a log.
///
/// [`RecordingCanvas::failing_after`] makes it return a backend error once a
/// given number of commands has been recorded.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: Size,
    scale: f64,
    transparency: bool,
    commands: Vec<DrawCommand>,
    fail_after: Option<usize>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::with_size(crate::render::defaults::CANVAS_SIZE, true)
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(size: Size, transparency: bool) -> Self {
        Self {
            size,
            scale: crate::render::defaults::CANVAS_SCALE,
            transparency,
            commands: Vec::new(),
            fail_after: None,
        }
    }

    /// Accept `count` primitives, then fail every later call
    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn transparency(&self) -> bool {
        self.transparency
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), CanvasError> {
        if let Some(limit) = self.fail_after {
            if self.commands.len() >= limit {
                return Err(CanvasError::backend(format!(
                    "recording canvas refuses primitive #{}",
                    self.commands.len() + 1
                )));
            }
        }
        trace!(%command, "record");
        self.commands.push(command);
        Ok(())
    }
}

impl fmt::Display for RecordingCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{command}")?;
        }
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        pen: &Pen,
        transform: Transform,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::Line {
            from,
            to,
            pen: pen.clone(),
            transform,
        })
    }

    fn draw_rectangle(
        &mut self,
        frame: Rect,
        pen: Option<&Pen>,
        brush: Option<&Brush>,
        transform: Transform,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::Rectangle {
            frame,
            pen: pen.cloned(),
            brush: brush.cloned(),
            transform,
        })
    }

    fn draw_ellipse(
        &mut self,
        frame: Rect,
        pen: Option<&Pen>,
        brush: Option<&Brush>,
        transform: Transform,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::Ellipse {
            frame,
            pen: pen.cloned(),
            brush: brush.cloned(),
            transform,
        })
    }

    fn draw_path(
        &mut self,
        commands: &[PathCommand],
        pen: Option<&Pen>,
        brush: Option<&Brush>,
        transform: Transform,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::Path {
            commands: commands.to_vec(),
            pen: pen.cloned(),
            brush: brush.cloned(),
            transform,
        })
    }

    fn draw_image(
        &mut self,
        image: &dyn Image,
        frame: Rect,
        transform: Transform,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::Image {
            image_size: image.size(),
            frame,
            transform,
        })
    }
}

/// Image produced by a [`RecordingCanvas`] or [`RecordingPlatform`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedImage {
    size: Size,
    scale: f64,
    pixels: Vec<Color>,
    commands: Vec<DrawCommand>,
}

impl RecordedImage {
    /// Pixels the image was created from; empty for canvas snapshots
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Commands drawn on the canvas this image was taken from
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Image for RecordedImage {
    fn size(&self) -> Size {
        self.size
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn save_as_png(&self, _path: &std::path::Path) -> Result<(), CanvasError> {
        Err(CanvasError::Unsupported {
            operation: "save_as_png",
        })
    }
}

impl ImageCanvas for RecordingCanvas {
    type Image = RecordedImage;

    fn size(&self) -> Size {
        self.size
    }

    fn image(&self) -> RecordedImage {
        RecordedImage {
            size: self.size,
            scale: self.scale,
            pixels: Vec::new(),
            commands: self.commands.clone(),
        }
    }
}

/// Platform handing out recording canvases
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingPlatform;

impl Platform for RecordingPlatform {
    type Image = RecordedImage;
    type Canvas = RecordingCanvas;

    fn name(&self) -> &str {
        "recording"
    }

    fn create_image_canvas(&self, size: Size, scale: f64, transparency: bool) -> RecordingCanvas {
        RecordingCanvas {
            scale,
            ..RecordingCanvas::with_size(size, transparency)
        }
    }

    fn create_image(&self, pixels: &[Color], width: usize) -> Result<RecordedImage, CanvasError> {
        let size = pixel_buffer_size(pixels, width)?;
        Ok(RecordedImage {
            size,
            scale: 1.0,
            pixels: pixels.to_vec(),
            commands: Vec::new(),
        })
    }
}
