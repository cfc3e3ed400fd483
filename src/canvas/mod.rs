//! The drawing surface contract.
//!
//! Elements never paint pixels. They call the primitives on [`Canvas`] with
//! the effective transform of the emitting element, and a backend does the
//! rest. Raster backends additionally implement [`ImageCanvas`] and are
//! created through a [`Platform`].
//!
//! Two backends ship with the crate:
//! - [`recording`]: logs every primitive call, for tests and inspection
//! - [`null`]: accepts everything and paints nothing

pub mod null;
pub mod recording;

use std::fmt;

use crate::errors::CanvasError;
use crate::render::path_builder::PathCommand;
use crate::render::style::{Brush, Color, Pen};
use crate::transform::Transform;
use crate::types::{Point, Rect, Size};

pub use null::{NullCanvas, NullImage, NullPlatform};
pub use recording::{DrawCommand, RecordedImage, RecordingCanvas, RecordingPlatform};

/// Primitive drawing operations every backend provides.
///
/// `transform` maps the given geometry into canvas space; backends apply it
/// themselves so curves and ellipses stay exact.
pub trait Canvas {
    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        pen: &Pen,
        transform: Transform,
    ) -> Result<(), CanvasError>;

    fn draw_rectangle(
        &mut self,
        frame: Rect,
        pen: Option<&Pen>,
        brush: Option<&Brush>,
        transform: Transform,
    ) -> Result<(), CanvasError>;

    fn draw_ellipse(
        &mut self,
        frame: Rect,
        pen: Option<&Pen>,
        brush: Option<&Brush>,
        transform: Transform,
    ) -> Result<(), CanvasError>;

    fn draw_path(
        &mut self,
        commands: &[PathCommand],
        pen: Option<&Pen>,
        brush: Option<&Brush>,
        transform: Transform,
    ) -> Result<(), CanvasError>;

    fn draw_image(
        &mut self,
        image: &dyn Image,
        frame: Rect,
        transform: Transform,
    ) -> Result<(), CanvasError>;

    fn fill_rectangle(&mut self, frame: Rect, color: Color) -> Result<(), CanvasError> {
        self.draw_rectangle(frame, None, Some(&Brush::Solid(color)), Transform::IDENTITY)
    }

    fn fill_ellipse(&mut self, frame: Rect, color: Color) -> Result<(), CanvasError> {
        self.draw_ellipse(frame, None, Some(&Brush::Solid(color)), Transform::IDENTITY)
    }
}

/// A raster image produced or consumed by a backend
pub trait Image: fmt::Debug {
    /// Size in user units
    fn size(&self) -> Size;

    /// Device pixels per user unit
    fn scale(&self) -> f64 {
        1.0
    }

    fn save_as_png(&self, path: &std::path::Path) -> Result<(), CanvasError>;
}

/// A canvas backed by an image that can be read back after drawing
pub trait ImageCanvas: Canvas {
    type Image: Image;

    fn size(&self) -> Size;

    /// Snapshot of everything drawn so far
    fn image(&self) -> Self::Image;
}

/// Factory for a backend's canvases and images
pub trait Platform {
    type Image: Image;
    type Canvas: ImageCanvas<Image = Self::Image>;

    fn name(&self) -> &str;

    fn create_image_canvas(&self, size: Size, scale: f64, transparency: bool) -> Self::Canvas;

    /// Build an image from row-major pixels, `width` pixels per row
    fn create_image(&self, pixels: &[Color], width: usize) -> Result<Self::Image, CanvasError>;
}

/// Size of a row-major pixel buffer, rejecting ragged or empty input
pub(crate) fn pixel_buffer_size(pixels: &[Color], width: usize) -> Result<Size, CanvasError> {
    if width == 0 || pixels.is_empty() || pixels.len() % width != 0 {
        return Err(CanvasError::backend(format!(
            "{} pixels do not form rows of width {}",
            pixels.len(),
            width
        )));
    }
    Ok(Size::new(width as f64, (pixels.len() / width) as f64))
}
