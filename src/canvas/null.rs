//! A backend that accepts every call and paints nothing.

use crate::errors::CanvasError;
use crate::render::path_builder::PathCommand;
use crate::render::style::{Brush, Color, Pen};
use crate::transform::Transform;
use crate::types::{Point, Rect, Size};

use super::{Canvas, Image, ImageCanvas, Platform, pixel_buffer_size};

#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlatform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullCanvas {
    size: Size,
    scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullImage {
    size: Size,
    scale: f64,
}

impl Canvas for NullCanvas {
    fn draw_line(&mut self, _: Point, _: Point, _: &Pen, _: Transform) -> Result<(), CanvasError> {
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        _: Rect,
        _: Option<&Pen>,
        _: Option<&Brush>,
        _: Transform,
    ) -> Result<(), CanvasError> {
        Ok(())
    }

    fn draw_ellipse(
        &mut self,
        _: Rect,
        _: Option<&Pen>,
        _: Option<&Brush>,
        _: Transform,
    ) -> Result<(), CanvasError> {
        Ok(())
    }

    fn draw_path(
        &mut self,
        _: &[PathCommand],
        _: Option<&Pen>,
        _: Option<&Brush>,
        _: Transform,
    ) -> Result<(), CanvasError> {
        Ok(())
    }

    fn draw_image(&mut self, _: &dyn Image, _: Rect, _: Transform) -> Result<(), CanvasError> {
        Ok(())
    }
}

impl ImageCanvas for NullCanvas {
    type Image = NullImage;

    fn size(&self) -> Size {
        self.size
    }

    fn image(&self) -> NullImage {
        NullImage {
            size: self.size,
            scale: self.scale,
        }
    }
}

impl Image for NullImage {
    fn size(&self) -> Size {
        self.size
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    /// Writes nothing
    fn save_as_png(&self, _path: &std::path::Path) -> Result<(), CanvasError> {
        Ok(())
    }
}

impl Platform for NullPlatform {
    type Image = NullImage;
    type Canvas = NullCanvas;

    fn name(&self) -> &str {
        "null"
    }

    fn create_image_canvas(&self, size: Size, scale: f64, _transparency: bool) -> NullCanvas {
        NullCanvas { size, scale }
    }

    fn create_image(&self, pixels: &[Color], width: usize) -> Result<NullImage, CanvasError> {
        Ok(NullImage {
            size: pixel_buffer_size(pixels, width)?,
            scale: 1.0,
        })
    }
}
