//! Simple leaf elements
//!
//! Each one maps onto exactly one canvas primitive.

use std::sync::Arc;

use crate::canvas::{Canvas, Image};
use crate::errors::DrawError;
use crate::transform::Transform;
use crate::types::Rect;

use super::Drawable;
use super::style::{Brush, Pen};

// ============================================================================
// Ellipse
// ============================================================================

/// An ellipse inscribed in `frame`
#[derive(Debug, Clone, Default)]
pub struct Ellipse {
    pub frame: Rect,
    pub pen: Option<Pen>,
    pub brush: Option<Brush>,
    pub transform: Transform,
}

impl Ellipse {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            ..Self::default()
        }
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
}

impl Drawable for Ellipse {
    fn local_transform(&self) -> Transform {
        self.transform
    }

    fn draw_element(&self, canvas: &mut dyn Canvas, transform: Transform) -> Result<(), DrawError> {
        canvas.draw_ellipse(self.frame, self.pen.as_ref(), self.brush.as_ref(), transform)?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "ellipse"
    }
}

// ============================================================================
// Rectangle
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Rectangle {
    pub frame: Rect,
    pub pen: Option<Pen>,
    pub brush: Option<Brush>,
    pub transform: Transform,
}

impl Rectangle {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            ..Self::default()
        }
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
}

impl Drawable for Rectangle {
    fn local_transform(&self) -> Transform {
        self.transform
    }

    fn draw_element(&self, canvas: &mut dyn Canvas, transform: Transform) -> Result<(), DrawError> {
        canvas.draw_rectangle(self.frame, self.pen.as_ref(), self.brush.as_ref(), transform)?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "rectangle"
    }
}

// ============================================================================
// Image
// ============================================================================

/// A backend image stretched into `frame`
#[derive(Debug, Clone)]
pub struct ImageElement {
    pub image: Arc<dyn Image>,
    pub frame: Rect,
    pub transform: Transform,
}

impl ImageElement {
    pub fn new(image: Arc<dyn Image>, frame: Rect) -> Self {
        Self {
            image,
            frame,
            transform: Transform::IDENTITY,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

impl Drawable for ImageElement {
    fn local_transform(&self) -> Transform {
        self.transform
    }

    fn draw_element(&self, canvas: &mut dyn Canvas, transform: Transform) -> Result<(), DrawError> {
        canvas.draw_image(self.image.as_ref(), self.frame, transform)?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "image"
    }
}
