//! Default drawing settings

use crate::types::Size;

use super::style::Color;

pub const PEN_WIDTH: f64 = 1.0;
pub const PEN_COLOR: Color = Color::BLACK;
pub const CANVAS_SIZE: Size = Size::square(100.0);
pub const CANVAS_SCALE: f64 = 1.0;

/// Settings for rendering an element tree into a fresh image canvas
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub size: Size,
    /// Device pixels per user unit
    pub scale: f64,
    pub transparency: bool,
    /// Filled over the whole canvas before anything is drawn
    pub background: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: CANVAS_SIZE,
            scale: CANVAS_SCALE,
            transparency: true,
            background: None,
        }
    }
}

impl RenderOptions {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_transparency(mut self, transparency: bool) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}
