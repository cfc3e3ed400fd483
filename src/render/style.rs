//! Stroke and fill attributes.
//!
//! The scene core never interprets these; they ride along on elements and are
//! handed unchanged to the canvas.

use std::fmt;

use crate::types::{Point, Size};

use super::defaults;

/// An 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Stroke attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: defaults::PEN_COLOR,
            width: defaults::PEN_WIDTH,
        }
    }
}

impl Pen {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl From<Color> for Pen {
    fn from(color: Color) -> Self {
        Pen::default().with_color(color)
    }
}

impl fmt::Display for Pen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.color, self.width)
    }
}

/// A colour stop in a gradient; `offset` runs from 0 to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Fill attributes
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Endpoints are relative to the filled shape's bounds (0..1)
    LinearGradient {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// Center and radius are relative to the filled shape's bounds (0..1)
    RadialGradient {
        center: Point,
        radius: Size,
        stops: Vec<GradientStop>,
    },
}

impl Brush {
    /// Two-stop linear gradient
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Brush::LinearGradient {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Two-stop radial gradient
    pub fn radial(center: Point, radius: Size, from: Color, to: Color) -> Self {
        Brush::RadialGradient {
            center,
            radius,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brush::Solid(c) => write!(f, "{c}"),
            Brush::LinearGradient { stops, .. } => write!(f, "linear({} stops)", stops.len()),
            Brush::RadialGradient { stops, .. } => write!(f, "radial({} stops)", stops.len()),
        }
    }
}
