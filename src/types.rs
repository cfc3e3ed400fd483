//! Geometry value types: points, sizes and rectangles.
//!
//! All three are plain `Copy` values. Nothing in the crate mutates one in
//! place; arithmetic always produces a new value.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;

/// A position in 2D space
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Reflect this point through `center` (`2 * center - self`).
    pub fn reflect_about(self, center: Point) -> Point {
        (DVec2::from(center) * 2.0 - DVec2::from(self)).into()
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        DVec2::from(self).distance(DVec2::from(other))
    }

    /// Check both coordinates are within `epsilon` of `other`
    pub fn approx_eq(self, other: Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width/height pair. Non-negative by convention; not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// A square size
    pub const fn square(side: f64) -> Self {
        Size { width: side, height: side }
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Mul<f64> for Size {
    type Output = Size;
    fn mul(self, rhs: f64) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle: an origin plus a size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }

    /// A rectangle anchored at the origin
    pub const fn from_size(size: Size) -> Self {
        Rect { origin: Point::ORIGIN, size }
    }

    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// The corner opposite the origin
    pub fn max(&self) -> Point {
        Point::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}
