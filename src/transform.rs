//! Affine transform algebra.
//!
//! A [`Transform`] is the 2x3 matrix
//!
//! ```text
//! | a  c  e |
//! | b  d  f |
//! ```
//!
//! mapping `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`, the same layout as an
//! SVG `matrix(a, b, c, d, e, f)`. Every drawable in a scene is placed through
//! one of these.

use std::fmt;
use std::ops::Mul;

use glam::DAffine2;

use crate::errors::TransformError;
use crate::types::{Point, Size};

/// Immutable 2D affine transform.
///
/// Equality is exact, field by field. Use [`Transform::approx_eq`] for results
/// of floating-point composition chains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Transform { a, b, c, d, e, f }
    }

    pub const fn translate(dx: f64, dy: f64) -> Self {
        Transform::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    pub const fn translate_by_size(size: Size) -> Self {
        Self::translate(size.width, size.height)
    }

    pub const fn translate_by_point(point: Point) -> Self {
        Self::translate(point.x, point.y)
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub const fn scale_uniform(s: f64) -> Self {
        Self::scale(s, s)
    }

    pub const fn scale_by_size(size: Size) -> Self {
        Self::scale(size.width, size.height)
    }

    pub const fn scale_by_point(point: Point) -> Self {
        Self::scale(point.x, point.y)
    }

    /// Rotation by `degrees`, producing `(cos, sin, -sin, cos, 0, 0)`.
    ///
    /// With y pointing down (screen coordinates) positive angles turn
    /// clockwise on screen; `rotate(90)` maps `(1, 0)` to `(0, 1)`.
    pub fn rotate(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Transform::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Compose `self` with `local`, `self` being the outer (ancestor) transform.
    ///
    /// The result maps a point through `local` and then through `self`, which
    /// is what `ancestor * child` needs during a tree traversal. Associative,
    /// not commutative.
    pub fn compose(&self, local: &Transform) -> Transform {
        let (x, y) = (self, local);
        Transform::new(
            x.a * y.a + x.c * y.b,
            x.b * y.a + x.d * y.b,
            x.a * y.c + x.c * y.d,
            x.b * y.c + x.d * y.d,
            x.a * y.e + x.c * y.f + x.e,
            x.b * y.e + x.d * y.f + x.f,
        )
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// The inverse transform.
    ///
    /// Fails only when the determinant is exactly zero. Near-singular
    /// matrices invert to very large coefficients instead of failing.
    pub fn inverse(&self) -> Result<Transform, TransformError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(TransformError::Singular { transform: *self });
        }
        let r = 1.0 / det;
        Ok(Transform::new(
            self.d * r,
            -self.b * r,
            -self.c * r,
            self.a * r,
            -(self.d * self.e - self.c * self.f) * r,
            (self.b * self.e - self.a * self.f) * r,
        ))
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Field-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Transform, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(l, r)| (l - r).abs() <= epsilon)
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        self.compose(&rhs)
    }
}

impl From<Transform> for DAffine2 {
    fn from(t: Transform) -> Self {
        DAffine2::from_cols_array(&t.to_array())
    }
}

impl From<DAffine2> for Transform {
    fn from(m: DAffine2) -> Self {
        let [a, b, c, d, e, f] = m.to_cols_array();
        Transform::new(a, b, c, d, e, f)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}
