//! Point2D - immutable 2D vector
//!
//! Every arithmetic operation returns a new value. Points double as
//! complex numbers in the Fourier code (x = real, y = imaginary).

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A point (or vector) in the caller's coordinate space
///
/// The core never transforms coordinates; whatever space the input
/// samples arrive in is the space everything else is computed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// The origin
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a vector from polar coordinates
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    /// Add a scalar to both components
    pub fn add_scalar(self, value: f64) -> Self {
        Self::new(self.x + value, self.y + value)
    }

    /// Subtract a scalar from both components
    pub fn sub_scalar(self, value: f64) -> Self {
        Self::new(self.x - value, self.y - value)
    }

    /// Component-wise product
    pub fn mul_components(self, other: Point2D) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient
    pub fn div_components(self, other: Point2D) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    pub fn dot(self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length of the vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance between two points
    pub fn distance(self, other: Point2D) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction
    ///
    /// Returns `None` for the zero vector (or anything that would divide
    /// to a non-finite result).
    pub fn normalized(self) -> Option<Point2D> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// View this point as the complex number `x + iy`
    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }
}

/// Linear interpolation: `t = 0` gives `a`, `t = 1` gives `b`
pub fn lerp(a: Point2D, b: Point2D, t: f64) -> Point2D {
    a + (b - a) * t
}

/// Mean of a point set, `None` when empty
pub fn centroid(points: &[Point2D]) -> Option<Point2D> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point2D::ZERO, |acc, &p| acc + p);
    Some(sum / points.len() as f64)
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f64) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;

    fn div(self, rhs: f64) -> Point2D {
        Point2D::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

impl From<Complex64> for Point2D {
    fn from(c: Complex64) -> Self {
        Point2D::new(c.re, c.im)
    }
}
