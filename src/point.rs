use crate::math_utils::near_eq;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Absolute tolerance used by [`Point::approx_eq`].
pub const EPSILON: f64 = 1e-10;

/// A vector with coordinates X and Y in 2-dimensional euclidean space.
///
/// Doubles as a position (control points, curve samples) and as a
/// displacement (differences between positions).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the vector `self + other`.
    #[must_use]
    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Returns the vector `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Returns the vector `self * s`.
    #[must_use]
    pub fn scale(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }

    /// Dot (scalar) product.
    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn squared_length(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Euclidean distance between two points.
    ///
    /// Uses `hypot` so distinct points stay at a nonzero, finite distance
    /// where squaring the components would underflow or overflow.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let d = self.sub(other);
        d.x.hypot(d.y)
    }

    /// Whether both coordinates differ by at most [`EPSILON`].
    ///
    /// This relation is not transitive.
    #[must_use]
    pub fn approx_eq(self, other: Point) -> bool {
        near_eq(self.x, other.x, EPSILON) && near_eq(self.y, other.y, EPSILON)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::add(self, rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::sub(self, rhs)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        self.scale(rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Formats as `(3.25, -1.5)`; f64 `Display` already gives the shortest
/// representation that round-trips.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        near_eq(self.x, other.x, epsilon) && near_eq(self.y, other.y, epsilon)
    }
}
