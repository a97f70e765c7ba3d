//! Core geometry types for penrose-p3.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! A `Point` here doubles as a complex number: `x` is the real part and
//! `y` the imaginary part. Rotations are complex multiplications, and a
//! reflection about the x-axis is the complex conjugate.
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = small stack values copied implicitly
//! - `PartialEq` = can compare with `==`

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D point (or complex number) with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An ordered sequence of vertices, used for extents of whole figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

/// A polygon fixed to exactly three ordered vertices.
///
/// The order encodes orientation: swapping any two vertices flips the sign
/// of [`Triangle::signed_area`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at distance `r` from the origin at angle `theta` (radians).
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Unit complex number that rotates anticlockwise by `theta` when
    /// multiplied with another point.
    #[inline]
    pub fn rotation(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Reflection across the real (x) axis.
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Magnitude (distance from the origin).
    #[inline]
    pub fn abs(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).abs()
    }
}

/// 2D cross product `u.x * v.y - u.y * v.x`.
///
/// Positive when `v` lies anticlockwise of `u`.
#[inline]
pub fn cross(u: Point, v: Point) -> f64 {
    u.x * v.y - u.y * v.x
}

// ============================================================================
// OPERATORS
// ============================================================================
//
// ## Rust Lesson #8: Operator Overloading
//
// Implementing the `std::ops` traits lets us write `a + b` and `psi * a`
// for points, just like the built-in number types.

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Complex multiplication.
impl Mul for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(
            self.x * rhs.x - self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
        )
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(self * rhs.x, self * rhs.y)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Get the bounding box as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        if self.vertices.is_empty() {
            return None;
        }

        let min_x = self.vertices.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = self.vertices.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = self.vertices.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = self.vertices.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some((min_x, min_y, max_x, max_y))
    }
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Vertices in order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Apply `f` to every vertex, keeping the vertex order.
    #[inline]
    pub fn map<F>(&self, f: F) -> Triangle
    where
        F: Fn(Point) -> Point,
    {
        Triangle::new(f(self.a), f(self.b), f(self.c))
    }

    /// Half the cross product of (B - A) and (C - A).
    #[inline]
    pub fn signed_area(&self) -> f64 {
        cross(self.b - self.a, self.c - self.a) / 2.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
