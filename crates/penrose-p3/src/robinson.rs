//! Robinson triangles and the rhombuses formed from them.
//!
//! A Robinson triangle is an isosceles triangle with sides in golden-ratio
//! proportion. Vertices A and C sit at the equal base angles and B at the
//! apex. Joining a triangle to its mirror image along the base AC gives one
//! rhombus of the P3 tiling, so most of the drawing here is done in terms
//! of that rhombus.

use crate::geometry::{cross, Point, Triangle};

/// One Robinson triangle with ordered vertices (A, B, C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobinsonTriangle {
    triangle: Triangle,
}

impl RobinsonTriangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { triangle: Triangle::new(a, b, c) }
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.triangle.a
    }

    #[inline]
    pub fn b(&self) -> Point {
        self.triangle.b
    }

    #[inline]
    pub fn c(&self) -> Point {
        self.triangle.c
    }

    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Centre of the rhombus formed with the mirror triangle: the midpoint
    /// of the base AC.
    #[inline]
    pub fn centre(&self) -> Point {
        (self.a() + self.c()) / 2.0
    }

    /// Fourth vertex of the rhombus, opposite B.
    #[inline]
    pub fn opposite_vertex(&self) -> Point {
        self.a() - self.b() + self.c()
    }

    /// SVG `d` attribute for the rhombus formed by this triangle and its
    /// mirror image, or for the triangle itself when `rhombus` is false.
    ///
    /// Uses a relative move followed by relative lines, e.g.
    /// `m-50,0 l65.45,47.55 l65.45,-47.55 l-65.45,-47.55z`.
    pub fn path(&self, rhombus: bool) -> String {
        let a = self.a();
        let ab = self.b() - self.a();
        let bc = self.c() - self.b();
        if rhombus {
            let ba = -ab;
            return format!(
                "m{},{} l{},{} l{},{} l{},{}z",
                a.x, a.y, ab.x, ab.y, bc.x, bc.y, ba.x, ba.y
            );
        }
        format!("m{},{} l{},{} l{},{}z", a.x, a.y, ab.x, ab.y, bc.x, bc.y)
    }

    /// SVG `d` attributes for the decorative arcs about vertices A and C.
    ///
    /// With `half_arc` the arc stops on the triangle base, which is what you
    /// want when drawing raw triangles instead of rhombuses.
    pub fn arcs(&self, half_arc: bool) -> (String, String) {
        let d = self.opposite_vertex();
        let arc_a = arc_d(self.a(), self.b(), d, half_arc);
        let arc_c = arc_d(self.c(), self.b(), d, half_arc);
        (arc_a, arc_c)
    }

    /// Reflection about the x-axis.
    pub fn conjugate(&self) -> Self {
        self.map(Point::conj)
    }

    /// Apply `f` to every vertex, keeping the vertex order.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Point) -> Point,
    {
        Self { triangle: self.triangle.map(f) }
    }
}

/// Circular arc geometry about vertex `u` between sides `uv` and `uw`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
}

impl Arc {
    /// Arc between the midpoints of sides `uv` and `uw`, oriented so that
    /// the SVG flags `0 0 0` always draw the minor arc centred on `u`.
    pub fn about(u: Point, v: Point, w: Point, half_arc: bool) -> Self {
        let mut start = (u + v) / 2.0;
        let mut end = (u + w) / 2.0;
        let radius = ((v - u) / 2.0).abs();

        if half_arc {
            // Bisector direction; the arc ends on the triangle base.
            let un = v + w - 2.0 * u;
            end = u + radius * un / un.abs();
        }

        if cross(start - u, end - u) > 0.0 {
            std::mem::swap(&mut start, &mut end);
        }
        Self { start, end, radius }
    }

    pub fn to_path(&self) -> String {
        format!(
            "M {} {} A {} {} 0 0 0 {} {}",
            self.start.x, self.start.y, self.radius, self.radius, self.end.x, self.end.y
        )
    }
}

fn arc_d(u: Point, v: Point, w: Point, half_arc: bool) -> String {
    Arc::about(u, v, w, half_arc).to_path()
}
