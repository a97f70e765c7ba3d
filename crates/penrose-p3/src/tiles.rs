//! The two P3 tile variants and their inflation rules.
//!
//! Each variant is a Robinson triangle; the variant alone decides how the
//! triangle subdivides. The vertex order of every child is significant:
//! swapping any pair flips the child's orientation and the next generation
//! comes out wrong.

use crate::geometry::Point;
use crate::robinson::RobinsonTriangle;

/// psi = 1/phi where phi is the golden ratio (sqrt(5)+1)/2.
pub const PSI: f64 = 0.618_033_988_749_894_9;
/// psi**2 = 1 - psi
pub const PSI2: f64 = 1.0 - PSI;

/// Which subdivision rule a tile follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// "B_L": sides in ratio 1:1:phi.
    Large,
    /// "B_S": sides in ratio 1:1:psi.
    Small,
}

/// A Robinson triangle tagged with its subdivision rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    Large(RobinsonTriangle),
    Small(RobinsonTriangle),
}

impl Tile {
    pub fn large(a: Point, b: Point, c: Point) -> Self {
        Tile::Large(RobinsonTriangle::new(a, b, c))
    }

    pub fn small(a: Point, b: Point, c: Point) -> Self {
        Tile::Small(RobinsonTriangle::new(a, b, c))
    }

    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Large(_) => TileKind::Large,
            Tile::Small(_) => TileKind::Small,
        }
    }

    pub fn triangle(&self) -> &RobinsonTriangle {
        match self {
            Tile::Large(t) | Tile::Small(t) => t,
        }
    }

    /// "Inflate" this tile into the next generation of smaller tiles.
    ///
    /// Large tiles give three children, small tiles two.
    pub fn inflate(&self) -> Vec<Tile> {
        match self {
            Tile::Large(t) => {
                let (a, b, c) = (t.a(), t.b(), t.c());
                // D and E divide sides AC and AB respectively
                let d = PSI2 * a + PSI * c;
                let e = PSI2 * a + PSI * b;
                vec![Tile::large(d, e, a), Tile::small(e, d, b), Tile::large(c, d, b)]
            }
            Tile::Small(t) => {
                let (a, b, c) = (t.a(), t.b(), t.c());
                let d = PSI * a + PSI2 * b;
                vec![Tile::small(d, c, a), Tile::large(c, d, b)]
            }
        }
    }

    #[inline]
    pub fn centre(&self) -> Point {
        self.triangle().centre()
    }

    pub fn path(&self, rhombus: bool) -> String {
        self.triangle().path(rhombus)
    }

    pub fn arcs(&self, half_arc: bool) -> (String, String) {
        self.triangle().arcs(half_arc)
    }

    /// Apply `f` to every vertex; the variant is preserved.
    pub fn map<F>(&self, f: F) -> Tile
    where
        F: Fn(Point) -> Point,
    {
        match self {
            Tile::Large(t) => Tile::Large(t.map(f)),
            Tile::Small(t) => Tile::Small(t.map(f)),
        }
    }

    /// Reflection about the x-axis.
    pub fn conjugate(&self) -> Tile {
        self.map(Point::conj)
    }

    /// Rotate anticlockwise about the origin by `theta` radians.
    pub fn rotated(&self, theta: f64) -> Tile {
        let rot = Point::rotation(theta);
        self.map(|p| p * rot)
    }

    /// Mirror about the y-axis.
    pub fn flipped_y(&self) -> Tile {
        self.map(|p| Point::new(-p.x, p.y))
    }

    /// Mirror about the x-axis.
    pub fn flipped_x(&self) -> Tile {
        self.map(Point::conj)
    }
}
