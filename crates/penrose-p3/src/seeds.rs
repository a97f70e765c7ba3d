//! Ready-made seed placements.

use std::f64::consts::PI;

use crate::geometry::Point;
use crate::tiles::{Tile, PSI};

/// A single large tile with its base on the x-axis, shifted right by
/// `x_offset`.
///
/// With `reflect-x` enabled the mirror image completes this into one large
/// rhombus, which inflates into the logo silhouette.
pub fn logo(scale: f64, x_offset: f64) -> Vec<Tile> {
    let rot = Point::rotation(2.0 * PI / 5.0);
    let offset = Point::new(x_offset, 0.0);
    let a = Point::new(-scale / 2.0, 0.0) + offset;
    let b = scale / 2.0 * rot + offset;
    let c = Point::new(scale / 2.0 / PSI, 0.0) + offset;
    vec![Tile::large(a, b, c)]
}

/// Ten small tiles with their apexes meeting at the origin, alternately
/// mirrored so that neighbours share an edge.
pub fn sun(scale: f64) -> Vec<Tile> {
    (0..10)
        .map(|i| {
            let mut a = Point::from_polar(scale, (2 * i - 1) as f64 * PI / 10.0);
            let mut c = Point::from_polar(scale, (2 * i + 1) as f64 * PI / 10.0);
            if i % 2 == 0 {
                std::mem::swap(&mut a, &mut c);
            }
            Tile::small(a, Point::default(), c)
        })
        .collect()
}
