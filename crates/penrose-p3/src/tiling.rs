//! The P3 tiling engine.
//!
//! Takes caller-supplied seed tiles, inflates them for a fixed number of
//! generations and then runs the optional post-processing passes in a fixed
//! order: dedupe, reflect (+ dedupe), rotate, flip-y, flip-x.
//!
//! ```
//! use penrose_p3::{seeds, Config, PenroseP3};
//!
//! let mut tiling = PenroseP3::new(100.0, 3, Config::default());
//! tiling.set_initial_tiles(seeds::logo(100.0, 0.0));
//! tiling.make_tiling();
//! let svg = tiling.make_svg();
//! assert!(svg.contains("<svg"));
//! ```

use std::fs;
use std::ops::{Bound, RangeBounds};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::geometry::{Point, Polygon};
use crate::svg::{stroke_width, tile_colour, tiles_to_svg};
use crate::tiles::Tile;

/// A small tolerance for comparing rhombus centres.
pub const TOL: f64 = 1.0e-5;

/// A P3 Penrose tiling in progress.
pub struct PenroseP3 {
    scale: f64,
    ngen: u32,
    config: Config,
    elements: Vec<Tile>,
    rng: StdRng,
}

impl PenroseP3 {
    /// `scale` sets the size of the image, `ngen` the number of times the
    /// seed tiles are inflated.
    pub fn new(scale: f64, ngen: u32, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            scale,
            ngen,
            config,
            elements: Vec::new(),
            rng,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn ngen(&self) -> u32 {
        self.ngen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current ensemble.
    pub fn elements(&self) -> &[Tile] {
        &self.elements
    }

    pub fn set_initial_tiles(&mut self, tiles: Vec<Tile>) {
        self.elements = tiles;
    }

    /// Replace every tile with its inflated children.
    pub fn inflate(&mut self) {
        self.elements = self.elements.iter().flat_map(Tile::inflate).collect();
    }

    /// Remove triangles that give rise to the same rhombus.
    ///
    /// Two halves of one rhombus share a centre. After sorting by centre,
    /// each element is checked against every kept element whose x lies
    /// within `TOL` of its own, not just its sorted predecessor: centres
    /// built from trig values can differ in x by rounding, which lets an
    /// unrelated centre sort between the two halves. The first element of
    /// each run is kept.
    pub fn remove_dupes(&mut self) {
        let mut keyed: Vec<_> = self.elements.iter().map(|e| (e.centre(), *e)).collect();
        keyed.sort_by(|(p, _), (q, _)| p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y)));

        let mut kept: Vec<(Point, Tile)> = Vec::with_capacity(keyed.len());
        for (centre, element) in keyed {
            let duplicate = kept
                .iter()
                .rev()
                .take_while(|(k, _)| centre.x - k.x <= TOL)
                .any(|(k, _)| centre.distance(*k) <= TOL);
            if !duplicate {
                kept.push((centre, element));
            }
        }
        self.elements = kept.into_iter().map(|(_, e)| e).collect();
    }

    /// Extend the tiling by reflection about the x-axis.
    pub fn add_conjugate_elements(&mut self) {
        let conjugates: Vec<Tile> = self.elements.iter().map(Tile::conjugate).collect();
        self.elements.extend(conjugates);
    }

    /// Rotate the figure anticlockwise by `theta` radians.
    pub fn rotate(&mut self, theta: f64) {
        self.elements = self.elements.iter().map(|e| e.rotated(theta)).collect();
    }

    /// Flip the figure about the y-axis.
    pub fn flip_y(&mut self) {
        self.elements = self.elements.iter().map(Tile::flipped_y).collect();
    }

    /// Flip the figure about the x-axis.
    pub fn flip_x(&mut self) {
        self.elements = self.elements.iter().map(Tile::flipped_x).collect();
    }

    /// Make the Penrose tiling by inflating `ngen` times, then apply the
    /// configured post-processing.
    pub fn make_tiling(&mut self) {
        for _ in 0..self.ngen {
            self.inflate();
        }
        if self.config.draw_rhombuses {
            self.remove_dupes();
        }
        if self.config.reflect_x {
            self.add_conjugate_elements();
            self.remove_dupes();
        }

        let theta = self.config.rotate;
        if theta != 0.0 {
            self.rotate(theta);
        }

        // Flips happen after any rotation, y before x.
        if self.config.flip_y {
            self.flip_y();
        }
        if self.config.flip_x {
            self.flip_x();
        }
    }

    /// Drop the elements at positions `range`. Out-of-range bounds are
    /// clamped to the ensemble.
    pub fn remove_elements<R: RangeBounds<usize>>(&mut self, range: R) {
        let len = self.elements.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);
        if start < end {
            self.elements.drain(start..end);
        }
    }

    /// Keep only the elements for which `f` returns true.
    pub fn retain_elements<F>(&mut self, f: F)
    where
        F: FnMut(&Tile) -> bool,
    {
        self.elements.retain(f);
    }

    /// Bounding box (min_x, min_y, max_x, max_y) of the drawn figure, or
    /// `None` for an empty ensemble. In rhombus mode the fourth vertex of
    /// each rhombus counts too.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let draw_rhombuses = self.config.draw_rhombuses;
        let vertices = self
            .elements
            .iter()
            .flat_map(|e| {
                let t = e.triangle();
                let mut v = t.triangle().vertices().to_vec();
                if draw_rhombuses {
                    v.push(t.opposite_vertex());
                }
                v
            })
            .collect();
        Polygon::new(vertices).bounding_box()
    }

    /// Stroke width used in the SVG output.
    pub fn stroke_width(&self) -> f64 {
        stroke_width(self.scale, self.ngen, self.config.base_stroke_width)
    }

    /// HTML-style colour string for `tile`.
    pub fn tile_colour(&mut self, tile: &Tile) -> String {
        tile_colour(tile, &self.config, &mut self.rng)
    }

    /// Make and return the SVG for the tiling.
    pub fn make_svg(&mut self) -> String {
        tiles_to_svg(&self.elements, &self.config, self.scale, self.ngen, &mut self.rng)
    }

    /// Make and write the SVG for the tiling to `path`.
    pub fn write_svg<P: AsRef<Path>>(&mut self, path: P) -> std::io::Result<()> {
        let svg = self.make_svg();
        fs::write(path, svg)
    }
}
