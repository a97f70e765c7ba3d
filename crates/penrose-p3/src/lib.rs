//! # penrose-p3
//!
//! Penrose P3 (rhombus) tiling generation and SVG rendering.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! The modules build on each other leaf-first: `geometry` → `robinson` →
//! `tiles` → `tiling` → `svg`.

pub mod colour;
pub mod config;
pub mod geometry;
pub mod robinson;
pub mod seeds;
pub mod svg;
pub mod tiles;
pub mod tiling;

// Re-export common types at crate root for convenience.
pub use colour::{random_colour, ColourFn, TileColour};
pub use config::{Config, ConfigError};
pub use geometry::{cross, Point, Polygon, Triangle};
pub use robinson::RobinsonTriangle;
pub use svg::tiles_to_svg;
pub use tiles::{Tile, TileKind, PSI, PSI2};
pub use tiling::{PenroseP3, TOL};
