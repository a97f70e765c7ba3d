//! Tile colour policies.
//!
//! A tile's fill is either a fixed colour string or a function of the tile
//! itself, which allows gradients and other positional colouring.

use std::fmt;
use std::sync::Arc;

use rand::Rng;
use serde::Deserialize;

use crate::tiles::Tile;

/// Function from a tile to an SVG colour string.
pub type ColourFn = Arc<dyn Fn(&Tile) -> String + Send + Sync>;

/// Fill colour for one tile variant.
///
/// YAML config files can only supply the literal form; functions are set
/// from code with [`TileColour::function`].
#[derive(Clone, Deserialize)]
#[serde(from = "String")]
pub enum TileColour {
    Literal(String),
    Function(ColourFn),
}

impl TileColour {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Tile) -> String + Send + Sync + 'static,
    {
        TileColour::Function(Arc::new(f))
    }

    /// Colour string for `tile`.
    pub fn resolve(&self, tile: &Tile) -> String {
        match self {
            TileColour::Literal(colour) => colour.clone(),
            TileColour::Function(f) => f(tile),
        }
    }
}

impl fmt::Debug for TileColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileColour::Literal(colour) => f.debug_tuple("Literal").field(colour).finish(),
            TileColour::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<String> for TileColour {
    fn from(colour: String) -> Self {
        TileColour::Literal(colour)
    }
}

impl From<&str> for TileColour {
    fn from(colour: &str) -> Self {
        TileColour::Literal(colour.to_string())
    }
}

/// Random short-form hex colour such as `#3fa`.
pub fn random_colour<R: Rng>(rng: &mut R) -> String {
    format!("#{:03x}", rng.random_range(0..=0xfff_u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tile() -> Tile {
        Tile::small(Point::new(0.0, 0.0), Point::new(1.0, 3.0), Point::new(2.0, 0.0))
    }

    #[test]
    fn literal_resolves_to_itself() {
        let colour = TileColour::from("#08f");
        assert_eq!(colour.resolve(&tile()), "#08f");
    }

    #[test]
    fn function_sees_the_tile() {
        let colour = TileColour::function(|t: &Tile| {
            if t.centre().x > 0.0 { "#f00".to_string() } else { "#00f".to_string() }
        });
        assert_eq!(colour.resolve(&tile()), "#f00");
        assert_eq!(colour.resolve(&tile().flipped_y()), "#00f");
    }

    #[test]
    fn random_colours_are_three_hex_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let colour = random_colour(&mut rng);
            assert_eq!(colour.len(), 4, "bad colour {}", colour);
            assert!(colour.starts_with('#'));
            assert!(colour[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn seeded_random_colours_repeat() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(random_colour(&mut rng1), random_colour(&mut rng2));
        }
    }

    #[test]
    fn debug_hides_function() {
        let colour = TileColour::function(|_: &Tile| "#fff".to_string());
        assert_eq!(format!("{:?}", colour), "Function(..)");
    }
}
