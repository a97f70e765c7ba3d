//! SVG document assembly.
//!
//! Turns a finished tiling ensemble into a self-contained SVG string: one
//! `<path>` per tile plus optional decorative arcs, all inside a single
//! stroke-styled group.

use rand::Rng;

use crate::colour::random_colour;
use crate::config::Config;
use crate::tiles::{Tile, PSI};

/// Stroke width for a tiling of `ngen` generations.
///
/// Tiles shrink by a factor of psi per generation, so the stroke shrinks
/// with them.
pub fn stroke_width(scale: f64, ngen: u32, base_stroke_width: f64) -> f64 {
    PSI.powi(ngen as i32) * scale * base_stroke_width
}

/// The `viewBox` attribute value as (xmin, ymin, width, height).
pub fn viewbox(scale: f64, margin: f64) -> (f64, f64, f64, f64) {
    let min = -scale * margin;
    let size = 2.0 * scale * margin;
    (min, min, size, size)
}

/// Fill colour for one tile under `config`.
pub fn tile_colour<R: Rng>(tile: &Tile, config: &Config, rng: &mut R) -> String {
    if config.random_tile_colours {
        return random_colour(rng);
    }
    match tile {
        Tile::Large(_) => config.large_tile_colour.resolve(tile),
        Tile::Small(_) => config.small_tile_colour.resolve(tile),
    }
}

/// Build the SVG document for `elements`.
pub fn tiles_to_svg<R: Rng>(
    elements: &[Tile],
    config: &Config,
    scale: f64,
    ngen: u32,
    rng: &mut R,
) -> String {
    let (xmin, ymin, width, height) = viewbox(scale, config.margin);

    let mut svg = vec![
        r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
        format!(
            r#"<svg width="{}" height="{}" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet" version="1.1" baseProfile="full" xmlns="http://www.w3.org/2000/svg">"#,
            config.width, config.height, xmin, ymin, width, height
        ),
    ];

    svg.push(format!(
        r#"<g style="stroke:{}; stroke-width: {}; stroke-linejoin: round;">"#,
        config.stroke_colour,
        stroke_width(scale, ngen, config.base_stroke_width)
    ));

    let draw_rhombuses = config.draw_rhombuses;
    for e in elements {
        if config.draw_tiles {
            svg.push(format!(
                r#"<path fill="{}" fill-opacity="{}" d="{}"/>"#,
                tile_colour(e, config, rng),
                config.tile_opacity,
                e.path(draw_rhombuses)
            ));
        }
        if config.draw_arcs {
            let (arc_a, arc_c) = e.arcs(!draw_rhombuses);
            svg.push(format!(
                r#"<path fill="none" stroke="{}" d="{}"/>"#,
                config.a_arc_colour, arc_a
            ));
            svg.push(format!(
                r#"<path fill="none" stroke="{}" d="{}"/>"#,
                config.c_arc_colour, arc_c
            ));
        }
    }
    svg.push("</g>\n</svg>".to_string());
    svg.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::TileColour;
    use crate::geometry::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tiles() -> Vec<Tile> {
        vec![
            Tile::large(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)),
            Tile::small(Point::new(0.0, 0.0), Point::new(1.0, 3.0), Point::new(2.0, 0.0)),
        ]
    }

    fn render(config: &Config) -> String {
        let mut rng = StdRng::seed_from_u64(1);
        tiles_to_svg(&tiles(), config, 100.0, 2, &mut rng)
    }

    #[test]
    fn stroke_width_shrinks_with_generations() {
        let w3 = stroke_width(100.0, 3, 0.05);
        let w4 = stroke_width(100.0, 4, 0.05);
        assert!(w4 < w3);
        assert!((w4 / w3 - PSI).abs() < 1e-12);
        assert_eq!(stroke_width(100.0, 0, 0.05), 5.0);
    }

    #[test]
    fn viewbox_from_scale_and_margin() {
        assert_eq!(viewbox(100.0, 1.5), (-150.0, -150.0, 300.0, 300.0));
    }

    #[test]
    fn document_structure() {
        let svg = render(&Config::default());
        assert!(svg.starts_with("<?xml"));
        assert_eq!(svg.matches("<svg ").count(), 1);
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(r#"viewBox="-105 -105 210 210""#));
        assert!(svg.contains(r##"fill="#0035f3""##));
        assert!(svg.contains(r##"fill="#08f""##));
        assert!(svg.ends_with("</g>\n</svg>"));
    }

    #[test]
    fn document_parses_as_svg() {
        let config = Config { draw_arcs: true, ..Config::default() };
        let svg = render(&config);
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
        assert!(tree.is_ok(), "generated SVG should parse: {:?}", tree.err());
    }

    #[test]
    fn arcs_add_two_paths_per_tile() {
        let config = Config { draw_arcs: true, ..Config::default() };
        let svg = render(&config);
        assert_eq!(svg.matches("<path ").count(), 6);
        assert_eq!(svg.matches(r##"stroke="#f00""##).count(), 2);
        assert_eq!(svg.matches(r##"stroke="#00f""##).count(), 2);
    }

    #[test]
    fn arcs_only() {
        let config = Config { draw_tiles: false, draw_arcs: true, ..Config::default() };
        let svg = render(&config);
        assert_eq!(svg.matches("<path ").count(), 4);
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn triangle_mode_uses_three_point_paths() {
        let config = Config { draw_rhombuses: false, ..Config::default() };
        let svg = render(&config);
        assert!(svg.contains(r#"d="m0,0 l1,1 l1,-1z""#));
    }

    #[test]
    fn colour_function_is_applied_per_tile() {
        let config = Config {
            large_tile_colour: TileColour::function(|t: &Tile| {
                format!("#{:x}{:x}{:x}", t.triangle().b().y as u8, 0, 0)
            }),
            ..Config::default()
        };
        let svg = render(&config);
        assert!(svg.contains(r##"fill="#100""##));
    }

    #[test]
    fn random_colours_override_variant_colours() {
        let config = Config { random_tile_colours: true, ..Config::default() };
        let svg = render(&config);
        assert!(!svg.contains("#0035f3"));
        assert_eq!(svg.matches("fill=\"#").count(), 2);
    }

    #[test]
    fn random_colours_repeat_with_same_seed() {
        let config = Config { random_tile_colours: true, ..Config::default() };
        assert_eq!(render(&config), render(&config));
    }
}
