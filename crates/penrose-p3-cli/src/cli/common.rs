//! Option parsing and tiling setup shared across CLI commands.

use std::f64::consts::PI;
use std::ops::Range;

use penrose_p3::{seeds, Config, PenroseP3, Tile, TileColour};

/// Starting configuration of a command before any flags are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preset {
    /// Library defaults.
    Generate,
    /// White tiles with thin black strokes, rotated upright.
    Logo,
}

/// Seed shape to inflate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Logo,
    Sun,
}

impl Shape {
    pub fn from_name(name: &str) -> Option<Shape> {
        match name.to_lowercase().as_str() {
            "logo" | "rhombus" => Some(Shape::Logo),
            "sun" | "star" => Some(Shape::Sun),
            _ => None,
        }
    }
}

/// Flag values that override the configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub stroke_width: Option<f64>,
    pub stroke_colour: Option<String>,
    pub opacity: Option<f64>,
    pub large_colour: Option<String>,
    pub small_colour: Option<String>,
    pub random_colours: bool,
    pub seed: Option<u64>,
    pub rotate_degrees: Option<f64>,
    pub no_reflect: bool,
    pub triangles: bool,
    pub arcs: bool,
    pub flip_x: bool,
    pub flip_y: bool,
    pub margin: Option<f64>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(w) = self.stroke_width {
            config.base_stroke_width = w;
        }
        if let Some(c) = &self.stroke_colour {
            config.stroke_colour = c.clone();
        }
        if let Some(o) = self.opacity {
            config.tile_opacity = o;
        }
        if let Some(c) = &self.large_colour {
            config.large_tile_colour = TileColour::from(c.as_str());
        }
        if let Some(c) = &self.small_colour {
            config.small_tile_colour = TileColour::from(c.as_str());
        }
        if self.random_colours {
            config.random_tile_colours = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(deg) = self.rotate_degrees {
            config.rotate = deg.to_radians();
        }
        if self.no_reflect {
            config.reflect_x = false;
        }
        if self.triangles {
            config.draw_rhombuses = false;
        }
        if self.arcs {
            config.draw_arcs = true;
        }
        if self.flip_x {
            config.flip_x = true;
        }
        if self.flip_y {
            config.flip_y = true;
        }
        if let Some(m) = self.margin {
            config.margin = m;
        }
    }
}

/// Everything a command needs to build one tiling.
#[derive(Debug, Clone)]
pub struct TilingOptions {
    pub preset: Preset,
    pub scale: f64,
    pub ngen: u32,
    pub shape: Shape,
    pub x_offset: f64,
    pub drop: Option<Range<usize>>,
    pub config_path: Option<String>,
    pub overrides: Overrides,
    /// SVG output path; `None` or `-` writes to stdout
    pub output: Option<String>,
    pub png: Option<String>,
    pub png_size: u32,
    pub crop: bool,
    pub help: bool,
}

impl TilingOptions {
    pub fn defaults(preset: Preset) -> Self {
        let (scale, ngen, x_offset) = match preset {
            Preset::Generate => (100.0, 4, 0.0),
            Preset::Logo => (100.0, 3, -50.0),
        };
        Self {
            preset,
            scale,
            ngen,
            shape: Shape::Logo,
            x_offset,
            drop: None,
            config_path: None,
            overrides: Overrides::default(),
            output: None,
            png: None,
            png_size: 1024,
            crop: true,
            help: false,
        }
    }

    /// Parse command arguments (everything after the subcommand name).
    pub fn parse(args: &[String], preset: Preset) -> Result<Self, String> {
        let mut options = Self::defaults(preset);

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "-s" | "--scale" => options.scale = parse_value(args, &mut i)?,
                "-n" | "--ngen" => options.ngen = parse_value(args, &mut i)?,
                "--shape" => {
                    let name = take_value(args, &mut i)?;
                    options.shape = Shape::from_name(name)
                        .ok_or_else(|| format!("Unknown shape: {}. Use 'logo' or 'sun'.", name))?;
                }
                "--offset" => options.x_offset = parse_value(args, &mut i)?,
                "--drop" => options.drop = Some(parse_range(take_value(args, &mut i)?)?),
                "-c" | "--config" => options.config_path = Some(take_value(args, &mut i)?.to_string()),
                "-w" | "--stroke-width" => options.overrides.stroke_width = Some(parse_value(args, &mut i)?),
                "--stroke" => options.overrides.stroke_colour = Some(take_value(args, &mut i)?.to_string()),
                "--opacity" => options.overrides.opacity = Some(parse_value(args, &mut i)?),
                "--large" => options.overrides.large_colour = Some(take_value(args, &mut i)?.to_string()),
                "--small" => options.overrides.small_colour = Some(take_value(args, &mut i)?.to_string()),
                "--random-colours" | "--random-colors" => options.overrides.random_colours = true,
                "--seed" => options.overrides.seed = Some(parse_value(args, &mut i)?),
                "--rotate" => options.overrides.rotate_degrees = Some(parse_value(args, &mut i)?),
                "--margin" => options.overrides.margin = Some(parse_value(args, &mut i)?),
                "--no-reflect" => options.overrides.no_reflect = true,
                "--triangles" => options.overrides.triangles = true,
                "--arcs" => options.overrides.arcs = true,
                "--flip-x" => options.overrides.flip_x = true,
                "--flip-y" => options.overrides.flip_y = true,
                "-o" | "--output" => options.output = Some(take_value(args, &mut i)?.to_string()),
                "--png" => options.png = Some(take_value(args, &mut i)?.to_string()),
                "--png-size" => options.png_size = parse_value(args, &mut i)?,
                "--no-crop" => options.crop = false,
                "-h" | "--help" => options.help = true,
                other => return Err(format!("Unknown option: {}", other)),
            }
            i += 1;
        }

        if options.png_size == 0 {
            return Err("--png-size must be at least 1".to_string());
        }
        Ok(options)
    }

    /// Configuration: preset (or config file), then flag overrides.
    pub fn config(&self) -> Result<Config, String> {
        let mut config = match &self.config_path {
            Some(path) => Config::from_yaml_file(path).map_err(|e| format!("{}: {}", path, e))?,
            None => preset_config(self.preset),
        };
        self.overrides.apply(&mut config);
        Ok(config)
    }

    pub fn seed_tiles(&self) -> Vec<Tile> {
        match self.shape {
            Shape::Logo => seeds::logo(self.scale, self.x_offset),
            Shape::Sun => seeds::sun(self.scale),
        }
    }

    /// Build, tile and trim.
    pub fn build(&self) -> Result<PenroseP3, String> {
        let mut tiling = PenroseP3::new(self.scale, self.ngen, self.config()?);
        tiling.set_initial_tiles(self.seed_tiles());
        tiling.make_tiling();
        if let Some(range) = &self.drop {
            tiling.remove_elements(range.clone());
        }
        Ok(tiling)
    }
}

pub fn preset_config(preset: Preset) -> Config {
    match preset {
        Preset::Generate => Config::default(),
        Preset::Logo => Config {
            stroke_colour: "#000".to_string(),
            base_stroke_width: 0.02,
            margin: 1.05,
            small_tile_colour: TileColour::from("#fff"),
            large_tile_colour: TileColour::from("#fff"),
            draw_tiles: true,
            rotate: PI / 2.0,
            ..Config::default()
        },
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = args[*i].clone();
    let value = take_value(args, i)?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

/// Parse `start..end` or `start..` into an index range.
pub fn parse_range(text: &str) -> Result<Range<usize>, String> {
    let (start, end) = text
        .split_once("..")
        .ok_or_else(|| format!("Invalid range: {} (expected start..end)", text))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|_| format!("Invalid range start: {}", start))?;
    let end: usize = if end.trim().is_empty() {
        usize::MAX
    } else {
        end.trim()
            .parse()
            .map_err(|_| format!("Invalid range end: {}", end))?
    };
    Ok(start..end)
}
