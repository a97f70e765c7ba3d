//! Tiling and rendering configuration.
//!
//! Every option has a default; callers override any subset of them, either
//! with struct update syntax or from a YAML file:
//!
//! ```yaml
//! stroke-colour: "#000"
//! base-stroke-width: 0.02
//! Ltile-colour: "#fff"
//! reflect-x: false
//! rotate: 1.5707963
//! ```
//!
//! Unknown keys are ignored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::colour::TileColour;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read config: {}", e),
            ConfigError::Parse(msg) => write!(f, "config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Options controlling the tiling post-processing and the SVG output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// SVG width attribute, e.g. `100%` or `800`
    #[serde(deserialize_with = "size_string")]
    pub width: String,
    /// SVG height attribute
    #[serde(deserialize_with = "size_string")]
    pub height: String,
    pub stroke_colour: String,
    /// Stroke width as a fraction of the scale, before generation scaling
    pub base_stroke_width: f64,
    /// Viewbox half-size as a multiple of the scale
    pub margin: f64,
    /// 0 = transparent, 1 = opaque
    pub tile_opacity: f64,
    pub random_tile_colours: bool,
    #[serde(rename = "Stile-colour")]
    pub small_tile_colour: TileColour,
    #[serde(rename = "Ltile-colour")]
    pub large_tile_colour: TileColour,
    #[serde(rename = "Aarc-colour")]
    pub a_arc_colour: String,
    #[serde(rename = "Carc-colour")]
    pub c_arc_colour: String,
    pub draw_tiles: bool,
    pub draw_arcs: bool,
    /// Complete the figure by reflecting it about the x-axis
    pub reflect_x: bool,
    /// Draw rhombuses (and remove duplicate halves) instead of triangles
    pub draw_rhombuses: bool,
    /// Anticlockwise rotation in radians
    pub rotate: f64,
    pub flip_y: bool,
    pub flip_x: bool,
    /// Seed for random tile colours; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            stroke_colour: "#fff".to_string(),
            base_stroke_width: 0.05,
            margin: 1.05,
            tile_opacity: 0.6,
            random_tile_colours: false,
            small_tile_colour: TileColour::from("#08f"),
            large_tile_colour: TileColour::from("#0035f3"),
            a_arc_colour: "#f00".to_string(),
            c_arc_colour: "#00f".to_string(),
            draw_tiles: true,
            draw_arcs: false,
            reflect_x: true,
            draw_rhombuses: true,
            rotate: 0.0,
            flip_y: false,
            flip_x: false,
            seed: None,
        }
    }
}

impl Config {
    /// Parse a YAML overlay on top of the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a YAML overlay from a file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

/// Accept `width: 800` as well as `width: "100%"`.
fn size_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Size::deserialize(deserializer)? {
        Size::Text(s) => s,
        Size::Int(n) => n.to_string(),
        Size::Float(x) => x.to_string(),
    })
}
