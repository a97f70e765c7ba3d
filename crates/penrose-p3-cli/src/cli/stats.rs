//! Stats command: tile counts per generation as JSON.

use serde::Serialize;

use penrose_p3::{PenroseP3, Tile, TileKind};

use super::common::{Preset, TilingOptions};

/// Tile counts for one inflation generation, before any post-processing.
#[derive(Debug, Serialize, PartialEq)]
pub struct GenerationStats {
    pub generation: u32,
    pub tiles: usize,
    pub large: usize,
    pub small: usize,
}

/// JSON output of the stats command.
#[derive(Debug, Serialize)]
pub struct TilingStats {
    pub scale: f64,
    pub ngen: u32,
    pub stroke_width: f64,
    pub generations: Vec<GenerationStats>,
    /// Tiles left after dedupe, reflection and trimming
    pub final_tiles: usize,
    pub final_large: usize,
    pub final_small: usize,
    /// (min_x, min_y, max_x, max_y) of the final figure
    pub bounds: Option<(f64, f64, f64, f64)>,
}

fn count(tiles: &[Tile]) -> (usize, usize) {
    let large = tiles.iter().filter(|t| t.kind() == TileKind::Large).count();
    (large, tiles.len() - large)
}

/// Collect stats for the tiling described by `options`.
pub fn collect_stats(options: &TilingOptions) -> Result<TilingStats, String> {
    let mut stepper = PenroseP3::new(options.scale, options.ngen, options.config()?);
    stepper.set_initial_tiles(options.seed_tiles());

    let mut generations = Vec::new();
    for generation in 0..=options.ngen {
        let (large, small) = count(stepper.elements());
        generations.push(GenerationStats {
            generation,
            tiles: large + small,
            large,
            small,
        });
        if generation < options.ngen {
            stepper.inflate();
        }
    }

    let tiling = options.build()?;
    let (final_large, final_small) = count(tiling.elements());

    Ok(TilingStats {
        scale: tiling.scale(),
        ngen: tiling.ngen(),
        stroke_width: tiling.stroke_width(),
        generations,
        final_tiles: final_large + final_small,
        final_large,
        final_small,
        bounds: tiling.bounds(),
    })
}

/// Execute the stats command.
pub fn cmd_stats(args: &[String]) {
    let options = TilingOptions::parse(args, Preset::Generate).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Usage: penrose-p3 stats [-n <ngen>] [--shape <logo|sun>] [tiling options]");
        std::process::exit(1);
    });

    if options.help {
        eprintln!("penrose-p3 stats - Print tile counts per generation as JSON");
        eprintln!();
        eprintln!("Accepts the same tiling options as 'generate'.");
        return;
    }

    let stats = collect_stats(&options).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
