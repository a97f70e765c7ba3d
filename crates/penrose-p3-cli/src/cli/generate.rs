//! Generate and logo command implementations.

use std::fs;
use std::time::Instant;

use penrose_p3::TileKind;

use super::common::{Preset, TilingOptions};
use super::raster::{autocrop, rasterize, save_png};

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) {
    run_command(args, Preset::Generate);
}

/// Execute the logo command.
pub fn cmd_logo(args: &[String]) {
    run_command(args, Preset::Logo);
}

fn run_command(args: &[String], preset: Preset) {
    let options = TilingOptions::parse(args, preset).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(preset);
        std::process::exit(1);
    });

    if options.help {
        print_usage(preset);
        return;
    }

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(options: &TilingOptions) -> Result<(), String> {
    let start = Instant::now();
    let mut tiling = options.build()?;
    let elapsed = start.elapsed();

    let large = tiling
        .elements()
        .iter()
        .filter(|t| t.kind() == TileKind::Large)
        .count();
    eprintln!(
        "Generated {} tiles ({} large, {} small) over {} generations in {:?}",
        tiling.elements().len(),
        large,
        tiling.elements().len() - large,
        tiling.ngen(),
        elapsed
    );

    let svg = tiling.make_svg();

    match options.output.as_deref() {
        Some(path) if path != "-" => {
            fs::write(path, &svg).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            eprintln!("Wrote: {}", path);
        }
        _ => print!("{}", svg),
    }

    if let Some(png_path) = &options.png {
        eprint!("Rendering PNG at {}px...", options.png_size);
        let mut image = rasterize(&svg, options.png_size).map_err(|e| e.to_string())?;
        if options.crop {
            image = autocrop(&image);
        }
        save_png(&image, png_path).map_err(|e| e.to_string())?;
        eprintln!(" done!\nWrote: {} ({}x{})", png_path, image.width(), image.height());
    }

    Ok(())
}

/// Print usage information.
pub fn print_usage(preset: Preset) {
    let name = match preset {
        Preset::Generate => "generate",
        Preset::Logo => "logo",
    };
    eprintln!("penrose-p3 {} - Generate a Penrose P3 tiling as SVG (and PNG)", name);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    penrose-p3 {} [OPTIONS]", name);
    eprintln!();
    eprintln!("TILING:");
    eprintln!("    -s, --scale <n>          Seed size / image half-width (default: 100)");
    eprintln!("    -n, --ngen <n>           Inflation generations (default: {})",
        if preset == Preset::Logo { 3 } else { 4 });
    eprintln!("    --shape <logo|sun>       Seed shape (default: logo)");
    eprintln!("    --offset <x>             Shift the logo seed along the x-axis");
    eprintln!("    --drop <start..end>      Remove tiles at these positions after tiling");
    eprintln!("    --no-reflect             Do not complete the figure by reflection");
    eprintln!("    --triangles              Draw raw triangles instead of rhombuses");
    eprintln!("    --rotate <deg>           Rotate the figure anticlockwise");
    eprintln!("    --flip-x, --flip-y       Mirror the figure (after rotation)");
    eprintln!();
    eprintln!("STYLE:");
    eprintln!("    -c, --config <file>      YAML config file (replaces the preset)");
    eprintln!("    -w, --stroke-width <n>   Base stroke width factor");
    eprintln!("    --stroke <colour>        Stroke colour");
    eprintln!("    --opacity <0..1>         Tile opacity");
    eprintln!("    --large <colour>         Large tile colour");
    eprintln!("    --small <colour>         Small tile colour");
    eprintln!("    --random-colours         Random colour per tile");
    eprintln!("    --seed <n>               Random seed for reproducible colours");
    eprintln!("    --arcs                   Draw decorative arcs");
    eprintln!("    --margin <n>             Viewbox margin factor");
    eprintln!();
    eprintln!("OUTPUT:");
    eprintln!("    -o, --output <file>      SVG output (- for stdout, default: stdout)");
    eprintln!("    --png <file>             Also render a PNG");
    eprintln!("    --png-size <px>          PNG size before cropping (default: 1024)");
    eprintln!("    --no-crop                Keep transparent PNG margins");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    penrose-p3 {} -o tiling.svg --png tiling.png", name);
    eprintln!("    penrose-p3 {} -n 5 --random-colours --seed 42 -o colourful.svg", name);
}
