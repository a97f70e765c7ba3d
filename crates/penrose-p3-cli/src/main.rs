//! penrose-p3 - Penrose P3 tiling generator
//!
//! Usage:
//!   penrose-p3 generate [options]   Generate a tiling (SVG, optional PNG)
//!   penrose-p3 logo [options]       Generate the logo tiling
//!   penrose-p3 stats [options]      Print tile counts as JSON

mod cli;

use std::env;

use cli::{cmd_generate, cmd_logo, cmd_stats};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "generate" => {
                cmd_generate(&args[2..]);
                return;
            }
            "logo" => {
                cmd_logo(&args[2..]);
                return;
            }
            "stats" => {
                cmd_stats(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            // Bare options go to generate.
            flag if flag.starts_with('-') => {
                cmd_generate(&args[1..]);
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!();
            }
        }
    }

    print_usage(args.first().map(String::as_str).unwrap_or("penrose-p3"));
    std::process::exit(1);
}

fn print_usage(prog: &str) {
    eprintln!("penrose-p3 - Penrose P3 rhombus tiling generator");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} generate [options]    Generate a tiling", prog);
    eprintln!("  {} logo [options]        Generate the logo tiling", prog);
    eprintln!("  {} stats [options]       Print tile counts per generation as JSON", prog);
    eprintln!("  {} help", prog);
    eprintln!();
    eprintln!("Common options:");
    eprintln!("  -s, --scale <n>        Seed size (default: 100)");
    eprintln!("  -n, --ngen <n>         Inflation generations");
    eprintln!("  -o, --output <file>    SVG output (- for stdout, default: stdout)");
    eprintln!("  --png <file>           Also render an autocropped PNG");
    eprintln!("  -c, --config <file>    YAML config file");
    eprintln!();
    eprintln!("Run '{} generate --help' for the full option list.", prog);
}
