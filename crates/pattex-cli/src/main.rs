//! pattex - TUI and CLI for tiled pattern rendering
//!
//! Usage:
//!   pattex                            Launch TUI
//!   pattex render -p <name> [options] Render a pattern to PNG
//!   pattex patterns                   List the pattern catalog
//!   pattex colors                     List the color catalogs

mod cli;
mod export;
mod logging;
mod tui;

use std::env;

use cli::{cmd_colors, cmd_patterns, cmd_render, CommonArgs};

fn print_usage(prog: &str) {
    eprintln!("pattex - tiled pattern renderer");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} [options]                       Launch TUI", prog);
    eprintln!("  {} render [name] [options]", prog);
    eprintln!("  {} patterns [--types] [--json]", prog);
    eprintln!("  {} colors [--json]", prog);
    eprintln!();
    eprintln!("Common options:");
    eprintln!("  --patterns <file>      Pattern catalog (.xml, .yaml) (default: assets/patterns.xml)");
    eprintln!("  --colors <file>        Color catalog (.json) (default: assets/colors.json)");
    eprintln!("  --session <file>       YAML session with catalog paths and selection");
    eprintln!("  -v, --verbose          Debug logging (RUST_LOG overrides)");
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  -p, --pattern <name>   Pattern to render (default: first in catalog)");
    eprintln!("  -b, --base <color>     Base color: catalog id, #rrggbb or r,g,b");
    eprintln!("  -a, --accent <color>   Accent color: catalog id, #rrggbb or r,g,b");
    eprintln!("  -o, --output <file>    PNG output (- for stdout, default: timestamped file)");
    eprintln!("  --clipboard            Copy the image to the clipboard");
    eprintln!("  --save-session <file>  Write the final selection as a session file");
    eprintln!();
    eprintln!("TUI Controls:");
    eprintln!("  ↑/↓ or j/k    Select pattern");
    eprintln!("  b / B         Next / previous base color");
    eprintln!("  a / A         Next / previous accent color");
    eprintln!("  c / C         Type a custom accent / base hex");
    eprintln!("  g / G         Type a custom accent / base as R,G,B");
    eprintln!("  + / -         Preview scale (1x-8x)");
    eprintln!("  r             Random pattern and colors");
    eprintln!("  s / y         Save PNG / copy to clipboard");
    eprintln!("  w             Save session");
    eprintln!("  q / Esc       Quit");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("pattex");

    let (command, rest) = match args.get(1).map(String::as_str) {
        Some(c @ ("render" | "patterns" | "colors")) => (Some(c), &args[2..]),
        Some("help" | "--help" | "-h") => {
            print_usage(prog);
            return;
        }
        _ => (None, args.get(1..).unwrap_or_default()),
    };

    let common = match CommonArgs::parse(rest) {
        Ok(common) => common,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(common.verbose);

    let result = match command {
        Some("render") => cmd_render(&common),
        Some("patterns") => cmd_patterns(&common),
        Some("colors") => cmd_colors(&common),
        _ => {
            if let Some(unknown) = common.rest.first() {
                eprintln!("Unknown command or option: {}", unknown);
                eprintln!();
                print_usage(prog);
                std::process::exit(1);
            }
            tui::run_tui(common)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
