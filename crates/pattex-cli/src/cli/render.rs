//! `render`: paint one pattern and write it out.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use pattex::RenderOutcome;

use super::common::{parse_color_arg, value, CommonArgs};
use super::session_file::SessionFile;
use crate::export;

pub fn cmd_render(common: &CommonArgs) -> Result<(), String> {
    let args = &common.rest;
    let mut pattern: Option<&str> = None;
    let mut base: Option<&str> = None;
    let mut accent: Option<&str> = None;
    let mut output: Option<&str> = None;
    let mut clipboard = false;
    let mut save_session: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--pattern" => pattern = Some(value(args, &mut i)?),
            "-b" | "--base" => base = Some(value(args, &mut i)?),
            "-a" | "--accent" => accent = Some(value(args, &mut i)?),
            "-o" | "--output" => output = Some(value(args, &mut i)?),
            "--clipboard" => clipboard = true,
            "--save-session" => save_session = Some(value(args, &mut i)?),
            other if other.starts_with('-') && other != "-" => {
                return Err(format!("Unknown render option: {}", other));
            }
            // A bare word is the pattern name
            name => {
                if pattern.is_none() {
                    pattern = Some(name);
                }
            }
        }
        i += 1;
    }

    eprintln!("Loading catalogs...");
    let (mut session, (patterns, colors)) = common.open_session()?;
    eprintln!(
        "Loaded {} patterns, {} base and {} accent colors",
        session.patterns().len(),
        session.colors().base.len(),
        session.colors().accent.len()
    );
    if let Some(name) = pattern {
        session.select_pattern(name).map_err(|e| e.to_string())?;
    }
    if let Some(base) = base {
        session.set_base(parse_color_arg(base)).map_err(|e| e.to_string())?;
    }
    if let Some(accent) = accent {
        session.set_accent(parse_color_arg(accent)).map_err(|e| e.to_string())?;
    }

    let start = Instant::now();
    let outcome = session.render_current().map_err(|e| e.to_string())?;
    let name = session.selection().pattern.clone().unwrap_or_default();
    match outcome {
        RenderOutcome::Painted => eprintln!("Rendered '{}' in {:?}", name, start.elapsed()),
        RenderOutcome::BackgroundOnly => eprintln!("Pattern '{}' has an unknown type; background only", name),
        RenderOutcome::NoPattern => return Err(format!("Pattern '{}' not found", name)),
    }

    let surface = session.surface();
    match output {
        Some("-") => {
            let png = surface.encode_png().map_err(|e| e.to_string())?;
            io::stdout().write_all(&png).map_err(|e| e.to_string())?;
        }
        Some(path) => {
            surface.save_png(path).map_err(|e| e.to_string())?;
            eprintln!("Wrote: {}", path);
        }
        None if clipboard => {}
        None => {
            let path = export::save_timestamped(surface, Path::new("."), &name)?;
            eprintln!("Wrote: {}", path.display());
        }
    }

    if clipboard {
        export::copy_to_clipboard(surface)?;
        eprintln!("Copied to clipboard");
    }

    if let Some(path) = save_session {
        let file = SessionFile::capture(&session, &patterns, &colors);
        file.save(&PathBuf::from(path))?;
        eprintln!("Saved session: {}", path);
    }

    Ok(())
}
