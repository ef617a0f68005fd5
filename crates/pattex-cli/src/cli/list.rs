//! `patterns` and `colors`: print what the catalogs contain.

use serde::Serialize;

use pattex::{catalog, ColorSpec, PatternSpec, PatternType, Role};

use super::common::CommonArgs;

/// JSON shape for `colors --json`.
#[derive(Serialize)]
struct JsonColors<'a> {
    base: &'a [ColorSpec],
    accent: &'a [ColorSpec],
}

/// JSON shape for `patterns --types --json`.
#[derive(Serialize)]
struct JsonPatternType {
    name: &'static str,
    settings: &'static [&'static str],
    swaps_roles: bool,
    description: &'static str,
}

pub fn cmd_patterns(common: &CommonArgs) -> Result<(), String> {
    let json = common.rest.iter().any(|a| a == "--json");

    if common.rest.iter().any(|a| a == "--types") {
        return print_types(json);
    }

    let file = common.session_file()?;
    let (path, _) = common.catalog_paths(file.as_ref())?;
    let patterns = catalog::load_patterns(&path).map_err(|e| e.to_string())?;

    if json {
        let specs: &[PatternSpec] = patterns.specs();
        println!("{}", serde_json::to_string_pretty(specs).map_err(|e| e.to_string())?);
        return Ok(());
    }

    println!("Patterns in {}:", path.display());
    for spec in patterns.specs() {
        let settings: Vec<String> = spec.settings.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        let marker = if spec.tiling.is_none() { "  (unknown type)" } else { "" };
        println!("  {:16} {:12} {}{}", spec.name, spec.type_tag, settings.join(" "), marker);
    }
    Ok(())
}

fn print_types(json: bool) -> Result<(), String> {
    if json {
        let types: Vec<JsonPatternType> = PatternType::all()
            .iter()
            .map(|t| {
                let meta = t.metadata();
                JsonPatternType {
                    name: t.name(),
                    settings: meta.settings,
                    swaps_roles: t.swaps_roles(),
                    description: meta.description,
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&types).map_err(|e| e.to_string())?);
        return Ok(());
    }

    println!("Pattern types:");
    for t in PatternType::all() {
        let meta = t.metadata();
        let swap = if t.swaps_roles() { " [swapped]" } else { "" };
        println!("  {:12} {}{}", t.name(), meta.description, swap);
        println!("  {:12} settings: {}", "", meta.settings.join(", "));
    }
    Ok(())
}

pub fn cmd_colors(common: &CommonArgs) -> Result<(), String> {
    let json = common.rest.iter().any(|a| a == "--json");

    let file = common.session_file()?;
    let (_, path) = common.catalog_paths(file.as_ref())?;
    let colors = catalog::load_colors(&path).map_err(|e| e.to_string())?;

    if json {
        let out = JsonColors { base: colors.base.entries(), accent: colors.accent.entries() };
        println!("{}", serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?);
        return Ok(());
    }

    for role in Role::all() {
        println!("{} colors:", role);
        for c in colors.role(role).entries() {
            println!("  {:12} {:8} {:16} {}", c.id, c.hex, c.label, c.rgb);
        }
    }
    println!("Custom colors: pass #rrggbb or r,g,b instead of an id.");
    Ok(())
}
