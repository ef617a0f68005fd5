//! Catalog loading: the pattern catalog and the two color palettes.
//!
//! ## Rust Lesson #21: Joining Background Work
//!
//! The two catalogs are independent files, so they load on two threads.
//! `thread::spawn` returns a `JoinHandle<T>`; `join()` blocks until the
//! thread finishes and hands back its `T`. Nothing downstream runs until
//! BOTH handles have been joined, which gives the "render only after both
//! loads" ordering for free.

mod color;
mod pattern;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use color::{ColorCatalog, ColorCatalogs, ColorSpec, CUSTOM_ID};
pub use pattern::{PatternCatalog, PatternSpec};

/// Which side of the pattern a color plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Base,
    Accent,
}

impl Role {
    pub fn all() -> [Role; 2] {
        [Role::Base, Role::Accent]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Base => "base",
            Role::Accent => "accent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Both catalogs, fully loaded and validated.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub patterns: PatternCatalog,
    pub colors: ColorCatalogs,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a pattern catalog. `.yaml`/`.yml` files are YAML, everything else XML.
pub fn load_patterns(path: impl AsRef<Path>) -> Result<PatternCatalog> {
    let path = path.as_ref();
    let content = read(path)?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let catalog = if is_yaml {
        PatternCatalog::from_yaml(&content)?
    } else {
        PatternCatalog::from_xml(&content)?
    };
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog("pattern"));
    }
    log::info!("loaded {} patterns from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load the JSON color catalog. Each role needs at least one color.
pub fn load_colors(path: impl AsRef<Path>) -> Result<ColorCatalogs> {
    let path = path.as_ref();
    let colors = ColorCatalogs::from_json(&read(path)?)?;
    if colors.base.is_empty() {
        return Err(Error::EmptyCatalog("base color"));
    }
    if colors.accent.is_empty() {
        return Err(Error::EmptyCatalog("accent color"));
    }
    log::info!(
        "loaded {} base and {} accent colors from {}",
        colors.base.len(),
        colors.accent.len(),
        path.display()
    );
    Ok(colors)
}

/// Load both catalogs concurrently and wait for both.
///
/// If both fail, the pattern error is reported.
pub fn load_catalogs(pattern_path: impl Into<PathBuf>, color_path: impl Into<PathBuf>) -> Result<Catalogs> {
    let pattern_path = pattern_path.into();
    let color_path = color_path.into();

    let patterns = thread::spawn(move || load_patterns(pattern_path));
    let colors = thread::spawn(move || load_colors(color_path));

    let patterns = patterns.join().map_err(|_| Error::LoaderPanicked("pattern"))?;
    let colors = colors.join().map_err(|_| Error::LoaderPanicked("color"))?;

    Ok(Catalogs {
        patterns: patterns?,
        colors: colors?,
    })
}
