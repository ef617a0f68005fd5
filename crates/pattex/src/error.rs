//! Error type shared by the whole library.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Every fallible function returns `Result<T, Error>`. The `?` operator
//! bubbles an `Err` up to the caller, so loaders read top to bottom
//! without nested matches. `thiserror` writes the `Display` and
//! `std::error::Error` impls from the `#[error(...)]` attributes.
//!
//! Two families live here:
//! - catalog defects (bad files, missing settings, hex/RGB mismatch) fail
//!   fast at load time
//! - render-time problems (`UnknownColorId`) are programmer errors that
//!   surface immediately; missing patterns and unknown pattern types are
//!   NOT errors at render time, see [`crate::render::RenderOutcome`]

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Role;

/// Errors produced while loading catalogs, resolving colors or exporting.
#[derive(Debug, Error)]
pub enum Error {
    /// A preset selection names an id the loaded catalog does not contain.
    #[error("unknown {role} color id '{id}'")]
    UnknownColorId { role: Role, id: String },

    /// The selected pattern name is not in the catalog.
    #[error("no pattern named '{0}' in the catalog")]
    MissingPatternSpec(String),

    /// A pattern spec carries a type tag outside the closed set.
    #[error("pattern '{name}' has unknown type '{tag}'")]
    UnknownPatternType { name: String, tag: String },

    /// Custom hex/RGB text could not be decoded.
    #[error("malformed custom color '{0}'")]
    MalformedCustomColor(String),

    /// A hex string that is not `#rgb` / `#rrggbb`.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error in pattern catalog at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("JSON error in color catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A setting required by the pattern type is absent.
    #[error("pattern '{pattern}' is missing required setting '{setting}'")]
    MissingSetting { pattern: String, setting: &'static str },

    /// A setting is non-numeric or out of range.
    #[error("pattern '{pattern}' has invalid {setting} '{value}'")]
    InvalidSetting {
        pattern: String,
        setting: String,
        value: String,
    },

    /// A color entry whose hex string disagrees with its triplet.
    #[error("{role} color '{id}': hex {hex} does not match rgb {rgb:?}")]
    HexMismatch {
        role: Role,
        id: String,
        hex: String,
        rgb: [u8; 3],
    },

    /// A color entry with neither an RGB triplet nor a hex string.
    #[error("{role} color '{id}' has no rgb or hex value")]
    IncompleteColor { role: Role, id: String },

    #[error("duplicate {role} color id '{id}'")]
    DuplicateColorId { role: Role, id: String },

    #[error("duplicate pattern name '{0}'")]
    DuplicatePattern(String),

    /// A catalog loaded successfully but holds nothing to select.
    #[error("{0} catalog is empty")]
    EmptyCatalog(&'static str),

    #[error("cannot allocate a {0}x{0} surface")]
    Surface(u32),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// One of the background catalog loaders panicked.
    #[error("{0} loader thread panicked")]
    LoaderPanicked(&'static str),
}

/// Library-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
