//! # pattex
//!
//! Tiled 2D pattern rendering: catalogs of named patterns and colors,
//! resolved into a fully repainted raster.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are declared explicitly:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! ## Pipeline
//!
//! ```text
//! catalogs (two threads, joined) → Session → resolve colors → swap policy
//!                                          → render(Surface, PatternSpec, fill, background)
//! ```

pub mod catalog;
pub mod color;
pub mod error;
pub mod geometry;
pub mod patterns;
pub mod render;
pub mod resolve;
pub mod session;
pub mod surface;

// Re-export common types at crate root for convenience.
pub use catalog::{load_catalogs, Catalogs, ColorCatalog, ColorCatalogs, ColorSpec, PatternCatalog, PatternSpec, Role};
pub use color::Rgb;
pub use error::{Error, Result};
pub use geometry::{Line, Mark, Point};
pub use patterns::{PatternType, Tiling};
pub use render::{render, RenderOutcome};
pub use resolve::{resolve, ColorSelection, CustomColor};
pub use session::{Palette, Selection, Session};
pub use surface::{Surface, CANVAS_SIZE};
