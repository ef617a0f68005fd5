//! CLI command implementations.
//!
//! - `render` - render one pattern to PNG (file, stdout or clipboard)
//! - `patterns` - list the pattern catalog
//! - `colors` - list the color catalogs

pub mod common;
pub mod list;
pub mod render;
pub mod session_file;

pub use common::CommonArgs;
pub use list::{cmd_colors, cmd_patterns};
pub use render::cmd_render;
pub use session_file::SessionFile;
