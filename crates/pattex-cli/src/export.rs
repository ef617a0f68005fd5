//! Export of the rendered surface: PNG files and the system clipboard.
//!
//! Both read the surface after a render; neither touches it.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use chrono::Local;
use pattex::Surface;

/// A file name like `pattex-dots1-20260101-120000.png`.
pub fn timestamped_name(pattern: &str) -> String {
    let stem: String = pattern
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("pattex-{}-{}.png", stem, Local::now().format("%Y%m%d-%H%M%S"))
}

/// Save the surface as PNG in `dir` under a timestamped name.
pub fn save_timestamped(surface: &Surface, dir: &Path, pattern: &str) -> Result<PathBuf, String> {
    let path = dir.join(timestamped_name(pattern));
    surface.save_png(&path).map_err(|e| e.to_string())?;
    Ok(path)
}

/// Put the exact surface pixels on the clipboard as an RGBA image.
pub fn copy_to_clipboard(surface: &Surface) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| format!("clipboard unavailable: {}", e))?;
    let image = arboard::ImageData {
        width: surface.width() as usize,
        height: surface.height() as usize,
        bytes: Cow::Borrowed(surface.rgba()),
    };
    clipboard
        .set_image(image)
        .map_err(|e| format!("clipboard copy failed: {}", e))?;
    log::info!("copied {}x{} image to clipboard", surface.width(), surface.height());
    Ok(())
}
