//! Saved sessions: catalog paths plus the current selection, as YAML.
//!
//! ```yaml
//! patterns: assets/patterns.xml
//! colors: assets/colors.json
//! pattern: check12
//! base: !preset beige
//! accent: !custom
//!   rgb: [0, 0, 0]
//!   hex: "#336699"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use pattex::{ColorSelection, Session};

/// Everything needed to reopen a session. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<PathBuf>,

    /// Pattern name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<ColorSelection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<ColorSelection>,
}

impl SessionFile {
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read session {}: {}", path.display(), e))?;
        Self::from_yaml(&content).map_err(|e| format!("{}: {}", path.display(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Failed to parse session: {}", e))
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize session: {}", e))
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        fs::write(path, self.to_yaml()?)
            .map_err(|e| format!("Failed to write session {}: {}", path.display(), e))?;
        log::info!("saved session to {}", path.display());
        Ok(())
    }

    /// Snapshot a live session and the catalog files it was loaded from.
    pub fn capture(session: &Session, patterns: &Path, colors: &Path) -> Self {
        let selection = session.selection();
        SessionFile {
            patterns: Some(patterns.to_path_buf()),
            colors: Some(colors.to_path_buf()),
            pattern: selection.pattern.clone(),
            base: Some(selection.base.clone()),
            accent: Some(selection.accent.clone()),
        }
    }

    /// Apply the saved selection. Names must exist in the loaded catalogs.
    pub fn apply(&self, session: &mut Session) -> Result<(), String> {
        if let Some(name) = &self.pattern {
            session.select_pattern(name).map_err(|e| e.to_string())?;
        }
        if let Some(base) = &self.base {
            session.set_base(base.clone()).map_err(|e| e.to_string())?;
        }
        if let Some(accent) = &self.accent {
            session.set_accent(accent.clone()).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}
