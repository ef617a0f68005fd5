//! Color catalogs: named palettes for the base and accent roles.
//!
//! JSON shape:
//!
//! ```json
//! {
//!   "base":   [ { "id": "white", "label": "White", "rgb": [255, 255, 255], "hex": "#ffffff" } ],
//!   "accent": [ { "id": "black", "label": "Black", "rgb": [0, 0, 0], "hex": "#000000" },
//!               { "id": "custom", "label": "Custom", "rgb": null } ]
//! }
//! ```
//!
//! Entries with id `custom` are dropped; the UI offers its own custom
//! option per role. Either `rgb` or `hex` may be omitted and is derived
//! from the other, but when both are given they must agree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Role;
use crate::color::Rgb;
use crate::error::{Error, Result};

/// Reserved id the UI uses for its synthetic custom option.
pub const CUSTOM_ID: &str = "custom";

/// One named color in a role palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSpec {
    pub id: String,
    pub label: String,
    pub rgb: Rgb,
    pub hex: String,
}

/// All colors for one role, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCatalog {
    role: Role,
    entries: Vec<ColorSpec>,
}

/// The base and accent palettes together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCatalogs {
    pub base: ColorCatalog,
    pub accent: ColorCatalog,
}

#[derive(Debug, Deserialize)]
struct RawColorFile {
    #[serde(default)]
    base: Vec<RawColorEntry>,
    #[serde(default)]
    accent: Vec<RawColorEntry>,
}

#[derive(Debug, Deserialize)]
struct RawColorEntry {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    rgb: Option<Rgb>,
    #[serde(default)]
    hex: Option<String>,
}

impl ColorCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(role: Role, entries: Vec<ColorSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::DuplicateColorId { role, id: entry.id.clone() });
            }
        }
        Ok(Self { role, entries })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&ColorSpec> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Index of `id` in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.id == id)
    }

    pub fn entries(&self) -> &[ColorSpec] {
        &self.entries
    }

    pub fn first(&self) -> Option<&ColorSpec> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ColorCatalogs {
    /// The palette for `role`.
    pub fn role(&self, role: Role) -> &ColorCatalog {
        match role {
            Role::Base => &self.base,
            Role::Accent => &self.accent,
        }
    }

    /// Parse a JSON color catalog.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawColorFile = serde_json::from_str(content)?;
        Ok(Self {
            base: build_role(Role::Base, raw.base)?,
            accent: build_role(Role::Accent, raw.accent)?,
        })
    }
}

fn build_role(role: Role, raw: Vec<RawColorEntry>) -> Result<ColorCatalog> {
    let mut entries = Vec::with_capacity(raw.len());

    for entry in raw {
        if entry.id.eq_ignore_ascii_case(CUSTOM_ID) {
            log::debug!("dropping '{}' sentinel from {} palette", entry.id, role);
            continue;
        }

        let (rgb, hex) = match (entry.rgb, entry.hex) {
            (Some(rgb), Some(hex)) => {
                let decoded = Rgb::from_hex(&hex)?;
                if decoded != rgb {
                    return Err(Error::HexMismatch {
                        role,
                        id: entry.id,
                        hex,
                        rgb: rgb.to_array(),
                    });
                }
                (rgb, hex)
            }
            (Some(rgb), None) => (rgb, rgb.to_hex()),
            (None, Some(hex)) => (Rgb::from_hex(&hex)?, hex),
            (None, None) => return Err(Error::IncompleteColor { role, id: entry.id }),
        };

        let label = entry.label.unwrap_or_else(|| entry.id.clone());
        entries.push(ColorSpec { id: entry.id, label, rgb, hex });
    }

    ColorCatalog::new(role, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "base": [
            { "id": "white", "label": "White", "rgb": [255, 255, 255], "hex": "#FFFFFF" },
            { "id": "beige", "label": "Beige", "rgb": [245, 245, 220] }
        ],
        "accent": [
            { "id": "black", "label": "Black", "rgb": [0, 0, 0], "hex": "#000000" },
            { "id": "crimson", "hex": "#dc143c" },
            { "id": "custom", "label": "Custom", "rgb": null }
        ]
    }"##;

    #[test]
    fn loads_both_roles_and_drops_custom() {
        let cats = ColorCatalogs::from_json(SAMPLE).unwrap();
        assert_eq!(cats.base.len(), 2);
        assert_eq!(cats.accent.len(), 2);
        assert!(cats.accent.get("custom").is_none());
        assert_eq!(cats.role(Role::Accent).role(), Role::Accent);
    }

    #[test]
    fn fills_in_missing_forms() {
        let cats = ColorCatalogs::from_json(SAMPLE).unwrap();
        assert_eq!(cats.base.get("beige").unwrap().hex, "#f5f5dc");
        let crimson = cats.accent.get("crimson").unwrap();
        assert_eq!(crimson.rgb, Rgb::new(220, 20, 60));
        assert_eq!(crimson.label, "crimson");
    }

    #[test]
    fn hex_must_agree_with_rgb() {
        let json = r##"{ "base": [ { "id": "w", "rgb": [255, 255, 255], "hex": "#fefefe" } ] }"##;
        let err = ColorCatalogs::from_json(json).unwrap_err();
        assert!(matches!(err, Error::HexMismatch { role: Role::Base, .. }));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"{ "accent": [ { "id": "a", "rgb": [1, 2, 3] }, { "id": "a", "rgb": [4, 5, 6] } ] }"#;
        let err = ColorCatalogs::from_json(json).unwrap_err();
        assert!(matches!(err, Error::DuplicateColorId { role: Role::Accent, .. }));
    }

    #[test]
    fn entry_needs_a_value() {
        let json = r#"{ "base": [ { "id": "ghost" } ] }"#;
        assert!(matches!(
            ColorCatalogs::from_json(json),
            Err(Error::IncompleteColor { .. })
        ));
    }

    #[test]
    fn out_of_range_channel_is_a_json_error() {
        let json = r#"{ "base": [ { "id": "hot", "rgb": [300, 0, 0] } ] }"#;
        assert!(matches!(ColorCatalogs::from_json(json), Err(Error::Json(_))));
    }
}
