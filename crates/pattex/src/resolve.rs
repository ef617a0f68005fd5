//! Turning a color selection into a concrete [`Rgb`].

use serde::{Deserialize, Serialize};

use crate::catalog::ColorCatalog;
use crate::color::Rgb;
use crate::error::{Error, Result};

/// What the user picked for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSelection {
    /// A catalog entry, by id.
    Preset(String),
    /// A user-entered color.
    Custom(CustomColor),
}

/// A user-entered color: an RGB triplet plus optional hex text.
///
/// Non-empty hex wins over the triplet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomColor {
    #[serde(default)]
    pub rgb: Rgb,
    #[serde(default)]
    pub hex: String,
}

impl CustomColor {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self { rgb, hex: String::new() }
    }

    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self { rgb: Rgb::BLACK, hex: hex.into() }
    }

    /// Build from raw text fields as typed into a form.
    pub fn from_fields(hex: &str, r: &str, g: &str, b: &str) -> Self {
        Self {
            rgb: Rgb::from_channel_text(r, g, b),
            hex: hex.trim().to_string(),
        }
    }

    /// The effective color. Malformed hex is reported, not silently dropped.
    pub fn try_color(&self) -> Result<Rgb> {
        if self.hex.trim().is_empty() {
            return Ok(self.rgb);
        }
        Rgb::from_hex(&self.hex).map_err(|_| Error::MalformedCustomColor(self.hex.clone()))
    }

    /// The effective color, falling back to the triplet on malformed hex.
    pub fn color(&self) -> Rgb {
        match self.try_color() {
            Ok(rgb) => rgb,
            Err(err) => {
                log::warn!("{}, using {}", err, self.rgb);
                self.rgb
            }
        }
    }
}

impl ColorSelection {
    pub fn preset(id: impl Into<String>) -> Self {
        ColorSelection::Preset(id.into())
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ColorSelection::Custom(_))
    }

    /// Short label for lists and status lines.
    pub fn describe(&self) -> String {
        match self {
            ColorSelection::Preset(id) => id.clone(),
            ColorSelection::Custom(c) => format!("custom {}", c.color().to_hex()),
        }
    }
}

/// Resolve `selection` against the palette for its role.
///
/// A preset id missing from `catalog` is an error; custom colors always
/// resolve.
pub fn resolve(selection: &ColorSelection, catalog: &ColorCatalog) -> Result<Rgb> {
    match selection {
        ColorSelection::Preset(id) => catalog
            .get(id)
            .map(|spec| spec.rgb)
            .ok_or_else(|| Error::UnknownColorId { role: catalog.role(), id: id.clone() }),
        ColorSelection::Custom(custom) => Ok(custom.color()),
    }
}
