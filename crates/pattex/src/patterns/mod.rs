//! Pattern tilings.
//!
//! Each tiling generates [`Mark`]s over the canvas. The set of pattern
//! types is closed: [`PatternType`] names them, [`Tiling`] carries the
//! validated settings each one actually reads.

pub mod util;

mod check;
mod diacheck;
mod dot;
mod grid;
mod rule;
mod stripe;

pub use check::generate_check_tiles;
pub use diacheck::{diamond_coords, generate_diacheck_tiles, is_diamond_ink};
pub use dot::generate_dot_tiles;
pub use grid::generate_grid_tiles;
pub use rule::{generate_rule_tiles, Orientation};
pub use stripe::generate_stripe_tiles;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::Mark;

/// Setting keys as they appear in catalogs.
pub const SPACING: &str = "spacing";
pub const SIZE: &str = "size";
pub const ANGLE: &str = "angle";
pub const LINE_WIDTH: &str = "lineWidth";

/// Stroke width when a catalog entry gives none.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
/// Stripe angle when a catalog entry gives none.
pub const DEFAULT_ANGLE: f64 = 45.0;
/// Smallest accepted `spacing`, one pixel.
pub const MIN_SPACING: f64 = 1.0;

/// Metadata describing a pattern type for listings.
#[derive(Debug, Clone, Copy)]
pub struct PatternMetadata {
    /// Settings the type reads, required ones first
    pub settings: &'static [&'static str],
    /// Brief description of the pattern
    pub description: &'static str,
}

impl PatternMetadata {
    pub const fn new(settings: &'static [&'static str], description: &'static str) -> Self {
        Self { settings, description }
    }
}

/// Available pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternType {
    Dot,
    Stripe,
    Grid,
    Check,
    Diacheck,
    Vertical,
    Horizontal,
}

impl PatternType {
    /// Get all available pattern types.
    pub fn all() -> &'static [PatternType] {
        &[
            PatternType::Dot,
            PatternType::Stripe,
            PatternType::Grid,
            PatternType::Check,
            PatternType::Diacheck,
            PatternType::Vertical,
            PatternType::Horizontal,
        ]
    }

    /// Catalog type tag.
    pub fn name(&self) -> &'static str {
        match self {
            PatternType::Dot => "dot",
            PatternType::Stripe => "stripe",
            PatternType::Grid => "grid",
            PatternType::Check => "check",
            PatternType::Diacheck => "diacheck",
            PatternType::Vertical => "vertical",
            PatternType::Horizontal => "horizontal",
        }
    }

    /// Parse a type tag. Returns `None` for anything outside the closed set.
    pub fn from_name(name: &str) -> Option<PatternType> {
        match name.trim().to_lowercase().as_str() {
            "dot" | "dots" => Some(PatternType::Dot),
            "stripe" | "stripes" => Some(PatternType::Stripe),
            "grid" => Some(PatternType::Grid),
            "check" | "checker" => Some(PatternType::Check),
            "diacheck" | "diamond" => Some(PatternType::Diacheck),
            "vertical" => Some(PatternType::Vertical),
            "horizontal" => Some(PatternType::Horizontal),
            _ => None,
        }
    }

    /// Swap policy: these families use the accent color as background and
    /// the base color as ink. Everything else inks with accent on base.
    pub fn swaps_roles(&self) -> bool {
        matches!(
            self,
            PatternType::Stripe | PatternType::Vertical | PatternType::Horizontal | PatternType::Check
        )
    }

    /// Get listing metadata for this type.
    pub fn metadata(&self) -> PatternMetadata {
        match self {
            PatternType::Dot =>
                PatternMetadata::new(&[SPACING, SIZE], "Staggered polka dots"),
            PatternType::Stripe =>
                PatternMetadata::new(&[SPACING, ANGLE, LINE_WIDTH], "Parallel lines at an angle"),
            PatternType::Grid =>
                PatternMetadata::new(&[SPACING, SIZE], "Block at every cell"),
            PatternType::Check =>
                PatternMetadata::new(&[SPACING, SIZE], "Checkerboard"),
            PatternType::Diacheck =>
                PatternMetadata::new(&[SPACING], "Checkerboard turned 45 degrees"),
            PatternType::Vertical =>
                PatternMetadata::new(&[SPACING, LINE_WIDTH], "Vertical rulings"),
            PatternType::Horizontal =>
                PatternMetadata::new(&[SPACING, LINE_WIDTH], "Horizontal rulings"),
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated settings for one pattern type.
///
/// ## Rust Lesson #9: Making Bad States Unrepresentable
///
/// A `Tiling::Vertical` simply has no `size` field, and every variant
/// has a `spacing` that was checked positive when the catalog loaded.
/// The renderer can't forget a setting or read one that doesn't apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tiling {
    Dot { spacing: f64, size: f64 },
    Stripe { spacing: f64, angle: f64, line_width: f64 },
    Grid { spacing: f64, size: f64 },
    Check { spacing: f64, size: f64 },
    Diacheck { spacing: f64 },
    Vertical { spacing: f64, line_width: f64 },
    Horizontal { spacing: f64, line_width: f64 },
}

impl Tiling {
    /// Validate raw catalog settings for `pattern_type`.
    ///
    /// `spacing` is required and must be at least [`MIN_SPACING`]. `size`
    /// and `lineWidth` must be positive when given. Unknown keys are ignored.
    pub fn from_settings(
        pattern: &str,
        pattern_type: PatternType,
        settings: &BTreeMap<String, f64>,
    ) -> Result<Tiling> {
        let positive = |key: &str| -> Result<Option<f64>> {
            match settings.get(key) {
                None => Ok(None),
                Some(v) if v.is_finite() && *v > 0.0 => Ok(Some(*v)),
                Some(v) => Err(Error::InvalidSetting {
                    pattern: pattern.to_string(),
                    setting: key.to_string(),
                    value: v.to_string(),
                }),
            }
        };

        let spacing = positive(SPACING)?.ok_or_else(|| Error::MissingSetting {
            pattern: pattern.to_string(),
            setting: SPACING,
        })?;
        if spacing < MIN_SPACING {
            return Err(Error::InvalidSetting {
                pattern: pattern.to_string(),
                setting: SPACING.to_string(),
                value: spacing.to_string(),
            });
        }
        let size = positive(SIZE)?;
        let line_width = positive(LINE_WIDTH)?.unwrap_or(DEFAULT_LINE_WIDTH);

        let tiling = match pattern_type {
            PatternType::Dot => Tiling::Dot { spacing, size: size.unwrap_or(spacing / 2.0) },
            PatternType::Stripe => {
                let angle = match settings.get(ANGLE) {
                    Some(a) if a.is_finite() => *a,
                    Some(a) => {
                        return Err(Error::InvalidSetting {
                            pattern: pattern.to_string(),
                            setting: ANGLE.to_string(),
                            value: a.to_string(),
                        });
                    }
                    None => DEFAULT_ANGLE,
                };
                Tiling::Stripe { spacing, angle, line_width }
            }
            PatternType::Grid => Tiling::Grid { spacing, size: size.unwrap_or(spacing) },
            PatternType::Check => Tiling::Check { spacing, size: size.unwrap_or(spacing) },
            PatternType::Diacheck => Tiling::Diacheck { spacing },
            PatternType::Vertical => Tiling::Vertical { spacing, line_width },
            PatternType::Horizontal => Tiling::Horizontal { spacing, line_width },
        };
        Ok(tiling)
    }

    pub fn pattern_type(&self) -> PatternType {
        match self {
            Tiling::Dot { .. } => PatternType::Dot,
            Tiling::Stripe { .. } => PatternType::Stripe,
            Tiling::Grid { .. } => PatternType::Grid,
            Tiling::Check { .. } => PatternType::Check,
            Tiling::Diacheck { .. } => PatternType::Diacheck,
            Tiling::Vertical { .. } => PatternType::Vertical,
            Tiling::Horizontal { .. } => PatternType::Horizontal,
        }
    }

    /// Tile pitch.
    pub fn spacing(&self) -> f64 {
        match *self {
            Tiling::Dot { spacing, .. }
            | Tiling::Stripe { spacing, .. }
            | Tiling::Grid { spacing, .. }
            | Tiling::Check { spacing, .. }
            | Tiling::Diacheck { spacing }
            | Tiling::Vertical { spacing, .. }
            | Tiling::Horizontal { spacing, .. } => spacing,
        }
    }

    /// Stroke width for line marks. Fill-only tilings report the default.
    pub fn line_width(&self) -> f64 {
        match *self {
            Tiling::Stripe { line_width, .. }
            | Tiling::Vertical { line_width, .. }
            | Tiling::Horizontal { line_width, .. } => line_width,
            _ => DEFAULT_LINE_WIDTH,
        }
    }

    /// Generate the marks for a `width`×`height` canvas.
    ///
    /// This is the main entry point for tile geometry; it dispatches to
    /// the per-type generator.
    pub fn generate(&self, width: f64, height: f64) -> Vec<Mark> {
        match *self {
            Tiling::Dot { spacing, size } => generate_dot_tiles(width, height, spacing, size),
            Tiling::Stripe { spacing, angle, .. } => {
                generate_stripe_tiles(width, height, spacing, angle)
            }
            Tiling::Grid { spacing, size } => generate_grid_tiles(width, height, spacing, size),
            Tiling::Check { spacing, size } => generate_check_tiles(width, height, spacing, size),
            Tiling::Diacheck { spacing } => generate_diacheck_tiles(width, height, spacing),
            Tiling::Vertical { spacing, .. } => {
                generate_rule_tiles(width, height, spacing, Orientation::Vertical)
            }
            Tiling::Horizontal { spacing, .. } => {
                generate_rule_tiles(width, height, spacing, Orientation::Horizontal)
            }
        }
    }
}
