//! The render session: loaded catalogs, current selection, one surface.
//!
//! ## Rust Lesson #22: Owning State Instead of Globals
//!
//! Everything a render needs lives in one `Session` value. Callers get it
//! only after both catalogs have loaded, so "render before load" cannot be
//! expressed. Mutators take `&mut self`, so the borrow checker guarantees a
//! single writer at a time.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Catalogs, ColorCatalogs, PatternCatalog, PatternSpec, Role};
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::patterns::PatternType;
use crate::render::{render, RenderOutcome};
use crate::resolve::{resolve, ColorSelection, CustomColor};
use crate::surface::Surface;

/// What is currently picked. Serializable so it can be saved and restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Pattern name; `None` renders nothing
    pub pattern: Option<String>,
    pub base: ColorSelection,
    pub accent: ColorSelection,
}

impl Selection {
    pub fn role(&self, role: Role) -> &ColorSelection {
        match role {
            Role::Base => &self.base,
            Role::Accent => &self.accent,
        }
    }

    fn role_mut(&mut self, role: Role) -> &mut ColorSelection {
        match role {
            Role::Base => &mut self.base,
            Role::Accent => &mut self.accent,
        }
    }
}

/// Which color plays which part in one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fill: Rgb,
    pub background: Rgb,
}

impl Palette {
    /// Apply the swap policy: base is background and accent is ink, except
    /// for types that swap roles.
    pub fn for_type(pattern_type: Option<PatternType>, base: Rgb, accent: Rgb) -> Self {
        if pattern_type.is_some_and(|t| t.swaps_roles()) {
            Palette { fill: base, background: accent }
        } else {
            Palette { fill: accent, background: base }
        }
    }
}

pub struct Session {
    patterns: PatternCatalog,
    colors: ColorCatalogs,
    selection: Selection,
    /// Last custom value per role, restored when cycling back to custom
    custom: [CustomColor; 2],
    surface: Surface,
}

fn slot(role: Role) -> usize {
    match role {
        Role::Base => 0,
        Role::Accent => 1,
    }
}

impl Session {
    /// Start a session with the first pattern and first color of each role.
    pub fn new(catalogs: Catalogs) -> Result<Self> {
        let Catalogs { patterns, colors } = catalogs;

        let pattern = patterns.first().ok_or(Error::EmptyCatalog("pattern"))?.name.clone();
        let base = colors.base.first().ok_or(Error::EmptyCatalog("base color"))?.id.clone();
        let accent = colors.accent.first().ok_or(Error::EmptyCatalog("accent color"))?.id.clone();

        Ok(Self {
            patterns,
            colors,
            selection: Selection {
                pattern: Some(pattern),
                base: ColorSelection::Preset(base),
                accent: ColorSelection::Preset(accent),
            },
            custom: [CustomColor::from_rgb(Rgb::WHITE), CustomColor::from_rgb(Rgb::BLACK)],
            surface: Surface::new()?,
        })
    }

    /// Load both catalogs (in parallel) and start a session.
    pub fn load(
        pattern_path: impl Into<std::path::PathBuf>,
        color_path: impl Into<std::path::PathBuf>,
    ) -> Result<Self> {
        Self::new(catalog::load_catalogs(pattern_path, color_path)?)
    }

    pub fn patterns(&self) -> &PatternCatalog {
        &self.patterns
    }

    pub fn colors(&self) -> &ColorCatalogs {
        &self.colors
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Replace the whole selection without validating it.
    ///
    /// Stale names are tolerated here and show up at render time.
    pub fn set_selection(&mut self, selection: Selection) {
        for role in Role::all() {
            if let ColorSelection::Custom(c) = selection.role(role) {
                self.custom[slot(role)] = c.clone();
            }
        }
        self.selection = selection;
    }

    /// The currently selected spec, if the name is in the catalog.
    pub fn current_spec(&self) -> Option<&PatternSpec> {
        self.selection.pattern.as_deref().and_then(|name| self.patterns.get(name))
    }

    pub fn select_pattern(&mut self, name: &str) -> Result<()> {
        if self.patterns.get(name).is_none() {
            return Err(Error::MissingPatternSpec(name.to_string()));
        }
        self.selection.pattern = Some(name.to_string());
        Ok(())
    }

    /// Set a role's selection. Preset ids are checked against the palette.
    pub fn set_color(&mut self, role: Role, selection: ColorSelection) -> Result<()> {
        match &selection {
            ColorSelection::Preset(id) if self.colors.role(role).get(id).is_none() => {
                return Err(Error::UnknownColorId { role, id: id.clone() });
            }
            ColorSelection::Custom(c) => self.custom[slot(role)] = c.clone(),
            ColorSelection::Preset(_) => {}
        }
        *self.selection.role_mut(role) = selection;
        Ok(())
    }

    pub fn set_base(&mut self, selection: ColorSelection) -> Result<()> {
        self.set_color(Role::Base, selection)
    }

    pub fn set_accent(&mut self, selection: ColorSelection) -> Result<()> {
        self.set_color(Role::Accent, selection)
    }

    /// Step through the pattern catalog, wrapping at both ends.
    pub fn cycle_pattern(&mut self, step: isize) {
        let len = self.patterns.len();
        if len == 0 {
            return;
        }
        let current = self
            .selection
            .pattern
            .as_deref()
            .and_then(|name| self.patterns.position(name));
        let next = match current {
            Some(i) => wrap(i, step, len),
            None => 0,
        };
        self.selection.pattern = self.patterns.specs().get(next).map(|p| p.name.clone());
    }

    /// Step through a role's palette followed by the custom option.
    pub fn cycle_color(&mut self, role: Role, step: isize) {
        let palette = self.colors.role(role);
        // One extra slot at the end for "custom"
        let len = palette.len() + 1;
        let current = match self.selection.role(role) {
            ColorSelection::Preset(id) => palette.position(id).unwrap_or(0),
            ColorSelection::Custom(_) => palette.len(),
        };

        let next = wrap(current, step, len);
        let selection = match palette.entries().get(next) {
            Some(spec) => ColorSelection::Preset(spec.id.clone()),
            None => ColorSelection::Custom(self.custom[slot(role)].clone()),
        };
        *self.selection.role_mut(role) = selection;
    }

    pub fn cycle_base(&mut self, step: isize) {
        self.cycle_color(Role::Base, step);
    }

    pub fn cycle_accent(&mut self, step: isize) {
        self.cycle_color(Role::Accent, step);
    }

    /// Resolve one role's current selection.
    pub fn resolve(&self, role: Role) -> Result<Rgb> {
        resolve(self.selection.role(role), self.colors.role(role))
    }

    /// Fill and background for the current pattern, after the swap policy.
    pub fn palette(&self) -> Result<Palette> {
        let base = self.resolve(Role::Base)?;
        let accent = self.resolve(Role::Accent)?;
        let pattern_type = self.current_spec().and_then(|s| s.pattern_type());
        Ok(Palette::for_type(pattern_type, base, accent))
    }

    /// Repaint the surface from the current selection.
    ///
    /// A missing or unknown pattern name leaves the surface untouched.
    /// An unknown preset color id is an error.
    pub fn render_current(&mut self) -> Result<RenderOutcome> {
        let Some(spec) = self.current_spec() else {
            match &self.selection.pattern {
                Some(name) => log::warn!("{}", Error::MissingPatternSpec(name.clone())),
                None => log::debug!("no pattern selected"),
            }
            return Ok(RenderOutcome::NoPattern);
        };

        let base = self.resolve(Role::Base)?;
        let accent = self.resolve(Role::Accent)?;
        let palette = Palette::for_type(spec.pattern_type(), base, accent);

        // `spec` borrows the catalog, `surface` is a disjoint field
        let spec = spec.clone();
        Ok(render(&mut self.surface, &spec, palette.fill, palette.background))
    }
}

fn wrap(index: usize, step: isize, len: usize) -> usize {
    (index as isize + step).rem_euclid(len as isize) as usize
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("patterns", &self.patterns.len())
            .field("selection", &self.selection)
            .field("surface", &self.surface)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
