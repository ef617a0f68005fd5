//! TUI application state.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use image::{imageops, DynamicImage, RgbaImage};
use rand::Rng;
use ratatui::widgets::ListState;
use ratatui_image::{picker::{Picker, ProtocolType}, protocol::StatefulProtocol};

use pattex::{ColorSelection, CustomColor, RenderOutcome, Rgb, Role, Session, Surface};

use crate::cli::{CommonArgs, SessionFile};
use crate::export;

pub const MIN_SCALE: u32 = 1;
pub const MAX_SCALE: u32 = 8;
const DEFAULT_SCALE: u32 = 3;

/// Session file written by `w` when none was given.
const DEFAULT_SESSION_FILE: &str = "pattex-session.yaml";

/// Session plus the catalog files it was loaded from.
type Loaded = (Session, (PathBuf, PathBuf));

/// How a custom color is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `#rgb` or `#rrggbb`
    Hex,
    /// `r,g,b` or `r g b`
    Rgb,
}

impl InputKind {
    pub fn accepts(self, c: char) -> bool {
        match self {
            InputKind::Hex => c.is_ascii_hexdigit() || c == '#',
            InputKind::Rgb => c.is_ascii_digit() || c == ',' || c == ' ',
        }
    }

    pub fn max_len(self) -> usize {
        match self {
            InputKind::Hex => 7,
            InputKind::Rgb => 15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputKind::Hex => "hex",
            InputKind::Rgb => "R,G,B",
        }
    }
}

/// Text entry for a custom color.
pub struct ColorInput {
    pub role: Role,
    pub kind: InputKind,
    pub buffer: String,
}

/// Turn typed text into a custom color.
///
/// Valid hex also becomes the triplet, so the saved fields agree. Malformed
/// hex is kept with `previous` as the triplet; resolution then falls back
/// to `previous`. RGB text needs exactly three channels.
pub fn custom_from_entry(kind: InputKind, text: &str, previous: Rgb) -> Result<CustomColor, String> {
    let text = text.trim();
    match kind {
        InputKind::Hex => {
            let rgb = Rgb::from_hex(text).unwrap_or(previous);
            Ok(CustomColor { rgb, hex: text.to_string() })
        }
        InputKind::Rgb => {
            let parts: Vec<&str> = if text.contains(',') {
                text.split(',').collect()
            } else {
                text.split_whitespace().collect()
            };
            match parts[..] {
                [r, g, b] => Ok(CustomColor::from_fields("", r, g, b)),
                _ => Err(format!("expected three channels, got '{}'", text)),
            }
        }
    }
}

/// Application state for TUI
pub struct App {
    /// `None` until the background load finishes
    pub session: Option<Session>,
    /// Receives the loaded session exactly once
    load_rx: Option<Receiver<Result<Loaded, String>>>,
    /// Flags the TUI was started with
    args: CommonArgs,
    /// Pattern and color catalogs in use, once loaded
    catalog_paths: Option<(PathBuf, PathBuf)>,
    /// Highlighted row in the pattern list
    pub pattern_state: ListState,
    /// Custom color being typed, if any
    pub input: Option<ColorInput>,
    /// Nearest-neighbour preview scale, 1..=8
    pub scale: u32,
    /// Last status or error line
    pub status: String,
    pub should_quit: bool,
    /// Animation frame counter for spinner
    pub spinner_frame: usize,
    /// Image picker for terminal protocol detection
    picker: Picker,
    /// Current rendered image protocol state
    pub image_state: Option<Box<dyn StatefulProtocol>>,
    /// Flag to indicate image needs re-rendering
    needs_render: bool,
}

impl App {
    /// Start loading catalogs on a background thread.
    pub fn new(args: CommonArgs) -> Self {
        let (tx, rx) = mpsc::channel();
        let load_args = args.clone();
        thread::spawn(move || {
            let _ = tx.send(load_args.open_session());
        });

        // Initialize image picker - force Sixel protocol
        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        App {
            session: None,
            load_rx: Some(rx),
            args,
            catalog_paths: None,
            pattern_state: ListState::default(),
            input: None,
            scale: DEFAULT_SCALE,
            status: "Loading catalogs...".to_string(),
            should_quit: false,
            spinner_frame: 0,
            picker,
            image_state: None,
            needs_render: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_none()
    }

    /// Non-blocking check for the loaded session.
    ///
    /// Returns an error if loading failed; the TUI exits with it.
    pub fn check_load(&mut self) -> Result<(), String> {
        let Some(rx) = &self.load_rx else {
            return Ok(());
        };
        match rx.try_recv() {
            Ok(result) => {
                self.load_rx = None;
                let (session, paths) = result?;
                self.status = format!(
                    "{} patterns, {} base, {} accent colors",
                    session.patterns().len(),
                    session.colors().base.len(),
                    session.colors().accent.len()
                );
                self.session = Some(session);
                self.catalog_paths = Some(paths);
                self.sync_list();
                self.needs_render = true;
                Ok(())
            }
            Err(mpsc::TryRecvError::Empty) => Ok(()),
            Err(mpsc::TryRecvError::Disconnected) => Err("catalog loader stopped unexpectedly".to_string()),
        }
    }

    /// Repaint the surface and rebuild the preview if anything changed.
    pub fn update_image(&mut self) {
        if !self.needs_render {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.needs_render = false;

        match session.render_current() {
            Ok(outcome) => {
                if outcome == RenderOutcome::BackgroundOnly {
                    self.status = "Unknown pattern type: background only".to_string();
                }
                let img = preview_image(session.surface(), self.scale);
                self.image_state = Some(self.picker.new_resize_protocol(img));
            }
            Err(e) => {
                log::error!("render failed: {}", e);
                self.status = format!("Error: {}", e);
            }
        }
    }

    fn changed(&mut self) {
        self.sync_list();
        self.needs_render = true;
    }

    /// Point the list highlight at the selected pattern.
    fn sync_list(&mut self) {
        let index = self.session.as_ref().and_then(|s| {
            let name = s.selection().pattern.as_deref()?;
            s.patterns().position(name)
        });
        self.pattern_state.select(index);
    }

    pub fn cycle_pattern(&mut self, step: isize) {
        if let Some(session) = self.session.as_mut() {
            session.cycle_pattern(step);
            self.changed();
        }
    }

    pub fn cycle_color(&mut self, role: Role, step: isize) {
        if let Some(session) = self.session.as_mut() {
            session.cycle_color(role, step);
            self.status = format!("{}: {}", role, session.selection().role(role).describe());
            self.changed();
        }
    }

    pub fn zoom(&mut self, delta: i32) {
        let scale = (self.scale as i32 + delta).clamp(MIN_SCALE as i32, MAX_SCALE as i32) as u32;
        if scale != self.scale {
            self.scale = scale;
            // Display only: the surface itself is unchanged
            self.needs_render = true;
        }
    }

    /// Pick a random pattern, base and accent from the catalogs.
    pub fn randomize(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let mut rng = rand::rng();

        let patterns = session.patterns().len();
        if patterns > 0 {
            session.cycle_pattern(rng.random_range(0..patterns) as isize);
        }
        for role in Role::all() {
            let len = session.colors().role(role).len();
            if len > 0 {
                let index = rng.random_range(0..len);
                let id = session.colors().role(role).entries()[index].id.clone();
                if let Err(e) = session.set_color(role, ColorSelection::Preset(id)) {
                    log::warn!("randomize {}: {}", role, e);
                }
            }
        }
        self.status = "Randomized".to_string();
        self.changed();
    }

    pub fn start_input(&mut self, role: Role, kind: InputKind) {
        if self.session.is_some() {
            let buffer = match kind {
                InputKind::Hex => "#".to_string(),
                InputKind::Rgb => String::new(),
            };
            self.input = Some(ColorInput { role, kind, buffer });
        }
    }

    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    /// Apply the typed text as a custom color.
    pub fn commit_input(&mut self) {
        let (Some(input), Some(session)) = (self.input.take(), self.session.as_mut()) else {
            return;
        };

        let previous = match session.selection().role(input.role) {
            ColorSelection::Custom(c) => c.color(),
            ColorSelection::Preset(_) => session.resolve(input.role).unwrap_or_default(),
        };
        let custom = match custom_from_entry(input.kind, &input.buffer, previous) {
            Ok(custom) => custom,
            Err(e) => {
                self.status = format!("Error: {}", e);
                return;
            }
        };

        self.status = match custom.try_color() {
            Ok(rgb) => format!("{}: custom {}", input.role, rgb.to_hex()),
            Err(e) => format!("{} (keeping {})", e, previous.to_hex()),
        };
        if let Err(e) = session.set_color(input.role, ColorSelection::Custom(custom)) {
            self.status = format!("Error: {}", e);
        }
        self.changed();
    }

    pub fn save_png(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let name = session.selection().pattern.clone().unwrap_or_default();
        self.status = match export::save_timestamped(session.surface(), Path::new("."), &name) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => format!("Error: {}", e),
        };
    }

    pub fn copy_clipboard(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        self.status = match export::copy_to_clipboard(session.surface()) {
            Ok(()) => "Copied to clipboard".to_string(),
            Err(e) => format!("Error: {}", e),
        };
    }

    pub fn save_session(&mut self) {
        let (Some(session), Some((patterns, colors))) = (self.session.as_ref(), self.catalog_paths.as_ref()) else {
            return;
        };
        let path = self.args.session.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));
        let file = SessionFile::capture(session, patterns, colors);
        self.status = match file.save(&path) {
            Ok(()) => format!("Session saved to {}", path.display()),
            Err(e) => format!("Error: {}", e),
        };
    }
}

/// Upscale the surface for display with nearest-neighbour sampling.
pub fn preview_image(surface: &Surface, scale: u32) -> DynamicImage {
    let (w, h) = (surface.width(), surface.height());
    let Some(base) = RgbaImage::from_raw(w, h, surface.rgba().to_vec()) else {
        return DynamicImage::new_rgba8(w, h);
    };
    let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    if scale == 1 {
        return DynamicImage::ImageRgba8(base);
    }
    let scaled = imageops::resize(&base, w * scale, h * scale, imageops::FilterType::Nearest);
    DynamicImage::ImageRgba8(scaled)
}
