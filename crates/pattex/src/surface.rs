//! Raster surface the renderer paints into.
//!
//! A thin wrapper over `tiny_skia::Pixmap`. Every draw call passes
//! `Transform::identity()`: tiny-skia keeps no current-transform state on
//! the pixmap, so nothing a diagonal tiling does can carry over into the
//! next render.

use std::path::Path;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Mark;

/// Width and height of the pattern canvas, in pixels.
pub const CANVAS_SIZE: u32 = 120;

/// A square RGBA raster, repainted in full on every render.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// A `CANVAS_SIZE` square surface.
    pub fn new() -> Result<Self> {
        Self::with_dimension(CANVAS_SIZE)
    }

    /// A square surface of an arbitrary side.
    pub fn with_dimension(dimension: u32) -> Result<Self> {
        let pixmap = Pixmap::new(dimension, dimension).ok_or(Error::Surface(dimension))?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgb) {
        self.pixmap.fill(color.into());
    }

    /// Rasterize `marks` in `ink`. Strokes use `line_width`.
    pub fn paint(&mut self, marks: &[Mark], ink: Rgb, line_width: f64) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(ink.r, ink.g, ink.b, 255);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: line_width as f32,
            ..Stroke::default()
        };

        for mark in marks {
            match mark {
                Mark::Disc { center, radius } => {
                    if let Some(path) =
                        PathBuilder::from_circle(center.x as f32, center.y as f32, *radius as f32)
                    {
                        self.pixmap.fill_path(
                            &path,
                            &paint,
                            FillRule::Winding,
                            Transform::identity(),
                            None,
                        );
                    }
                }
                Mark::Rect { x, y, width, height } => {
                    if let Some(rect) =
                        Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32)
                    {
                        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                    }
                }
                Mark::Polygon(points) => {
                    let mut pb = PathBuilder::new();
                    for (i, p) in points.iter().enumerate() {
                        if i == 0 {
                            pb.move_to(p.x as f32, p.y as f32);
                        } else {
                            pb.line_to(p.x as f32, p.y as f32);
                        }
                    }
                    pb.close();
                    if let Some(path) = pb.finish() {
                        self.pixmap.fill_path(
                            &path,
                            &paint,
                            FillRule::Winding,
                            Transform::identity(),
                            None,
                        );
                    }
                }
                Mark::Stroke(line) => {
                    let mut pb = PathBuilder::new();
                    pb.move_to(line.x1 as f32, line.y1 as f32);
                    pb.line_to(line.x2 as f32, line.y2 as f32);
                    if let Some(path) = pb.finish() {
                        self.pixmap
                            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                    }
                }
            }
        }
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    ///
    /// All paint is opaque, so premultiplied and straight values agree.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        // Pixmap::pixel only checks the flat index, so (w, 0) would read (0, 1)
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap
            .pixel(x, y)
            .map(|p| Rgb::new(p.red(), p.green(), p.blue()))
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn rgba(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// PNG encoding of the exact pixel content.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap.encode_png().map_err(|e| Error::Encode(e.to_string()))
    }

    /// Write the surface to `path` as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap.save_png(path).map_err(|e| Error::Encode(format!("{}: {}", path.display(), e)))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width() && self.rgba() == other.rgba()
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Surface({}x{})", self.width(), self.height())
    }
}
