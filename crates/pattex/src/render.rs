//! Pattern renderer: one spec, two resolved colors, one full repaint.
//!
//! The renderer never decides which role is ink. It receives colors
//! already labelled `fill` and `background`; the role swap happens in
//! [`crate::session::Session`].

use crate::catalog::PatternSpec;
use crate::color::Rgb;
use crate::surface::Surface;

/// What a render call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Background cleared and tiles drawn.
    Painted,
    /// Background cleared only (pattern type outside the closed set).
    BackgroundOnly,
    /// Nothing touched: no pattern is selected or the name is stale.
    NoPattern,
}

/// Repaint `surface` with `spec`'s tiling.
///
/// 1. clear everything to `background`
/// 2. generate marks for the surface extent (no transform state exists)
/// 3. paint them in `fill` with the pattern's line width
///
/// A spec with an unrecognized type stops after the clear.
pub fn render(surface: &mut Surface, spec: &PatternSpec, fill: Rgb, background: Rgb) -> RenderOutcome {
    surface.clear(background);

    let Some(tiling) = spec.tiling else {
        log::warn!(
            "pattern '{}' has unknown type '{}', drawing background only",
            spec.name,
            spec.type_tag
        );
        return RenderOutcome::BackgroundOnly;
    };

    let marks = tiling.generate(surface.width() as f64, surface.height() as f64);
    log::debug!(
        "render '{}' ({}): {} marks, fill {}, background {}",
        spec.name,
        tiling.pattern_type(),
        marks.len(),
        fill.to_hex(),
        background.to_hex()
    );
    surface.paint(&marks, fill, tiling.line_width());

    RenderOutcome::Painted
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::is_diamond_ink;

    fn spec(name: &str, tag: &str, pairs: &[(&str, f64)]) -> PatternSpec {
        let settings = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        PatternSpec::from_parts(name, tag, settings).unwrap()
    }

    fn only_colors(surface: &Surface, allowed: &[Rgb]) -> bool {
        (0..surface.height()).all(|y| {
            (0..surface.width()).all(|x| allowed.contains(&surface.pixel(x, y).unwrap()))
        })
    }

    #[test]
    fn render_is_idempotent() {
        let dots = spec("dots1", "dot", &[("spacing", 20.0), ("size", 10.0)]);
        let mut a = Surface::new().unwrap();
        let mut b = Surface::new().unwrap();

        render(&mut a, &dots, Rgb::BLACK, Rgb::WHITE);
        render(&mut b, &dots, Rgb::BLACK, Rgb::WHITE);
        assert_eq!(a, b);

        // Re-rendering over a used surface gives the same pixels too
        render(&mut a, &spec("s", "stripe", &[("spacing", 7.0), ("angle", 30.0)]), Rgb::WHITE, Rgb::BLACK);
        render(&mut a, &dots, Rgb::BLACK, Rgb::WHITE);
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_type_is_a_plain_clear() {
        let weird = spec("w", "spiral", &[("spacing", 10.0)]);
        let mut surface = Surface::new().unwrap();
        surface.clear(Rgb::new(1, 2, 3));

        let outcome = render(&mut surface, &weird, Rgb::BLACK, Rgb::new(200, 200, 200));
        assert_eq!(outcome, RenderOutcome::BackgroundOnly);
        assert!(only_colors(&surface, &[Rgb::new(200, 200, 200)]));
    }

    #[test]
    fn dots_on_a_staggered_grid() {
        let dots = spec("dots1", "dot", &[("spacing", 20.0), ("size", 10.0)]);
        let mut surface = Surface::new().unwrap();
        render(&mut surface, &dots, Rgb::BLACK, Rgb::WHITE);

        // Row 0 dot centres at x = 10, 30, ...; row 1 at x = 20, 40, ...
        assert_eq!(surface.pixel(10, 10), Some(Rgb::BLACK));
        assert_eq!(surface.pixel(20, 10), Some(Rgb::WHITE));
        assert_eq!(surface.pixel(20, 30), Some(Rgb::BLACK));
        assert_eq!(surface.pixel(30, 30), Some(Rgb::WHITE));
        // Between rows
        assert_eq!(surface.pixel(10, 20), Some(Rgb::WHITE));
        // Leading half-dot of the shifted row
        assert_eq!(surface.pixel(0, 30), Some(Rgb::BLACK));
    }

    #[test]
    fn stripes_ink_every_band() {
        for angle in [0.0, 5.0, 10.0, 20.0, 45.0, 160.0, 175.0, -10.0] {
            let stripe = spec("s", "stripe", &[("spacing", 10.0), ("angle", angle), ("lineWidth", 3.0)]);
            let mut surface = Surface::new().unwrap();
            render(&mut surface, &stripe, Rgb::BLACK, Rgb::WHITE);

            for band in 0..6u32 {
                let ink = (band * 20..band * 20 + 20)
                    .flat_map(|y| (0..surface.width()).map(move |x| (x, y)))
                    .filter(|&(x, y)| surface.pixel(x, y) != Some(Rgb::WHITE))
                    .count();
                assert!(ink > 400, "angle {angle}, band {band}: {ink} inked pixels");
            }
        }
    }

    #[test]
    fn check_parity_per_cell() {
        let check = spec("c", "check", &[("spacing", 12.0)]);
        let mut surface = Surface::new().unwrap();
        render(&mut surface, &check, Rgb::WHITE, Rgb::BLACK);

        for row in 0..10u32 {
            for col in 0..10u32 {
                let expected = if (col + row) % 2 == 0 { Rgb::WHITE } else { Rgb::BLACK };
                let (x, y) = (col * 12 + 6, row * 12 + 6);
                assert_eq!(surface.pixel(x, y), Some(expected), "cell ({col}, {row})");
            }
        }
    }

    #[test]
    fn diacheck_parity_in_rotated_frame() {
        let s = 20.0;
        let dia = spec("d", "diacheck", &[("spacing", s)]);
        let mut surface = Surface::new().unwrap();
        render(&mut surface, &dia, Rgb::BLACK, Rgb::WHITE);

        // Sample pixel centres well away from diamond edges.
        for y in 0..120u32 {
            for x in 0..120u32 {
                let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
                let cx = px.rem_euclid(s) - s / 2.0;
                let cy = py.rem_euclid(s) - s / 2.0;
                let edge_distance = ((cx.abs() + cy.abs()) - s / 2.0).abs();
                if edge_distance < 2.0 {
                    continue;
                }
                let expected = if is_diamond_ink(px, py, s) { Rgb::BLACK } else { Rgb::WHITE };
                assert_eq!(surface.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn grid_blocks_cover_the_canvas() {
        let grid = spec("g", "grid", &[("spacing", 12.0)]);
        let mut surface = Surface::new().unwrap();
        render(&mut surface, &grid, Rgb::BLACK, Rgb::WHITE);
        assert!(only_colors(&surface, &[Rgb::BLACK]));
    }

    #[test]
    fn vertical_rulings_land_on_expected_columns() {
        let v = spec("v", "vertical", &[("spacing", 12.0), ("lineWidth", 2.0)]);
        let mut surface = Surface::new().unwrap();
        render(&mut surface, &v, Rgb::WHITE, Rgb::BLACK);

        // A 2px line centred on x = 6 covers pixel columns 5 and 6.
        for k in 0..10u32 {
            let x = 6 + 12 * k;
            assert_eq!(surface.pixel(x - 1, 60), Some(Rgb::WHITE));
            assert_eq!(surface.pixel(x, 60), Some(Rgb::WHITE));
            assert_eq!(surface.pixel(x + 3, 60), Some(Rgb::BLACK));
        }
    }

    #[test]
    fn horizontal_is_vertical_transposed() {
        let v = spec("v", "vertical", &[("spacing", 10.0), ("lineWidth", 2.0)]);
        let h = spec("h", "horizontal", &[("spacing", 10.0), ("lineWidth", 2.0)]);
        let mut sv = Surface::new().unwrap();
        let mut sh = Surface::new().unwrap();
        render(&mut sv, &v, Rgb::WHITE, Rgb::BLACK);
        render(&mut sh, &h, Rgb::WHITE, Rgb::BLACK);

        for y in 0..120 {
            for x in 0..120 {
                assert_eq!(sv.pixel(x, y), sh.pixel(y, x));
            }
        }
    }
}
