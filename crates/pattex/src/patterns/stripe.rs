//! Stripe pattern - parallel angled lines.
//!
//! Lines run along `u = (cos a, sin a)` and sit one `spacing` apart along
//! the normal `n = (-sin a, cos a)`. The offsets come from projecting the
//! four canvas corners onto `n`, so every angle, horizontal included,
//! covers the canvas. Offsets are whole multiples of `spacing`, which keeps
//! the lattice anchored to the origin. Each segment reaches `width + height`
//! both ways from its foot point, longer than any chord of the canvas.

use crate::geometry::{Line, Mark};
use super::util::{steps, LineDirection};

/// Generate angled stripe segments over a `width`×`height` canvas.
///
/// `angle_degrees` is measured from the horizontal, y down.
pub fn generate_stripe_tiles(
    width: f64,
    height: f64,
    spacing: f64,
    angle_degrees: f64,
) -> Vec<Mark> {
    let dir = LineDirection::from_degrees(angle_degrees);
    let (nx, ny) = (-dir.dy, dir.dx);
    let (ux, uy) = dir.scaled(width + height);

    let (lo, hi) = [(0.0, 0.0), (width, 0.0), (0.0, height), (width, height)]
        .iter()
        .map(|&(x, y)| x * nx + y * ny)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| (lo.min(c), hi.max(c)));
    let first = (lo / spacing).floor() * spacing - spacing;

    let mut marks = Vec::new();
    for (_, offset) in steps(first, hi + spacing, spacing) {
        let (px, py) = (offset * nx, offset * ny);
        let mark = Mark::Stroke(Line::new(px - ux, py - uy, px + ux, py + uy));
        if mark.touches_canvas(width, height) {
            marks.push(mark);
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(marks: &[Mark]) -> Vec<Line> {
        marks
            .iter()
            .map(|m| match m {
                Mark::Stroke(line) => *line,
                other => panic!("unexpected mark {:?}", other),
            })
            .collect()
    }

    #[test]
    fn generates_stripe_lines() {
        let marks = generate_stripe_tiles(120.0, 120.0, 10.0, 45.0);
        assert!(!marks.is_empty(), "Should generate stripe lines");
    }

    #[test]
    fn lines_follow_the_angle() {
        for angle in [30.0_f64, 45.0, 60.0, 135.0, -45.0] {
            let marks = generate_stripe_tiles(120.0, 120.0, 10.0, angle);
            let expected = angle.to_radians().tan();
            for line in lines(&marks) {
                let slope = (line.y2 - line.y1) / (line.x2 - line.x1);
                assert!((slope - expected).abs() < 1e-6, "angle {angle}: slope {slope}");
            }
        }
    }

    #[test]
    fn segments_span_the_canvas() {
        // Every row of the canvas must be crossed by at least one stripe.
        let marks = generate_stripe_tiles(120.0, 120.0, 8.0, 60.0);
        let segs = lines(&marks);
        for y in [0.0, 30.0, 60.0, 119.0] {
            let hit = segs
                .iter()
                .any(|l| l.y1.min(l.y2) <= y && l.y1.max(l.y2) >= y);
            assert!(hit, "no stripe crosses y = {y}");
        }
    }

    /// Does `line` pass through the canvas strip `y0..y1`?
    fn crosses_band(line: &Line, width: f64, y0: f64, y1: f64) -> bool {
        (0..=4000).any(|k| {
            let t = k as f64 / 4000.0;
            let x = line.x1 + (line.x2 - line.x1) * t;
            let y = line.y1 + (line.y2 - line.y1) * t;
            (0.0..=width).contains(&x) && (y0..y1).contains(&y)
        })
    }

    #[test]
    fn every_band_is_covered_at_any_angle() {
        for angle in [0.0, 5.0, 10.0, 20.0, 45.0, 90.0, 160.0, 175.0, -10.0] {
            let segs = lines(&generate_stripe_tiles(120.0, 120.0, 10.0, angle));
            for band in 0..6 {
                let y0 = band as f64 * 20.0;
                assert!(
                    segs.iter().any(|l| crosses_band(l, 120.0, y0, y0 + 20.0)),
                    "angle {angle}: no stripe in rows {y0}..{}",
                    y0 + 20.0
                );
            }
        }
    }

    #[test]
    fn horizontal_stripes_sit_on_spacing_multiples() {
        let segs = lines(&generate_stripe_tiles(120.0, 120.0, 10.0, 0.0));
        let mut ys: Vec<f64> = segs.iter().map(|l| l.y1).collect();
        ys.sort_by(f64::total_cmp);
        let expected: Vec<f64> = (0..=12).map(|i| i as f64 * 10.0).collect();
        assert_eq!(ys.len(), expected.len());
        for (y, e) in ys.iter().zip(&expected) {
            assert!((y - e).abs() < 1e-9, "{y} vs {e}");
        }
    }

    #[test]
    fn neighbours_are_one_spacing_apart() {
        for angle in [20.0_f64, 45.0, 160.0] {
            let (nx, ny) = (-angle.to_radians().sin(), angle.to_radians().cos());
            let mut offsets: Vec<f64> = lines(&generate_stripe_tiles(120.0, 120.0, 7.0, angle))
                .iter()
                .map(|l| l.x1 * nx + l.y1 * ny)
                .collect();
            offsets.sort_by(f64::total_cmp);
            for pair in offsets.windows(2) {
                assert!((pair[1] - pair[0] - 7.0).abs() < 1e-6, "angle {angle}: {pair:?}");
            }
        }
    }

    #[test]
    fn spacing_affects_density() {
        let dense = generate_stripe_tiles(120.0, 120.0, 5.0, 45.0);
        let sparse = generate_stripe_tiles(120.0, 120.0, 20.0, 45.0);
        assert!(dense.len() > sparse.len(), "Smaller spacing should produce more stripes");
    }
}
