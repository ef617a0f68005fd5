//! Diagonal check - a checkerboard turned 45°.
//!
//! Each `spacing` cell gets a filled diamond whose corners sit on the
//! midpoints of the cell edges. Ink diamonds meet tip to tip; the gaps
//! between them are background diamonds of the same size centred on the
//! cell corners, so the two colors tile the plane with no seams.
//!
//! The diamonds are built as explicit four-point polygons rather than by
//! rotating the canvas, so no transform exists to leak into a later draw.

use crate::geometry::{Mark, Point};
use super::util::cells;

/// Generate diamond-check marks over a `width`×`height` canvas.
pub fn generate_diacheck_tiles(width: f64, height: f64, spacing: f64) -> Vec<Mark> {
    let half = spacing / 2.0;

    cells(width, height, spacing)
        .into_iter()
        .map(|cell| {
            let cx = cell.x + half;
            let cy = cell.y + half;
            Mark::Polygon(vec![
                Point::new(cx, cy - half),
                Point::new(cx + half, cy),
                Point::new(cx, cy + half),
                Point::new(cx - half, cy),
            ])
        })
        .collect()
}

/// Checker coordinates of `(x, y)` in the 45°-rotated frame.
///
/// Diamond edges lie on the lines `x + y = s/2 + k·s` and
/// `x - y = s/2 + k·s`; crossing either family steps one coordinate.
pub fn diamond_coords(x: f64, y: f64, spacing: f64) -> (i64, i64) {
    let half = spacing / 2.0;
    let u = ((x + y + half) / spacing).floor() as i64;
    let v = ((x - y - half) / spacing).floor() as i64;
    (u, v)
}

/// Is `(x, y)` inside an ink diamond? Even parity in the rotated frame.
pub fn is_diamond_ink(x: f64, y: f64, spacing: f64) -> bool {
    let (u, v) = diamond_coords(x, y, spacing);
    (u + v).rem_euclid(2) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_diamond_per_cell() {
        let marks = generate_diacheck_tiles(120.0, 120.0, 20.0);
        assert_eq!(marks.len(), 36);
    }

    #[test]
    fn diamond_corners_on_edge_midpoints() {
        let marks = generate_diacheck_tiles(20.0, 20.0, 20.0);
        assert_eq!(
            marks,
            vec![Mark::Polygon(vec![
                Point::new(10.0, 0.0),
                Point::new(20.0, 10.0),
                Point::new(10.0, 20.0),
                Point::new(0.0, 10.0),
            ])]
        );
    }

    #[test]
    fn centres_are_ink_corners_are_background() {
        let s = 16.0;
        for row in 0..4 {
            for col in 0..4 {
                let (x, y) = (col as f64 * s, row as f64 * s);
                assert!(is_diamond_ink(x + s / 2.0, y + s / 2.0, s));
                assert!(!is_diamond_ink(x, y, s));
                // Just inside the top tip of the diamond
                assert!(is_diamond_ink(x + s / 2.0, y + 1.0, s));
                // Halfway along the cell's top edge, off the tip
                assert!(!is_diamond_ink(x + s / 4.0 - 1.0, y + 1.0, s));
            }
        }
    }

    #[test]
    fn rotated_parity_alternates_along_a_diagonal() {
        let s = 10.0;
        // Along y = x, cell corners and cell centres alternate every half cell.
        let inks: Vec<bool> = (0..6)
            .map(|k| {
                let t = k as f64 * s / 2.0 + 0.5;
                is_diamond_ink(t, t, s)
            })
            .collect();
        assert_eq!(inks, vec![false, true, false, true, false, true]);
    }
}
