//! Dot pattern - staggered polka dots.
//!
//! Rows sit `spacing` apart. Odd rows shift right by half a cell, the
//! same running-bond offset bricks use, so dots never line up vertically
//! on adjacent rows.

use crate::geometry::{Mark, Point};
use super::util::steps;

/// Generate staggered dot marks over a `width`×`height` canvas.
///
/// Each dot is a disc of diameter `size` centred in its cell. Cells start
/// one full spacing left of the canvas so a shifted row still gets its
/// leading (half-visible) dot at the left edge.
pub fn generate_dot_tiles(width: f64, height: f64, spacing: f64, size: f64) -> Vec<Mark> {
    let radius = size / 2.0;
    let half = spacing / 2.0;
    let mut marks = Vec::new();

    for (row, y) in steps(0.0, height, spacing) {
        let row_offset = if row % 2 == 1 { half } else { 0.0 };

        for (_, x) in steps(-spacing, width, spacing) {
            let center = Point::new(x + half + row_offset, y + half);
            let dot = Mark::Disc { center, radius };
            if dot.touches_canvas(width, height) {
                marks.push(dot);
            }
        }
    }

    marks
}
