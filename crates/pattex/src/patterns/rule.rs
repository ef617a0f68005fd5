//! Rulings - evenly spaced full-length vertical or horizontal lines.
//!
//! The first line sits half a spacing in from the edge and lines continue
//! while the position is below `extent + 1`, so when the spacing divides
//! the canvas the outermost stripes are symmetric instead of one being
//! cut in half. A position past the far edge is still dropped: no line is
//! ever drawn outside `[0, extent]`.

use crate::geometry::{Line, Mark};
use super::util::steps;

/// Which way the lines run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Generate ruled lines over a `width`×`height` canvas.
pub fn generate_rule_tiles(
    width: f64,
    height: f64,
    spacing: f64,
    orientation: Orientation,
) -> Vec<Mark> {
    let extent = match orientation {
        Orientation::Vertical => width,
        Orientation::Horizontal => height,
    };

    steps(spacing / 2.0, extent + 1.0, spacing)
        .filter(|&(_, pos)| pos <= extent)
        .map(|(_, pos)| {
            let line = match orientation {
                Orientation::Vertical => Line::new(pos, 0.0, pos, height),
                Orientation::Horizontal => Line::new(0.0, pos, width, pos),
            };
            Mark::Stroke(line)
        })
        .collect()
}
