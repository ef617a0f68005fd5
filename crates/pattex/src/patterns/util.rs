//! Shared utilities for pattern generation.
//!
//! Every tiling walks a regular lattice over the canvas. These helpers
//! compute lattice positions by index (`start + i * step`) instead of
//! accumulating `x += step`, so long rows do not drift and the same inputs
//! always produce the same marks.

use std::f64::consts::PI;

/// One cell of a square lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Column index (may be negative for cells left of the origin)
    pub col: i64,
    /// Row index
    pub row: i64,
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
}

impl Cell {
    /// `(col + row)` parity, the checkerboard rule.
    #[inline]
    pub fn is_even(&self) -> bool {
        (self.col + self.row).rem_euclid(2) == 0
    }
}

/// Positions `start, start + step, ...` strictly below `end`.
///
/// Returns nothing for a non-positive or non-finite step; catalog
/// validation already rejects those, this only keeps a bad value from
/// looping forever.
pub fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = (i64, f64)> {
    let usable = step.is_finite() && step > 0.0 && start.is_finite() && end.is_finite();
    (0_i64..)
        .map(move |i| (i, start + i as f64 * step))
        .take_while(move |&(_, v)| usable && v < end)
}

/// Lattice cells of pitch `pitch` covering `[0, width) × [0, height)`,
/// row-major, starting at the origin.
pub fn cells(width: f64, height: f64, pitch: f64) -> Vec<Cell> {
    let mut out = Vec::new();
    for (row, y) in steps(0.0, height, pitch) {
        for (col, x) in steps(0.0, width, pitch) {
            out.push(Cell { col, row, x, y });
        }
    }
    out
}

/// Direction vector for angled line generation.
#[derive(Debug, Clone, Copy)]
pub struct LineDirection {
    /// Direction along the lines (unit vector)
    pub dx: f64,
    pub dy: f64,
}

impl LineDirection {
    /// Create line direction from angle in radians.
    pub fn new(angle_rad: f64) -> Self {
        Self {
            dx: angle_rad.cos(),
            dy: angle_rad.sin(),
        }
    }

    /// Create from angle in degrees.
    pub fn from_degrees(angle_degrees: f64) -> Self {
        Self::new(angle_degrees * PI / 180.0)
    }

    /// The direction scaled to length `len`.
    #[inline]
    pub fn scaled(&self, len: f64) -> (f64, f64) {
        (self.dx * len, self.dy * len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stop_before_end() {
        let xs: Vec<f64> = steps(6.0, 121.0, 12.0).map(|(_, x)| x).collect();
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 6.0);
        assert_eq!(xs[9], 114.0);
    }

    #[test]
    fn steps_reject_bad_pitch() {
        assert_eq!(steps(0.0, 100.0, 0.0).count(), 0);
        assert_eq!(steps(0.0, 100.0, -1.0).count(), 0);
        assert_eq!(steps(0.0, 100.0, f64::NAN).count(), 0);
    }

    #[test]
    fn cells_cover_canvas_row_major() {
        let grid = cells(120.0, 120.0, 12.0);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], Cell { col: 0, row: 0, x: 0.0, y: 0.0 });
        assert_eq!(grid[11], Cell { col: 1, row: 1, x: 12.0, y: 12.0 });
    }

    #[test]
    fn cell_parity() {
        assert!(Cell { col: 0, row: 0, x: 0.0, y: 0.0 }.is_even());
        assert!(!Cell { col: 1, row: 0, x: 0.0, y: 0.0 }.is_even());
        assert!(Cell { col: -1, row: 1, x: 0.0, y: 0.0 }.is_even());
    }

    #[test]
    fn direction_from_degrees() {
        let dir = LineDirection::from_degrees(90.0);
        assert!(dir.dx.abs() < 1e-12);
        assert!((dir.dy - 1.0).abs() < 1e-12);
        let (sx, sy) = LineDirection::from_degrees(0.0).scaled(10.0);
        assert_eq!((sx, sy), (10.0, 0.0));
    }
}
