//! Grid pattern - a block at every lattice cell.
//!
//! Squares of side `size` on a `spacing` pitch. With the default
//! `size == spacing` the blocks butt together; a smaller size leaves
//! background gutters between them.

use crate::geometry::Mark;
use super::util::cells;

/// Generate grid blocks over a `width`×`height` canvas.
pub fn generate_grid_tiles(width: f64, height: f64, spacing: f64, size: f64) -> Vec<Mark> {
    cells(width, height, spacing)
        .into_iter()
        .map(|cell| Mark::Rect {
            x: cell.x,
            y: cell.y,
            width: size,
            height: size,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_block_per_cell() {
        let marks = generate_grid_tiles(120.0, 120.0, 12.0, 12.0);
        assert_eq!(marks.len(), 100);
    }

    #[test]
    fn partial_last_cell_still_drawn() {
        // 120 / 50 leaves a 20-unit strip; it still gets a block.
        let marks = generate_grid_tiles(120.0, 120.0, 50.0, 50.0);
        assert_eq!(marks.len(), 9);
        assert!(marks.contains(&Mark::Rect { x: 100.0, y: 100.0, width: 50.0, height: 50.0 }));
    }

    #[test]
    fn blocks_use_size_not_pitch() {
        let marks = generate_grid_tiles(40.0, 40.0, 20.0, 8.0);
        assert_eq!(marks[1], Mark::Rect { x: 20.0, y: 0.0, width: 8.0, height: 8.0 });
    }
}
