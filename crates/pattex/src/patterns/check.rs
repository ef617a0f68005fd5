//! Checkerboard pattern - blocks on even-parity cells only.

use crate::geometry::Mark;
use super::util::cells;

/// Generate checkerboard blocks: a square at cell (col, row) iff
/// `(col + row)` is even, so the top-left cell is always ink.
pub fn generate_check_tiles(width: f64, height: f64, spacing: f64, size: f64) -> Vec<Mark> {
    cells(width, height, spacing)
        .into_iter()
        .filter(|cell| cell.is_even())
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
    fn half_the_cells_are_filled() {
        let marks = generate_check_tiles(120.0, 120.0, 12.0, 12.0);
        assert_eq!(marks.len(), 50);
    }

    #[test]
    fn filled_cells_have_even_parity() {
        let spacing = 12.0;
        let marks = generate_check_tiles(120.0, 120.0, spacing, spacing);
        for m in &marks {
            let Mark::Rect { x, y, .. } = m else {
                panic!("unexpected mark {:?}", m);
            };
            let col = (x / spacing).round() as i64;
            let row = (y / spacing).round() as i64;
            assert_eq!((col + row) % 2, 0, "cell ({col}, {row}) should be empty");
        }
    }

    #[test]
    fn origin_cell_is_ink() {
        let marks = generate_check_tiles(24.0, 24.0, 12.0, 12.0);
        assert_eq!(
            marks,
            vec![
                Mark::Rect { x: 0.0, y: 0.0, width: 12.0, height: 12.0 },
                Mark::Rect { x: 12.0, y: 12.0, width: 12.0, height: 12.0 },
            ]
        );
    }
}
