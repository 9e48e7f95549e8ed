//! Padded grid layout.
//!
//! The 8x6 puzzle is stored inside a 10x8 array with a one-cell border of
//! sentinel cells on every side. Every real cell therefore has eight
//! in-bounds neighbours, and the search never needs a bounds check: a
//! sentinel never matches a trie child, so the walk stops there.
//!
//! Two index spaces are used:
//! - padded index: `(row + 1) * STRIDE + (col + 1)`, used by the search
//! - cell index: `row * PUZZLE_WIDTH + col`, used for cell mask bits

use crate::config::{PUZZLE_HEIGHT, PUZZLE_SIZE, PUZZLE_WIDTH};

/// Row length of the padded array.
pub const STRIDE: usize = PUZZLE_WIDTH + 2;

/// Total cells in the padded array.
pub const PADDED_SIZE: usize = (PUZZLE_HEIGHT + 2) * STRIDE;

/// Value stored in border cells.
pub const SENTINEL: u8 = 0;

/// The eight neighbour offsets in padded-index space.
///
/// Order: up-left, up, up-right, left, right, down-left, down, down-right.
pub const OFFSETS: [isize; 8] = [
    -(STRIDE as isize) - 1,
    -(STRIDE as isize),
    -(STRIDE as isize) + 1,
    -1,
    1,
    STRIDE as isize - 1,
    STRIDE as isize,
    STRIDE as isize + 1,
];

/// Converts a (row, col) puzzle coordinate to its padded index.
#[inline(always)]
pub const fn padded_index(row: usize, col: usize) -> usize {
    (row + 1) * STRIDE + col + 1
}

/// Converts a cell index (mask bit) to its padded index.
#[inline(always)]
pub const fn cell_to_padded(cell: usize) -> usize {
    padded_index(cell / PUZZLE_WIDTH, cell % PUZZLE_WIDTH)
}

/// Steps from a padded index by one neighbour offset.
///
/// Only called on real cells, whose neighbours are all inside the border.
#[inline(always)]
pub const fn neighbour(padded: usize, offset: isize) -> usize {
    (padded as isize + offset) as usize
}

/// Projects a padded visited array onto a cell mask.
///
/// Bit `row * PUZZLE_WIDTH + col` is set iff that real cell is visited.
#[inline]
pub fn cell_mask(visited: &[bool; PADDED_SIZE]) -> u64 {
    (0..PUZZLE_SIZE).fold(0u64, |mask, cell| {
        mask | (u64::from(visited[cell_to_padded(cell)]) << cell)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_cells_have_in_bounds_neighbours() {
        for cell in 0..PUZZLE_SIZE {
            let padded = cell_to_padded(cell);
            for offset in OFFSETS {
                let next = padded as isize + offset;
                assert!(
                    (0..PADDED_SIZE as isize).contains(&next),
                    "Cell {cell} steps out of the padded array by {offset}"
                );
            }
        }
    }

    #[test]
    fn test_corner_neighbours_include_border() {
        let corner = padded_index(0, 0);
        let border: Vec<usize> = OFFSETS
            .iter()
            .map(|&offset| neighbour(corner, offset))
            .filter(|&idx| idx < STRIDE || idx % STRIDE == 0)
            .collect();
        assert_eq!(border.len(), 5, "Top-left corner touches five border cells");
    }

    #[test]
    fn test_cell_mask_projects_row_major() {
        let mut visited = [false; PADDED_SIZE];
        visited[padded_index(0, 0)] = true;
        visited[padded_index(0, 5)] = true;
        visited[padded_index(7, 5)] = true;
        // border cells are ignored
        visited[0] = true;
        assert_eq!(cell_mask(&visited), 1 | (1 << 5) | (1 << 47));
    }
}
