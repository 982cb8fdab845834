//! Quadrant geometry: the four 3x3 sub-boards of the 6x6 board.
//!
//! Quadrants are indexed row-major across the board:
//!
//! ```text
//!   0 | 1
//!   --+--
//!   2 | 3
//! ```
//!
//! Quadrant 0 covers board rows 0..3 / cols 0..3, quadrant 1 rows 0..3 /
//! cols 3..6, quadrant 2 rows 3..6 / cols 0..3, quadrant 3 rows 3..6 /
//! cols 3..6.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::transform;

/// Side length of the composed board.
pub const BOARD_SIZE: usize = 6;
/// Side length of one quadrant.
pub const QUADRANT_SIZE: usize = 3;
/// Number of quadrants on the board.
pub const NUM_QUADRANTS: usize = 4;
/// Quadrants per board row.
pub const QUADRANTS_PER_ROW: usize = 2;

/// Row offset of a quadrant's top-left cell on the composed board.
#[must_use]
pub const fn row_offset(quadrant: usize) -> usize {
    (quadrant / QUADRANTS_PER_ROW) * QUADRANT_SIZE
}

/// Column offset of a quadrant's top-left cell on the composed board.
#[must_use]
pub const fn col_offset(quadrant: usize) -> usize {
    (quadrant % QUADRANTS_PER_ROW) * QUADRANT_SIZE
}

/// A 3x3 quadrant of cells, row-major.
///
/// `Quadrant` is a plain value: updates go through [`Quadrant::with_cell`]
/// and [`Quadrant::rotated`], both of which return a new quadrant and leave
/// the receiver untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quadrant {
    cells: [[Cell; QUADRANT_SIZE]; QUADRANT_SIZE],
}

impl Quadrant {
    /// An all-empty quadrant.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a quadrant from explicit rows (top to bottom).
    #[must_use]
    pub fn from_rows(cells: [[Cell; QUADRANT_SIZE]; QUADRANT_SIZE]) -> Self {
        Self { cells }
    }

    /// The cell at (row, col).
    ///
    /// Panics if either coordinate is outside 0..3; the state machine
    /// validates coordinates before reaching this.
    #[must_use]
    pub fn get(self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A copy of this quadrant with one cell replaced.
    #[must_use]
    pub fn with_cell(self, row: usize, col: usize, cell: Cell) -> Quadrant {
        let mut next = self;
        next.cells[row][col] = cell;
        next
    }

    /// A copy of this quadrant rotated clockwise by `k` quarter-turns.
    ///
    /// Negative `k` rotates counter-clockwise. The 3x3 shape makes this
    /// infallible; arbitrary matrices go through [`crate::transform::rotate`].
    #[must_use]
    pub fn rotated(self, k: i32) -> Quadrant {
        Quadrant {
            cells: transform::rotate_fixed(self.cells, k),
        }
    }

    /// Check if every cell is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{CLOCKWISE, COUNTER_CLOCKWISE};

    #[test]
    fn test_offsets_cover_the_board_layout() {
        assert_eq!((row_offset(0), col_offset(0)), (0, 0));
        assert_eq!((row_offset(1), col_offset(1)), (0, 3));
        assert_eq!((row_offset(2), col_offset(2)), (3, 0));
        assert_eq!((row_offset(3), col_offset(3)), (3, 3));
    }

    #[test]
    fn test_empty_quadrant() {
        let quadrant = Quadrant::empty();
        assert!(quadrant.is_empty());
        for row in 0..QUADRANT_SIZE {
            for col in 0..QUADRANT_SIZE {
                assert_eq!(quadrant.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let original = Quadrant::empty();
        let updated = original.with_cell(1, 2, Cell::White);

        assert_eq!(original.get(1, 2), Cell::Empty);
        assert_eq!(updated.get(1, 2), Cell::White);
        assert_ne!(original, updated);
    }

    #[test]
    fn test_rotated_clockwise_moves_corner() {
        // Top-left corner moves to top-right under a clockwise quarter-turn.
        let quadrant = Quadrant::empty().with_cell(0, 0, Cell::Black);
        let rotated = quadrant.rotated(CLOCKWISE);

        assert_eq!(rotated.get(0, 2), Cell::Black);
        assert_eq!(rotated.get(0, 0), Cell::Empty);
    }

    #[test]
    fn test_rotated_counter_clockwise_inverts_clockwise() {
        let quadrant = Quadrant::empty()
            .with_cell(0, 1, Cell::White)
            .with_cell(2, 2, Cell::Black);

        assert_eq!(
            quadrant.rotated(CLOCKWISE).rotated(COUNTER_CLOCKWISE),
            quadrant
        );
    }

    #[test]
    fn test_four_quarter_turns_restore_identity() {
        let quadrant = Quadrant::empty()
            .with_cell(0, 0, Cell::White)
            .with_cell(1, 2, Cell::Black)
            .with_cell(2, 1, Cell::White);

        let full_circle = quadrant
            .rotated(CLOCKWISE)
            .rotated(CLOCKWISE)
            .rotated(CLOCKWISE)
            .rotated(CLOCKWISE);
        assert_eq!(full_circle, quadrant);
    }
}
