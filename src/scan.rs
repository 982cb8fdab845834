//! Win detection over the composed 6x6 board.
//!
//! The scanner composes the four quadrants into one board, then checks
//! axes in a fixed precedence order: columns first, then rows, then
//! diagonals. The first five-in-a-row found decides the scan. A rotation
//! can complete lines for both colors at once, and the fixed order is
//! what keeps the result deterministic when that happens.

use im::Vector;

use crate::core::cell::{Cell, Player};
use crate::core::quadrant::{col_offset, row_offset, Quadrant, BOARD_SIZE, QUADRANT_SIZE};

/// Consecutive same-colored marbles required to win.
pub const WIN_COUNT: usize = 5;

/// The composed 6x6 board, row-major.
pub type Board = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Lay the four quadrants onto a single 6x6 board.
///
/// Each quadrant's cells land at its row/col offsets; the four 3x3 blocks
/// cover all 36 board cells exactly once.
#[must_use]
pub fn compose(quadrants: &Vector<Quadrant>) -> Board {
    let mut board = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (index, quadrant) in quadrants.iter().enumerate() {
        let rows = row_offset(index);
        let cols = col_offset(index);
        for row in 0..QUADRANT_SIZE {
            for col in 0..QUADRANT_SIZE {
                board[rows + row][cols + col] = quadrant.get(row, col);
            }
        }
    }
    board
}

/// Scan the quadrants for a five-in-a-row.
///
/// Returns the winning color, or `None`. Called after every placement and
/// every rotation, since a rotation can create a winning line too.
#[must_use]
pub fn winner(quadrants: &Vector<Quadrant>) -> Option<Player> {
    let board = compose(quadrants);
    vertical_winner(&board)
        .or_else(|| horizontal_winner(&board))
        .or_else(|| diagonal_winner(&board))
}

/// Track a run of same-colored cells; Empty or a color change resets it.
fn line_winner(cells: impl Iterator<Item = Cell>) -> Option<Player> {
    let mut run_color = Cell::Empty;
    let mut run_length = 0;

    for cell in cells {
        if cell == run_color {
            run_length += 1;
        } else {
            run_color = cell;
            run_length = 1;
        }
        if run_length >= WIN_COUNT {
            if let Some(player) = run_color.player() {
                return Some(player);
            }
        }
    }
    None
}

/// Scan each column top to bottom.
fn vertical_winner(board: &Board) -> Option<Player> {
    (0..BOARD_SIZE).find_map(|col| line_winner((0..BOARD_SIZE).map(|row| board[row][col])))
}

/// Scan each row left to right.
fn horizontal_winner(board: &Board) -> Option<Player> {
    board.iter().find_map(|row| line_winner(row.iter().copied()))
}

/// Check a run of [`WIN_COUNT`] cells starting at (row, col) and stepping
/// by (step_row, step_col). The caller guarantees the run stays on the
/// board.
fn diagonal_run(board: &Board, row: usize, col: usize, step_row: isize, step_col: isize) -> Option<Player> {
    let first = board[row][col];
    let player = first.player()?;

    for step in 1..WIN_COUNT as isize {
        let r = (row as isize + step_row * step) as usize;
        let c = (col as isize + step_col * step) as usize;
        if board[r][c] != first {
            return None;
        }
    }
    Some(player)
}

/// Check every diagonal long enough to hold five in a row.
///
/// From each corner region the starts below cover the length-5 diagonals
/// and both length-5 windows of the length-6 diagonals toward the opposite
/// corner. Diagonals shorter than [`WIN_COUNT`] have no start here, so
/// every run stays on the board.
fn diagonal_winner(board: &Board) -> Option<Player> {
    // Top-left corner, toward bottom-right.
    for row in 0..=1 {
        for col in 0..=1 {
            if let Some(player) = diagonal_run(board, row, col, 1, 1) {
                return Some(player);
            }
        }
    }

    // Top-right corner, toward bottom-left.
    for row in 0..=1 {
        for col in 4..=5 {
            if let Some(player) = diagonal_run(board, row, col, 1, -1) {
                return Some(player);
            }
        }
    }

    // Bottom-left corner, toward top-right.
    for row in 4..=5 {
        for col in 0..=1 {
            if let Some(player) = diagonal_run(board, row, col, -1, 1) {
                return Some(player);
            }
        }
    }

    // Bottom-right corner, toward top-left.
    for row in 4..=5 {
        for col in 4..=5 {
            if let Some(player) = diagonal_run(board, row, col, -1, -1) {
                return Some(player);
            }
        }
    }

    None
}
