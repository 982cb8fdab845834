//! Engine error types.
//!
//! Two kinds only:
//!
//! - [`InvalidInput`]: a malformed matrix handed to the quadrant transform.
//!   Fatal to that call and propagated via `Result`.
//! - [`IllegalAction`]: an action the rules forbid in the current snapshot.
//!   Not fatal; [`crate::rules::apply`] turns it into a logged no-op.

use thiserror::Error;

use crate::core::state::Phase;

/// A malformed geometric argument to the quadrant transform.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The matrix has no rows.
    #[error("matrix has no rows")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Row and column counts differ.
    #[error("matrix is {rows}x{cols}, expected square")]
    NotSquare { rows: usize, cols: usize },
}

/// An action submitted when the rules forbid it.
///
/// The action has no effect; the prior snapshot stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    /// The game already has a winner; only `Reset` does anything.
    #[error("game is over")]
    GameOver,

    /// The action does not match the half-move the engine is waiting for.
    #[error("expected phase {expected:?}, but the game is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    /// Quadrant index outside 0..4.
    #[error("quadrant index {quadrant} out of range")]
    QuadrantOutOfRange { quadrant: usize },

    /// Cell coordinates outside the 3x3 quadrant.
    #[error("cell ({row}, {col}) out of range")]
    CellOutOfRange { row: usize, col: usize },

    /// The target cell already holds a marble.
    #[error("cell ({row}, {col}) in quadrant {quadrant} is occupied")]
    CellOccupied {
        quadrant: usize,
        row: usize,
        col: usize,
    },
}
