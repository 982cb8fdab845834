//! Core value types: cells, players, quadrants, actions, snapshots.
//!
//! Everything here is a plain value with no behavior beyond its own
//! invariants; the state machine in [`crate::rules`] is what ties them
//! together.

pub mod action;
pub mod cell;
pub mod quadrant;
pub mod state;

pub use action::{Action, Direction};
pub use cell::{Cell, Player};
pub use quadrant::{
    col_offset, row_offset, Quadrant, BOARD_SIZE, NUM_QUADRANTS, QUADRANTS_PER_ROW, QUADRANT_SIZE,
};
pub use state::{GameState, Phase};
