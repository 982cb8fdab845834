//! # pentago-engine
//!
//! A pure rules engine for Pentago: a 6x6 board built from four rotatable
//! 3x3 quadrants, where each turn places a marble and then rotates one
//! quadrant, and five in a row wins.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine has no concept of rendering and performs
//!    no I/O. A presentation layer dispatches actions and reads the
//!    resulting snapshot.
//!
//! 2. **Snapshot-Per-Action**: Every accepted action produces a new
//!    immutable [`GameState`]; the prior one is never mutated. Persistent
//!    data structures (`im`) keep those snapshots cheap to clone.
//!
//! 3. **Illegal Actions Are No-Ops**: Out-of-phase, out-of-range,
//!    occupied-cell, and post-game actions leave the state unchanged; a
//!    diagnostic goes to the `log` facade instead of the caller's control
//!    flow.
//!
//! ## Modules
//!
//! - `core`: Cells, players, quadrants, actions, snapshots
//! - `transform`: Quarter-turn rotation of square matrices
//! - `scan`: Board composition and five-in-a-row detection
//! - `rules`: The turn/phase state machine and the `Game` wrapper
//! - `error`: The two error kinds (`InvalidInput`, `IllegalAction`)

pub mod core;
pub mod error;
pub mod rules;
pub mod scan;
pub mod transform;

// Re-export commonly used types
pub use crate::core::{
    Action, Cell, Direction, GameState, Phase, Player, Quadrant, BOARD_SIZE, NUM_QUADRANTS,
    QUADRANT_SIZE,
};

pub use crate::error::{IllegalAction, InvalidInput};

pub use crate::rules::{apply, try_apply, Game};

pub use crate::scan::{compose, winner, Board, WIN_COUNT};

pub use crate::transform::{rotate, CLOCKWISE, COUNTER_CLOCKWISE};
