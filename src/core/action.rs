//! Actions dispatched to the game state machine.
//!
//! The presentation layer translates pointer input into one of three
//! actions and dispatches it; the engine answers with a new snapshot. The
//! enum is internally tagged for serde, so an action arriving over a wire
//! with an unknown `type` is rejected at deserialization rather than
//! reaching the state machine.

use serde::{Deserialize, Serialize};

use crate::transform::{CLOCKWISE, COUNTER_CLOCKWISE};

/// Rotation direction for a quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The equivalent clockwise quarter-turn count accepted by the
    /// transform: 1 for clockwise, 3 for counter-clockwise.
    #[must_use]
    pub const fn quarter_turns(self) -> i32 {
        match self {
            Direction::Clockwise => CLOCKWISE,
            Direction::CounterClockwise => COUNTER_CLOCKWISE,
        }
    }
}

/// One half-move (or a reset) submitted to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Place a marble of the current player's color on an empty cell.
    Place {
        quadrant: usize,
        row: usize,
        col: usize,
    },
    /// Rotate a quadrant one quarter-turn.
    Rotate { quadrant: usize, direction: Direction },
    /// Abandon the current game and start fresh.
    Reset,
}
