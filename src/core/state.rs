//! The immutable game snapshot.
//!
//! A [`GameState`] is a value: every accepted action produces a new
//! snapshot and the prior one is left untouched, so the host can compare,
//! diff, or keep old snapshots freely. Quadrants live in an `im::Vector`,
//! so cloning a snapshot shares storage instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Player;
use super::quadrant::{Quadrant, NUM_QUADRANTS};

/// Which half-move the engine will accept next.
///
/// A full turn is exactly one placement followed by one rotation; the
/// phase is the explicit selector between the two. `GameOver` is
/// absorbing until a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The current player must place a marble.
    AwaitingPlacement,
    /// The current player must rotate a quadrant.
    AwaitingRotation,
    /// A five-in-a-row exists; only `Reset` has any effect.
    GameOver,
}

/// A complete game snapshot.
///
/// Invariant: `phase == Phase::GameOver` if and only if `winner` is set.
/// The state machine in [`crate::rules`] is the only producer of
/// non-initial snapshots and maintains this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The four quadrants, indexed row-major: 0 top-left, 1 top-right,
    /// 2 bottom-left, 3 bottom-right.
    pub quadrants: Vector<Quadrant>,

    /// The player to move. Advances only after a completed rotation.
    pub turn: Player,

    /// Which half-move comes next.
    pub phase: Phase,

    /// The winning color, once a five-in-a-row has been detected.
    pub winner: Option<Player>,
}

impl GameState {
    /// A fresh game: empty board, White to place.
    #[must_use]
    pub fn new() -> Self {
        Self {
            quadrants: (0..NUM_QUADRANTS).map(|_| Quadrant::empty()).collect(),
            turn: Player::White,
            phase: Phase::AwaitingPlacement,
            winner: None,
        }
    }

    /// The quadrant at `index`.
    ///
    /// Panics if `index` is outside 0..4; the state machine validates
    /// indices before reaching this.
    #[must_use]
    pub fn quadrant(&self, index: usize) -> Quadrant {
        self.quadrants[index]
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
