//! Action handling for the turn/phase state machine.
//!
//! Every entry point takes a snapshot and returns a new one; nothing is
//! mutated in place and there is no shared game instance. The transition
//! rules:
//!
//! - A placement is legal only while awaiting a placement, on an empty
//!   cell, before the game is over. It colors the cell, rescans for a
//!   winner, and leaves the turn with the same player.
//! - A rotation is legal only while awaiting a rotation, before the game
//!   is over. It replaces the quadrant with its rotated form, rescans
//!   (the winner is recomputed before the turn decision), and passes the
//!   turn to the opponent.
//! - A reset is always legal and yields a fresh game.
//!
//! Either half-move can end the game: a rotation may spin a fifth marble
//! into line just as a placement may drop one in.

use log::warn;

use crate::core::action::Action;
use crate::core::quadrant::{NUM_QUADRANTS, QUADRANT_SIZE};
use crate::core::state::{GameState, Phase};
use crate::error::IllegalAction;
use crate::scan;

/// Apply an action, treating illegal actions as no-ops.
///
/// This is the entry point for a presentation layer that dispatches raw
/// input: a rejected action logs a diagnostic and the prior snapshot is
/// returned unchanged (and structurally equal to the input).
#[must_use]
pub fn apply(state: &GameState, action: &Action) -> GameState {
    match try_apply(state, action) {
        Ok(next) => next,
        Err(err) => {
            warn!("rejected {action:?}: {err}");
            state.clone()
        }
    }
}

/// Apply an action, reporting why an illegal one was rejected.
///
/// ## Errors
///
/// [`IllegalAction`] when the action does not fit the current phase,
/// addresses an out-of-range quadrant or cell, targets an occupied cell,
/// or arrives after the game is over. The input snapshot is untouched
/// either way.
pub fn try_apply(state: &GameState, action: &Action) -> Result<GameState, IllegalAction> {
    match *action {
        Action::Reset => Ok(GameState::new()),
        Action::Place { quadrant, row, col } => place(state, quadrant, row, col),
        Action::Rotate {
            quadrant,
            direction,
        } => rotate(state, quadrant, direction.quarter_turns()),
    }
}

fn place(
    state: &GameState,
    quadrant: usize,
    row: usize,
    col: usize,
) -> Result<GameState, IllegalAction> {
    if state.is_game_over() {
        return Err(IllegalAction::GameOver);
    }
    if state.phase != Phase::AwaitingPlacement {
        return Err(IllegalAction::WrongPhase {
            expected: Phase::AwaitingPlacement,
            actual: state.phase,
        });
    }
    if quadrant >= NUM_QUADRANTS {
        return Err(IllegalAction::QuadrantOutOfRange { quadrant });
    }
    if row >= QUADRANT_SIZE || col >= QUADRANT_SIZE {
        return Err(IllegalAction::CellOutOfRange { row, col });
    }
    if !state.quadrant(quadrant).get(row, col).is_empty() {
        return Err(IllegalAction::CellOccupied { quadrant, row, col });
    }

    let placed = state.quadrant(quadrant).with_cell(row, col, state.turn.cell());
    let quadrants = state.quadrants.update(quadrant, placed);
    let winner = scan::winner(&quadrants);

    Ok(GameState {
        quadrants,
        // The turn passes only after the rotation half-move.
        turn: state.turn,
        phase: if winner.is_some() {
            Phase::GameOver
        } else {
            Phase::AwaitingRotation
        },
        winner,
    })
}

fn rotate(state: &GameState, quadrant: usize, turns: i32) -> Result<GameState, IllegalAction> {
    if state.is_game_over() {
        return Err(IllegalAction::GameOver);
    }
    if state.phase != Phase::AwaitingRotation {
        return Err(IllegalAction::WrongPhase {
            expected: Phase::AwaitingRotation,
            actual: state.phase,
        });
    }
    if quadrant >= NUM_QUADRANTS {
        return Err(IllegalAction::QuadrantOutOfRange { quadrant });
    }

    let quadrants = state
        .quadrants
        .update(quadrant, state.quadrant(quadrant).rotated(turns));
    let winner = scan::winner(&quadrants);

    Ok(GameState {
        quadrants,
        turn: state.turn.opponent(),
        phase: if winner.is_some() {
            Phase::GameOver
        } else {
            Phase::AwaitingPlacement
        },
        winner,
    })
}

/// A running game: owns the current snapshot and serializes dispatch.
///
/// Thin convenience over [`apply`] for hosts that want the
/// dispatch-then-read interface rather than threading snapshots
/// themselves.
#[derive(Clone, Debug, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Start a fresh game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Dispatch one action and return the resulting snapshot.
    pub fn dispatch(&mut self, action: &Action) -> &GameState {
        self.state = apply(&self.state, action);
        &self.state
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
