//! Cell contents and player colors.
//!
//! `Cell` describes what a board position holds; `Player` identifies whose
//! turn it is. Keeping them separate means "turn = Empty" is not
//! representable.

use serde::{Deserialize, Serialize};

/// The contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No marble.
    #[default]
    Empty,
    /// A white marble.
    White,
    /// A black marble.
    Black,
}

impl Cell {
    /// Check if this cell holds no marble.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player whose marble occupies this cell, if any.
    #[must_use]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::White => Some(Player::White),
            Cell::Black => Some(Player::Black),
            Cell::Empty => None,
        }
    }
}

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The opposing player.
    #[must_use]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// The marble color this player places.
    #[must_use]
    pub fn cell(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        player.cell()
    }
}
