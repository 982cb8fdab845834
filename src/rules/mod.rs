//! The game state machine: the sole producer of non-initial snapshots.

pub mod engine;

pub use engine::{apply, try_apply, Game};
