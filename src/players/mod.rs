//! Sources of moves: the random computer opponent, a line-based console
//! human, and fixed scripts for tests and demos.

mod console;
mod random;
mod scripted;

pub use console::ConsoleHuman;
pub use random::RandomOpponent;
pub use scripted::ScriptedMoves;

use crate::error::MoveSourceError;
use crate::game::GameState;

/// Anything that can choose the next column for a player.
///
/// Sources may return columns the engine rejects (out of range or full);
/// the game loop reports the rejection and asks again.
pub trait MoveSource {
    /// Pick a column (0-based) for the current player of `state`.
    fn next_column(&mut self, state: &GameState) -> Result<isize, MoveSourceError>;

    /// Return the source's display name.
    fn name(&self) -> &str;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_column(&mut self, state: &GameState) -> Result<isize, MoveSourceError> {
        (**self).next_column(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
