use crate::game::{Coordinate, GameStatus, MoveError, Player};

/// Progress reports from the game loop to whatever is presenting the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// `player` is about to be asked for a column.
    TurnStarted { player: Player },
    /// The engine turned down a request; the same player is asked again.
    MoveRejected {
        player: Player,
        column: isize,
        error: MoveError,
    },
    PiecePlaced { player: Player, at: Coordinate },
    Finished(GameStatus),
}
