use tracing::debug;

use super::board::{Board, Coordinate, PlacementError};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// One game: the board, whose turn it is, and how the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create a fresh game. The human moves first.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Human,
            status: GameStatus::InProgress,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.available_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A winning move ends the game with the mover as winner. A move that
    /// fills the board without a line ends it drawn. Otherwise the turn
    /// passes to the other player. Rejected moves leave the state untouched.
    pub fn play(&mut self, column: isize) -> Result<Coordinate, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let at = self.board.place(column, player)?;

        if self.board.has_won(at.row, at.column, player) {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
        } else {
            self.current_player = player.other();
        }

        debug!(
            player = %player,
            row = at.row,
            column = at.column,
            status = ?self.status,
            "piece placed"
        );
        Ok(at)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
