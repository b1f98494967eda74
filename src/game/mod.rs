//! Core game logic for the short 5x7 board: cells and gravity placement,
//! win detection, players, and the per-game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Coordinate, PlacementError, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError};
