//! The game loop that alternates turns between two move sources, the
//! events it reports, and a scoreboard for replays.

pub mod events;
pub mod game_loop;
pub mod scoreboard;

pub use events::GameEvent;
pub use game_loop::{play_game, GameRecord, SessionConfig};
pub use scoreboard::Scoreboard;
