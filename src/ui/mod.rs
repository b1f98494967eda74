//! Front-ends: the ratatui terminal game, a plain line-based console, and
//! the computer's flavor-text remarks shared by both.

mod app;
pub mod commentary;
pub mod console;
mod game_view;
mod terminal;

pub use app::App;
pub use terminal::RestoreOnDrop;
