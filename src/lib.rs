//! # Short Connect Four
//!
//! Connect Four on a short 5-row, 7-column board, played by a human against
//! a computer that picks uniformly among the open columns.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, gravity placement, win detection, state machine
//! - [`players`] — Move sources: random opponent, console human, scripted moves
//! - [`session`] — Game loop, events, scoreboard
//! - [`ui`] — Terminal UI and line-based console front-ends
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `tracing` setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod players;
pub mod session;
pub mod ui;
