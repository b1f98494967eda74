use std::time::Duration;

use tracing::{debug, info};

use super::events::GameEvent;
use crate::config::OpponentConfig;
use crate::error::SessionError;
use crate::game::{Coordinate, GameState, GameStatus, MoveError, Player};
use crate::players::MoveSource;

/// Pacing for a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Blocking pause before each computer turn.
    pub think_delay: Duration,
}

impl From<&OpponentConfig> for SessionConfig {
    fn from(config: &OpponentConfig) -> Self {
        SessionConfig {
            think_delay: Duration::from_millis(config.think_delay_ms),
        }
    }
}

/// Everything that happened in one finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub status: GameStatus,
    pub moves: Vec<(Player, Coordinate)>,
    pub final_state: GameState,
    /// Requests the engine turned down along the way.
    pub rejected: usize,
}

/// Play one game from an empty board until it is won or drawn.
///
/// Turns alternate starting with the human. Each rejected request is
/// reported through `on_event` and the same source is asked again. A source
/// error (quit, closed input) ends the game early.
pub fn play_game<H, C, F>(
    human: &mut H,
    computer: &mut C,
    config: &SessionConfig,
    mut on_event: F,
) -> Result<GameRecord, SessionError>
where
    H: MoveSource + ?Sized,
    C: MoveSource + ?Sized,
    F: FnMut(&GameState, &GameEvent),
{
    let mut state = GameState::new();
    let mut moves = Vec::new();
    let mut rejected = 0;

    info!(human = human.name(), computer = computer.name(), "starting game");

    while !state.is_terminal() {
        let player = state.current_player();
        on_event(&state, &GameEvent::TurnStarted { player });

        if player == Player::Computer && !config.think_delay.is_zero() {
            std::thread::sleep(config.think_delay);
        }

        loop {
            let requested = match player {
                Player::Human => human.next_column(&state),
                Player::Computer => computer.next_column(&state),
            };
            let column = requested.map_err(|source| SessionError::Source { player, source })?;

            match state.play(column) {
                Ok(at) => {
                    moves.push((player, at));
                    on_event(&state, &GameEvent::PiecePlaced { player, at });
                    break;
                }
                Err(MoveError::GameOver) => return Err(MoveError::GameOver.into()),
                Err(error) => {
                    rejected += 1;
                    debug!(player = %player, column, %error, "move rejected");
                    on_event(
                        &state,
                        &GameEvent::MoveRejected {
                            player,
                            column,
                            error,
                        },
                    );
                }
            }
        }
    }

    let status = state.status();
    info!(?status, moves = moves.len(), rejected, "game finished");
    on_event(&state, &GameEvent::Finished(status));

    Ok(GameRecord {
        status,
        moves,
        final_state: state,
        rejected,
    })
}
