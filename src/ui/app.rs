use crate::config::AppConfig;
use crate::game::{GameState, MoveError, PlacementError, Player, COLS};
use crate::players::{MoveSource, RandomOpponent};
use crate::session::{GameEvent, Scoreboard};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::commentary::Commentary;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    opponent: RandomOpponent,
    commentary: Commentary,
    think_delay: Duration,
    /// When the computer will make its pending move.
    computer_due: Option<Instant>,
    score: Scoreboard,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: GameState::new(),
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
            opponent: RandomOpponent::from_seed(config.opponent.seed),
            commentary: Commentary::new(config.display.commentary, config.opponent.seed),
            think_delay: Duration::from_millis(config.opponent.think_delay_ms),
            computer_due: None,
            score: Scoreboard::new(),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("starting terminal UI");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        info!(score = %self.score.summary(), "leaving terminal UI");
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, Instant::now());
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as usize) - ('1' as usize);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(now);
            }
            KeyCode::Char('r') => {
                // Fresh game, the tally carries over
                self.game_state = GameState::new();
                self.selected_column = COLS / 2;
                self.computer_due = None;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self, now: Instant) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.game_state.current_player() != Player::Human {
            self.message = Some("Wait for the computer to move.".to_string());
            return;
        }

        match self.game_state.play(self.selected_column as isize) {
            Ok(_) => {
                self.message = None;
                if !self.finish_if_over() {
                    self.computer_due = Some(now + self.think_delay);
                }
            }
            Err(MoveError::Placement(PlacementError::ColumnFull { .. })) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::Placement(PlacementError::InvalidColumn { .. })) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Let the computer move once its thinking time has passed.
    fn tick(&mut self, now: Instant) {
        let Some(due) = self.computer_due else {
            return;
        };
        if now < due || self.game_state.current_player() != Player::Computer {
            return;
        }
        self.computer_due = None;

        let played = self
            .opponent
            .next_column(&self.game_state)
            .map_err(|e| e.to_string())
            .and_then(|col| self.game_state.play(col).map_err(|e| e.to_string()));

        match played {
            Ok(at) => {
                let event = GameEvent::PiecePlaced {
                    player: Player::Computer,
                    at,
                };
                self.message = self
                    .commentary
                    .remark(&event)
                    .map(|r| format!("Computer: \"{r}\""));
                self.finish_if_over();
            }
            Err(e) => {
                warn!(error = %e, "computer could not move");
                self.message = Some(format!("Computer could not move: {e}"));
            }
        }
    }

    /// Record a finished game and announce the result. Returns true when over.
    fn finish_if_over(&mut self) -> bool {
        let status = self.game_state.status();
        if !status.is_terminal() {
            return false;
        }
        let headline = match status.winner() {
            Some(Player::Human) => "You win!",
            Some(Player::Computer) => "The computer wins!",
            None => "It's a draw!",
        };
        self.score.record(status);
        info!(?status, score = %self.score.summary(), "game over");

        let remark = self
            .commentary
            .remark(&GameEvent::Finished(status))
            .map(|r| format!(" Computer: \"{r}\""))
            .unwrap_or_default();
        self.message = Some(format!("{headline}{remark} Press 'r' to play again."));
        true
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.score,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    fn app(seed: u64) -> App {
        let mut config = AppConfig::default();
        config.opponent.think_delay_ms = 0;
        config.opponent.seed = Some(seed);
        config.display.commentary = false;
        App::new(&config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code), Instant::now());
    }

    #[test]
    fn test_column_selection_is_clamped() {
        let mut app = app(1);
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.selected_column, 1);
    }

    #[test]
    fn test_drop_then_computer_replies() {
        let mut app = app(2);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game_state.board().get(ROWS - 1, 3), Some(Cell::Red));
        assert_eq!(app.game_state.current_player(), Player::Computer);
        assert!(app.computer_due.is_some());

        // Human keys are refused while the computer is due.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state.board().piece_count(), 1);

        app.tick(Instant::now());
        assert_eq!(app.game_state.board().piece_count(), 2);
        assert_eq!(app.game_state.current_player(), Player::Human);
        assert!(app.computer_due.is_none());
    }

    #[test]
    fn test_computer_waits_for_think_delay() {
        let mut config = AppConfig::default();
        config.opponent.think_delay_ms = 500;
        config.opponent.seed = Some(3);
        let mut app = App::new(&config);

        let start = Instant::now();
        app.handle_key(KeyEvent::from(KeyCode::Enter), start);
        app.tick(start + Duration::from_millis(100));
        assert_eq!(app.game_state.board().piece_count(), 1);
        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.game_state.board().piece_count(), 2);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = app(4);
        // Alternating pieces fill column 0, then the computer plays column 1
        // so it is the human's turn again.
        for col in [0, 0, 0, 0, 0, 1] {
            app.game_state.play(col).unwrap();
        }
        assert_eq!(app.game_state.current_player(), Player::Human);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.game_state.board().piece_count(), 6);
        assert!(app.computer_due.is_none());
    }

    #[test]
    fn test_game_finishes_and_restart_keeps_score() {
        let mut app = app(5);
        let mut guard = 0;
        while !app.game_state.is_terminal() && guard < 200 {
            let legal = app.game_state.legal_columns();
            app.selected_column = legal[0];
            press(&mut app, KeyCode::Enter);
            app.tick(Instant::now());
            guard += 1;
        }
        assert!(app.game_state.is_terminal());
        assert_eq!(app.score.games_played(), 1);
        assert!(app.message.as_deref().unwrap().contains("Press 'r'"));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state.board().piece_count(), 0);
        assert_eq!(app.score.games_played(), 1);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = app(6);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
