//! Plain line-based front-end: prints the board after every move and reads
//! column numbers from the input stream.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::config::AppConfig;
use crate::error::PlayError;
use crate::game::{Board, Cell, GameState, MoveError, PlacementError, Player, COLS, ROWS};
use crate::players::{ConsoleHuman, RandomOpponent};
use crate::session::{play_game, GameEvent, Scoreboard, SessionConfig};

use super::commentary::Commentary;

/// Render the board as text, top row first, with 1-based column labels.
pub fn render_board(board: &Board) -> String {
    let mut text = String::new();
    text.push(' ');
    for col in 0..COLS {
        text.push_str(&format!("{} ", col + 1));
    }
    text.push('\n');

    for row in board.rows() {
        text.push('|');
        let symbols: Vec<&str> = row.iter().map(|&cell| cell_symbol(cell)).collect();
        text.push_str(&symbols.join(" "));
        text.push_str("|\n");
    }

    text.push('+');
    text.push_str(&"-".repeat(COLS * 2 - 1));
    text.push_str("+\n");
    text
}

fn cell_symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => ".",
        Cell::Red => "X",
        Cell::Yellow => "O",
    }
}

fn describe(state: &GameState, event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::TurnStarted {
            player: Player::Computer,
        } => Some("Computer is thinking...".to_string()),
        GameEvent::TurnStarted { .. } => None,
        GameEvent::MoveRejected { column, error, .. } => {
            // Columns are typed 1-based, so report them the same way.
            let reason = match error {
                MoveError::Placement(PlacementError::ColumnFull { .. }) => {
                    format!("column {} is full", column + 1)
                }
                MoveError::Placement(PlacementError::InvalidColumn { .. }) => {
                    format!("there is no column {}, pick 1-{COLS}", column + 1)
                }
                MoveError::GameOver => error.to_string(),
            };
            Some(format!("Can't play there: {reason}."))
        }
        GameEvent::PiecePlaced { player, at } => {
            let who = match player {
                Player::Human => "You",
                Player::Computer => "Computer",
            };
            Some(format!(
                "{who} dropped into column {}.\n{}",
                at.column + 1,
                render_board(state.board())
            ))
        }
        GameEvent::Finished(status) if status.is_terminal() => {
            let headline = match status.winner() {
                Some(Player::Human) => "You win!",
                Some(Player::Computer) => "The computer wins.",
                None => "It's a draw!",
            };
            Some(headline.to_string())
        }
        GameEvent::Finished(_) => None,
    }
}

/// Ask until the answer is yes or no. End of input counts as no.
fn wants_replay<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    loop {
        write!(output, "Play again? (y/n): ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}

/// Play games on a line-based console until the human declines a replay,
/// quits, or input ends. Every game starts from a fresh board.
pub fn run<R, W>(config: &AppConfig, mut input: R, output: W) -> Result<Scoreboard, PlayError>
where
    R: BufRead,
    W: Write + Clone,
{
    let session = SessionConfig::from(&config.opponent);
    let mut opponent = RandomOpponent::from_seed(config.opponent.seed);
    let mut commentary = Commentary::new(config.display.commentary, config.opponent.seed);
    let mut score = Scoreboard::new();
    let mut out = output.clone();

    writeln!(out, "Connect Four on a {ROWS}x{COLS} board. You are X.")?;
    writeln!(out, "{}", render_board(&Board::new()))?;

    loop {
        let mut write_error = None;
        let mut display = output.clone();
        let result = {
            let mut human = ConsoleHuman::new("You", &mut input, output.clone());
            play_game(&mut human, &mut opponent, &session, |state, event| {
                let mut lines: Vec<String> = describe(state, event).into_iter().collect();
                lines.extend(commentary.remark(event).map(|r| format!("Computer: \"{r}\"")));
                for line in lines {
                    if let Err(e) = writeln!(display, "{line}") {
                        if write_error.is_none() {
                            write_error = Some(e);
                        }
                    }
                }
            })
        };
        if let Some(e) = write_error {
            return Err(e.into());
        }

        match result {
            Ok(record) => score.record(record.status),
            Err(e) if e.is_quit() => {
                info!("player left mid-game");
                writeln!(out, "\nBye! {}", score.summary())?;
                return Ok(score);
            }
            Err(e) => return Err(e.into()),
        }

        writeln!(out, "{}", score.summary())?;
        if !wants_replay(&mut input, &mut out)? {
            writeln!(
                out,
                "Thanks for playing! You won {:.0}% of {} games.",
                score.human_win_rate() * 100.0,
                score.games_played()
            )?;
            return Ok(score);
        }
        writeln!(out, "{}", render_board(&Board::new()))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn quiet_config(seed: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.opponent.think_delay_ms = 0;
        config.opponent.seed = Some(seed);
        config
    }

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 1 2 3 4 5 6 7 ");
        assert_eq!(lines[1], "|. . . . . . .|");
        assert_eq!(lines.len(), 1 + ROWS + 1);
        assert_eq!(lines[6], "+-------------+");
    }

    #[test]
    fn test_render_pieces() {
        let mut board = Board::new();
        board.place(0, Player::Human).unwrap();
        board.place(0, Player::Computer).unwrap();
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "|X . . . . . .|");
        assert_eq!(lines[4], "|O . . . . . .|");
    }

    #[test]
    fn test_quit_immediately() {
        let output = SharedBuffer::default();
        let score = run(&quiet_config(1), Cursor::new("q\n"), output.clone()).unwrap();
        assert_eq!(score.games_played(), 0);
        assert!(output.text().contains("Bye!"));
    }

    #[test]
    fn test_plays_one_game_then_declines_replay() {
        // Cycle through every column so rejected full columns still make
        // progress. The game ends long before the input does; leftover
        // numbers are ignored by the replay prompt until the "n".
        let mut input = String::new();
        for _ in 0..30 {
            for col in 1..=COLS {
                input.push_str(&format!("{col}\n"));
            }
        }
        input.push_str("n\n");

        let output = SharedBuffer::default();
        let score = run(&quiet_config(3), Cursor::new(input), output.clone()).unwrap();

        assert_eq!(score.games_played(), 1);
        let text = output.text();
        assert!(text.contains("You dropped into column 1."));
        assert!(text.contains("Play again?"));
        assert!(text.contains("Thanks for playing!"));
        assert!(text.contains("% of 1 games."));
    }

    #[test]
    fn test_rejections_use_typed_column_numbers() {
        let mut state = GameState::new();
        for col in [0, 0, 0, 0, 0, 1] {
            state.play(col).unwrap();
        }
        let typed_one = state.play(0).unwrap_err();
        let full = GameEvent::MoveRejected {
            player: Player::Human,
            column: 0,
            error: typed_one,
        };
        assert_eq!(
            describe(&state, &full).as_deref(),
            Some("Can't play there: column 1 is full.")
        );

        let typed_nine = state.play(8).unwrap_err();
        let off_board = GameEvent::MoveRejected {
            player: Player::Human,
            column: 8,
            error: typed_nine,
        };
        assert_eq!(
            describe(&state, &off_board).as_deref(),
            Some("Can't play there: there is no column 9, pick 1-7.")
        );

        let typed_zero = GameEvent::MoveRejected {
            player: Player::Human,
            column: -1,
            error: state.play(-1).unwrap_err(),
        };
        assert!(describe(&state, &typed_zero)
            .unwrap()
            .contains("there is no column 0"));
    }

    #[test]
    fn test_replays_until_input_ends() {
        // "y" is skipped as a non-numeric move during a game; numbers are
        // skipped by the replay prompt.
        let mut input = String::new();
        for _ in 0..60 {
            for col in 1..=COLS {
                input.push_str(&format!("{col}\n"));
            }
            input.push_str("y\n");
        }

        let output = SharedBuffer::default();
        let score = run(&quiet_config(4), Cursor::new(input), output.clone()).unwrap();

        assert!(score.games_played() >= 2);
        let text = output.text();
        assert!(text.contains("Play again?"));
        assert_eq!(
            text.matches("Connect Four on a").count(),
            1,
            "banner is printed once per sitting"
        );
    }
}
