use crate::game::{Board, Cell, GameState, GameStatus, Player, COLS};
use crate::session::Scoreboard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    score: &Scoreboard,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, score, chunks[0]);
    render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player.to_cell() {
        Cell::Yellow => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    score: &Scoreboard,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match game_state.status() {
        GameStatus::InProgress => match game_state.current_player() {
            Player::Human => ("Your move".to_string(), player_color(Player::Human)),
            Player::Computer => (
                "Computer is thinking...".to_string(),
                player_color(Player::Computer),
            ),
        },
        GameStatus::Won(player) => (format!("Game Over: {} wins", player), player_color(player)),
        GameStatus::Drawn => ("Game Over: draw".to_string(), Color::White),
    };

    let header = Paragraph::new(format!("{}  |  {}", status, score.summary()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four (5x7)"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for &cell in row {
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→ or 1-7: Select  |  Enter: Drop  |  R: New game  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &GameState, message: Option<String>, score: &Scoreboard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render(f, state, 3, &message, score))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_header_board_and_message() {
        let mut state = GameState::new();
        state.play(0).unwrap();
        let mut score = Scoreboard::new();
        score.record(GameStatus::Drawn);

        let screen = draw(&state, Some("Column is full!".into()), &score);
        assert!(screen.contains("Connect Four (5x7)"));
        assert!(screen.contains("Computer is thinking..."));
        assert!(screen.contains("You 0 - 0 Computer (1 drawn)"));
        assert!(screen.contains("Column is full!"));
        assert!(screen.contains("●"));
        assert_eq!(screen.matches('║').count(), 2 * crate::game::ROWS);
    }

    #[test]
    fn test_renders_winner() {
        let mut state = GameState::new();
        for col in [0, 6, 1, 6, 2, 6, 3] {
            state.play(col).unwrap();
        }
        let screen = draw(&state, None, &Scoreboard::new());
        assert!(screen.contains("Game Over: Human wins"));
    }
}
