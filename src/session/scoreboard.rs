use crate::game::{GameStatus, Player};

/// Results tallied across replays in one sitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. Games still in progress are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::Human) => self.human_wins += 1,
            GameStatus::Won(Player::Computer) => self.computer_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    /// Share of finished games the human won, 0.0 before any game.
    pub fn human_win_rate(&self) -> f32 {
        let played = self.games_played();
        if played == 0 {
            return 0.0;
        }
        self.human_wins as f32 / played as f32
    }

    /// One-line summary for headers and end-of-game messages.
    pub fn summary(&self) -> String {
        format!(
            "You {} - {} Computer ({} drawn)",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_results() {
        let mut score = Scoreboard::new();
        score.record(GameStatus::Won(Player::Human));
        score.record(GameStatus::Won(Player::Computer));
        score.record(GameStatus::Won(Player::Human));
        score.record(GameStatus::Drawn);
        score.record(GameStatus::InProgress);

        assert_eq!(score.human_wins, 2);
        assert_eq!(score.computer_wins, 1);
        assert_eq!(score.draws, 1);
        assert_eq!(score.games_played(), 4);
        assert!((score.human_win_rate() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_scoreboard() {
        let score = Scoreboard::new();
        assert_eq!(score.games_played(), 0);
        assert_eq!(score.human_win_rate(), 0.0);
        assert_eq!(score.summary(), "You 0 - 0 Computer (0 drawn)");
    }
}
