use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Convert player to cell type. The human always plays red.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::Red,
            Player::Computer => Cell::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Computer => "Computer",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Human.other(), Player::Computer);
        assert_eq!(Player::Computer.other(), Player::Human);
    }

    #[test]
    fn test_players_map_to_distinct_cells() {
        assert_ne!(Player::Human.to_cell(), Player::Computer.to_cell());
        assert_ne!(Player::Human.to_cell(), Cell::Empty);
        assert_ne!(Player::Computer.to_cell(), Cell::Empty);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Human.name(), "Human");
        assert_eq!(Player::Computer.to_string(), "Computer");
    }
}
