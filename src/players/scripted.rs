use std::collections::VecDeque;

use super::MoveSource;
use crate::error::MoveSourceError;
use crate::game::GameState;

/// Replays a fixed list of column requests, then reports closed input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    name: String,
    columns: VecDeque<isize>,
}

impl ScriptedMoves {
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = isize>) -> Self {
        ScriptedMoves {
            name: name.into(),
            columns: columns.into_iter().collect(),
        }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_column(&mut self, _state: &GameState) -> Result<isize, MoveSourceError> {
        self.columns.pop_front().ok_or(MoveSourceError::InputClosed)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_then_closes() {
        let state = GameState::new();
        let mut script = ScriptedMoves::new("script", [2, -1, 6]);
        assert_eq!(script.next_column(&state).unwrap(), 2);
        assert_eq!(script.next_column(&state).unwrap(), -1);
        assert_eq!(script.next_column(&state).unwrap(), 6);
        assert!(matches!(
            script.next_column(&state),
            Err(MoveSourceError::InputClosed)
        ));
        assert_eq!(script.name(), "script");
    }
}
