use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameStatus, Player};
use crate::session::GameEvent;

const AFTER_MOVE: &[&str] = &[
    "Hmm, let me think about that one.",
    "Your move, human.",
    "I have a plan. Probably.",
    "Beep boop. Piece deployed.",
    "Was that a good move? Who knows.",
    "Calculating... or just guessing.",
];

const COMPUTER_WON: &[&str] = &[
    "Four in a row! Even a coin flip gets lucky.",
    "Victory for the machines!",
    "I'd like to thank my random number generator.",
];

const HUMAN_WON: &[&str] = &[
    "Well played. I demand a rematch.",
    "You got me this time.",
    "Nicely done. I was not really trying. Honest.",
];

const DRAWN: &[&str] = &[
    "A full board and nobody wins. How very balanced.",
    "Stalemate! Shall we call it even?",
];

/// Remarks from the computer, picked at random.
pub struct Commentary {
    rng: StdRng,
    enabled: bool,
}

impl Commentary {
    pub fn new(enabled: bool, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Commentary { rng, enabled }
    }

    /// A remark for `event`, if it is one the computer comments on.
    pub fn remark(&mut self, event: &GameEvent) -> Option<&'static str> {
        if !self.enabled {
            return None;
        }
        let lines = match event {
            GameEvent::PiecePlaced {
                player: Player::Computer,
                ..
            } => AFTER_MOVE,
            GameEvent::Finished(GameStatus::Won(Player::Computer)) => COMPUTER_WON,
            GameEvent::Finished(GameStatus::Won(Player::Human)) => HUMAN_WON,
            GameEvent::Finished(GameStatus::Drawn) => DRAWN,
            _ => return None,
        };
        Some(lines[self.rng.random_range(0..lines.len())])
    }
}
