use crate::game::direction::Direction;
use serde::{Deserialize, Serialize};

/// Answer of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Most visited root action
    Move(Direction),
    /// The root has no continuation: the game is already over. Stop playing.
    NoMoveAvailable,
}

impl SearchOutcome {
    pub fn action(self) -> Option<Direction> {
        match self {
            SearchOutcome::Move(direction) => Some(direction),
            SearchOutcome::NoMoveAvailable => None,
        }
    }
}

/// Visit statistics of one root child, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildStats {
    pub action: Direction,
    pub visits: usize,
    pub mean_reward: f64,
}
