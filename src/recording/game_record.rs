//! Flat row layout of a recorded turn.

use crate::game::direction::Direction;
use crate::game::simulate_game::TurnRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One CSV row: a turn tagged with the game it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRow {
    pub game_id: String,
    pub turn: usize,
    pub action: Direction,
    pub snake_length: i32,
    pub search_ms: u64,
    pub board: String,
}

impl TurnRow {
    pub fn new(game_id: &str, record: &TurnRecord) -> Self {
        TurnRow {
            game_id: game_id.to_string(),
            turn: record.turn,
            action: record.action,
            snake_length: record.snake_length,
            search_ms: record.search_ms,
            board: record.board.clone(),
        }
    }
}

/// Game identifier built from the UTC start time and the seed, e.g. `20260101T120000-42`.
pub fn new_game_id(seed: u64) -> String {
    format!("{}-{}", Utc::now().format("%Y%m%dT%H%M%S"), seed)
}
