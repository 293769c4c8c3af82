//! Headless game loop: the agent plays a full game against the real world model.
//!
//! Mirrors what the interactive host does once per tick: ask the engine for a move, apply it
//! to the authoritative board, then hand the resulting board back to the engine.

use crate::game::direction::Direction;
use crate::game::grid::Grid;
use crate::game::is_terminal::is_terminal;
use crate::game::move_snake::move_snake;
use crate::game::spawn_fruit::spawn_fruit;
use crate::mcts::algorithm::MctsEngine;
use crate::mcts::hyperparameters::MctsHyperparameters;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid_size: usize,
    /// Stop after this many moves, `None` plays until the game ends
    pub max_turns: Option<usize>,
    pub hyperparams: MctsHyperparameters,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            max_turns: None,
            hyperparams: MctsHyperparameters::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Won,
    Lost,
    NoMoveAvailable,
    TurnLimit,
}

/// One played move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub action: Direction,
    /// Snake length after the move
    pub snake_length: i32,
    /// Wall time spent in the search
    pub search_ms: u64,
    /// Board after the move, see [`Grid::encode`]
    pub board: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub status: GameStatus,
    pub turns: usize,
    pub final_length: i32,
    pub seed: u64,
    pub final_state: Grid,
}

/// Plays one game and calls `on_turn` after every move.
pub fn play_game<F>(config: &GameConfig, mut on_turn: F) -> Result<GameSummary>
where
    F: FnMut(&TurnRecord, &Grid),
{
    let mut state = Grid::initial_snake(config.grid_size)?;
    let mut engine = MctsEngine::new(state.clone(), config.hyperparams.clone())?;

    spawn_fruit(&mut state, engine.rng_mut());
    engine.advance_root(state.clone())?;
    log::debug!(
        "new game on {0}x{0} grid, seed {1}, {2}",
        config.grid_size,
        engine.seed(),
        engine.hyperparameters().to_config_string()
    );

    let mut turns = 0;
    let status = loop {
        if config.max_turns.is_some_and(|limit| turns >= limit) {
            break GameStatus::TurnLimit;
        }

        let started = Instant::now();
        let outcome = engine.run();
        let search_ms = started.elapsed().as_millis() as u64;

        let Some(action) = outcome.action() else {
            break GameStatus::NoMoveAvailable;
        };

        state = move_snake(&state, action, engine.rng_mut());
        engine.advance_root(state.clone())?;
        turns += 1;

        let record = TurnRecord {
            turn: turns,
            action,
            snake_length: state.snake_length(),
            search_ms,
            board: state.encode(),
        };
        log::debug!(
            "turn {}: {} (length {}, {} ms)",
            record.turn,
            record.action,
            record.snake_length,
            record.search_ms
        );
        on_turn(&record, &state);

        if is_terminal(&state) {
            break GameStatus::Lost;
        }
        if state.is_full() {
            break GameStatus::Won;
        }
    };

    log::info!(
        "game over after {} turns: {:?}, snake length {}",
        turns,
        status,
        state.snake_length()
    );

    Ok(GameSummary {
        status,
        turns,
        final_length: state.snake_length(),
        seed: engine.seed(),
        final_state: state,
    })
}
