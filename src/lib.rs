//! # Snake MCTS
//!
//! Monte Carlo Tree Search agent for a grid snake game.
//!
//! ## Features
//!
//! - **World Model**: deterministic board transition, terminal test, legal moves and reward
//! - **AI Engine**: UCT tree search with random rollouts and a single seeded random stream
//! - **Game Driver**: headless game loop playing the agent against the world model
//! - **Recording**: per-turn CSV logs of played games
//!
//! ## Usage
//!
//! ```no_run
//! use snake_mcts::{Grid, MctsEngine, MctsHyperparameters, SearchOutcome};
//!
//! let state = Grid::from_rows(vec![
//!     vec![0, 0, 0, 0, 0],
//!     vec![1, 2, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, -1],
//! ])?;
//! let params = MctsHyperparameters { seed: Some(1), ..Default::default() };
//! let mut engine = MctsEngine::new(state, params)?;
//! if let SearchOutcome::Move(direction) = engine.run() {
//!     println!("play {}", direction);
//! }
//! # Ok::<(), snake_mcts::SnakeMctsError>(())
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Board representation and world transition
pub mod game;

/// Monte Carlo Tree Search engine
pub mod mcts;

/// Rollout reward
pub mod scoring;

/// CSV recording of played games
pub mod recording;

/// Logger setup shared by the binary and tools
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::*;

pub use mcts::*;

pub use scoring::{evaluate, WIN_REWARD};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Snake MCTS library
#[derive(Debug, thiserror::Error)]
pub enum SnakeMctsError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SnakeMctsError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
