pub mod algorithm;
pub mod hyperparameters;
pub mod mcts_result;
pub mod node;
pub mod selection;
pub mod tree;

pub use algorithm::MctsEngine;
pub use hyperparameters::MctsHyperparameters;
pub use mcts_result::{ChildStats, SearchOutcome};
