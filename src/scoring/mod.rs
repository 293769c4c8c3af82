pub mod reward;

pub use reward::{evaluate, WIN_REWARD};
