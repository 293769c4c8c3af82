pub mod direction;
pub mod get_legal_moves;
pub mod grid;
pub mod is_terminal;
pub mod move_snake;
pub mod simulate_game;
pub mod spawn_fruit;

pub use direction::Direction;
pub use get_legal_moves::get_legal_moves;
pub use grid::{Grid, Position};
pub use is_terminal::is_terminal;
pub use move_snake::{move_snake, preview_move};
pub use simulate_game::{play_game, GameConfig, GameStatus, GameSummary, TurnRecord};
pub use spawn_fruit::spawn_fruit;
