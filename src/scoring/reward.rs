use crate::game::grid::Grid;

/// Reward granted when the snake fills the whole board.
pub const WIN_REWARD: f64 = 76.0;

/// Scores a rollout by comparing its first and last states.
///
/// - identical states: `0`
/// - board filled: [`WIN_REWARD`]
/// - snake grew: `L1 / A`
/// - otherwise `(A * L0 + A - dist(head, fruit)) / (A * D)`
///
/// with `A` the grid side, `D` the area, `L0`/`L1` the start/end lengths. Without a fruit on
/// the end board the distance term is 0.
pub fn evaluate(start: &Grid, end: &Grid) -> f64 {
    if start == end {
        return 0.0;
    }

    let side = start.side() as f64;
    let area = start.area() as f64;
    let start_length = start.snake_length() as f64;
    let end_length = end.snake_length() as f64;

    if end_length == area {
        WIN_REWARD
    } else if end_length > start_length {
        end_length / side
    } else {
        let distance = match (end.head(), end.fruit()) {
            (Some(head), Some(fruit)) => head.manhattan_distance(fruit) as f64,
            _ => 0.0,
        };
        (side * start_length + side - distance) / (side * area)
    }
}
