use crate::game::direction::Direction;
use crate::game::grid::Grid;
use crate::game::is_terminal::is_terminal;
use crate::game::move_snake::preview_move;

/// Candidate moves for the search.
///
/// Never includes the reversal of the last move. Moves that kill the snake on the next tick are
/// filtered out, unless every candidate is lethal or the snake is one segment short of filling
/// the board (the winning move must stay reachable). Returns an empty list while the snake has
/// fewer than two segments.
pub fn get_legal_moves(grid: &Grid) -> Vec<Direction> {
    let Some(head) = grid.snake_head() else {
        return Vec::new();
    };

    let candidates: Vec<Direction> = match head.heading() {
        Some(heading) => Direction::ALL
            .into_iter()
            .filter(|&d| d != heading.opposite())
            .collect(),
        None => Direction::ALL.to_vec(),
    };

    if head.length as usize == grid.area() - 1 {
        return candidates;
    }

    let safe: Vec<Direction> = candidates
        .iter()
        .copied()
        .filter(|&d| !is_terminal(&preview_move(grid, d)))
        .collect();

    if safe.is_empty() {
        candidates
    } else {
        safe
    }
}
