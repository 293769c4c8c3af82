//! World transition for one tick of the game.

use crate::game::direction::Direction;
use crate::game::grid::{Grid, EMPTY, FRUIT};
use crate::game::spawn_fruit::spawn_fruit;
use rand::Rng;

/// Applies `direction` to `grid` and returns the next state.
///
/// A reversal of the last move is played as "continue straight". Hitting the border or a
/// segment with TTL > 1 collapses every segment to 1. Eating the fruit grows the snake by one
/// and draws the next fruit from `rng`. Boards without a formed snake are returned unchanged.
pub fn move_snake<R: Rng + ?Sized>(grid: &Grid, direction: Direction, rng: &mut R) -> Grid {
    advance(grid, direction, |next| {
        spawn_fruit(next, rng);
    })
}

/// Same transition as [`move_snake`] but never places a new fruit.
///
/// Death does not depend on where the next fruit lands, so this is enough to look one move
/// ahead without drawing from the random stream.
pub fn preview_move(grid: &Grid, direction: Direction) -> Grid {
    advance(grid, direction, |_| {})
}

fn advance<F>(grid: &Grid, direction: Direction, on_fruit_eaten: F) -> Grid
where
    F: FnOnce(&mut Grid),
{
    let mut next = grid.clone();
    let Some(head) = grid.snake_head() else {
        return next;
    };

    let direction = match head.heading() {
        Some(heading) if direction == heading.opposite() => heading,
        _ => direction,
    };

    let target = grid
        .neighbor(head.position, direction)
        .filter(|&target| grid.get(target) <= 1);
    let Some(target) = target else {
        for cell in next.cells_mut().iter_mut().filter(|v| **v > EMPTY) {
            *cell = 1;
        }
        return next;
    };

    if grid.get(target) == FRUIT {
        on_fruit_eaten(&mut next);
        next.set(target, head.length + 1);
    } else {
        for cell in next.cells_mut().iter_mut().filter(|v| **v > EMPTY) {
            *cell -= 1;
        }
        next.set(target, head.length);
    }
    next
}
