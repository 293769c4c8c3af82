use crate::game::grid::{Grid, FRUIT};
use rand::Rng;

/// Places a fruit on a uniformly random empty cell.
///
/// Returns `false` and leaves the grid untouched when no empty cell remains (the board is won).
pub fn spawn_fruit<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return false;
    }
    let position = empty[rng.random_range(0..empty.len())];
    grid.set(position, FRUIT);
    true
}
