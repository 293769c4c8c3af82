use crate::game::grid::Grid;

/// A collision collapses every segment to TTL 1, so two or more such cells end the episode.
pub fn is_terminal(grid: &Grid) -> bool {
    grid.cells().iter().filter(|&&v| v == 1).nth(1).is_some()
}
