//! Square board representation shared by the live game and the search.
//!
//! Cell encoding:
//! - `0`: empty
//! - `-1`: fruit
//! - `k > 0`: snake segment that vanishes in `k` moves (the maximum is the head, `1` the tail)

use crate::game::direction::Direction;
use crate::{Result, SnakeMctsError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const EMPTY: i32 = 0;
pub const FRUIT: i32 = -1;

/// Cell coordinates, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn manhattan_distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Head of a formed snake (length >= 2) together with the segment right behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeHead {
    pub position: Position,
    pub length: i32,
    pub neck: Position,
}

impl SnakeHead {
    /// Direction of the last move, `None` when head and neck are not adjacent
    /// (only possible on a collapsed board).
    pub fn heading(&self) -> Option<Direction> {
        let dx = self.position.x as isize - self.neck.x as isize;
        let dy = self.position.y as isize - self.neck.y as isize;
        Direction::from_delta(dx, dy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    side: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Empty board of `side * side` cells.
    pub fn empty(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(SnakeMctsError::InvalidGrid(
                "grid side must be positive".to_string(),
            ));
        }
        Ok(Grid {
            side,
            cells: vec![EMPTY; side * side],
        })
    }

    /// Starting layout of a game: tail at (0,1), head at (1,1), heading east. No fruit yet.
    pub fn initial_snake(side: usize) -> Result<Self> {
        if side < 2 {
            return Err(SnakeMctsError::InvalidGrid(format!(
                "grid side {} is too small to hold the initial snake",
                side
            )));
        }
        let mut grid = Grid::empty(side)?;
        grid.set(Position::new(0, 1), 1);
        grid.set(Position::new(1, 1), 2);
        Ok(grid)
    }

    /// Builds a grid from row-major rows, rejecting malformed input.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let side = rows.len();
        if side == 0 {
            return Err(SnakeMctsError::InvalidGrid("grid has no rows".to_string()));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != side) {
            return Err(SnakeMctsError::InvalidGrid(format!(
                "row {} has {} cells, expected {} for a square grid",
                y,
                row.len(),
                side
            )));
        }

        let cells: Vec<i32> = rows.into_iter().flatten().collect();
        if let Some(value) = cells.iter().find(|&&v| v < FRUIT) {
            return Err(SnakeMctsError::InvalidGrid(format!(
                "cell value {} is not a valid marker",
                value
            )));
        }

        let fruits = cells.iter().filter(|&&v| v == FRUIT).count();
        if fruits > 1 {
            return Err(SnakeMctsError::InvalidGrid(format!(
                "{} fruit cells found, at most one allowed",
                fruits
            )));
        }

        // A collapsed board holds many TTL-1 cells; any longer snake needs a unique head.
        let max = cells.iter().copied().max().unwrap_or(EMPTY);
        if max > 1 {
            let heads = cells.iter().filter(|&&v| v == max).count();
            if heads > 1 {
                return Err(SnakeMctsError::InvalidGrid(format!(
                    "{} cells share the head value {}",
                    heads, max
                )));
            }
        }

        Ok(Grid { side, cells })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks(self.side)
    }

    pub fn get(&self, position: Position) -> i32 {
        self.cells[self.index_of(position)]
    }

    pub fn set(&mut self, position: Position, value: i32) {
        let index = self.index_of(position);
        self.cells[index] = value;
    }

    /// Row-major scan of every cell with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Position, i32)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Position::new(i % side, i / side), v))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [i32] {
        &mut self.cells
    }

    /// Neighbouring cell in `direction`, `None` past the border.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = position.x.checked_add_signed(dx)?;
        let y = position.y.checked_add_signed(dy)?;
        (x < self.side && y < self.side).then_some(Position::new(x, y))
    }

    /// Largest TTL on the board, 0 when there is no snake.
    pub fn snake_length(&self) -> i32 {
        self.cells.iter().copied().max().unwrap_or(EMPTY).max(EMPTY)
    }

    /// First cell (row-major) carrying the largest positive TTL.
    pub fn head(&self) -> Option<Position> {
        let length = self.snake_length();
        if length == EMPTY {
            return None;
        }
        self.iter().find(|&(_, v)| v == length).map(|(p, _)| p)
    }

    pub fn fruit(&self) -> Option<Position> {
        self.iter().find(|&(_, v)| v == FRUIT).map(|(p, _)| p)
    }

    /// Locates the head and the cell behind it in a single row-major scan.
    ///
    /// Ties for the second-largest value keep the first cell in scan order. Returns
    /// `None` while the snake has fewer than two segments.
    pub fn snake_head(&self) -> Option<SnakeHead> {
        let mut head = Position::new(0, 0);
        let mut length = EMPTY;
        let mut neck = Position::new(0, 0);
        let mut neck_value = EMPTY;

        for (position, value) in self.iter() {
            if value > length {
                neck = head;
                neck_value = length;
                head = position;
                length = value;
            } else if value > neck_value {
                neck = position;
                neck_value = value;
            }
        }

        (length >= 2).then_some(SnakeHead {
            position: head,
            length,
            neck,
        })
    }

    /// No empty or fruit cell left: the snake fills the board.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v > EMPTY)
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.iter()
            .filter(|&(_, v)| v == EMPTY)
            .map(|(p, _)| p)
            .collect()
    }

    /// Compact single-line encoding (`;` between cells) used by the CSV recorder.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Panics when `position` lies outside the board.
    fn index_of(&self, position: Position) -> usize {
        assert!(
            position.x < self.side && position.y < self.side,
            "position ({}, {}) is outside the {}x{} grid",
            position.x,
            position.y,
            self.side,
            self.side
        );
        position.y * self.side + position.x
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self.snake_length();
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|&v| match v {
                    FRUIT => '*',
                    EMPTY => '.',
                    v if v == length && v > 1 => '@',
                    _ => 'o',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_from_rows_rejects_malformed_grids() {
        assert_matches!(Grid::from_rows(vec![]), Err(SnakeMctsError::InvalidGrid(_)));
        assert_matches!(
            Grid::from_rows(vec![vec![0, 0], vec![0]]),
            Err(SnakeMctsError::InvalidGrid(_))
        );
        assert_matches!(
            Grid::from_rows(vec![vec![0, 0, 0], vec![0, 0, 0]]),
            Err(SnakeMctsError::InvalidGrid(_))
        );
        assert_matches!(
            Grid::from_rows(vec![vec![-1, -1], vec![1, 2]]),
            Err(SnakeMctsError::InvalidGrid(_))
        );
        assert_matches!(
            Grid::from_rows(vec![vec![3, 3], vec![1, 2]]),
            Err(SnakeMctsError::InvalidGrid(_))
        );
        assert_matches!(
            Grid::from_rows(vec![vec![-2, 0], vec![1, 2]]),
            Err(SnakeMctsError::InvalidGrid(_))
        );
    }

    #[test]
    fn test_from_rows_accepts_collapsed_board() {
        let grid = Grid::from_rows(vec![vec![1, 1], vec![1, -1]]).unwrap();
        assert_eq!(grid.snake_length(), 1);
        assert!(grid.snake_head().is_none());
    }

    #[test]
    fn test_initial_snake_layout() {
        let grid = Grid::initial_snake(5).unwrap();
        assert_eq!(grid.get(Position::new(0, 1)), 1);
        assert_eq!(grid.get(Position::new(1, 1)), 2);
        assert_eq!(grid.snake_length(), 2);
        assert_eq!(grid.fruit(), None);

        let head = grid.snake_head().unwrap();
        assert_eq!(head.position, Position::new(1, 1));
        assert_eq!(head.neck, Position::new(0, 1));
        assert_eq!(head.heading(), Some(Direction::East));

        assert!(Grid::initial_snake(1).is_err());
    }

    #[test]
    fn test_snake_head_tie_break_uses_scan_order() {
        // Two cells share the second-largest value; the first in row-major order wins.
        let grid = Grid::from_rows(vec![vec![2, 0, 0], vec![0, 3, 2], vec![0, 0, 0]]).unwrap();
        let head = grid.snake_head().unwrap();
        assert_eq!(head.position, Position::new(1, 1));
        assert_eq!(head.neck, Position::new(0, 0));
        assert_eq!(head.heading(), None);
    }

    #[test]
    fn test_neighbor_respects_borders() {
        let grid = Grid::empty(3).unwrap();
        let corner = Position::new(0, 0);
        assert_eq!(grid.neighbor(corner, Direction::North), None);
        assert_eq!(grid.neighbor(corner, Direction::West), None);
        assert_eq!(grid.neighbor(corner, Direction::East), Some(Position::new(1, 0)));
        assert_eq!(
            grid.neighbor(Position::new(2, 2), Direction::South),
            None
        );
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_get_rejects_column_past_border() {
        let grid = Grid::from_rows(vec![vec![0, 0, 0], vec![-1, 0, 0], vec![0, 0, 0]]).unwrap();
        // Would alias (0, 1) if the column wrapped into the next row.
        grid.get(Position::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_set_rejects_row_past_border() {
        let mut grid = Grid::empty(3).unwrap();
        grid.set(Position::new(0, 3), 1);
    }

    #[test]
    fn test_display_and_encode() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![0, -1]]).unwrap();
        assert_eq!(grid.to_string(), "o@\n.*\n");
        assert_eq!(grid.encode(), "1;2;0;-1");
    }

    #[test]
    fn test_is_full() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![4, 3]]).unwrap().is_full());
        assert!(!Grid::from_rows(vec![vec![1, 2], vec![-1, 3]]).unwrap().is_full());
    }
}
