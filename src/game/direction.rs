use serde::{Deserialize, Serialize};
use std::fmt;

/// Movement direction of the snake head.
///
/// The discriminants are the wire indices used by the host game
/// (north = 0, east = 1, south = 2, west = 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// The 180° reversal of this direction.
    pub fn opposite(self) -> Direction {
        Self::ALL[((self.index() + 2) % 4) as usize]
    }

    /// Column/row offset, north being row - 1.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Inverse of [`Direction::delta`]; `None` for anything that is not a unit step.
    pub fn from_delta(dx: isize, dy: isize) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_follows_clockwise_order() {
        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction.index() as usize, i);
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn test_from_delta() {
        assert_eq!(Direction::from_delta(1, 0), Some(Direction::East));
        assert_eq!(Direction::from_delta(0, -1), Some(Direction::North));
        assert_eq!(Direction::from_delta(2, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
    }
}
