//! Compass directions and their wall-mask bits

use std::fmt;
use std::str::FromStr;

use crate::io::error::{MazeError, invalid_parameter};

/// One of the four sides of a cell
///
/// Each direction owns one bit of a cell's wall-opening mask. A set bit means
/// the wall on that side has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0
    North,
    /// Towards the last column
    East,
    /// Towards the last row
    South,
    /// Towards column 0
    West,
}

impl Direction {
    /// Canonical enumeration order used by neighbor queries and the solver
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Mask bit for this side
    pub const fn bit(self) -> u8 {
        match self {
            Self::North => 1,
            Self::East => 2,
            Self::South => 4,
            Self::West => 8,
        }
    }

    /// The side facing this one from the neighboring cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit step as `(dx, dy)` with y growing southwards
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Single-letter compass label
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Parse a single compass letter, in either case
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" | "up" => Ok(Self::North),
            "e" | "east" | "right" => Ok(Self::East),
            "s" | "south" | "down" => Ok(Self::South),
            "w" | "west" | "left" => Ok(Self::West),
            _ => Err(invalid_parameter(
                "direction",
                &s,
                &"expected one of north, east, south, west",
            )),
        }
    }
}
