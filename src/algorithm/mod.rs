use std::fmt;
use std::str::FromStr;

use crate::io::error::{MazeError, invalid_parameter};
use crate::spatial::{Cell, Direction};

/// Randomized depth-first construction
pub mod backtracker;
/// Stepwise orchestration of a construction algorithm
pub mod driver;
/// Randomized Prim construction
pub mod prim;
/// Injectable random sources
pub mod selection;
/// Breadth-first shortest-path search
pub mod solver;
/// Visited-cell tracking for generation sessions
pub mod visited;

/// Available spanning-tree construction algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Depth-first walk with an explicit stack: long winding corridors
    #[default]
    Backtracker,
    /// Random frontier-edge growth: short, evenly branching corridors
    Prim,
}

impl Algorithm {
    /// Lowercase name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Backtracker => "backtracker",
            Self::Prim => "prim",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backtracker" | "dfs" => Ok(Self::Backtracker),
            "prim" => Ok(Self::Prim),
            _ => Err(invalid_parameter(
                "algorithm",
                &s,
                &"expected 'backtracker' or 'prim'",
            )),
        }
    }
}

/// Result of advancing a construction algorithm by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A wall was removed between `from` and its neighbor in `direction`
    Carved {
        /// Visited cell the passage starts from
        from: Cell,
        /// Newly visited cell
        to: Cell,
        /// Side of `from` that was opened
        direction: Direction,
    },
    /// Working state changed but no wall was removed
    Idle,
    /// Nothing left to do
    Finished,
}

impl StepOutcome {
    /// Whether this step opened a passage
    pub const fn carved(&self) -> bool {
        matches!(self, Self::Carved { .. })
    }
}
