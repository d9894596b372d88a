//! Analysis of completed mazes

/// Dead ends, passage counts and spanning-tree checks
pub mod statistics;

pub use statistics::MazeStatistics;
