//! Spatial data structures for the maze
//!
//! This module contains:
//! - Compass directions and their mask bits
//! - The cell grid with symmetric wall openings

/// Compass directions and wall-mask bits
pub mod direction;
/// Cell grid and geometric queries
pub mod grid;

pub use direction::Direction;
pub use grid::{Cell, Grid};
