//! Perfect maze generation, solving and interactive traversal
//!
//! A maze is a rectangular grid of cells whose wall-opening masks form a
//! spanning tree. Mazes are carved by a randomized depth-first backtracker
//! or randomized Prim, either in one call or tick by tick, then solved with
//! a breadth-first search and walked by a timed traversal session.

#![forbid(unsafe_code)]

/// Construction algorithms, the stepwise driver and the path solver
pub mod algorithm;
/// Structural statistics of generated mazes
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Traversal sessions and the engine facade
pub mod session;
/// Directions, cells and the wall-mask grid
pub mod spatial;

pub use algorithm::Algorithm;
pub use io::error::{MazeError, Result};
pub use session::MazeEngine;
pub use spatial::{Cell, Direction, Grid};
