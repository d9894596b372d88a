//! Interactive session state layered over the generated maze

/// Injectable wall clocks
pub mod clock;
/// Facade tying generation, solving and traversal together
pub mod engine;
/// Traversal state machine
pub mod traversal;

pub use engine::{MazeEngine, MazeSnapshot};
pub use traversal::{MoveOutcome, TraversalSession, TraversalState};
