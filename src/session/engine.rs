//! Owned maze state behind the rendering surface and input source
//!
//! [`MazeEngine`] composes the generation driver, the optional solve overlay and
//! the traversal session. The driver's generating flag is the only coordination
//! between them: solving and traversal commands are ignored while a generation
//! is in progress.

use crate::algorithm::driver::{GenerationDriver, TickOutcome};
use crate::algorithm::Algorithm;
use crate::algorithm::selection::{RandomSelector, RandomSource};
use crate::algorithm::solver::{SolvePath, solve};
use crate::analysis::MazeStatistics;
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_STEPS_PER_TICK};
use crate::io::error::{Result, invalid_state};
use crate::session::clock::{Clock, SystemClock};
use crate::session::traversal::{
    MoveOutcome, TraversalSession, TraversalSnapshot, TraversalState,
};
use crate::spatial::{Direction, Grid};

/// Read-only view of everything a renderer needs
#[derive(Debug, Clone, Copy)]
pub struct MazeSnapshot<'a> {
    /// Grid dimensions as `(cols, rows)`
    pub dimensions: (usize, usize),
    /// Wall masks
    pub grid: &'a Grid,
    /// Whether a generation is in progress
    pub generating: bool,
    /// Algorithm of the current or last generation
    pub algorithm: Option<Algorithm>,
    /// Statistics of the completed maze
    pub statistics: Option<MazeStatistics>,
    /// Dead ends of the completed maze, zero while generating
    pub dead_ends: usize,
    /// Solve overlay, if one was requested
    pub solve_path: Option<&'a SolvePath>,
    /// Cells on the solve overlay, zero when cleared
    pub path_length: usize,
    /// Traversal position, state and timing
    pub traversal: TraversalSnapshot,
}

/// Maze generation, solving and traversal behind one owned value
#[derive(Debug, Clone)]
pub struct MazeEngine<R: RandomSource = RandomSelector, C: Clock = SystemClock> {
    driver: GenerationDriver<R>,
    traversal: TraversalSession<C>,
    solve_path: Option<SolvePath>,
    animated: bool,
    steps_per_tick: usize,
}

impl Default for MazeEngine<RandomSelector, SystemClock> {
    fn default() -> Self {
        Self::new(RandomSelector::default(), SystemClock::new())
    }
}

impl MazeEngine<RandomSelector, SystemClock> {
    /// Engine with a seeded random source and the system clock
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomSelector::new(seed), SystemClock::new())
    }
}

impl<R: RandomSource, C: Clock> MazeEngine<R, C> {
    /// Create an engine holding a blank default-sized grid
    pub fn new(random: R, clock: C) -> Self {
        Self {
            driver: GenerationDriver::new(random),
            traversal: TraversalSession::new(clock),
            solve_path: None,
            animated: false,
            steps_per_tick: DEFAULT_STEPS_PER_TICK,
        }
    }

    /// Start a new maze of `cols x rows` cells
    ///
    /// Dimensions are clamped into the supported range. Any generation in
    /// progress is discarded, the traversal is reset and the solve overlay is
    /// cleared. In non-animated mode the maze is built before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if non-animated generation exceeds its iteration cap
    pub fn configure(&mut self, cols: usize, rows: usize, algorithm: Algorithm) -> Result<()> {
        self.driver.start_generation(algorithm, cols, rows);
        self.traversal.reset();
        self.solve_path = None;

        if !self.animated {
            self.driver.run_to_completion()?;
        }
        Ok(())
    }

    /// Regenerate with the default dimensions and the backtracker
    ///
    /// # Errors
    ///
    /// Returns an error if non-animated generation exceeds its iteration cap
    pub fn configure_default(&mut self) -> Result<()> {
        self.configure(DEFAULT_COLS, DEFAULT_ROWS, Algorithm::default())
    }

    /// Choose between instant and tick-driven generation for later `configure` calls
    pub const fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    /// Whether generation is tick-driven
    pub const fn is_animated(&self) -> bool {
        self.animated
    }

    /// Set how many construction steps one tick performs (at least one)
    pub fn set_steps_per_tick(&mut self, steps: usize) {
        self.steps_per_tick = steps.max(1);
    }

    /// Construction steps per tick
    pub const fn steps_per_tick(&self) -> usize {
        self.steps_per_tick
    }

    /// Advance an in-progress generation by one tick
    ///
    /// Completing the maze clears the solve overlay.
    pub fn tick(&mut self) -> TickOutcome {
        let was_generating = self.driver.is_generating();
        let outcome = self.driver.tick(self.steps_per_tick);
        if was_generating && outcome.finished {
            self.solve_path = None;
        }
        outcome
    }

    /// Solve the completed maze and keep the path as an overlay
    ///
    /// Returns `Ok(None)` while generation is in progress.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidState`] if no maze has been completed
    /// yet, including after a stalled generation, and
    /// [`crate::MazeError::Unsolvable`] if the completed grid is not connected
    pub fn request_solve(&mut self) -> Result<Option<&SolvePath>> {
        if self.driver.is_generating() {
            return Ok(None);
        }
        if !self.driver.is_complete() {
            return Err(invalid_state("solve the maze", &"no maze has been generated"));
        }
        let path = self.solve_path.insert(solve(self.driver.grid())?);
        Ok(Some(&*path))
    }

    /// Drop the solve overlay
    pub fn clear_solve(&mut self) {
        self.solve_path = None;
    }

    /// Start or restart a traversal run
    ///
    /// Returns `false` and does nothing while generation is in progress.
    pub fn start_run(&mut self) -> bool {
        if self.driver.is_generating() {
            return false;
        }
        self.traversal.start();
        true
    }

    /// Return the traversal to idle at the entrance
    pub const fn reset_run(&mut self) {
        self.traversal.reset();
    }

    /// Move the traversal agent one cell
    ///
    /// An idle traversal is started by its first move. Moves are refused while
    /// generation is in progress or after the run has finished.
    pub fn move_agent(&mut self, direction: Direction) -> MoveOutcome {
        if self.driver.is_generating() {
            return MoveOutcome::Inactive;
        }
        if self.traversal.state() == TraversalState::Idle {
            self.traversal.start();
        }
        self.traversal.try_move(self.driver.grid(), direction)
    }

    /// Whether a generation is in progress
    pub const fn is_generating(&self) -> bool {
        self.driver.is_generating()
    }

    /// Current grid
    pub const fn grid(&self) -> &Grid {
        self.driver.grid()
    }

    /// Access the generation driver
    pub const fn driver(&self) -> &GenerationDriver<R> {
        &self.driver
    }

    /// Mutable access to the generation driver, for enabling visualization
    pub const fn driver_mut(&mut self) -> &mut GenerationDriver<R> {
        &mut self.driver
    }

    /// Access the traversal session
    pub const fn traversal(&self) -> &TraversalSession<C> {
        &self.traversal
    }

    /// Current solve overlay
    pub const fn solve_path(&self) -> Option<&SolvePath> {
        self.solve_path.as_ref()
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> MazeSnapshot<'_> {
        let statistics = self.driver.statistics().copied();
        MazeSnapshot {
            dimensions: self.driver.grid().dimensions(),
            grid: self.driver.grid(),
            generating: self.driver.is_generating(),
            algorithm: self.driver.algorithm(),
            statistics,
            dead_ends: statistics.map_or(0, |s| s.dead_ends),
            solve_path: self.solve_path.as_ref(),
            path_length: self.solve_path.as_ref().map_or(0, SolvePath::len),
            traversal: self.traversal.snapshot(),
        }
    }
}
