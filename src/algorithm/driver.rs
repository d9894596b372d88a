//! Stepwise generation driver
//!
//! Owns the grid and the in-flight generation session. A generation can run to
//! completion in one call or be advanced a bounded number of steps per external
//! tick for animation. Completion clears the generating flag and computes the
//! maze statistics.

use crate::algorithm::backtracker::Backtracker;
use crate::algorithm::prim::Prim;
use crate::algorithm::selection::{RandomSelector, RandomSource};
use crate::algorithm::{Algorithm, StepOutcome};
use crate::analysis::statistics::MazeStatistics;
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_ROWS, ITERATION_CAP_PER_CELL};
use crate::io::error::{MazeError, Result, invalid_state};
use crate::io::visualization::GenerationCapture;
use crate::spatial::Grid;

/// Algorithm-specific working state
#[derive(Debug, Clone)]
enum Construction {
    Backtracker(Backtracker),
    Prim(Prim),
}

impl Construction {
    fn step<R: RandomSource + ?Sized>(&mut self, grid: &mut Grid, random: &mut R) -> StepOutcome {
        match self {
            Self::Backtracker(backtracker) => backtracker.step(grid, random),
            Self::Prim(prim) => prim.step(grid, random),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            Self::Backtracker(backtracker) => backtracker.is_complete(),
            Self::Prim(prim) => prim.is_complete(),
        }
    }
}

/// Transient state of one in-flight generation
#[derive(Debug, Clone)]
struct GenerationSession {
    construction: Construction,
}

/// Progress report of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Steps actually performed during the tick
    pub steps: usize,
    /// Passages opened during the tick
    pub carved: usize,
    /// Whether generation is finished after the tick
    pub finished: bool,
}

/// Drives a construction algorithm over a fresh grid
///
/// The random source is owned by the driver and shared across generations, so
/// a seeded driver produces the same sequence of mazes on every run.
#[derive(Debug, Clone)]
pub struct GenerationDriver<R: RandomSource = RandomSelector> {
    /// Grid being built or last built
    grid: Grid,
    /// Present only while generation is in progress
    session: Option<GenerationSession>,
    /// Source of every random choice
    random: R,
    /// Algorithm of the current or last generation
    algorithm: Option<Algorithm>,
    /// Statistics of the last completed maze
    statistics: Option<MazeStatistics>,
    /// Steps performed by the current or last generation
    steps: usize,
    /// Passages opened by the current or last generation
    carved: usize,
    /// Optional recording of carved passages for animation export
    pub visualization: Option<GenerationCapture>,
}

impl Default for GenerationDriver<RandomSelector> {
    fn default() -> Self {
        Self::new(RandomSelector::default())
    }
}

impl<R: RandomSource> GenerationDriver<R> {
    /// Create an idle driver holding a blank default-sized grid
    pub fn new(random: R) -> Self {
        Self {
            grid: Grid::new(DEFAULT_COLS, DEFAULT_ROWS),
            session: None,
            random,
            algorithm: None,
            statistics: None,
            steps: 0,
            carved: 0,
            visualization: None,
        }
    }

    /// Allocate a fresh grid and begin a new generation
    ///
    /// Dimensions are clamped into the supported range. A generation already in
    /// progress is discarded.
    pub fn start_generation(&mut self, algorithm: Algorithm, cols: usize, rows: usize) {
        self.grid = Grid::new(cols, rows);
        let construction = match algorithm {
            Algorithm::Backtracker => Construction::Backtracker(Backtracker::new(&self.grid)),
            Algorithm::Prim => Construction::Prim(Prim::new(&self.grid, &mut self.random)),
        };

        self.session = Some(GenerationSession { construction });
        self.algorithm = Some(algorithm);
        self.statistics = None;
        self.steps = 0;
        self.carved = 0;

        if let Some(ref mut capture) = self.visualization {
            capture.reset(self.grid.cols(), self.grid.rows());
        }
    }

    /// Advance the active algorithm by exactly one step
    ///
    /// Returns whether generation is finished afterwards. Without an active
    /// generation this does nothing and returns `true`.
    pub fn step_once(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return true;
        };

        let outcome = session.construction.step(&mut self.grid, &mut self.random);
        self.steps += 1;

        if let StepOutcome::Carved { from, direction, .. } = outcome {
            self.carved += 1;
            if let Some(ref mut capture) = self.visualization {
                capture.record_passage(from, direction);
            }
        }

        let finished = outcome == StepOutcome::Finished || session.construction.is_complete();
        if finished {
            self.finish();
        }
        finished
    }

    /// Step until the maze is complete, for non-animated generation
    ///
    /// Returns the statistics of the completed maze. When no generation is in
    /// progress the statistics of the last completed maze are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No generation has ever been started
    /// - The iteration cap (proportional to the cell count) is exceeded
    pub fn run_to_completion(&mut self) -> Result<MazeStatistics> {
        if self.session.is_some() {
            let limit = self.iteration_cap();
            while self.steps < limit {
                if self.step_once() {
                    break;
                }
            }

            if self.session.is_some() {
                let algorithm = self.algorithm.unwrap_or_default();
                self.session = None;
                return Err(MazeError::GenerationStalled {
                    algorithm,
                    steps: self.steps,
                    limit,
                });
            }
        }

        self.statistics.ok_or_else(|| {
            invalid_state("run generation to completion", &"no generation has been started")
        })
    }

    /// Perform up to `steps_per_tick` steps, stopping early on completion
    ///
    /// A `steps_per_tick` of zero is treated as one, so a tick on an
    /// in-progress generation always performs at least one step.
    pub fn tick(&mut self, steps_per_tick: usize) -> TickOutcome {
        let carved_before = self.carved;
        let mut steps = 0;
        let mut finished = !self.is_generating();

        while !finished && steps < steps_per_tick.max(1) {
            finished = self.step_once();
            steps += 1;
        }

        if let Some(ref mut capture) = self.visualization {
            capture.end_tick();
        }

        TickOutcome {
            steps,
            carved: self.carved - carved_before,
            finished,
        }
    }

    fn finish(&mut self) {
        self.session = None;
        self.statistics = Some(MazeStatistics::compute(&self.grid));
    }

    /// Safety cap on the number of steps for the current grid
    pub const fn iteration_cap(&self) -> usize {
        self.grid.cell_count() * ITERATION_CAP_PER_CELL + ITERATION_CAP_PER_CELL
    }

    /// Whether a generation is in progress
    pub const fn is_generating(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a generation has completed and not been superseded
    pub const fn is_complete(&self) -> bool {
        self.session.is_none() && self.statistics.is_some()
    }

    /// Access the current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Statistics of the last completed maze
    pub const fn statistics(&self) -> Option<&MazeStatistics> {
        self.statistics.as_ref()
    }

    /// Algorithm of the current or last generation
    pub const fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Steps performed by the current or last generation
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Passages opened by the current or last generation
    pub const fn carved(&self) -> usize {
        self.carved
    }

    /// Access the random source
    pub const fn random(&self) -> &R {
        &self.random
    }

    /// Enable recording of carved passages for GIF export
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(GenerationCapture::new(self.grid.cols(), self.grid.rows()));
    }

    /// Export the recorded generation as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Visualization was not enabled
    /// - GIF export fails
    pub fn export_visualization(&self, output_path: &str) -> Result<()> {
        self.visualization.as_ref().map_or_else(
            || {
                Err(MazeError::InvalidParameter {
                    parameter: "visualization",
                    value: "disabled".to_string(),
                    reason: "Visualization was not enabled for this run".to_string(),
                })
            },
            |capture| {
                capture.export_gif(output_path, crate::io::configuration::GIF_FRAME_DELAY_MS)
            },
        )
    }
}
