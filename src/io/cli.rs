//! Command-line driver for generating, solving and walking mazes

use crate::algorithm::Algorithm;
use crate::algorithm::selection::RandomSelector;
use crate::algorithm::solver::SolvePath;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_STEPS_PER_TICK, GIF_FRAME_DELAY_MS, OUTPUT_PREFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Overlay, export_maze_as_png};
use crate::io::progress::ProgressManager;
use crate::session::clock::SystemClock;
use crate::session::engine::MazeEngine;
use crate::session::traversal::{MoveOutcome, TraversalState};
use crate::spatial::Direction;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mazeweave")]
#[command(
    author,
    version,
    about = "Generate, solve and walk perfect mazes"
)]
/// Command-line arguments for maze generation
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of columns (clamped to 5..=200)
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of rows (clamped to 5..=200)
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Construction algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Backtracker)]
    pub algorithm: Algorithm,

    /// Random seed for reproducible mazes (unseeded when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Build the maze tick by tick instead of in one call
    #[arg(long)]
    pub animate: bool,

    /// Construction steps per tick in animated mode
    #[arg(short = 't', long, default_value_t = DEFAULT_STEPS_PER_TICK)]
    pub steps_per_tick: usize,

    /// Overlay the shortest path from entrance to exit
    #[arg(long)]
    pub solve: bool,

    /// Number of mazes to generate, with consecutive seeds when seeded
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Directory for exported images
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Export the animated construction as a GIF (implies --animate)
    #[arg(short, long)]
    pub visualize: bool,

    /// Compass moves for a scripted traversal run, e.g. "EESSW"
    #[arg(short, long, value_name = "MOVES")]
    pub moves: Option<String>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Whether generation is driven by ticks
    pub const fn is_animated(&self) -> bool {
        self.animate || self.visualize
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed of the maze at `index` in the batch
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }
}

/// Parse a compass move string, ignoring whitespace and commas
///
/// # Errors
///
/// Returns an error if a character is not one of `NESW` (either case)
pub fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            Direction::from_letter(c)
                .ok_or_else(|| invalid_parameter("moves", &c, &"expected one of N, E, S, W"))
        })
        .collect()
}

/// Summary of one generated maze
#[derive(Debug, Clone)]
pub struct MazeReport {
    /// Image written for the maze
    pub image_path: PathBuf,
    /// GIF written for the construction, if requested
    pub animation_path: Option<PathBuf>,
    /// Dead ends in the maze
    pub dead_ends: usize,
    /// Construction steps performed
    pub steps: usize,
    /// Cells on the solve path, if solved
    pub path_length: Option<usize>,
    /// Traversal state after the scripted moves, if any
    pub traversal: Option<TraversalState>,
}

/// Orchestrates a batch of maze generations with progress tracking
pub struct MazeRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested maze
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, generation or export fails
    pub fn run(&mut self) -> Result<Vec<MazeReport>> {
        let moves = self
            .cli
            .moves
            .as_deref()
            .map(parse_moves)
            .transpose()?;

        if self.cli.count == 0 {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut reports = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let report = self.generate_one(index, moves.as_deref())?;
            self.print_summary(&report);
            reports.push(report);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn generate_one(&mut self, index: usize, moves: Option<&[Direction]>) -> Result<MazeReport> {
        let start_time = Instant::now();
        let random = self
            .cli
            .seed_for(index)
            .map_or_else(RandomSelector::from_entropy, RandomSelector::new);

        let mut engine = MazeEngine::new(random, SystemClock::new());
        engine.set_animated(self.cli.is_animated());
        engine.set_steps_per_tick(self.cli.steps_per_tick);
        if self.cli.visualize {
            engine.driver_mut().enable_visualization();
        }

        engine.configure(self.cli.cols, self.cli.rows, self.cli.algorithm)?;

        let label = self.output_stem(index, engine.grid().cols(), engine.grid().rows());
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_maze(index, &label, engine.grid().cell_count());
        }

        while engine.is_generating() {
            engine.tick();
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_cells(index, engine.driver().carved() + 1);
            }
        }

        let path_length = if self.cli.solve {
            engine.request_solve()?.map(SolvePath::len)
        } else {
            None
        };

        let traversal = moves.map(|directions| {
            for &direction in directions {
                if let MoveOutcome::Reached { .. } = engine.move_agent(direction) {
                    break;
                }
            }
            engine.traversal().state()
        });

        let image_path = self.cli.output.join(format!("{label}.png"));
        let overlay = Overlay {
            path: engine.solve_path(),
            agent: traversal.map(|_| engine.traversal().position()),
        };
        export_maze_as_png(engine.grid(), &overlay, &path_string(&image_path)?)?;

        let animation_path = if self.cli.visualize {
            let path = self.cli.output.join(format!("{label}_generation.gif"));
            engine
                .driver()
                .export_visualization(&path_string(&path)?)?;
            Some(path)
        } else {
            None
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_maze(index, start_time.elapsed());
        }

        Ok(MazeReport {
            image_path,
            animation_path,
            dead_ends: engine.snapshot().dead_ends,
            steps: engine.driver().steps(),
            path_length,
            traversal,
        })
    }

    fn output_stem(&self, index: usize, cols: usize, rows: usize) -> String {
        match (self.cli.seed_for(index), self.cli.count) {
            (Some(seed), _) => format!("{OUTPUT_PREFIX}_{cols}x{rows}_{seed}"),
            (None, 1) => format!("{OUTPUT_PREFIX}_{cols}x{rows}"),
            (None, _) => format!("{OUTPUT_PREFIX}_{cols}x{rows}_{index}"),
        }
    }

    // Allow print for the user-facing run summary
    #[allow(clippy::print_stderr)]
    fn print_summary(&self, report: &MazeReport) {
        if self.cli.quiet {
            return;
        }

        eprintln!(
            "{}: {} dead ends, {} steps",
            report.image_path.display(),
            report.dead_ends,
            report.steps
        );
        if let Some(length) = report.path_length {
            eprintln!("  shortest path: {length} cells");
        }
        if let Some(state) = report.traversal {
            eprintln!("  traversal: {state}");
        }
        if let Some(ref path) = report.animation_path {
            eprintln!(
                "  animation: {} ({} ms per frame)",
                path.display(),
                GIF_FRAME_DELAY_MS
            );
        }
    }
}

fn path_string(path: &std::path::Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_parameter("output", &path.display(), &"path is not valid UTF-8"))
}
