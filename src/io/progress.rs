//! Multi-maze progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display while generating several mazes
///
/// Each maze bar tracks cells reached out of the cell count. Large batches
/// add a single batch bar and only show a rolling window of maze bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    maze_bars: Vec<ProgressBar>,
    maze_count: usize,
    /// Stores (`label`, `cells_reached`, `cell_count`) for rolling window display
    maze_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Mazes: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            maze_bars: Vec::new(),
            maze_count: 0,
            maze_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on maze count
    pub fn initialize(&mut self, maze_count: usize) {
        self.maze_count = maze_count;

        // Switch to batch mode for large runs to avoid terminal spam
        if maze_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(maze_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = maze_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.maze_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of mazes the manager was initialized for
    pub const fn maze_count(&self) -> usize {
        self.maze_count
    }

    /// Configure the bar for a new maze
    pub fn start_maze(&mut self, index: usize, label: &str, cell_count: usize) {
        if index >= self.maze_states.len() {
            self.maze_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.maze_states.get_mut(index) {
            *state = (label.to_string(), 0, cell_count);
        }
        self.update_bars();
    }

    /// Report how many cells the construction has reached
    pub fn update_cells(&mut self, index: usize, cells_reached: usize) {
        if let Some(state) = self.maze_states.get_mut(index) {
            state.1 = cells_reached.min(state.2);
        }
        self.update_bars();
    }

    /// Mark a maze as completed and update batch progress
    pub fn complete_maze(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.maze_states.get_mut(index) {
            state.0 = format!("✓ {} ({:.2}s)", state.0, elapsed.as_secs_f64());
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All mazes generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active mazes
    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .maze_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (label, current, max)) in visible.iter().copied().enumerate() {
            if let Some(bar) = self.maze_bars.get(bar_idx) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                let max_width = max.to_string().len();
                bar.set_message(format!("{current:>max_width$}/{max}"));
                bar.set_prefix(label.clone());
            }
        }

        // Clear any unused bars
        for bar in self.maze_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
