//! Frame capture and GIF generation for animated maze construction

use image::{Delay, Frame};

use crate::io::configuration::{MAX_GIF_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result, file_system_error, invalid_state};
use crate::io::image::{Overlay, render_maze};
use crate::spatial::{Cell, Direction, Grid};

/// A single passage opened during construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassageEvent {
    /// Cell the passage was opened from
    pub cell: Cell,
    /// Side of `cell` that was opened
    pub direction: Direction,
}

/// Records carved passages so construction can be replayed as an animation
///
/// Tick boundaries are remembered so that one frame corresponds to one tick
/// of animated generation.
#[derive(Debug, Clone)]
pub struct GenerationCapture {
    events: Vec<PassageEvent>,
    tick_marks: Vec<usize>,
    cols: usize,
    rows: usize,
}

impl GenerationCapture {
    /// Create an empty capture for a grid of the given size
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            events: Vec::with_capacity(cols * rows),
            tick_marks: Vec::new(),
            cols,
            rows,
        }
    }

    /// Discard everything recorded and adopt new dimensions
    pub fn reset(&mut self, cols: usize, rows: usize) {
        self.events.clear();
        self.tick_marks.clear();
        self.cols = cols;
        self.rows = rows;
    }

    /// Record an opened passage
    pub fn record_passage(&mut self, cell: Cell, direction: Direction) {
        self.events.push(PassageEvent { cell, direction });
    }

    /// Close the current tick; ticks without new passages are merged
    pub fn end_tick(&mut self) {
        if self.tick_marks.last() != Some(&self.events.len()) && !self.events.is_empty() {
            self.tick_marks.push(self.events.len());
        }
    }

    /// Returns all recorded passages
    pub fn events(&self) -> &[PassageEvent] {
        &self.events
    }

    /// Number of recorded passages
    pub fn passage_count(&self) -> usize {
        self.events.len()
    }

    /// Number of closed ticks that carved something
    pub fn tick_count(&self) -> usize {
        self.tick_marks.len()
    }

    /// Replay the first `count` passages onto a blank grid
    pub fn replay(&self, count: usize) -> Grid {
        let mut grid = Grid::new(self.cols, self.rows);
        for event in self.events.iter().take(count) {
            grid.open_passage(event.cell, event.direction);
        }
        grid
    }

    /// Passage counts at which frames are rendered
    ///
    /// Uses tick boundaries when available, otherwise splits the passages
    /// evenly. Boundaries are thinned to respect both the frame cap and
    /// `skip_factor`, and the final boundary always shows the finished maze.
    pub fn frame_boundaries(&self, skip_factor: usize) -> Vec<usize> {
        let total = self.events.len();
        if total == 0 {
            return Vec::new();
        }

        let marks: Vec<usize> = if self.tick_marks.is_empty() {
            let per_frame = total.div_ceil(MAX_GIF_FRAMES).max(1);
            (per_frame..=total).step_by(per_frame).collect()
        } else {
            self.tick_marks.clone()
        };

        let stride = skip_factor.max(marks.len().div_ceil(MAX_GIF_FRAMES)).max(1);
        let mut boundaries: Vec<usize> = marks
            .into_iter()
            .skip(stride - 1)
            .step_by(stride)
            .collect();
        if boundaries.last() != Some(&total) {
            boundaries.push(total);
        }
        boundaries
    }

    /// Export the captured construction as a GIF
    ///
    /// Frames are skipped when the requested frame rate exceeds what viewers
    /// reliably display, keeping the apparent animation speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No passages were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.events.is_empty() {
            return Err(invalid_state(
                "export generation GIF",
                &"no passages were captured",
            ));
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor as usize);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(file_system_error(parent, "create directory"))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(file_system_error(output_path, "create file"))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut grid = Grid::new(self.cols, self.rows);
        let mut frames = vec![Self::render_frame(&grid, delay_ms)];
        let mut replayed = 0;

        for boundary in self.frame_boundaries(skip_factor) {
            for event in self.events.iter().take(boundary).skip(replayed) {
                grid.open_passage(event.cell, event.direction);
            }
            replayed = boundary;
            frames.push(Self::render_frame(&grid, delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(Self::render_frame(&grid, delay_ms * 25));
        frames
    }

    fn render_frame(grid: &Grid, delay_ms: u32) -> Frame {
        Frame::from_parts(
            render_maze(grid, &Overlay::default()),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
