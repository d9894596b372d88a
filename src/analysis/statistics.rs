//! Structural statistics of a maze grid
//!
//! Everything here is derived from the wall masks alone, so the figures can be
//! recomputed at any time from an immutable grid.

use std::collections::VecDeque;

use crate::algorithm::visited::VisitedSet;
use crate::spatial::Grid;

/// Summary figures for a completed maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MazeStatistics {
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// Total number of cells
    pub cell_count: usize,
    /// Cells with exactly one open side
    pub dead_ends: usize,
    /// Cells with two open sides
    pub corridors: usize,
    /// Cells with three or more open sides
    pub junctions: usize,
    /// Open passages, each symmetric pair counted once
    pub passages: usize,
}

impl MazeStatistics {
    /// Compute the statistics of a grid
    pub fn compute(grid: &Grid) -> Self {
        let mut statistics = Self {
            cols: grid.cols(),
            rows: grid.rows(),
            cell_count: grid.cell_count(),
            passages: grid.passage_count(),
            ..Self::default()
        };

        for mask in grid.masks() {
            match mask.count_ones() {
                1 => statistics.dead_ends += 1,
                2 => statistics.corridors += 1,
                3 | 4 => statistics.junctions += 1,
                _ => {}
            }
        }

        statistics
    }

    /// Fraction of cells that are dead ends
    pub fn dead_end_ratio(&self) -> f64 {
        if self.cell_count == 0 {
            return 0.0;
        }
        self.dead_ends as f64 / self.cell_count as f64
    }
}

/// Count cells with exactly one open side
pub fn dead_ends(grid: &Grid) -> usize {
    grid.masks()
        .iter()
        .filter(|mask| mask.count_ones() == 1)
        .count()
}

/// Number of cells reachable from the entrance through open passages
pub fn reachable_cells(grid: &Grid) -> usize {
    let mut seen = VisitedSet::new(grid);
    let mut queue = VecDeque::with_capacity(grid.cell_count());
    seen.visit(grid.entrance());
    queue.push_back(grid.entrance());

    while let Some(cell) = queue.pop_front() {
        for direction in grid.open_directions(cell) {
            if let Some(next) = grid.neighbor(cell, direction) {
                if seen.visit(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    seen.count()
}

/// Whether the passage graph is a spanning tree over every cell
///
/// A connected graph on `n` vertices with exactly `n - 1` edges is acyclic.
pub fn is_perfect_maze(grid: &Grid) -> bool {
    grid.passage_count() + 1 == grid.cell_count() && reachable_cells(grid) == grid.cell_count()
}
