//! Randomized depth-first maze construction with an explicit stack
//!
//! The walk starts at the entrance. Each step looks at the top of the stack:
//! with unvisited neighbors it carves towards a random one and pushes it,
//! otherwise it pops. The maze is complete once the stack is empty.

use crate::algorithm::StepOutcome;
use crate::algorithm::selection::RandomSource;
use crate::algorithm::visited::VisitedSet;
use crate::spatial::{Cell, Direction, Grid};

/// Working state of the randomized backtracker
#[derive(Debug, Clone)]
pub struct Backtracker {
    stack: Vec<Cell>,
    visited: VisitedSet,
    // Reused between steps to avoid an allocation per step
    candidates: Vec<(Cell, Direction)>,
}

impl Backtracker {
    /// Start a walk at the entrance of `grid`
    pub fn new(grid: &Grid) -> Self {
        let start = grid.entrance();
        let mut visited = VisitedSet::new(grid);
        visited.visit(start);

        let mut stack = Vec::with_capacity(grid.cell_count());
        stack.push(start);

        Self {
            stack,
            visited,
            candidates: Vec::with_capacity(4),
        }
    }

    /// Advance the walk by one push or pop
    pub fn step<R: RandomSource + ?Sized>(&mut self, grid: &mut Grid, random: &mut R) -> StepOutcome {
        let Some(&current) = self.stack.last() else {
            return StepOutcome::Finished;
        };

        self.candidates.clear();
        self.candidates.extend(
            grid.neighbors(current)
                .filter(|(neighbor, _)| !self.visited.contains(*neighbor)),
        );

        if self.candidates.is_empty() {
            self.stack.pop();
            return StepOutcome::Idle;
        }

        let choice = random.pick_index(self.candidates.len());
        let Some(&(next, direction)) = self.candidates.get(choice) else {
            return StepOutcome::Idle;
        };

        grid.open_passage(current, direction);
        self.visited.visit(next);
        self.stack.push(next);

        StepOutcome::Carved {
            from: current,
            to: next,
            direction,
        }
    }

    /// Whether the stack has been emptied
    pub fn is_complete(&self) -> bool {
        self.stack.is_empty()
    }

    /// Current depth of the walk
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Cell on top of the stack
    pub fn head(&self) -> Option<Cell> {
        self.stack.last().copied()
    }

    /// Cells reached so far
    pub const fn visited(&self) -> &VisitedSet {
        &self.visited
    }
}
