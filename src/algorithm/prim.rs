//! Randomized Prim construction over a frontier of candidate edges
//!
//! The frontier may hold several edges into the same unvisited cell. Stale
//! edges are discarded when drawn rather than filtered on insertion.

use crate::algorithm::StepOutcome;
use crate::algorithm::selection::RandomSource;
use crate::algorithm::visited::VisitedSet;
use crate::spatial::{Cell, Direction, Grid};

/// Candidate passage from a visited cell to a neighbor that was unvisited when queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEdge {
    /// Visited source cell
    pub from: Cell,
    /// Neighbor across the wall
    pub to: Cell,
    /// Side of `from` facing `to`
    pub direction: Direction,
}

/// Working state of randomized Prim
#[derive(Debug, Clone)]
pub struct Prim {
    frontier: Vec<FrontierEdge>,
    visited: VisitedSet,
    start: Cell,
}

impl Prim {
    /// Seed the tree at a random cell and queue its edges
    pub fn new<R: RandomSource + ?Sized>(grid: &Grid, random: &mut R) -> Self {
        let start = grid.cell_at(random.pick_index(grid.cell_count()));
        let mut prim = Self {
            frontier: Vec::with_capacity(grid.cell_count()),
            visited: VisitedSet::new(grid),
            start,
        };
        prim.visited.visit(start);
        prim.push_frontier(grid, start);
        prim
    }

    fn push_frontier(&mut self, grid: &Grid, cell: Cell) {
        for (neighbor, direction) in grid.neighbors(cell) {
            if !self.visited.contains(neighbor) {
                self.frontier.push(FrontierEdge {
                    from: cell,
                    to: neighbor,
                    direction,
                });
            }
        }
    }

    /// Draw one frontier edge and carve it if its target is still unvisited
    pub fn step<R: RandomSource + ?Sized>(&mut self, grid: &mut Grid, random: &mut R) -> StepOutcome {
        if self.frontier.is_empty() {
            return StepOutcome::Finished;
        }

        // Order of the remaining edges is irrelevant to a uniform draw
        let index = random.pick_index(self.frontier.len());
        let edge = self.frontier.swap_remove(index.min(self.frontier.len() - 1));

        if self.visited.contains(edge.to) {
            return StepOutcome::Idle;
        }

        grid.open_passage(edge.from, edge.direction);
        self.visited.visit(edge.to);
        self.push_frontier(grid, edge.to);

        StepOutcome::Carved {
            from: edge.from,
            to: edge.to,
            direction: edge.direction,
        }
    }

    /// Whether the frontier has been drained
    pub fn is_complete(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Number of queued edges, stale ones included
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Queued edges in storage order
    pub fn frontier(&self) -> &[FrontierEdge] {
        &self.frontier
    }

    /// Cell the tree was grown from
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// Cells reached so far
    pub const fn visited(&self) -> &VisitedSet {
        &self.visited
    }
}
