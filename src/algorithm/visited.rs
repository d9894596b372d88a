use bitvec::vec::BitVec;
use std::fmt;

use crate::spatial::{Cell, Grid};

/// Fixed-size bit set of visited cells for one generation session
///
/// Cells are addressed by their row-major index, so the set is tied to the
/// dimensions of the grid it was created for.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    cols: usize,
}

impl VisitedSet {
    /// Create a set with no cell visited
    pub fn new(grid: &Grid) -> Self {
        Self {
            bits: BitVec::repeat(false, grid.cell_count()),
            cols: grid.cols(),
        }
    }

    const fn index(&self, cell: Cell) -> usize {
        cell.y * self.cols + cell.x
    }

    /// Mark a cell visited, returning whether it was unvisited before
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid the set was created for
    pub fn visit(&mut self, cell: Cell) -> bool {
        let index = self.index(cell);
        assert!(
            cell.x < self.cols && index < self.bits.len(),
            "cell {cell} is outside the visited set"
        );
        let was_visited = self.contains(cell);
        self.bits.set(index, true);
        !was_visited
    }

    /// Test whether a cell has been visited
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.cols && self.bits.get(self.index(cell)).as_deref() == Some(&true)
    }

    /// Count visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether every cell has been visited
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitedSet({}/{} cells)", self.count(), self.bits.len())
    }
}
