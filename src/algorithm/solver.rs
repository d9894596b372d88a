//! Breadth-first shortest-path search over open passages

use std::collections::VecDeque;

use ndarray::Array2;

use crate::algorithm::visited::VisitedSet;
use crate::io::error::{MazeError, Result};
use crate::spatial::{Cell, Direction, Grid};

/// Ordered cells from a start cell to a target cell, both inclusive
///
/// Consecutive cells are always joined by an open passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvePath {
    cells: Vec<Cell>,
}

impl SolvePath {
    /// Cells in walking order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells on the path
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed to walk the path
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Last cell
    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether a cell lies on the path
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Moves that walk the path from its start
    pub fn directions(&self) -> Vec<Direction> {
        self.cells
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => direction_between(*from, *to),
                _ => None,
            })
            .collect()
    }
}

impl IntoIterator for SolvePath {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// Direction of a single step between adjacent cells
pub fn direction_between(from: Cell, to: Cell) -> Option<Direction> {
    Direction::ALL.into_iter().find(|direction| {
        let (dx, dy) = direction.offset();
        from.x as isize + dx as isize == to.x as isize
            && from.y as isize + dy as isize == to.y as isize
    })
}

/// Shortest path from the entrance to the exit
///
/// # Errors
///
/// Returns [`MazeError::Unsolvable`] if the exit is not reachable, which means
/// the grid is not a connected maze.
pub fn solve(grid: &Grid) -> Result<SolvePath> {
    solve_between(grid, grid.entrance(), grid.exit())
}

/// Shortest path between two cells
///
/// Neighbors are expanded in canonical direction order and the search stops as
/// soon as `to` is dequeued.
///
/// # Errors
///
/// Returns [`MazeError::Unsolvable`] if `to` is not reachable from `from`.
///
/// # Panics
///
/// Panics if `from` or `to` lies outside the grid
pub fn solve_between(grid: &Grid, from: Cell, to: Cell) -> Result<SolvePath> {
    assert!(
        grid.contains(from) && grid.contains(to),
        "solve endpoints {from} -> {to} must lie inside the {}x{} grid",
        grid.cols(),
        grid.rows()
    );

    let mut predecessors: Array2<Option<Cell>> = Array2::from_elem((grid.rows(), grid.cols()), None);
    let mut seen = VisitedSet::new(grid);
    let mut queue = VecDeque::with_capacity(grid.cell_count());

    seen.visit(from);
    queue.push_back(from);

    while let Some(cell) = queue.pop_front() {
        if cell == to {
            return Ok(reconstruct(&predecessors, from, to));
        }

        for direction in grid.open_directions(cell) {
            let Some(next) = grid.neighbor(cell, direction) else {
                continue;
            };
            if seen.visit(next) {
                if let Some(slot) = predecessors.get_mut([next.y, next.x]) {
                    *slot = Some(cell);
                }
                queue.push_back(next);
            }
        }
    }

    Err(MazeError::Unsolvable {
        from,
        to,
        explored: seen.count(),
    })
}

fn reconstruct(predecessors: &Array2<Option<Cell>>, from: Cell, to: Cell) -> SolvePath {
    let mut cells = vec![to];
    let mut current = to;
    while current != from {
        let Some(previous) = predecessors.get([current.y, current.x]).copied().flatten() else {
            break;
        };
        cells.push(previous);
        current = previous;
    }
    cells.reverse();
    SolvePath { cells }
}

/// Breadth-first distance of every reachable cell from `from`, indexed `[row, col]`
///
/// # Panics
///
/// Panics if `from` lies outside the grid
pub fn distances_from(grid: &Grid, from: Cell) -> Array2<Option<usize>> {
    let mut distances = Array2::from_elem((grid.rows(), grid.cols()), None);
    let mut queue = VecDeque::with_capacity(grid.cell_count());

    if let Some(slot) = distances.get_mut([from.y, from.x]) {
        *slot = Some(0);
    }
    queue.push_back((from, 0));

    while let Some((cell, distance)) = queue.pop_front() {
        for direction in grid.open_directions(cell) {
            let Some(next) = grid.neighbor(cell, direction) else {
                continue;
            };
            if let Some(slot) = distances.get_mut([next.y, next.x]) {
                if slot.is_none() {
                    *slot = Some(distance + 1);
                    queue.push_back((next, distance + 1));
                }
            }
        }
    }

    distances
}
