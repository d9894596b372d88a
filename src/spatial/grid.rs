//! Rectangular cell grid with symmetric wall-opening masks
//!
//! Every cell stores a 4-bit mask, one bit per [`Direction`]. Openings are only
//! ever created in pairs, so the bit from `a` towards `b` is set exactly when the
//! bit from `b` towards `a` is set. Coordinates outside the grid are programming
//! errors and panic in every build profile; callers check [`Grid::in_bounds`] or
//! [`Grid::contains`] first.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::{MAX_DIMENSION, MIN_DIMENSION};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::direction::Direction;

/// Mask with every side open
const ALL_SIDES: u8 = 0b1111;

/// A grid position, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Cell {
    /// Create a cell coordinate
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Clamp a requested grid dimension into the supported range
pub const fn clamp_dimension(value: usize) -> usize {
    if value < MIN_DIMENSION {
        MIN_DIMENSION
    } else if value > MAX_DIMENSION {
        MAX_DIMENSION
    } else {
        value
    }
}

/// Maze grid of `cols x rows` wall-opening masks
///
/// Masks are stored row-major in an `ndarray` matrix indexed `[row, col]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    masks: Array2<u8>,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// Allocate a grid with every wall closed
    ///
    /// Both dimensions are clamped into `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = clamp_dimension(cols);
        let rows = clamp_dimension(rows);
        Self {
            masks: Array2::zeros((rows, cols)),
            cols,
            rows,
        }
    }

    /// Build a grid from raw row-major masks without clamping the dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or the mask count differs from `cols * rows`
    /// - A mask uses bits outside the four direction bits
    /// - A mask opens a side on the outer boundary
    /// - An opening is not mirrored by the neighboring cell
    pub fn from_masks(cols: usize, rows: usize, masks: Vec<u8>) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{cols}x{rows}"),
                &"grid needs at least one cell",
            ));
        }

        let masks =
            Array2::from_shape_vec((rows, cols), masks).map_err(|e| MazeError::MalformedGrid {
                reason: format!("mask count does not match {cols}x{rows}: {e}"),
            })?;

        let grid = Self { masks, cols, rows };
        grid.validate()?;
        Ok(grid)
    }

    fn validate(&self) -> Result<()> {
        for cell in self.cells() {
            let mask = self.mask(cell);
            if mask & !ALL_SIDES != 0 {
                return Err(MazeError::MalformedGrid {
                    reason: format!("cell {cell} has mask {mask:#06b} with unknown bits"),
                });
            }

            for direction in self.open_directions(cell) {
                let Some(neighbor) = self.neighbor(cell, direction) else {
                    return Err(MazeError::MalformedGrid {
                        reason: format!("cell {cell} opens {direction} through the outer wall"),
                    });
                };
                if !self.is_open(neighbor, direction.opposite()) {
                    return Err(MazeError::MalformedGrid {
                        reason: format!(
                            "opening {direction} from {cell} is not mirrored by {neighbor}"
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Dimensions as `(cols, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Top-left cell where every run and solve starts
    pub const fn entrance(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Bottom-right cell where every run and solve ends
    pub const fn exit(&self) -> Cell {
        Cell::new(self.cols - 1, self.rows - 1)
    }

    /// Check signed coordinates against the grid
    pub const fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    /// Check a cell against the grid
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x < self.cols && cell.y < self.rows
    }

    /// Row-major index of a cell
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid
    pub fn index_of(&self, cell: Cell) -> usize {
        self.require(cell);
        cell.y * self.cols + cell.x
    }

    /// Cell at a row-major index
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Grid::cell_count`]
    pub fn cell_at(&self, index: usize) -> Cell {
        assert!(
            index < self.cell_count(),
            "cell index {index} is outside the {}x{} grid",
            self.cols,
            self.rows
        );
        Cell::new(index % self.cols, index / self.cols)
    }

    /// Adjacent cell in a direction, if it lies inside the grid
    pub const fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.offset();
        let x = cell.x as isize + dx as isize;
        let y = cell.y as isize + dy as isize;
        if self.in_bounds(x, y) {
            Some(Cell::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// In-bounds neighbors paired with the direction leading to them, in N, E, S, W order
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = (Cell, Direction)> + '_ {
        self.require(cell);
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(cell, direction).map(|n| (n, direction)))
    }

    /// Wall-opening mask of a cell
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid
    pub fn mask(&self, cell: Cell) -> u8 {
        self.require(cell);
        self.masks.get([cell.y, cell.x]).copied().unwrap_or(0)
    }

    /// Whether the side of `cell` facing `direction` is open
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        self.mask(cell) & direction.bit() != 0
    }

    /// Open sides of a cell in canonical order
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid
    pub fn open_directions(&self, cell: Cell) -> impl Iterator<Item = Direction> + use<> {
        let mask = self.mask(cell);
        Direction::ALL
            .into_iter()
            .filter(move |direction| mask & direction.bit() != 0)
    }

    /// Number of open sides of a cell
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid
    pub fn degree(&self, cell: Cell) -> u32 {
        self.mask(cell).count_ones()
    }

    /// Remove the wall between `cell` and its neighbor in `direction`
    ///
    /// Both sides of the wall are opened together.
    ///
    /// # Panics
    ///
    /// Panics if `cell` or the neighbor in `direction` lies outside the grid
    pub fn open_passage(&mut self, cell: Cell, direction: Direction) {
        self.require(cell);
        let target = self.neighbor(cell, direction);
        assert!(
            target.is_some(),
            "cannot open {direction} from {cell}: neighbor is outside the {}x{} grid",
            self.cols,
            self.rows
        );

        if let Some(mask) = self.masks.get_mut([cell.y, cell.x]) {
            *mask |= direction.bit();
        }
        if let Some(neighbor) = target {
            if let Some(mask) = self.masks.get_mut([neighbor.y, neighbor.x]) {
                *mask |= direction.opposite().bit();
            }
        }
    }

    /// Number of open passages, counting each symmetric pair once
    pub fn passage_count(&self) -> usize {
        let open_sides: u32 = self.masks.iter().map(|mask| mask.count_ones()).sum();
        open_sides as usize / 2
    }

    /// Whether no wall has been opened yet
    pub fn is_blank(&self) -> bool {
        self.masks.iter().all(|&mask| mask == 0)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let cols = self.cols;
        (0..self.cell_count()).map(move |index| Cell::new(index % cols, index / cols))
    }

    /// Raw mask matrix indexed `[row, col]`
    pub const fn masks(&self) -> &Array2<u8> {
        &self.masks
    }

    fn require(&self, cell: Cell) {
        assert!(
            self.contains(cell),
            "cell {cell} is outside the {}x{} grid",
            self.cols,
            self.rows
        );
    }
}

/// ASCII art with `+--+` corners and `|` walls, north at the top
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.cols {
                let open = self.is_open(Cell::new(x, y), Direction::North);
                write!(f, "+{}", if open { "  " } else { "--" })?;
            }
            writeln!(f, "+")?;

            for x in 0..self.cols {
                let open = self.is_open(Cell::new(x, y), Direction::West);
                write!(f, "{}  ", if open { ' ' } else { '|' })?;
            }
            let open = self.is_open(Cell::new(self.cols - 1, y), Direction::East);
            writeln!(f, "{}", if open { ' ' } else { '|' })?;
        }

        for x in 0..self.cols {
            let open = self.is_open(Cell::new(x, self.rows - 1), Direction::South);
            write!(f, "+{}", if open { "  " } else { "--" })?;
        }
        writeln!(f, "+")
    }
}
