//! PNG rendering of maze grids with optional overlays

use image::{Rgba, RgbaImage};

use crate::algorithm::solver::SolvePath;
use crate::io::configuration::{
    AGENT_COLOR, BACKGROUND_COLOR, CELL_PIXELS, ENTRANCE_COLOR, EXIT_COLOR, PATH_COLOR,
    WALL_COLOR, WALL_PIXELS,
};
use crate::io::error::{MazeError, Result, file_system_error};
use crate::spatial::{Cell, Direction, Grid};

/// Optional layers drawn over the walls
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    /// Solve path drawn as a line through cell centers
    pub path: Option<&'a SolvePath>,
    /// Traversal agent drawn as a square marker
    pub agent: Option<Cell>,
}

/// Pixel size of the rendered image for a grid
pub const fn image_size(grid: &Grid) -> (u32, u32) {
    (
        grid.cols() as u32 * CELL_PIXELS + WALL_PIXELS,
        grid.rows() as u32 * CELL_PIXELS + WALL_PIXELS,
    )
}

fn fill_rect(img: &mut RgbaImage, left: u32, top: u32, width: u32, height: u32, color: Rgba<u8>) {
    let right = left.saturating_add(width).min(img.width());
    let bottom = top.saturating_add(height).min(img.height());
    for y in top..bottom {
        for x in left..right {
            img.put_pixel(x, y, color);
        }
    }
}

const fn cell_origin(cell: Cell) -> (u32, u32) {
    (
        cell.x as u32 * CELL_PIXELS + WALL_PIXELS,
        cell.y as u32 * CELL_PIXELS + WALL_PIXELS,
    )
}

/// Render walls, entrance and exit highlights, and any overlays
pub fn render_maze(grid: &Grid, overlay: &Overlay<'_>) -> RgbaImage {
    let (width, height) = image_size(grid);
    let mut img = RgbaImage::from_pixel(width, height, Rgba(WALL_COLOR));
    let inner = CELL_PIXELS - WALL_PIXELS;

    for cell in grid.cells() {
        let color = if cell == grid.entrance() {
            Rgba(ENTRANCE_COLOR)
        } else if cell == grid.exit() {
            Rgba(EXIT_COLOR)
        } else {
            Rgba(BACKGROUND_COLOR)
        };
        let (left, top) = cell_origin(cell);
        fill_rect(&mut img, left, top, inner, inner, color);

        // Open walls take the background color; only east and south are
        // drawn so each passage is painted once
        if grid.is_open(cell, Direction::East) {
            fill_rect(&mut img, left + inner, top, WALL_PIXELS, inner, Rgba(BACKGROUND_COLOR));
        }
        if grid.is_open(cell, Direction::South) {
            fill_rect(&mut img, left, top + inner, inner, WALL_PIXELS, Rgba(BACKGROUND_COLOR));
        }
    }

    if let Some(path) = overlay.path {
        draw_path(&mut img, path);
    }

    if let Some(agent) = overlay.agent {
        if grid.contains(agent) {
            let (left, top) = cell_origin(agent);
            let size = (inner / 2).max(2);
            let inset = (inner - size) / 2;
            fill_rect(&mut img, left + inset, top + inset, size, size, Rgba(AGENT_COLOR));
        }
    }

    img
}

fn draw_path(img: &mut RgbaImage, path: &SolvePath) {
    let inner = CELL_PIXELS - WALL_PIXELS;
    let thickness = (CELL_PIXELS / 4).max(2);
    let center = WALL_PIXELS + inner / 2 - thickness / 2;

    for pair in path.cells().windows(2) {
        let [from, to] = pair else {
            continue;
        };
        let left = from.x.min(to.x) as u32 * CELL_PIXELS + center;
        let top = from.y.min(to.y) as u32 * CELL_PIXELS + center;
        let width = from.x.abs_diff(to.x) as u32 * CELL_PIXELS + thickness;
        let height = from.y.abs_diff(to.y) as u32 * CELL_PIXELS + thickness;
        fill_rect(img, left, top, width, height, Rgba(PATH_COLOR));
    }

    if let [only] = path.cells() {
        let left = only.x as u32 * CELL_PIXELS + center;
        let top = only.y as u32 * CELL_PIXELS + center;
        fill_rect(img, left, top, thickness, thickness, Rgba(PATH_COLOR));
    }
}

/// Render a maze and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(grid: &Grid, overlay: &Overlay<'_>, output_path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    render_maze(grid, overlay)
        .save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
