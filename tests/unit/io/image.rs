//! Tests for maze rendering and PNG export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use mazeweave::algorithm::Algorithm;
    use mazeweave::algorithm::driver::GenerationDriver;
    use mazeweave::algorithm::selection::SequenceSelector;
    use mazeweave::algorithm::solver::solve;
    use mazeweave::io::configuration::{
        AGENT_COLOR, BACKGROUND_COLOR, ENTRANCE_COLOR, PATH_COLOR, WALL_COLOR,
    };
    use mazeweave::io::image::{Overlay, export_maze_as_png, image_size, render_maze};
    use mazeweave::spatial::{Cell, Grid};

    fn serpentine() -> Grid {
        let mut driver = GenerationDriver::new(SequenceSelector::first());
        driver.start_generation(Algorithm::Backtracker, 5, 5);
        let _ = driver.run_to_completion();
        driver.grid().clone()
    }

    // Tests image dimensions for a grid
    // Verified by omitting the outer wall thickness
    #[test]
    fn test_image_size() {
        let grid = Grid::new(5, 7);
        assert_eq!(image_size(&grid), (62, 86));
        let img = render_maze(&grid, &Overlay::default());
        assert_eq!(img.dimensions(), (62, 86));
    }

    // Tests wall and passage pixels around the entrance
    // Verified by painting open walls in the wall color
    #[test]
    fn test_walls_and_passages() {
        let grid = serpentine();
        let img = render_maze(&grid, &Overlay::default());

        assert_eq!(img.get_pixel(0, 0), &Rgba(WALL_COLOR));
        assert_eq!(img.get_pixel(2, 2), &Rgba(ENTRANCE_COLOR));
        // East of the entrance is open, south is closed
        assert_eq!(img.get_pixel(12, 2), &Rgba(BACKGROUND_COLOR));
        assert_eq!(img.get_pixel(2, 12), &Rgba(WALL_COLOR));
    }

    // Tests that the solve path and agent are drawn over the walls
    // Verified by skipping draw_path when an overlay path is present
    #[test]
    fn test_overlays() {
        let grid = serpentine();
        let path = solve(&grid).ok();
        let overlay = Overlay {
            path: path.as_ref(),
            agent: Some(Cell::new(2, 3)),
        };
        let img = render_maze(&grid, &overlay);

        assert_eq!(img.get_pixel(6, 6), &Rgba(PATH_COLOR));
        assert_eq!(img.get_pixel(29, 41), &Rgba(AGENT_COLOR));
    }

    // Tests PNG creation including missing parent directories
    // Verified by disabling the directory creation
    #[test]
    fn test_export_creates_file() {
        let temp_dir = tempfile::tempdir();
        assert!(temp_dir.is_ok());
        let Ok(temp_dir) = temp_dir else {
            return;
        };
        let output_path = temp_dir.path().join("nested").join("maze.png");
        let output = output_path.to_string_lossy().into_owned();

        let result = export_maze_as_png(&serpentine(), &Overlay::default(), &output);
        assert!(result.is_ok(), "PNG export should succeed");

        let reloaded = image::open(&output_path);
        assert_eq!(reloaded.map(|img| (img.width(), img.height())).ok(), Some((62, 62)));
    }
}
