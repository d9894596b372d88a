//! Maze constants and runtime configuration defaults

/// Smallest accepted number of columns or rows
pub const MIN_DIMENSION: usize = 5;

/// Largest accepted number of columns or rows
pub const MAX_DIMENSION: usize = 200;

/// Columns of a freshly created engine
pub const DEFAULT_COLS: usize = 20;

/// Rows of a freshly created engine
pub const DEFAULT_ROWS: usize = 20;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Construction steps per tick in animated mode
pub const DEFAULT_STEPS_PER_TICK: usize = 10;

// Backtracker needs 2n steps and Prim at most one per frontier edge,
// so this leaves a wide margin before the guard trips
/// Iteration cap per cell for `run_to_completion`
pub const ITERATION_CAP_PER_CELL: usize = 8;

// Rendering
/// Side of one maze cell in exported images, in pixels
pub const CELL_PIXELS: u32 = 12;
/// Wall thickness in exported images, in pixels
pub const WALL_PIXELS: u32 = 2;
/// Background behind the maze
pub const BACKGROUND_COLOR: [u8; 4] = [11, 16, 39, 255];
/// Wall color
pub const WALL_COLOR: [u8; 4] = [229, 231, 235, 255];
/// Entrance cell highlight
pub const ENTRANCE_COLOR: [u8; 4] = [52, 74, 128, 255];
/// Exit cell highlight
pub const EXIT_COLOR: [u8; 4] = [69, 99, 94, 255];
/// Solve path overlay
pub const PATH_COLOR: [u8; 4] = [166, 227, 161, 255];
/// Traversal agent marker
pub const AGENT_COLOR: [u8; 4] = [110, 168, 254, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Prefix of exported maze images
pub const OUTPUT_PREFIX: &str = "maze";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Most frames written to a generation GIF before ticks are merged
pub const MAX_GIF_FRAMES: usize = 400;
