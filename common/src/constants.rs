use std::{ops::Range, time::Duration};

// Maze:
pub const WEIGHT_RANGE: Range<u32> = 0..100; // Half-open: weights are 0 to 99.
pub const DEFAULT_SIZE: usize = 20;

// Rendering:
pub const CELL_PIXELS: usize = 20;
pub const WALL_PIXELS: usize = 2;
pub const DOT_RADIUS: usize = 2;
pub const DOT_COLOR: &str = "#0095DD";

// Server:
pub const DEFAULT_MAX_SIZE: usize = 64; // Generation is O(V·E); keep requests small.
pub const DEFAULT_IP: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "8000";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
