pub const MAX_STATES: i32 = 255;
pub const NUMBER_OF_ANTS: i32 = 10;
pub const GRID_WIDTH: i32 = 50;
pub const GRID_HEIGHT: i32 = 50;
pub const CELL_WIDTH: i32 = 10;

pub const CANVAS_ID: &str = "canvas";
pub const DEFAULT_FILL: &str = "#000000";

pub const BENCH_SEED: u64 = 0;
pub const BENCH_COLORS: [&str; 4] = ["#fff", "#88f", "#f80", "#222"];
