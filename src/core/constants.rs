// Screen and field geometry (position units, one tile = 8 units)
pub const TILE_SIZE: f64 = 8.0;
pub const SCREEN_WIDTH: f64 = 240.0;
pub const FIELD_TILES: f64 = 12.0;
pub const FIELD_WIDTH: f64 = TILE_SIZE * FIELD_TILES;
pub const FIELD_MIN_X: f64 = SCREEN_WIDTH / 2.0 - FIELD_WIDTH / 2.0;

// Width sums are compared with this tolerance
pub const WIDTH_TOLERANCE: f64 = 1e-6;

// Cursor physics (per tick)
pub const CURSOR_SIZE: f64 = TILE_SIZE;
pub const CURSOR_PULL_STEP: f64 = 0.2;
pub const CURSOR_DRIFT_STEP: f64 = 0.1;
pub const CURSOR_MAX_VELOCITY: f64 = 6.0;
pub const CURSOR_BOUNCE: f64 = 0.6;
pub const CURSOR_EDGE_MARGIN: f64 = 1.0;

// Tick and timing
pub const TICKS_PER_SECOND: u64 = 30;
pub const TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND;
pub const MAX_FRAME_DT_MS: u64 = 100;

// Ticks a single Space press keeps the pull active (~200ms)
pub const PULL_HOLD_TICKS: u32 = 6;

// Distance goal used when a difficulty does not override it
pub const DEFAULT_DISTANCE_GOAL: f64 = 100.0;

// Simulator
pub const SIM_DEFAULT_RUNS: u32 = 200;
pub const SIM_MAX_TICKS_PER_RUN: u64 = 20_000;
