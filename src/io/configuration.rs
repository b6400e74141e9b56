//! Solver constants and runtime configuration defaults

/// Number of rotation/reflection combinations applied to every shape
pub const MAX_ORIENTATIONS: usize = 8;

/// Quarter turns applied per reflection
pub const ROTATIONS: usize = 4;

// The search recurses once per placed piece and once per skipped cell, so a
// large region with a generous skip budget goes deep
/// Stack size for dispatcher worker threads in bytes
pub const DEFAULT_WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Initial capacity of per-worker placement lists
pub const PLACEMENT_LIST_CAPACITY: usize = 300;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Progress redraws per second
pub const PROGRESS_REFRESH_HZ: u8 = 10;
