// src/config/consts.rs

// Logging
pub const LOG_FILE: &str = ".store/hotel_geo.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "hotels";

// Concurrency
pub const WORKERS: usize = 4;
pub const MAX_WORKERS: usize = 32;
