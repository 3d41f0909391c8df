//! Timing constants for input handling and the main cycle.

/// Minimum time between two accepted edges of the same button, in microseconds.
pub const DEBOUNCE_WINDOW_US: u64 = 200_000;

/// Fixed delay at the end of each sample/render cycle, in milliseconds.
pub const CYCLE_PERIOD_MS: u64 = 50;

/// Number of cycles between two status log lines (~1 s at 50 ms per cycle).
pub const STATUS_LOG_INTERVAL: u32 = 20;
