//! Time-window debouncer for edge events.
//!
//! Each button owns one record holding the timestamp of its last accepted
//! edge. An edge is accepted when at least the configured window has elapsed
//! since that record, and the record is then moved to the new edge. The check
//! and the update run inside one critical section per button, so two callers
//! can never both accept the same window.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use super::LogicalButton;
use crate::config::DEBOUNCE_WINDOW_US;

/// Monotonic microsecond counter value.
pub type Timestamp = u64;

/// Last accepted edge of one button. `None` until the first press after boot.
type Record = Mutex<CriticalSectionRawMutex, Cell<Option<Timestamp>>>;

/// Decides whether an edge is a genuine press or contact bounce.
pub struct Debouncer {
    window_us: u64,
    records: [Record; LogicalButton::COUNT],
}

impl Debouncer {
    /// Create a debouncer using the default 200 ms window.
    pub const fn new() -> Self { Self::with_window(DEBOUNCE_WINDOW_US) }

    /// Create a debouncer with a custom window in microseconds.
    pub const fn with_window(window_us: u64) -> Self {
        Self {
            window_us,
            records: [const { Mutex::new(Cell::new(None)) }; LogicalButton::COUNT],
        }
    }

    /// Returns true if `now` is at least one window past the button's last
    /// accepted edge, and records `now` as the new last edge.
    ///
    /// The first edge after boot is always accepted. Elapsed time is computed
    /// with wrapping subtraction, so a counter wrap cannot fake a long gap.
    pub fn accept(
        &self,
        button: LogicalButton,
        now: Timestamp,
    ) -> bool {
        self.records[button.index()].lock(|last| {
            let accepted = match last.get() {
                None => true,
                Some(prev) => now.wrapping_sub(prev) >= self.window_us,
            };
            if accepted {
                last.set(Some(now));
            }
            accepted
        })
    }

    /// Debounce window in microseconds.
    #[cfg(test)]
    pub const fn window_us(&self) -> u64 { self.window_us }
}

impl Default for Debouncer {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
