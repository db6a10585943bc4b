use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Controllable time for watchdog testing.
///
/// The harness under test keeps no clock of its own; scenarios advance this
/// one manually and the scenario runner's watchdog compares it against the
/// configured per-case timeout. Single-threaded by design, like the harness.
#[derive(Clone)]
pub struct ManualClock {
    now_ms: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock starting at zero.
    pub fn new() -> Self {
        Self {
            now_ms: Rc::new(Cell::new(0)),
        }
    }

    /// Current timestamp in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Advance time by a duration.
    pub fn advance(&self, duration: Duration) {
        self.now_ms.set(self.now_ms.get() + duration.as_millis() as u64);
    }

    /// Advance time by milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}
