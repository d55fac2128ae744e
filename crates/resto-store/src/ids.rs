//! Time-based identifiers.
//!
//! Ids are a one-letter prefix plus milliseconds since the epoch
//! (`r1700000000000`, `o1700000000001`). Two creations in the same
//! millisecond get consecutive values instead of colliding.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Process-wide monotonic millisecond clock.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in milliseconds, bumped past the last value handed out.
    pub fn next_millis(&self) -> i64 {
        self.next_after(Utc::now().timestamp_millis())
    }

    /// `{prefix}{millis}`.
    pub fn next_id(&self, prefix: char) -> String {
        format!("{}{}", prefix, self.next_millis())
    }

    fn next_after(&self, now: i64) -> i64 {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}
