//! Capture clocks

use crate::features::generation::ports::Clock;
use crate::shared::models::Version;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock in Unix milliseconds
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Version {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Version::new(millis)
    }
}

/// Caller-driven clock for tests and offline runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    pub fn set(&self, value: u64) {
        self.now.store(value, Ordering::SeqCst);
    }

    pub fn advance(&self, delta: u64) -> Version {
        Version::new(self.now.fetch_add(delta, Ordering::SeqCst) + delta)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Version {
        Version::new(self.now.load(Ordering::SeqCst))
    }
}
