//! Atomic synthetic id counter
//!
//! One counter is shared by every owner type of a process (see
//! [`AtomicSyntheticIdCounter::global`]); tests build independent instances.
//!
//! Under `--cfg loom` the counter runs on loom's atomics so the model checker
//! explores its interleavings.

use crate::config::DEFAULT_SYNTHETIC_ID_BASE;
use crate::features::reconcile::ports::SyntheticIdSource;
use once_cell::sync::Lazy;
use std::sync::Arc;

#[cfg(loom)]
use loom::sync::atomic::{AtomicU64, Ordering};
#[cfg(not(loom))]
use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_COUNTER: Lazy<Arc<AtomicSyntheticIdCounter>> =
    Lazy::new(|| Arc::new(AtomicSyntheticIdCounter::new(DEFAULT_SYNTHETIC_ID_BASE)));

#[derive(Debug)]
pub struct AtomicSyntheticIdCounter {
    base: u64,
    next: AtomicU64,
}

impl AtomicSyntheticIdCounter {
    pub fn new(base: u64) -> Self {
        Self {
            base,
            next: AtomicU64::new(base),
        }
    }

    /// Process-wide counter starting at the default base; never reset
    pub fn global() -> Arc<AtomicSyntheticIdCounter> {
        Arc::clone(&GLOBAL_COUNTER)
    }

    /// Id the next draw will return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl SyntheticIdSource for AtomicSyntheticIdCounter {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    fn base(&self) -> u64 {
        self.base
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_counter_starts_at_base() {
        let counter = AtomicSyntheticIdCounter::new(10_000);
        assert_eq!(counter.next_id(), 10_000);
        assert_eq!(counter.next_id(), 10_001);
        assert_eq!(counter.peek(), 10_002);
        assert_eq!(counter.base(), 10_000);
    }

    #[test]
    fn test_counter_never_reuses_under_contention() {
        let counter = Arc::new(AtomicSyntheticIdCounter::new(10_000));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..500).map(|_| counter.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let ids = handle.join().unwrap();
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            for id in ids {
                assert!(id >= 10_000);
                assert!(seen.insert(id), "duplicate synthetic id {}", id);
            }
        }
        assert_eq!(seen.len(), 4_000);
    }

    #[test]
    fn test_global_is_shared() {
        let a = AtomicSyntheticIdCounter::global();
        let b = AtomicSyntheticIdCounter::global();
        assert!(Arc::ptr_eq(&a, &b));

        let first = a.next_id();
        let second = b.next_id();
        assert!(first >= DEFAULT_SYNTHETIC_ID_BASE);
        assert!(second > first);
    }
}
