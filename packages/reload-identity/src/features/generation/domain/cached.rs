//! Ready cache entry

use super::history::GenerationHistory;
use crate::features::reconcile::{Reconciliation, TransitionMap};
use std::sync::Arc;

/// Generation history plus the reconciliation memoized for it
///
/// Cloning is cheap (shared pointers only).
#[derive(Debug, Clone)]
pub struct CachedReconciliation {
    pub history: GenerationHistory,
    pub reconciliation: Arc<Reconciliation>,
}

impl CachedReconciliation {
    pub fn transition_map(&self) -> &Arc<TransitionMap> {
        &self.reconciliation.map
    }
}

/// Per-key cache state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Empty,
    /// A writer holds the key
    Computing,
    Ready,
}
