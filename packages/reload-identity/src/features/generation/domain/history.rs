//! Two-slot generation history
//!
//! Holds the current generation and at most one predecessor. Advancing drops
//! the predecessor's own predecessor by construction, so retention never
//! exceeds one level.

use super::generation::Generation;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GenerationHistory {
    current: Arc<Generation>,
    previous: Option<Arc<Generation>>,
}

impl GenerationHistory {
    pub fn initial(current: Generation) -> Self {
        Self {
            current: Arc::new(current),
            previous: None,
        }
    }

    /// `current` was reconciled against `previous`
    pub fn compared(previous: Arc<Generation>, current: Generation) -> Self {
        Self {
            current: Arc::new(current),
            previous: Some(previous),
        }
    }

    /// Shift `current` into the previous slot
    pub fn advance(&self, next: Generation) -> Self {
        Self::compared(Arc::clone(&self.current), next)
    }

    pub fn current(&self) -> &Arc<Generation> {
        &self.current
    }

    pub fn previous(&self) -> Option<&Arc<Generation>> {
        self.previous.as_ref()
    }
}
