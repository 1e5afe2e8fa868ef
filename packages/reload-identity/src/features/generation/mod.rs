//! Generation Cache & Staleness
//!
//! Keeps one generation per `(runtime context, owner)`, decides freshness
//! against the owner's modification marker and triggers reconciliation when a
//! generation is recomputed.
//!
//! ```text
//! EMPTY ──► COMPUTING ──► READY(history, reconciliation)
//!                ▲                    │ stale
//!                └────────────────────┘
//! ```

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{CachedReconciliation, EntryState, Generation, GenerationHistory};
pub use infrastructure::{
    CacheCollaborators, GenerationCache, GenerationProber, ManualClock, ReloadMetrics, SystemClock,
};
pub use ports::{Clock, DeclaredMemberList, ModificationMarker};
