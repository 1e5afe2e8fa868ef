//! Generation Domain Models

pub mod cached;
pub mod generation;
pub mod history;

pub use cached::{CachedReconciliation, EntryState};
pub use generation::Generation;
pub use history::GenerationHistory;
