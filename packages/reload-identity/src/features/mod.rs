//! Feature modules (vertical slices)
//!
//! ```text
//! signature ──► generation ──► reconcile ──► reload
//! ```

pub mod generation;
pub mod reconcile;
pub mod reload;
pub mod signature;
