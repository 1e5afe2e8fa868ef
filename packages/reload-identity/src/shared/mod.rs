//! Shared module - Common types
//!
//! Types shared across all features. No feature module is imported here.

pub mod models;

// Re-exports for convenience
pub use models::*;
