//! Shared models
//!
//! Identity and version types used by every feature.

mod context;
mod identity;
mod version;

pub use context::ContextId;
pub use identity::{Identity, MemberSlot};
pub use version::Version;
