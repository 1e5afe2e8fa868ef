//! Ports - Interface definitions for signature extraction
//!
//! Pure trait definitions. Implementations live in infrastructure/ or are
//! supplied by the runtime agent.

use crate::features::signature::domain::MemberFacts;
use crate::features::signature::ExtractionResult;
use serde::{Deserialize, Serialize};

/// Which definition of an owner family to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataView {
    /// Definitions currently active in the runtime (in-memory)
    Live,

    /// Definitions produced by the edited source, not yet active
    Pending,
}

impl MetadataView {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataView::Live => "live",
            MetadataView::Pending => "pending",
        }
    }
}

/// Supplies declared structural facts for one member variant
pub trait MetadataSource: Send + Sync {
    /// Facts for `owner$slot` in the requested view
    ///
    /// Returns `ExtractionError::NoSuchSlot` when the slot does not exist.
    /// Facts may include inherited members flagged as such; the extractor
    /// drops them.
    fn member_facts(&self, owner: &str, slot: u32, view: MetadataView)
        -> ExtractionResult<MemberFacts>;
}
