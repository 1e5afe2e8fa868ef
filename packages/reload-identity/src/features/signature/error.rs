//! Error types for signature extraction

use thiserror::Error;

/// Why a slot could not be turned into a signature
///
/// Both variants end probing for the family at that slot. Neither is
/// propagated past the generation cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("No member variant {owner}${slot}")]
    NoSuchSlot { owner: String, slot: u32 },

    #[error("Metadata for {owner}${slot} unavailable: {reason}")]
    Unavailable {
        owner: String,
        slot: u32,
        reason: String,
    },
}

impl ExtractionError {
    pub fn no_such_slot(owner: &str, slot: u32) -> Self {
        ExtractionError::NoSuchSlot {
            owner: owner.to_string(),
            slot,
        }
    }

    pub fn unavailable(owner: &str, slot: u32, reason: impl Into<String>) -> Self {
        ExtractionError::Unavailable {
            owner: owner.to_string(),
            slot,
            reason: reason.into(),
        }
    }

    /// The designed probe terminator (as opposed to a metadata failure)
    pub fn is_gap(&self) -> bool {
        matches!(self, ExtractionError::NoSuchSlot { .. })
    }
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;
