//! Ports - Collaborators consulted by the generation cache

use crate::features::signature::ports::MetadataView;
use crate::shared::models::Version;
use std::collections::BTreeSet;

/// Authoritative list of slots an owner currently declares
///
/// Bounds slot probing of the pending view: a removed variant's old compiled
/// artifact can still be physically present, so positional probing alone is
/// never trusted for the new source. The live view is not consulted.
pub trait DeclaredMemberList: Send + Sync {
    fn declared_slots(&self, owner: &str, view: MetadataView) -> BTreeSet<u32>;
}

/// "Last changed" marker for an owner's source
pub trait ModificationMarker: Send + Sync {
    /// `None` when the owner has no known modification time
    fn last_modified(&self, owner: &str) -> Option<Version>;
}

/// Source of capture timestamps for new generations
///
/// Must use the same units as the [`ModificationMarker`].
pub trait Clock: Send + Sync {
    fn now(&self) -> Version;
}
