//! In-memory metadata store
//!
//! Implements every read-side collaborator (metadata, declared member list,
//! modification marker) over concurrent maps. Used by tests, benchmarks and
//! the offline CLI; a runtime agent supplies its own implementations.

use crate::features::generation::ports::{DeclaredMemberList, ModificationMarker};
use crate::features::signature::domain::MemberFacts;
use crate::features::signature::ports::{MetadataSource, MetadataView};
use crate::features::signature::{ExtractionError, ExtractionResult};
use crate::shared::models::Version;
use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::Arc;

type SlotKey = (Arc<str>, u32, MetadataView);
type FamilyKey = (Arc<str>, MetadataView);

#[derive(Default)]
pub struct InMemoryMetadata {
    /// Physically present definitions (declared or not)
    facts: DashMap<SlotKey, MemberFacts>,

    /// Authoritative declared slots per owner and view
    declared: DashMap<FamilyKey, BTreeSet<u32>>,

    modified: DashMap<Arc<str>, Version>,
}

impl InMemoryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a physical definition without declaring it
    pub fn define(&self, owner: &str, slot: u32, view: MetadataView, facts: MemberFacts) {
        self.facts.insert((Arc::from(owner), slot, view), facts);
    }

    /// Replace the declared slot list for an owner
    pub fn declare(&self, owner: &str, view: MetadataView, slots: impl IntoIterator<Item = u32>) {
        self.declared
            .insert((Arc::from(owner), view), slots.into_iter().collect());
    }

    /// Define and declare a whole family at slots `1..=members.len()`
    ///
    /// Physical definitions beyond the new family size are left in place, the
    /// way stale compiled artifacts linger after a variant is removed.
    pub fn define_family(&self, owner: &str, view: MetadataView, members: Vec<MemberFacts>) {
        let count = members.len() as u32;
        for (index, facts) in members.into_iter().enumerate() {
            self.define(owner, index as u32 + 1, view, facts);
        }
        self.declare(owner, view, 1..=count);
    }

    pub fn set_modified(&self, owner: &str, version: Version) {
        self.modified.insert(Arc::from(owner), version);
    }

    /// Make the pending family the live one (a reload completed)
    pub fn promote_pending(&self, owner: &str) {
        let owner: Arc<str> = Arc::from(owner);

        self.facts
            .retain(|(o, _, view), _| !(o == &owner && *view == MetadataView::Live));

        let pending: Vec<(u32, MemberFacts)> = self
            .facts
            .iter()
            .filter(|e| e.key().0 == owner && e.key().2 == MetadataView::Pending)
            .map(|e| (e.key().1, e.value().clone()))
            .collect();

        for (slot, facts) in pending {
            self.facts
                .insert((Arc::clone(&owner), slot, MetadataView::Live), facts);
        }

        let declared = self
            .declared
            .get(&(Arc::clone(&owner), MetadataView::Pending))
            .map(|d| d.clone())
            .unwrap_or_default();
        self.declared.insert((owner, MetadataView::Live), declared);
    }
}

impl MetadataSource for InMemoryMetadata {
    fn member_facts(
        &self,
        owner: &str,
        slot: u32,
        view: MetadataView,
    ) -> ExtractionResult<MemberFacts> {
        self.facts
            .get(&(Arc::from(owner), slot, view))
            .map(|f| f.clone())
            .ok_or_else(|| ExtractionError::no_such_slot(owner, slot))
    }
}

impl DeclaredMemberList for InMemoryMetadata {
    fn declared_slots(&self, owner: &str, view: MetadataView) -> BTreeSet<u32> {
        self.declared
            .get(&(Arc::from(owner), view))
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

impl ModificationMarker for InMemoryMetadata {
    fn last_modified(&self, owner: &str) -> Option<Version> {
        self.modified.get(owner).map(|v| *v)
    }
}
