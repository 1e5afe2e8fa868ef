//! Signature extractor
//!
//! Turns the facts for one slot into a [`MemberSignature`]. Inherited members
//! are dropped, interfaces keep declaration order, method and field descriptors
//! are synthesized for equality comparison only (never parsed back).

use crate::features::signature::domain::{MemberFacts, MemberSignature};
use crate::features::signature::ports::{MetadataSource, MetadataView};
use crate::features::signature::{ExtractionError, ExtractionResult};
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct SignatureExtractor {
    source: Arc<dyn MetadataSource>,
}

impl SignatureExtractor {
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self { source }
    }

    /// Extract the signature of `owner$slot` from `view`
    ///
    /// Slot 0 never exists (slots are 1-based).
    pub fn extract(
        &self,
        owner: &Arc<str>,
        slot: u32,
        view: MetadataView,
    ) -> ExtractionResult<MemberSignature> {
        if slot == 0 {
            return Err(ExtractionError::no_such_slot(owner, slot));
        }

        let facts = self.source.member_facts(owner, slot, view)?;
        Ok(Self::from_facts(Arc::clone(owner), slot, facts))
    }

    /// Build a signature from already-fetched facts
    pub fn from_facts(owner: Arc<str>, slot: u32, facts: MemberFacts) -> MemberSignature {
        let methods: BTreeSet<String> = facts
            .methods
            .iter()
            .filter(|m| !m.inherited)
            .map(|m| m.descriptor())
            .collect();

        let fields: BTreeSet<String> = facts
            .fields
            .iter()
            .filter(|f| !f.inherited)
            .map(|f| f.descriptor())
            .collect();

        MemberSignature {
            owner,
            slot,
            super_type: facts.super_type,
            interfaces: facts.interfaces,
            methods,
            fields,
            enclosing_method: facts.enclosing_method.map(|m| m.descriptor()),
        }
    }
}
