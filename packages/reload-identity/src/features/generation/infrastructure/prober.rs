//! Generation prober
//!
//! Probes slots `1..=probe_limit` of one owner in one view. Probing stops at
//! the first extraction failure and, in the pending view, at the first slot
//! the declared member list does not name. Either way the result is a
//! contiguous, possibly shorter, generation; failures never propagate.
//!
//! The live view is bounded by extraction alone: the declared list describes
//! the new source only.

use crate::features::generation::domain::Generation;
use crate::features::generation::ports::DeclaredMemberList;
use crate::features::signature::{MetadataView, SignatureExtractor};
use crate::shared::models::Version;
use std::sync::Arc;
use tracing::{trace, warn};

pub struct GenerationProber {
    extractor: SignatureExtractor,
    declared: Arc<dyn DeclaredMemberList>,
    probe_limit: u32,
}

impl GenerationProber {
    pub fn new(
        extractor: SignatureExtractor,
        declared: Arc<dyn DeclaredMemberList>,
        probe_limit: u32,
    ) -> Self {
        Self {
            extractor,
            declared,
            probe_limit,
        }
    }

    pub fn probe(&self, owner: &Arc<str>, view: MetadataView, captured_at: Version) -> Generation {
        let declared = match view {
            MetadataView::Pending => Some(self.declared.declared_slots(owner, view)),
            MetadataView::Live => None,
        };
        let mut members = Vec::with_capacity(declared.as_ref().map_or(0, |d| d.len()));

        for slot in 1..=self.probe_limit {
            if declared.as_ref().is_some_and(|d| !d.contains(&slot)) {
                trace!(owner = %owner, slot, view = view.as_str(), "slot not declared, probe ends");
                break;
            }

            match self.extractor.extract(owner, slot, view) {
                Ok(signature) => members.push(signature),
                Err(e) if e.is_gap() => {
                    trace!(owner = %owner, slot, view = view.as_str(), "no such slot, probe ends");
                    break;
                }
                Err(e) => {
                    warn!(owner = %owner, slot, view = view.as_str(), error = %e, "extraction unavailable, generation truncated");
                    break;
                }
            }
        }

        Generation::new(Arc::clone(owner), captured_at, members)
    }
}
