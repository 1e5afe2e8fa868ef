//! Reload hand-off models

use crate::features::generation::CachedReconciliation;
use crate::features::reconcile::{ReconcileStats, Reconciliation, TransitionMap};
use crate::shared::models::{ContextId, Identity};
use serde::Serialize;
use std::sync::Arc;

/// Placeholder needed for an old member nothing matched
///
/// Carries the previously-active definition's inheritance shape so the stub
/// stays acceptable to the runtime's redefinition rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubRequest {
    pub identity: Identity,
    pub super_type: String,
    pub interfaces: Vec<String>,
}

/// Everything downstream collaborators need for one owner
#[derive(Debug, Clone)]
pub struct ReloadPlan {
    pub context: ContextId,
    pub owner: Arc<str>,
    pub reconciliation: Arc<Reconciliation>,
    pub stubs: Vec<StubRequest>,
}

impl ReloadPlan {
    pub fn from_cached(context: ContextId, owner: Arc<str>, cached: &CachedReconciliation) -> Self {
        let previous = cached.history.previous();
        let stubs = cached
            .reconciliation
            .unmatched_old
            .iter()
            .filter_map(|identity| {
                let slot = identity.slot.natural_index()?;
                let member = previous?.member(slot)?;
                Some(StubRequest {
                    identity: identity.clone(),
                    super_type: member.super_type.clone(),
                    interfaces: member.interfaces.clone(),
                })
            })
            .collect();

        Self {
            context,
            owner,
            reconciliation: Arc::clone(&cached.reconciliation),
            stubs,
        }
    }

    pub fn map(&self) -> &TransitionMap {
        &self.reconciliation.map
    }

    /// Nothing to alias, rewrite or stub
    pub fn is_noop(&self) -> bool {
        self.map().renames().next().is_none()
            && self.reconciliation.synthetic_assignments.is_empty()
            && self.stubs.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReloadReport {
    pub aliases_defined: usize,
    pub rewritten: bool,
    pub stubs_generated: usize,
    pub stats: ReconcileStats,
}
