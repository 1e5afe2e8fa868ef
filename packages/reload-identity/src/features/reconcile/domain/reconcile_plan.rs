//! Reconciliation plan and its materialized result
//!
//! Planning is pure: the same (old, new) pair always yields the same plan.
//! Materializing draws synthetic ids, the only step with shared side effects.

use crate::features::reconcile::domain::{MatchTier, TransitionMap};
use crate::features::reconcile::ports::SyntheticIdSource;
use crate::shared::models::Identity;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One old → new pairing and the tier that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierMatch {
    pub tier: MatchTier,
    pub old: Identity,
    pub new: Identity,
}

/// Unmatched new member that loads under the next free natural slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NaturalPlacement {
    pub member: Identity,
    pub slot: u32,
}

/// Unmatched new member that loads under a synthetic alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticAssignment {
    pub alias: Identity,
    pub target: Identity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    pub old_members: usize,
    pub new_members: usize,
    pub truncated: usize,
    pub exact_matches: usize,
    pub structural_matches: usize,
    pub coarse_matches: usize,
    pub natural_placements: usize,
    pub synthetic_allocations: usize,
    pub unmatched_old: usize,
}

impl ReconcileStats {
    pub fn matched(&self) -> usize {
        self.exact_matches + self.structural_matches + self.coarse_matches
    }

    fn count_match(&mut self, tier: MatchTier) {
        match tier {
            MatchTier::Exact => self.exact_matches += 1,
            MatchTier::Structural => self.structural_matches += 1,
            MatchTier::Coarse => self.coarse_matches += 1,
        }
    }
}

/// Pure output of the matching phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub owner: Arc<str>,

    /// |old| before truncation
    pub old_members: usize,
    pub new_members: usize,

    /// In tier order, each tier in old scan order
    pub matches: Vec<TierMatch>,
    pub natural_placements: Vec<NaturalPlacement>,

    /// New members that need a synthetic alias, in new order
    pub synthetic_requests: Vec<Identity>,

    /// Old members left after all tiers (need a stub)
    pub unmatched_old: Vec<Identity>,

    /// Old members dropped by size reconciliation (discarded)
    pub truncated_old: Vec<Identity>,
}

impl ReconcilePlan {
    /// Draw synthetic ids and build the immutable result
    ///
    /// With `emit_identity_entries = false`, `i → i` matches are left out of
    /// the map (they still count in the stats).
    pub fn materialize(
        &self,
        ids: &dyn SyntheticIdSource,
        emit_identity_entries: bool,
    ) -> Reconciliation {
        let mut stats = ReconcileStats {
            old_members: self.old_members,
            new_members: self.new_members,
            truncated: self.truncated_old.len(),
            natural_placements: self.natural_placements.len(),
            synthetic_allocations: self.synthetic_requests.len(),
            unmatched_old: self.unmatched_old.len(),
            ..Default::default()
        };

        let mut entries = BTreeMap::new();
        for m in &self.matches {
            stats.count_match(m.tier);
            if emit_identity_entries || m.old != m.new {
                entries.insert(m.old.clone(), m.new.clone());
            }
        }

        let synthetic_assignments: Vec<SyntheticAssignment> = self
            .synthetic_requests
            .iter()
            .map(|target| SyntheticAssignment {
                alias: Identity::synthetic(Arc::clone(&self.owner), ids.next_id()),
                target: target.clone(),
            })
            .collect();

        for assignment in &synthetic_assignments {
            entries.insert(assignment.alias.clone(), assignment.target.clone());
        }

        Reconciliation {
            owner: Arc::clone(&self.owner),
            map: Arc::new(TransitionMap::from_entries(entries)),
            matches: self.matches.clone(),
            natural_placements: self.natural_placements.clone(),
            synthetic_assignments,
            unmatched_old: self.unmatched_old.clone(),
            truncated_old: self.truncated_old.clone(),
            stats,
        }
    }
}

/// Result handed to downstream collaborators
#[derive(Debug, Clone, Serialize)]
pub struct Reconciliation {
    pub owner: Arc<str>,
    pub map: Arc<TransitionMap>,
    pub matches: Vec<TierMatch>,
    pub natural_placements: Vec<NaturalPlacement>,
    pub synthetic_assignments: Vec<SyntheticAssignment>,
    pub unmatched_old: Vec<Identity>,
    pub truncated_old: Vec<Identity>,
    pub stats: ReconcileStats,
}
