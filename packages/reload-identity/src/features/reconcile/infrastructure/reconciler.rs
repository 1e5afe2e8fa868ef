//! Reconciliation engine
//!
//! # Algorithm
//!
//! 0. Size reconciliation: if |old| > |new|, drop old entries from the end
//!    until |old| == |new|. Dropped entries are discarded.
//! 1. For each configured tier (exact → structural → coarse), run the greedy
//!    matcher over what the previous tiers left.
//! 2. Unmatched new members, in order, take natural slots starting at
//!    |old| + 1 (pre-truncation size) while the slot is <= |new|. The rest get
//!    synthetic ids.
//! 3. Unmatched old members are reported for stubbing.
//!
//! # Complexity
//!
//! O(|old| * |new|) per tier. Families hold at most a few dozen variants and
//! the engine only runs on change.

use super::greedy_matcher::greedy_match;
use crate::config::ReloadConfig;
use crate::features::reconcile::domain::{
    MatchTier, NaturalPlacement, ReconcilePlan, Reconciliation, TierMatch,
};
use crate::features::reconcile::ports::SyntheticIdSource;
use crate::features::signature::MemberSignature;
use std::sync::Arc;
use tracing::{debug, info};

pub struct Reconciler {
    tiers: Vec<MatchTier>,
    emit_identity_entries: bool,
    ids: Arc<dyn SyntheticIdSource>,
}

impl Reconciler {
    /// Standard tiers, identity entries kept
    pub fn new(ids: Arc<dyn SyntheticIdSource>) -> Self {
        Self {
            tiers: MatchTier::ALL.to_vec(),
            emit_identity_entries: true,
            ids,
        }
    }

    pub fn from_config(config: &ReloadConfig, ids: Arc<dyn SyntheticIdSource>) -> Self {
        Self {
            tiers: config.tiers.clone(),
            emit_identity_entries: config.emit_identity_entries,
            ids,
        }
    }

    pub fn tiers(&self) -> &[MatchTier] {
        &self.tiers
    }

    /// Pure matching phase
    ///
    /// `old` and `new` are the ordered member lists of the previous and the
    /// current generation of `owner`.
    pub fn plan(
        &self,
        owner: &Arc<str>,
        old: &[MemberSignature],
        new: &[MemberSignature],
    ) -> ReconcilePlan {
        debug_assert!(old.iter().chain(new).all(|m| m.owner == *owner));

        let keep = old.len().min(new.len());
        let truncated_old = old[keep..].iter().map(|m| m.identity()).collect();

        let mut old_left: Vec<&MemberSignature> = old[..keep].iter().collect();
        let mut new_left: Vec<&MemberSignature> = new.iter().collect();
        let mut matches = Vec::new();

        for &tier in &self.tiers {
            if old_left.is_empty() || new_left.is_empty() {
                break;
            }

            let pairs = greedy_match(&mut old_left, &mut new_left, |o, n| tier.matches(o, n));
            matches.extend(pairs.into_iter().map(|(o, n)| TierMatch {
                tier,
                old: o.identity(),
                new: n.identity(),
            }));
        }

        let mut natural_placements = Vec::new();
        let mut synthetic_requests = Vec::new();
        let mut next_natural = old.len() + 1;

        for member in new_left {
            if next_natural <= new.len() {
                natural_placements.push(NaturalPlacement {
                    member: member.identity(),
                    slot: next_natural as u32,
                });
                next_natural += 1;
            } else {
                synthetic_requests.push(member.identity());
            }
        }

        ReconcilePlan {
            owner: Arc::clone(owner),
            old_members: old.len(),
            new_members: new.len(),
            matches,
            natural_placements,
            synthetic_requests,
            unmatched_old: old_left.iter().map(|m| m.identity()).collect(),
            truncated_old,
        }
    }

    /// Plan and materialize in one step
    pub fn reconcile(
        &self,
        owner: &Arc<str>,
        old: &[MemberSignature],
        new: &[MemberSignature],
    ) -> Reconciliation {
        let plan = self.plan(owner, old, new);

        for m in &plan.matches {
            debug!(owner = %owner, tier = %m.tier, old = %m.old, new = %m.new, "matched");
        }

        let result = plan.materialize(self.ids.as_ref(), self.emit_identity_entries);

        for a in &result.synthetic_assignments {
            debug!(owner = %owner, synthetic_id = %a.alias, target = %a.target, "synthetic alias");
        }

        let s = &result.stats;
        info!(
            owner = %owner,
            old = s.old_members,
            new = s.new_members,
            exact = s.exact_matches,
            structural = s.structural_matches,
            coarse = s.coarse_matches,
            natural = s.natural_placements,
            synthetic = s.synthetic_allocations,
            unmatched_old = s.unmatched_old,
            truncated = s.truncated,
            "reconciled member family"
        );

        result
    }
}
