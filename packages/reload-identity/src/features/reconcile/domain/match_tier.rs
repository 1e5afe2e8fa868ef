//! Matching tiers
//!
//! Ordered fallback equivalence predicates. Each tier is strictly coarser than
//! the one before it:
//!
//! - **Exact**: full shape, including the enclosing method
//! - **Structural**: hierarchy + declared methods + declared fields
//!   (tolerates the variant moving to another lexical scope)
//! - **Coarse**: supertype + interfaces only (tolerates a rewritten body)

use crate::features::signature::MemberSignature;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Structural,
    Coarse,
}

impl MatchTier {
    /// Standard tier order
    pub const ALL: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Structural, MatchTier::Coarse];

    pub fn matches(&self, old: &MemberSignature, new: &MemberSignature) -> bool {
        match self {
            MatchTier::Exact => old.same_shape(new),
            MatchTier::Structural => old.same_structure(new),
            MatchTier::Coarse => old.same_hierarchy(new),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Structural => "structural",
            MatchTier::Coarse => "coarse",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exact" => Some(MatchTier::Exact),
            "structural" => Some(MatchTier::Structural),
            "coarse" => Some(MatchTier::Coarse),
            _ => None,
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
