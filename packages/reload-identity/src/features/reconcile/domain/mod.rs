//! Reconcile Domain Models
//!
//! ```text
//! domain/
//! ├── match_tier.rs       # Ordered fallback equivalence predicates
//! ├── reconcile_plan.rs   # Pure plan, materialized result, stats
//! └── transition_map.rs   # Immutable old → new lookup structure
//! ```

pub mod match_tier;
pub mod reconcile_plan;
pub mod transition_map;

pub use match_tier::MatchTier;
pub use reconcile_plan::{
    NaturalPlacement, ReconcilePlan, ReconcileStats, Reconciliation, SyntheticAssignment,
    TierMatch,
};
pub use transition_map::TransitionMap;
