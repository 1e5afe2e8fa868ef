//! Identity Reconciliation
//!
//! Tiered greedy matching of an owner's old member family against its new one.
//!
//! ```text
//! old: [f(), g()]          new: [g(), f(), h()]
//!         │                        │
//!         └──── exact ─────────────┤  Outer$1 → Outer$2, Outer$2 → Outer$1
//!         └──── structural ────────┤
//!         └──── coarse ────────────┘
//!                                  h() → natural slot 3
//! ```
//!
//! The resulting [`TransitionMap`] is immutable and shared with downstream
//! rewriters through an `Arc`.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{
    MatchTier, NaturalPlacement, ReconcilePlan, ReconcileStats, Reconciliation,
    SyntheticAssignment, TierMatch, TransitionMap,
};
pub use infrastructure::{greedy_match, AtomicSyntheticIdCounter, Reconciler};
pub use ports::SyntheticIdSource;
