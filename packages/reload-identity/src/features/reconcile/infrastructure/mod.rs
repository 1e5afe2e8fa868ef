//! Reconcile Infrastructure
//!
//! - `greedy_matcher`: one reusable bipartite-greedy pass
//! - `reconciler`: tier loop, natural/synthetic allocation
//! - `synthetic_counter`: atomic process-wide id source

pub mod greedy_matcher;
pub mod reconciler;
pub mod synthetic_counter;

pub use greedy_matcher::greedy_match;
pub use reconciler::Reconciler;
pub use synthetic_counter::AtomicSyntheticIdCounter;
