//! Generation Infrastructure

pub mod clock;
pub mod generation_cache;
pub mod metrics;
pub mod prober;

pub use clock::{ManualClock, SystemClock};
pub use generation_cache::{CacheCollaborators, GenerationCache};
pub use metrics::ReloadMetrics;
pub use prober::GenerationProber;
