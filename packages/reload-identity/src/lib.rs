/*
 * Reload Identity - member variant reconciliation for live code reload
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Identity models (Identity, MemberSlot, ContextId, Version)
 * - features/    : Vertical slices (signature → generation → reconcile → reload)
 * - config/      : Presets, builder, YAML v1
 *
 * When an owner type is edited, its anonymously-indexed member variants can be
 * reordered, inserted, removed or restructured. Reconciliation recomputes which
 * old slot now corresponds to which new slot from structural shape alone.
 */

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use errors::{ReloadError, Result};

pub use config::{Preset, ReloadConfig};
pub use features::generation::{
    CacheCollaborators, CachedReconciliation, EntryState, Generation, GenerationCache,
    ManualClock, ReloadMetrics, SystemClock,
};
pub use features::reconcile::{
    AtomicSyntheticIdCounter, MatchTier, ReconcileStats, Reconciliation, Reconciler,
    SyntheticIdSource, TransitionMap,
};
pub use features::reload::{
    BytecodeRewriter, DownstreamError, ReloadIdentityUseCase, ReloadIdentityUseCaseImpl,
    ReloadPlan, ReloadReport, StubGenerator, StubRequest,
};
pub use features::signature::{
    InMemoryMetadata, MemberFacts, MemberSignature, MetadataSource, MetadataView,
    SignatureExtractor,
};
pub use shared::models::{ContextId, Identity, MemberSlot, Version};
