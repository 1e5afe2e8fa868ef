//! Generation cache
//!
//! One entry per `(runtime context, owner)`. Each entry sits behind its own
//! `RwLock`, so the fresh path only takes a read lock and the miss/stale path
//! is single-writer per key. Unrelated owners never contend.
//!
//! ```text
//! transition(ctx, owner)
//!   ├─ read lock: current fresh?  → hit (shared snapshot)
//!   └─ write lock: re-check, then
//!        prior = cached current | live probe (first observation)
//!        next  = pending probe
//!        reconcile(prior, next) once, memoize, shift prior into history
//! ```
//!
//! Extraction failures shorten a generation instead of failing the call, so
//! there is no failure state.

use crate::config::{ConfigError, ConfigResult, ReloadConfig};
use crate::errors::Result;
use crate::features::generation::domain::{
    CachedReconciliation, EntryState, Generation, GenerationHistory,
};
use crate::features::generation::infrastructure::{GenerationProber, ReloadMetrics};
use crate::features::generation::ports::{Clock, DeclaredMemberList, ModificationMarker};
use crate::features::reconcile::{Reconciler, SyntheticIdSource};
use crate::features::signature::{InMemoryMetadata, MetadataSource, MetadataView, SignatureExtractor};
use crate::shared::models::ContextId;
use dashmap::DashMap;
use parking_lot::RwLock;
use prometheus::Registry;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

type CacheKey = (ContextId, Arc<str>);
type Slot = Arc<RwLock<Option<CachedReconciliation>>>;

/// Read-side collaborators and the synthetic id source
#[derive(Clone)]
pub struct CacheCollaborators {
    pub metadata: Arc<dyn MetadataSource>,
    pub declared: Arc<dyn DeclaredMemberList>,
    pub marker: Arc<dyn ModificationMarker>,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn SyntheticIdSource>,
}

impl CacheCollaborators {
    /// Wire every read-side port to one in-memory store
    pub fn in_memory(
        metadata: Arc<InMemoryMetadata>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn SyntheticIdSource>,
    ) -> Self {
        Self {
            metadata: Arc::clone(&metadata) as Arc<dyn MetadataSource>,
            declared: Arc::clone(&metadata) as Arc<dyn DeclaredMemberList>,
            marker: metadata as Arc<dyn ModificationMarker>,
            clock,
            ids,
        }
    }
}

pub struct GenerationCache {
    entries: DashMap<CacheKey, Slot>,
    prober: GenerationProber,
    reconciler: Reconciler,
    marker: Arc<dyn ModificationMarker>,
    clock: Arc<dyn Clock>,
    staleness_tolerance: u64,
    metrics: Option<ReloadMetrics>,
}

impl GenerationCache {
    pub fn new(config: &ReloadConfig, collaborators: CacheCollaborators) -> ConfigResult<Self> {
        config.validate()?;

        let CacheCollaborators {
            metadata,
            declared,
            marker,
            clock,
            ids,
        } = collaborators;

        // Natural slots and synthetic ids share one number space
        if ids.base() != config.synthetic_id_base {
            return Err(ConfigError::Range {
                field: "synthetic_id_base".to_string(),
                value: ids.base().to_string(),
                min: config.synthetic_id_base.to_string(),
                max: config.synthetic_id_base.to_string(),
                hint: "The synthetic id source must start at the configured base.".to_string(),
            });
        }

        Ok(Self {
            entries: DashMap::new(),
            prober: GenerationProber::new(
                SignatureExtractor::new(metadata),
                declared,
                config.probe_limit,
            ),
            reconciler: Reconciler::from_config(config, ids),
            marker,
            clock,
            staleness_tolerance: config.staleness_tolerance,
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: ReloadMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Register fresh metrics against `registry`
    pub fn with_registry(self, registry: &Registry) -> Result<Self> {
        Ok(self.with_metrics(ReloadMetrics::new(registry)?))
    }

    /// Fresh reconciliation for `owner`, recomputing if needed
    pub fn transition(&self, context: &ContextId, owner: &str) -> CachedReconciliation {
        let owner: Arc<str> = Arc::from(owner);
        let slot = self.slot(context, &owner);

        {
            let guard = slot.read();
            if let Some(entry) = guard.as_ref() {
                if self.is_fresh(entry, &owner) {
                    trace!(context = %context, owner = %owner, "generation cache hit");
                    if let Some(m) = &self.metrics {
                        m.cache_hits.inc();
                    }
                    return entry.clone();
                }
            }
        }

        let mut guard = slot.write();

        // Another writer may have refreshed the entry while we waited
        if let Some(entry) = guard.as_ref() {
            if self.is_fresh(entry, &owner) {
                trace!(context = %context, owner = %owner, "generation refreshed by concurrent writer");
                if let Some(m) = &self.metrics {
                    m.cache_hits.inc();
                }
                return entry.clone();
            }
        }

        if let Some(m) = &self.metrics {
            m.cache_misses.inc();
            if guard.is_some() {
                m.stale_detections.inc();
            }
        }

        let entry = self.recompute(context, &owner, guard.as_ref());
        *guard = Some(entry.clone());
        entry
    }

    /// Ready entry without a staleness check
    pub fn current(&self, context: &ContextId, owner: &str) -> Option<CachedReconciliation> {
        let slot = self
            .entries
            .get(&(context.clone(), Arc::from(owner)))
            .map(|s| Arc::clone(s.value()))?;
        let guard = slot.read();
        guard.clone()
    }

    pub fn state(&self, context: &ContextId, owner: &str) -> EntryState {
        let slot = match self.entries.get(&(context.clone(), Arc::from(owner))) {
            Some(s) => Arc::clone(s.value()),
            None => return EntryState::Empty,
        };

        let state = match slot.try_read() {
            None => EntryState::Computing,
            Some(guard) if guard.is_some() => EntryState::Ready,
            Some(_) => EntryState::Empty,
        };
        state
    }

    /// Drop one entry; the next `transition` starts from the live view again
    pub fn invalidate(&self, context: &ContextId, owner: &str) -> bool {
        self.entries
            .remove(&(context.clone(), Arc::from(owner)))
            .is_some()
    }

    /// Drop every entry of a disposed runtime context
    pub fn purge_context(&self, context: &ContextId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(ctx, _), _| ctx != context);
        let purged = before.saturating_sub(self.entries.len());
        if purged > 0 {
            debug!(context = %context, purged, "purged runtime context");
        }
        purged
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot(&self, context: &ContextId, owner: &Arc<str>) -> Slot {
        // Clone the Arc out so no shard guard is held while computing
        Arc::clone(
            self.entries
                .entry((context.clone(), Arc::clone(owner)))
                .or_default()
                .value(),
        )
    }

    fn is_fresh(&self, entry: &CachedReconciliation, owner: &str) -> bool {
        entry
            .history
            .current()
            .is_fresh(self.marker.last_modified(owner), self.staleness_tolerance)
    }

    fn recompute(
        &self,
        context: &ContextId,
        owner: &Arc<str>,
        cached: Option<&CachedReconciliation>,
    ) -> CachedReconciliation {
        let started = Instant::now();
        let captured_at = self.clock.now();

        let prior: Arc<Generation> = match cached {
            Some(entry) => Arc::clone(entry.history.current()),
            None => Arc::new(self.prober.probe(owner, MetadataView::Live, captured_at)),
        };
        let next = self.prober.probe(owner, MetadataView::Pending, captured_at);

        debug!(
            context = %context,
            owner = %owner,
            prior = prior.len(),
            next = next.len(),
            captured_at = %captured_at,
            first_observation = cached.is_none(),
            "recomputing generation"
        );

        let reconciliation = self
            .reconciler
            .reconcile(owner, prior.members(), next.members());

        if let Some(m) = &self.metrics {
            m.recomputations.inc();
            m.record_reconciliation(&reconciliation.stats, started.elapsed().as_secs_f64());
        }

        CachedReconciliation {
            history: GenerationHistory::compared(prior, next),
            reconciliation: Arc::new(reconciliation),
        }
    }
}
