//! Reload Identity UseCase Implementation

use crate::errors::{ReloadError, Result};
use crate::features::generation::GenerationCache;
use crate::features::reload::domain::{ReloadPlan, ReloadReport};
use crate::features::reload::ports::{BytecodeRewriter, StubGenerator};
use crate::shared::models::ContextId;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reload Identity UseCase Trait
pub trait ReloadIdentityUseCase: Send + Sync {
    /// Reconcile `owner` (from cache when fresh) and collect stub requests
    fn prepare_reload(&self, context: &ContextId, owner: &str) -> ReloadPlan;

    /// Hand a plan to the downstream collaborators
    ///
    /// Order: synthetic aliases, owner rewrite, stubs. The first failure aborts.
    fn apply(&self, plan: &ReloadPlan) -> Result<ReloadReport>;

    fn reload(&self, context: &ContextId, owner: &str) -> Result<ReloadReport> {
        let plan = self.prepare_reload(context, owner);
        self.apply(&plan)
    }
}

pub struct ReloadIdentityUseCaseImpl {
    cache: Arc<GenerationCache>,
    rewriter: Arc<dyn BytecodeRewriter>,
    stubs: Arc<dyn StubGenerator>,
}

impl ReloadIdentityUseCaseImpl {
    pub fn new(
        cache: Arc<GenerationCache>,
        rewriter: Arc<dyn BytecodeRewriter>,
        stubs: Arc<dyn StubGenerator>,
    ) -> Self {
        Self {
            cache,
            rewriter,
            stubs,
        }
    }

    pub fn cache(&self) -> &Arc<GenerationCache> {
        &self.cache
    }
}

impl ReloadIdentityUseCase for ReloadIdentityUseCaseImpl {
    fn prepare_reload(&self, context: &ContextId, owner: &str) -> ReloadPlan {
        let cached = self.cache.transition(context, owner);
        ReloadPlan::from_cached(context.clone(), Arc::from(owner), &cached)
    }

    fn apply(&self, plan: &ReloadPlan) -> Result<ReloadReport> {
        let owner = plan.owner.as_ref();
        let mut report = ReloadReport {
            stats: plan.reconciliation.stats,
            ..Default::default()
        };

        if plan.is_noop() {
            debug!(owner, "nothing to rewrite");
            return Ok(report);
        }

        for assignment in &plan.reconciliation.synthetic_assignments {
            self.rewriter
                .define_alias(&assignment.alias, &assignment.target)
                .map_err(|e| {
                    warn!(owner, alias = %assignment.alias, error = %e, "alias definition failed");
                    ReloadError::downstream("define_alias", owner, e.0)
                })?;
            report.aliases_defined += 1;
        }

        self.rewriter.rewrite(owner, plan.map()).map_err(|e| {
            warn!(owner, error = %e, "owner rewrite failed");
            ReloadError::downstream("rewrite", owner, e.0)
        })?;
        report.rewritten = true;

        for stub in &plan.stubs {
            self.stubs.generate_stub(stub).map_err(|e| {
                warn!(owner, member = %stub.identity, error = %e, "stub generation failed");
                ReloadError::downstream("generate_stub", owner, e.0)
            })?;
            report.stubs_generated += 1;
        }

        info!(
            context = %plan.context,
            owner,
            aliases = report.aliases_defined,
            stubs = report.stubs_generated,
            "reload identities applied"
        );
        Ok(report)
    }
}
