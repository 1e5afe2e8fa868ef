//! Ports - Downstream collaborators consuming a reconciliation

use crate::features::reconcile::TransitionMap;
use crate::features::reload::domain::StubRequest;
use crate::shared::models::Identity;
use thiserror::Error;

/// Opaque failure reported by a downstream collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DownstreamError(pub String);

impl DownstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Rewrites references inside the owner's own definition
pub trait BytecodeRewriter: Send + Sync {
    /// Make `target` loadable under the synthetic `alias`
    ///
    /// Called for every synthetic entry before [`BytecodeRewriter::rewrite`].
    fn define_alias(&self, alias: &Identity, target: &Identity) -> Result<(), DownstreamError>;

    /// Replace every reference to an old identity with its mapped new identity
    fn rewrite(&self, owner: &str, map: &TransitionMap) -> Result<(), DownstreamError>;
}

/// Produces empty-bodied replacements for unmatched old members
pub trait StubGenerator: Send + Sync {
    fn generate_stub(&self, request: &StubRequest) -> Result<(), DownstreamError>;
}
