//! Reload Hand-off
//!
//! Turns a cached reconciliation into a [`ReloadPlan`] and drives the
//! downstream collaborators (bytecode rewriter, stub generator). This crate
//! never rewrites code itself.

pub mod application;
pub mod domain;
pub mod ports;

pub use application::{ReloadIdentityUseCase, ReloadIdentityUseCaseImpl};
pub use domain::{ReloadPlan, ReloadReport, StubRequest};
pub use ports::{BytecodeRewriter, DownstreamError, StubGenerator};
