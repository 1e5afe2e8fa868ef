//! Reload Application Layer (UseCase)

mod reload_usecase;

pub use reload_usecase::{ReloadIdentityUseCase, ReloadIdentityUseCaseImpl};
