//! Configuration System
//!
//! Two levels:
//! - Preset (`standard`, `strict`) - complete defaults
//! - Field overrides via the builder API or a YAML v1 document
//!
//! ```rust,ignore
//! use reload_identity::config::{ReloadConfig, Preset};
//!
//! let config = ReloadConfig::from_preset(Preset::Strict).staleness_tolerance(250);
//! config.validate()?;
//!
//! let config = ReloadConfig::from_yaml("reload.yaml")?;
//! ```

pub mod defaults;
pub mod error;
pub mod io;
pub mod preset;
pub mod reload_config;

pub use defaults::*;
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ReloadConfigPatch};
pub use preset::Preset;
pub use reload_config::ReloadConfig;
