//! Reload identity configuration

use super::defaults::*;
use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::features::reconcile::MatchTier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReloadConfig {
    /// A generation is fresh while `captured_at >= last_modified - tolerance`
    pub staleness_tolerance: u64,

    /// First synthetic id
    pub synthetic_id_base: u64,

    /// Highest slot probed when recomputing a generation
    pub probe_limit: u32,

    /// Matching tiers, applied in order
    pub tiers: Vec<MatchTier>,

    /// Keep `i → i` entries in the transition map
    pub emit_identity_entries: bool,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Standard)
    }
}

impl ReloadConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            staleness_tolerance: DEFAULT_STALENESS_TOLERANCE,
            synthetic_id_base: DEFAULT_SYNTHETIC_ID_BASE,
            probe_limit: DEFAULT_PROBE_LIMIT,
            tiers: preset.tiers(),
            emit_identity_entries: true,
        }
    }

    pub fn staleness_tolerance(mut self, tolerance: u64) -> Self {
        self.staleness_tolerance = tolerance;
        self
    }

    pub fn synthetic_id_base(mut self, base: u64) -> Self {
        self.synthetic_id_base = base;
        self
    }

    pub fn probe_limit(mut self, limit: u32) -> Self {
        self.probe_limit = limit;
        self
    }

    pub fn tiers(mut self, tiers: Vec<MatchTier>) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn emit_identity_entries(mut self, emit: bool) -> Self {
        self.emit_identity_entries = emit;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.staleness_tolerance > MAX_STALENESS_TOLERANCE {
            return Err(ConfigError::Range {
                field: "staleness_tolerance".to_string(),
                value: self.staleness_tolerance.to_string(),
                min: "0".to_string(),
                max: MAX_STALENESS_TOLERANCE.to_string(),
                hint: "A wide window hides real edits; keep it near timestamp granularity."
                    .to_string(),
            });
        }

        if self.synthetic_id_base < 2 {
            return Err(ConfigError::Range {
                field: "synthetic_id_base".to_string(),
                value: self.synthetic_id_base.to_string(),
                min: "2".to_string(),
                max: u64::MAX.to_string(),
                hint: "Synthetic ids must sit above slot 1.".to_string(),
            });
        }

        let max_probe = (self.synthetic_id_base - 1).min(u64::from(u32::MAX));
        if self.probe_limit == 0 || u64::from(self.probe_limit) > max_probe {
            return Err(ConfigError::Range {
                field: "probe_limit".to_string(),
                value: self.probe_limit.to_string(),
                min: "1".to_string(),
                max: max_probe.to_string(),
                hint: "Probed slots must stay below synthetic_id_base.".to_string(),
            });
        }

        self.validate_tiers()
    }

    fn validate_tiers(&self) -> ConfigResult<()> {
        let listed = format!(
            "[{}]",
            self.tiers
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        if self.tiers.first() != Some(&MatchTier::Exact) {
            return Err(ConfigError::InvalidTiers {
                tiers: listed,
                hint: "The first tier must be 'exact'.".to_string(),
            });
        }

        if !self.tiers.windows(2).all(|w| w[0] < w[1]) {
            return Err(ConfigError::InvalidTiers {
                tiers: listed,
                hint: "Tiers must be listed once each, from exact to coarse.".to_string(),
            });
        }

        Ok(())
    }
}
