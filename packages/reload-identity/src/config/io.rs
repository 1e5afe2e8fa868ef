//! Configuration I/O (YAML)
//!
//! ```yaml
//! version: 1
//! preset: standard
//! overrides:
//!   staleness_tolerance: 250
//!   tiers: [exact, structural]
//! ```

use super::defaults::SUPPORTED_SCHEMA_VERSIONS;
use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::reload_config::ReloadConfig;
use crate::features::reconcile::MatchTier;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default = "default_preset_name")]
    pub preset: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ReloadConfigPatch>,
}

fn default_preset_name() -> String {
    Preset::Standard.as_str().to_string()
}

/// Field-level overrides applied on top of a preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReloadConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staleness_tolerance: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthetic_id_base: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<MatchTier>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_identity_entries: Option<bool>,
}

impl ReloadConfigPatch {
    pub fn apply(&self, config: &mut ReloadConfig) {
        if let Some(v) = self.staleness_tolerance {
            config.staleness_tolerance = v;
        }
        if let Some(v) = self.synthetic_id_base {
            config.synthetic_id_base = v;
        }
        if let Some(v) = self.probe_limit {
            config.probe_limit = v;
        }
        if let Some(v) = &self.tiers {
            config.tiers = v.clone();
        }
        if let Some(v) = self.emit_identity_entries {
            config.emit_identity_entries = v;
        }
    }
}

impl ReloadConfig {
    /// Load and validate a YAML v1 file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML v1 document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(yaml)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_SCHEMA_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_SCHEMA_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::parse(&export.preset)
            .ok_or_else(|| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = ReloadConfig::from_preset(preset);
        if let Some(overrides) = &export.overrides {
            overrides.apply(&mut config);
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1 with every field spelled out
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: default_preset_name(),
            overrides: Some(ReloadConfigPatch {
                staleness_tolerance: Some(self.staleness_tolerance),
                synthetic_id_base: Some(self.synthetic_id_base),
                probe_limit: Some(self.probe_limit),
                tiers: Some(self.tiers.clone()),
                emit_identity_entries: Some(self.emit_identity_entries),
            }),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
preset: strict
overrides:
  staleness_tolerance: 250
  emit_identity_entries: false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ReloadConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.staleness_tolerance, 250);
        assert!(!config.emit_identity_entries);
        assert_eq!(config.tiers, vec![MatchTier::Exact, MatchTier::Structural]);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ReloadConfig::default()
            .staleness_tolerance(42)
            .tiers(vec![MatchTier::Exact, MatchTier::Coarse]);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("staleness_tolerance: 42"));

        let recovered = ReloadConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(recovered, config);
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = ReloadConfig::from_yaml_str("preset: standard\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = ReloadConfig::from_yaml_str("version: 2\n");
        match result {
            Err(ConfigError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, 2);
                assert_eq!(supported, vec![1]);
            }
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_unknown_preset_and_field() {
        let result = ReloadConfig::from_yaml_str("version: 1\npreset: turbo\n");
        assert!(matches!(result, Err(ConfigError::UnknownPreset(_))));

        let result =
            ReloadConfig::from_yaml_str("version: 1\noverrides:\n  max_depth: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_overrides_are_validated() {
        let result = ReloadConfig::from_yaml_str(
            "version: 1\noverrides:\n  tiers: [coarse, exact]\n",
        );
        assert!(matches!(result, Err(ConfigError::InvalidTiers { .. })));
    }
}
