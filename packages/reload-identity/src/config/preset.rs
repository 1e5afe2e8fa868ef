//! Configuration presets

use crate::features::reconcile::MatchTier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Exact → structural → coarse
    #[default]
    Standard,

    /// Exact → structural. A variant whose body was rewritten is never
    /// reused; it is stubbed and the new body loads fresh.
    Strict,
}

impl Preset {
    pub fn tiers(&self) -> Vec<MatchTier> {
        match self {
            Self::Standard => MatchTier::ALL.to_vec(),
            Self::Strict => vec![MatchTier::Exact, MatchTier::Structural],
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Strict => "strict",
        }
    }
}
