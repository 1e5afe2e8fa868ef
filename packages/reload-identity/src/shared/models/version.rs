//! Modification version marker
//!
//! A monotonically comparable "last changed" value. Units are whatever the
//! marker source uses (the system clock uses milliseconds since the Unix epoch).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(pub u64);

impl Version {
    pub const ZERO: Version = Version(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// `self - tolerance`, clamped at zero
    pub fn saturating_sub(&self, tolerance: u64) -> Version {
        Version(self.0.saturating_sub(tolerance))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
