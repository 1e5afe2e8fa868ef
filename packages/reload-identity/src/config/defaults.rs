//! Default values
//!
//! All tunables are centralized here.

/// First synthetic id (reserved constant, beyond any legitimate slot index)
pub const DEFAULT_SYNTHETIC_ID_BASE: u64 = 10_000;

/// Staleness tolerance window, in version units (milliseconds for the system clock)
///
/// Absorbs clock / filesystem timestamp granularity.
pub const DEFAULT_STALENESS_TOLERANCE: u64 = 100;

/// Upper bound accepted for the staleness tolerance (one minute)
pub const MAX_STALENESS_TOLERANCE: u64 = 60_000;

/// Highest slot ever probed; stays below the synthetic range
pub const DEFAULT_PROBE_LIMIT: u32 = (DEFAULT_SYNTHETIC_ID_BASE - 1) as u32;

/// Supported YAML schema versions
pub const SUPPORTED_SCHEMA_VERSIONS: &[u32] = &[1];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_consistent() {
        assert!(u64::from(DEFAULT_PROBE_LIMIT) < DEFAULT_SYNTHETIC_ID_BASE);
        assert!(DEFAULT_STALENESS_TOLERANCE <= MAX_STALENESS_TOLERANCE);
    }
}
