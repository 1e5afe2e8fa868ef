//! Ports - Synthetic identity allocation

/// Thread-safe, never-reused source of synthetic ids
///
/// Ids start at [`SyntheticIdSource::base`] and strictly increase across all
/// owners for the lifetime of the source.
pub trait SyntheticIdSource: Send + Sync {
    /// Draw the next id
    fn next_id(&self) -> u64;

    /// Reserved constant the first id is drawn from
    fn base(&self) -> u64;
}
