//! Prometheus metrics for generation caching and reconciliation

use crate::features::reconcile::ReconcileStats;
use prometheus::{
    register_histogram_with_registry, register_int_counter_vec_with_registry,
    register_int_counter_with_registry, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts,
    Registry,
};

#[derive(Clone)]
pub struct ReloadMetrics {
    pub cache_hits: IntCounter,
    pub cache_misses: IntCounter,
    pub recomputations: IntCounter,
    pub stale_detections: IntCounter,

    /// Labelled by tier (`exact`, `structural`, `coarse`)
    pub tier_matches: IntCounterVec,
    pub natural_placements: IntCounter,
    pub synthetic_allocations: IntCounter,
    pub unmatched_old: IntCounter,

    /// Probe + reconcile, in seconds
    pub reconcile_latency: Histogram,
}

impl ReloadMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        Ok(Self {
            cache_hits: register_int_counter_with_registry!(
                Opts::new("reload_generation_cache_hits_total", "Fresh generation cache hits"),
                registry
            )?,
            cache_misses: register_int_counter_with_registry!(
                Opts::new(
                    "reload_generation_cache_misses_total",
                    "Generation cache misses (empty or stale)"
                ),
                registry
            )?,
            recomputations: register_int_counter_with_registry!(
                Opts::new("reload_generation_recomputations_total", "Generations recomputed"),
                registry
            )?,
            stale_detections: register_int_counter_with_registry!(
                Opts::new(
                    "reload_generation_stale_total",
                    "Cached generations found stale"
                ),
                registry
            )?,
            tier_matches: register_int_counter_vec_with_registry!(
                Opts::new("reload_tier_matches_total", "Old/new pairs matched per tier"),
                &["tier"],
                registry
            )?,
            natural_placements: register_int_counter_with_registry!(
                Opts::new(
                    "reload_natural_placements_total",
                    "Unmatched new members placed on a natural slot"
                ),
                registry
            )?,
            synthetic_allocations: register_int_counter_with_registry!(
                Opts::new("reload_synthetic_allocations_total", "Synthetic ids drawn"),
                registry
            )?,
            unmatched_old: register_int_counter_with_registry!(
                Opts::new(
                    "reload_unmatched_old_total",
                    "Old members left unmatched (stubbed downstream)"
                ),
                registry
            )?,
            reconcile_latency: register_histogram_with_registry!(
                HistogramOpts::new(
                    "reload_reconcile_latency_seconds",
                    "Generation probe and reconcile latency"
                )
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
                registry
            )?,
        })
    }

    pub fn record_reconciliation(&self, stats: &ReconcileStats, elapsed_secs: f64) {
        self.tier_matches
            .with_label_values(&["exact"])
            .inc_by(stats.exact_matches as u64);
        self.tier_matches
            .with_label_values(&["structural"])
            .inc_by(stats.structural_matches as u64);
        self.tier_matches
            .with_label_values(&["coarse"])
            .inc_by(stats.coarse_matches as u64);
        self.natural_placements
            .inc_by(stats.natural_placements as u64);
        self.synthetic_allocations
            .inc_by(stats.synthetic_allocations as u64);
        self.unmatched_old.inc_by(stats.unmatched_old as u64);
        self.reconcile_latency.observe(elapsed_secs);
    }

    pub fn hit_rate(&self) -> f64 {
        let hits = self.cache_hits.get() as f64;
        let total = hits + self.cache_misses.get() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_reconciliation() {
        let registry = Registry::new();
        let metrics = ReloadMetrics::new(&registry).unwrap();

        let stats = ReconcileStats {
            exact_matches: 2,
            coarse_matches: 1,
            synthetic_allocations: 3,
            ..Default::default()
        };
        metrics.record_reconciliation(&stats, 0.002);

        assert_eq!(metrics.tier_matches.with_label_values(&["exact"]).get(), 2);
        assert_eq!(metrics.tier_matches.with_label_values(&["structural"]).get(), 0);
        assert_eq!(metrics.synthetic_allocations.get(), 3);
        assert_eq!(metrics.reconcile_latency.get_sample_count(), 1);
    }

    #[test]
    fn test_duplicate_registration_is_an_error() {
        let registry = Registry::new();
        let _first = ReloadMetrics::new(&registry).unwrap();
        assert!(ReloadMetrics::new(&registry).is_err());
    }

    #[test]
    fn test_hit_rate() {
        let metrics = ReloadMetrics::new(&Registry::new()).unwrap();
        assert_eq!(metrics.hit_rate(), 0.0);
        metrics.cache_hits.inc_by(3);
        metrics.cache_misses.inc();
        assert!((metrics.hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
