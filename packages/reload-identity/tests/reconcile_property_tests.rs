//! Property-based tests for reconciliation
//!
//! Invariants that hold for ALL families:
//! - Identity: identical families map i → i
//! - Growth: appended unmatched variants take natural slots |old|+1.., never synthetic
//! - Shrink: at most |new| entries, injective
//! - Purity: same (old, new) → same plan and same map
//! - Monotonicity: synthetic ids ≥ base, strictly increasing across owners

mod common;

use common::*;
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use reload_identity::features::reconcile::greedy_match;
use reload_identity::{AtomicSyntheticIdCounter, Identity, Reconciler};
use std::collections::HashSet;
use std::sync::Arc;

fn reconciler(base: u64) -> Reconciler {
    Reconciler::new(Arc::new(AtomicSyntheticIdCounter::new(base)))
}

/// Small alphabets so collisions across tiers are frequent
fn spec_strategy() -> impl Strategy<Value = SigSpec> {
    (
        prop::sample::select(vec!["S", "T", "U"]),
        prop::collection::btree_set(prop::sample::select(vec!["f()", "g()", "h()", "k()"]), 0..3),
        prop::option::of(prop::sample::select(vec!["run()", "call()"])),
    )
        .prop_map(|(super_type, methods, enclosing)| {
            let methods: Vec<&str> = methods.into_iter().collect();
            let spec = sig(super_type, &methods);
            match enclosing {
                Some(m) => spec.inside(m),
                None => spec,
            }
        })
}

fn family_strategy(max: usize) -> impl Strategy<Value = Vec<SigSpec>> {
    prop::collection::vec(spec_strategy(), 0..max)
}

// ============================================================================
// QuickCheck Tests (simpler, faster)
// ============================================================================

#[quickcheck]
fn qc_uniform_families_match_up_to_the_shorter(old_len: u8, new_len: u8) -> TestResult {
    let (old_len, new_len) = (old_len as usize % 40, new_len as usize % 40);

    let spec = sig("S", &["f()"]);
    let old = family(&vec![spec.clone(); old_len]);
    let new = family(&vec![spec; new_len]);

    let result = reconciler(10_000).reconcile(&owner(), &old, &new);
    let kept = old_len.min(new_len);

    TestResult::from_bool(
        result.map.len() == kept
            && result.map.is_identity()
            && result.stats.truncated == old_len - kept
            && result.natural_placements.len() == new_len - kept
            && result.synthetic_assignments.is_empty(),
    )
}

#[quickcheck]
fn qc_greedy_match_conserves_entries(old: Vec<u8>, new: Vec<u8>) -> bool {
    let (old_len, new_len) = (old.len(), new.len());
    let (mut old, mut new) = (old, new);

    let pairs = greedy_match(&mut old, &mut new, |o, n| o % 7 == n % 7);

    pairs.iter().all(|(o, n)| o % 7 == n % 7)
        && pairs.len() + old.len() == old_len
        && pairs.len() + new.len() == new_len
        // nothing left over could still have matched
        && old.iter().all(|o| new.iter().all(|n| o % 7 != n % 7))
}

// ============================================================================
// Proptest Tests (more complex, exhaustive)
// ============================================================================

proptest! {
    #[test]
    fn prop_identical_families_map_to_identity(specs in family_strategy(12)) {
        let members = family(&specs);
        let result = reconciler(10_000).reconcile(&owner(), &members, &members);

        prop_assert_eq!(result.map.len(), members.len());
        for m in &members {
            prop_assert_eq!(result.map.get(&m.identity()), Some(&m.identity()));
        }
        prop_assert!(result.natural_placements.is_empty());
        prop_assert!(result.synthetic_assignments.is_empty());
    }

    #[test]
    fn prop_growth_uses_natural_slots(specs in family_strategy(10), surplus in 1usize..6) {
        let mut grown = specs.clone();
        // "Extra" never coarse-matches the S/T/U alphabet
        grown.extend((0..surplus).map(|i| sig("Extra", &[]).inside(if i % 2 == 0 { "a()" } else { "b()" })));

        let old = family(&specs);
        let new = family(&grown);
        let result = reconciler(10_000).reconcile(&owner(), &old, &new);

        for m in &old {
            prop_assert!(result.map.contains(&m.identity()));
        }

        let slots: Vec<u32> = result.natural_placements.iter().map(|p| p.slot).collect();
        let expected: Vec<u32> = (old.len() as u32 + 1..=new.len() as u32).collect();
        prop_assert_eq!(slots, expected);
        prop_assert!(result.synthetic_assignments.is_empty());
    }

    #[test]
    fn prop_shrink_is_bounded_and_injective(
        old_specs in family_strategy(14),
        new_specs in family_strategy(14),
    ) {
        prop_assume!(new_specs.len() < old_specs.len());

        let result = reconciler(10_000).reconcile(&owner(), &family(&old_specs), &family(&new_specs));

        prop_assert!(result.map.len() <= new_specs.len());
        let targets: HashSet<&Identity> = result.map.iter().map(|(_, new)| new).collect();
        prop_assert_eq!(targets.len(), result.map.len());
    }

    #[test]
    fn prop_reconciliation_is_pure(
        old_specs in family_strategy(12),
        new_specs in family_strategy(12),
    ) {
        let (old, new) = (family(&old_specs), family(&new_specs));

        let engine = reconciler(10_000);
        prop_assert_eq!(engine.plan(&owner(), &old, &new), engine.plan(&owner(), &old, &new));

        let first = reconciler(10_000).reconcile(&owner(), &old, &new);
        let second = reconciler(10_000).reconcile(&owner(), &old, &new);
        prop_assert_eq!(&*first.map, &*second.map);
    }

    #[test]
    fn prop_every_new_member_is_accounted_for_once(
        old_specs in family_strategy(12),
        new_specs in family_strategy(12),
    ) {
        let result = reconciler(10_000).reconcile(&owner(), &family(&old_specs), &family(&new_specs));

        let mut seen: Vec<Identity> = result.matches.iter().map(|m| m.new.clone()).collect();
        seen.extend(result.natural_placements.iter().map(|p| p.member.clone()));
        seen.extend(result.synthetic_assignments.iter().map(|a| a.target.clone()));
        seen.sort();

        let expected: Vec<Identity> = family(&new_specs).iter().map(|m| m.identity()).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn prop_synthetic_ids_are_monotonic_across_owners(
        families in prop::collection::vec((family_strategy(6), family_strategy(8)), 1..6),
    ) {
        let ids = Arc::new(AtomicSyntheticIdCounter::new(10_000));
        let engine = Reconciler::new(Arc::clone(&ids) as _);

        let mut drawn = Vec::new();
        for (i, (old_specs, new_specs)) in families.iter().enumerate() {
            // Each family gets its own owner
            let owner: Arc<str> = Arc::from(format!("Owner{}", i));
            let rebrand = |specs: &[SigSpec]| -> Vec<_> {
                family(specs)
                    .into_iter()
                    .map(|m| reload_identity::MemberSignature { owner: Arc::clone(&owner), ..m })
                    .collect()
            };

            let result = engine.reconcile(&owner, &rebrand(old_specs.as_slice()), &rebrand(new_specs.as_slice()));
            drawn.extend(result.synthetic_assignments.iter().map(|a| a.alias.slot.value()));
        }

        prop_assert!(drawn.iter().all(|id| *id >= 10_000));
        prop_assert!(drawn.windows(2).all(|w| w[0] < w[1]));
    }
}
