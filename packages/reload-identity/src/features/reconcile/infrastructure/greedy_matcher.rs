//! Bipartite greedy matcher
//!
//! Scans `old` in order; each old entry takes the first remaining `new` entry
//! that satisfies the predicate. Both are removed from their worklists. Ties
//! are broken purely by scan order.
//!
//! No maximum-weight assignment is attempted. Reconciliation runs on every
//! reload and families are small, so a predictable O(|old| * |new|) scan per
//! tier is the contract.

/// Match `old` against `new`, shrinking both worklists in place
///
/// Returns the matched pairs in old scan order. Unmatched entries stay in the
/// worklists with their relative order preserved.
pub fn greedy_match<T, P>(old: &mut Vec<T>, new: &mut Vec<T>, predicate: P) -> Vec<(T, T)>
where
    P: Fn(&T, &T) -> bool,
{
    let mut pairs = Vec::new();
    let mut unmatched = Vec::with_capacity(old.len());

    for candidate in old.drain(..) {
        match new.iter().position(|n| predicate(&candidate, n)) {
            Some(pos) => {
                let partner = new.remove(pos);
                pairs.push((candidate, partner));
            }
            None => unmatched.push(candidate),
        }
    }

    *old = unmatched;
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_remaining_candidate_wins() {
        let mut old = vec!["a1", "a2", "b1"];
        let mut new = vec!["b9", "a7", "a8"];

        let pairs = greedy_match(&mut old, &mut new, |o, n| o[..1] == n[..1]);

        assert_eq!(pairs, vec![("a1", "a7"), ("a2", "a8"), ("b1", "b9")]);
        assert!(old.is_empty());
        assert!(new.is_empty());
    }

    #[test]
    fn test_unmatched_keep_relative_order() {
        let mut old = vec![1, 2, 3, 4];
        let mut new = vec![40, 5, 20, 7];

        let pairs = greedy_match(&mut old, &mut new, |o, n| n % 10 == 0 && n / 10 == *o);

        assert_eq!(pairs, vec![(2, 20), (4, 40)]);
        assert_eq!(old, vec![1, 3]);
        assert_eq!(new, vec![5, 7]);
    }

    #[test]
    fn test_greedy_is_not_optimal() {
        // "any" accepts both candidates, "y-only" accepts only "y". Scan order
        // hands "y" to "any" first, so "y-only" stays unmatched even though a
        // perfect assignment exists.
        let mut old = vec!["any", "y-only"];
        let mut new = vec!["y", "x"];

        let pairs = greedy_match(&mut old, &mut new, |o, n| *o == "any" || *n == "y");

        assert_eq!(pairs, vec![("any", "y")]);
        assert_eq!(old, vec!["y-only"]);
        assert_eq!(new, vec!["x"]);
    }

    #[test]
    fn test_empty_inputs() {
        let mut old: Vec<u8> = Vec::new();
        let mut new = vec![1u8];
        assert!(greedy_match(&mut old, &mut new, |_, _| true).is_empty());
        assert_eq!(new, vec![1]);
    }
}
