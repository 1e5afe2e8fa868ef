//! Generation: timestamped snapshot of one owner's member family

use crate::features::signature::MemberSignature;
use crate::shared::models::Version;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    owner: Arc<str>,
    captured_at: Version,

    /// Contiguous: `members[i].slot == i + 1`
    members: Vec<MemberSignature>,
}

impl Generation {
    pub fn new(owner: Arc<str>, captured_at: Version, members: Vec<MemberSignature>) -> Self {
        debug_assert!(members
            .iter()
            .enumerate()
            .all(|(i, m)| m.slot as usize == i + 1 && m.owner == owner));

        Self {
            owner,
            captured_at,
            members,
        }
    }

    pub fn empty(owner: Arc<str>, captured_at: Version) -> Self {
        Self::new(owner, captured_at, Vec::new())
    }

    pub fn owner(&self) -> &Arc<str> {
        &self.owner
    }

    pub fn captured_at(&self) -> Version {
        self.captured_at
    }

    pub fn members(&self) -> &[MemberSignature] {
        &self.members
    }

    /// 1-based lookup
    pub fn member(&self, slot: u32) -> Option<&MemberSignature> {
        (slot as usize)
            .checked_sub(1)
            .and_then(|i| self.members.get(i))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Fresh while `captured_at >= last_modified - tolerance`
    ///
    /// An owner without a modification marker never goes stale.
    pub fn is_fresh(&self, last_modified: Option<Version>, tolerance: u64) -> bool {
        match last_modified {
            Some(modified) => self.captured_at >= modified.saturating_sub(tolerance),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation(captured_at: u64) -> Generation {
        let owner: Arc<str> = Arc::from("Outer");
        Generation::new(
            Arc::clone(&owner),
            Version::new(captured_at),
            vec![
                MemberSignature::builder(Arc::clone(&owner), 1).build(),
                MemberSignature::builder(owner, 2).super_type("S").build(),
            ],
        )
    }

    #[test]
    fn test_member_lookup_is_one_based() {
        let g = generation(0);
        assert!(g.member(0).is_none());
        assert_eq!(g.member(2).map(|m| m.super_type.as_str()), Some("S"));
        assert!(g.member(3).is_none());
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_freshness_window() {
        let g = generation(1_000);

        assert!(g.is_fresh(Some(Version::new(1_000)), 100));
        assert!(g.is_fresh(Some(Version::new(1_100)), 100));
        assert!(!g.is_fresh(Some(Version::new(1_101)), 100));
        assert!(!g.is_fresh(Some(Version::new(1_001)), 0));
        assert!(g.is_fresh(None, 0));
    }

    #[test]
    fn test_tolerance_never_underflows() {
        let g = generation(0);
        assert!(g.is_fresh(Some(Version::new(50)), 100));
    }
}
