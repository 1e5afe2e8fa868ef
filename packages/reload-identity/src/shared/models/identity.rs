//! Member identity types
//!
//! An identity is the pair (owner type name, slot). A slot is either the
//! 1-based natural index of a member variant inside its owner, or a synthetic
//! id drawn from the process-wide counter for variants that cannot be expressed
//! as a simple slot successor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Slot of a member variant within its owner
///
/// `Natural` sorts before `Synthetic`, so enumerations list real slots first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MemberSlot {
    /// 1-based index assigned by the compiler
    Natural(u32),

    /// Id beyond the legitimate slot range (aliased loading)
    Synthetic(u64),
}

impl MemberSlot {
    /// Numeric value as it appears in the rendered binary name
    pub fn value(&self) -> u64 {
        match self {
            MemberSlot::Natural(index) => u64::from(*index),
            MemberSlot::Synthetic(id) => *id,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, MemberSlot::Synthetic(_))
    }

    pub fn natural_index(&self) -> Option<u32> {
        match self {
            MemberSlot::Natural(index) => Some(*index),
            MemberSlot::Synthetic(_) => None,
        }
    }
}

impl fmt::Display for MemberSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Identity of one member variant: (owner type name, slot)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity {
    /// Owner type name (interned, shared across every identity of the family)
    pub owner: Arc<str>,

    pub slot: MemberSlot,
}

impl Identity {
    pub fn new(owner: impl Into<Arc<str>>, slot: MemberSlot) -> Self {
        Self {
            owner: owner.into(),
            slot,
        }
    }

    pub fn natural(owner: impl Into<Arc<str>>, index: u32) -> Self {
        Self::new(owner, MemberSlot::Natural(index))
    }

    pub fn synthetic(owner: impl Into<Arc<str>>, id: u64) -> Self {
        Self::new(owner, MemberSlot::Synthetic(id))
    }

    pub fn is_synthetic(&self) -> bool {
        self.slot.is_synthetic()
    }

    /// Render the runtime binary name, e.g. `com.acme.Outer$3`
    pub fn binary_name(&self) -> String {
        format!("{}${}", self.owner, self.slot.value())
    }

    /// Parse a binary name produced by [`Identity::binary_name`]
    ///
    /// Splits on the rightmost `$`; the suffix must be a non-zero integer.
    /// Values at or above `synthetic_base` are read back as synthetic ids.
    pub fn parse_binary_name(name: &str, synthetic_base: u64) -> Option<Self> {
        let (owner, suffix) = name.rsplit_once('$')?;
        if owner.is_empty() || suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let value: u64 = suffix.parse().ok()?;
        if value == 0 {
            return None;
        }

        if value >= synthetic_base {
            Some(Self::synthetic(owner, value))
        } else {
            let index = u32::try_from(value).ok()?;
            Some(Self::natural(owner, index))
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binary_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_name_rendering() {
        assert_eq!(Identity::natural("com.acme.Outer", 3).binary_name(), "com.acme.Outer$3");
        assert_eq!(
            Identity::synthetic("com.acme.Outer", 10_001).binary_name(),
            "com.acme.Outer$10001"
        );
    }

    #[test]
    fn test_parse_binary_name() {
        let parsed = Identity::parse_binary_name("com.acme.Outer$Inner$2", 10_000).unwrap();
        assert_eq!(&*parsed.owner, "com.acme.Outer$Inner");
        assert_eq!(parsed.slot, MemberSlot::Natural(2));

        let synthetic = Identity::parse_binary_name("Outer$10000", 10_000).unwrap();
        assert_eq!(synthetic.slot, MemberSlot::Synthetic(10_000));
    }

    #[test]
    fn test_parse_rejects_named_members() {
        assert!(Identity::parse_binary_name("Outer$Inner", 10_000).is_none());
        assert!(Identity::parse_binary_name("Outer$0", 10_000).is_none());
        assert!(Identity::parse_binary_name("Outer", 10_000).is_none());
        assert!(Identity::parse_binary_name("$1", 10_000).is_none());
        assert!(Identity::parse_binary_name("Outer$+1", 10_000).is_none());
    }

    #[test]
    fn test_natural_sorts_before_synthetic() {
        let mut ids = vec![
            Identity::synthetic("A", 10_000),
            Identity::natural("A", 7),
            Identity::natural("A", 1),
        ];
        ids.sort();
        assert_eq!(ids[0].slot, MemberSlot::Natural(1));
        assert_eq!(ids[1].slot, MemberSlot::Natural(7));
        assert!(ids[2].is_synthetic());
    }
}
