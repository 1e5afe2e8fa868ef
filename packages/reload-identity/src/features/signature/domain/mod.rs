//! Signature Domain Models
//!
//! - `member_facts.rs`     - raw facts as reported by a metadata source
//! - `member_signature.rs` - comparable structural value built from the facts

pub mod member_facts;
pub mod member_signature;

pub use member_facts::{FieldFacts, MemberFacts, MethodFacts};
pub use member_signature::{MemberSignature, MemberSignatureBuilder};
