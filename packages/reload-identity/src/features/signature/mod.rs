//! Structural Signature Extraction
//!
//! Turns one member variant into a comparable structural value: supertype,
//! interfaces (declaration order), declared methods, declared fields and the
//! optional enclosing method. A missing slot is reported as a gap, which the
//! generation prober uses as its terminator.
//!
//! ```text
//! MetadataSource (port) → SignatureExtractor → MemberSignature
//! ```

pub mod domain;
mod error;
pub mod infrastructure;
pub mod ports;

pub use error::{ExtractionError, ExtractionResult};

pub use domain::{FieldFacts, MemberFacts, MemberSignature, MemberSignatureBuilder, MethodFacts};
pub use infrastructure::{InMemoryMetadata, SignatureExtractor};
pub use ports::{MetadataSource, MetadataView};
