//! Signature Infrastructure

mod extractor;
mod in_memory_metadata;

pub use extractor::SignatureExtractor;
pub use in_memory_metadata::InMemoryMetadata;
