//! Common test utilities for reload-identity
//!
//! Signature and family builders shared by the integration tests.

#![allow(dead_code)]

use reload_identity::{
    AtomicSyntheticIdCounter, CacheCollaborators, GenerationCache, InMemoryMetadata,
    ManualClock, MemberFacts, MemberSignature, ReloadConfig,
};
use reload_identity::features::signature::MethodFacts;
use std::sync::Arc;

pub const OWNER: &str = "com.acme.Outer";

pub fn owner() -> Arc<str> {
    Arc::from(OWNER)
}

/// `Sig(super, methods)` as written in scenario descriptions
pub fn sig(super_type: &str, methods: &[&str]) -> SigSpec {
    SigSpec {
        super_type: super_type.to_string(),
        methods: methods.iter().map(|m| m.to_string()).collect(),
        enclosing_method: None,
    }
}

#[derive(Debug, Clone)]
pub struct SigSpec {
    pub super_type: String,
    pub methods: Vec<String>,
    pub enclosing_method: Option<String>,
}

impl SigSpec {
    pub fn inside(mut self, method: &str) -> Self {
        self.enclosing_method = Some(method.to_string());
        self
    }

    pub fn at(&self, slot: u32) -> MemberSignature {
        let mut builder = MemberSignature::builder(owner(), slot).super_type(self.super_type.as_str());
        for m in &self.methods {
            builder = builder.method(format!("void {}", m));
        }
        if let Some(enclosing) = &self.enclosing_method {
            builder = builder.enclosing_method(format!("void {}", enclosing));
        }
        builder.build()
    }

    pub fn facts(&self) -> MemberFacts {
        let mut facts = MemberFacts::new(self.super_type.as_str());
        for m in &self.methods {
            let name = m.trim_end_matches("()");
            facts = facts.method(MethodFacts::new("void", name, &[]));
        }
        if let Some(enclosing) = &self.enclosing_method {
            facts = facts.enclosed_by(MethodFacts::new("void", enclosing.trim_end_matches("()"), &[]));
        }
        facts
    }
}

/// Slot-numbered family (slots 1..=n)
pub fn family(specs: &[SigSpec]) -> Vec<MemberSignature> {
    specs
        .iter()
        .enumerate()
        .map(|(i, s)| s.at(i as u32 + 1))
        .collect()
}

pub struct CacheFixture {
    pub metadata: Arc<InMemoryMetadata>,
    pub clock: Arc<ManualClock>,
    pub ids: Arc<AtomicSyntheticIdCounter>,
    pub cache: Arc<GenerationCache>,
}

pub fn cache_fixture(config: ReloadConfig) -> CacheFixture {
    let metadata = Arc::new(InMemoryMetadata::new());
    let clock = Arc::new(ManualClock::new(1_000));
    let ids = Arc::new(AtomicSyntheticIdCounter::new(config.synthetic_id_base));

    let cache = GenerationCache::new(
        &config,
        CacheCollaborators::in_memory(
            Arc::clone(&metadata),
            Arc::clone(&clock) as _,
            Arc::clone(&ids) as _,
        ),
    )
    .expect("valid config");

    CacheFixture {
        metadata,
        clock,
        ids,
        cache: Arc::new(cache),
    }
}
