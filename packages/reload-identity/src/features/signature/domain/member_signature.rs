//! Structural signature of one member variant
//!
//! Identity fields (`owner`, `slot`) say where the variant lives; every other
//! field describes its shape. Only shape fields take part in matching.
//!
//! Method and field descriptors are kept in ordered sets, so the order in which
//! introspection happens to expose them never causes a false mismatch.
//! Interfaces stay in declaration order: the order is part of the inheritance
//! shape.

use crate::shared::models::Identity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSignature {
    pub owner: Arc<str>,

    /// 1-based slot index
    pub slot: u32,

    /// Qualified supertype name
    pub super_type: String,

    /// Declaration order
    pub interfaces: Vec<String>,

    /// One `ret name(params)` entry per declared method
    pub methods: BTreeSet<String>,

    /// One `type name` entry per declared field
    pub fields: BTreeSet<String>,

    /// Descriptor of the lexically enclosing method, if any
    pub enclosing_method: Option<String>,
}

impl MemberSignature {
    pub fn builder(owner: impl Into<Arc<str>>, slot: u32) -> MemberSignatureBuilder {
        MemberSignatureBuilder::new(owner, slot)
    }

    pub fn identity(&self) -> Identity {
        Identity::natural(Arc::clone(&self.owner), self.slot)
    }

    /// Same variant shape placed at another slot
    pub fn at_slot(&self, slot: u32) -> Self {
        Self {
            slot,
            ..self.clone()
        }
    }

    /// Supertype + interfaces equal
    pub fn same_hierarchy(&self, other: &MemberSignature) -> bool {
        self.super_type == other.super_type && self.interfaces == other.interfaces
    }

    /// Hierarchy + declared methods + declared fields equal
    pub fn same_structure(&self, other: &MemberSignature) -> bool {
        self.same_hierarchy(other) && self.methods == other.methods && self.fields == other.fields
    }

    /// Structure + enclosing method equal
    pub fn same_shape(&self, other: &MemberSignature) -> bool {
        self.same_structure(other) && self.enclosing_method == other.enclosing_method
    }
}

/// Builder for [`MemberSignature`]
pub struct MemberSignatureBuilder {
    signature: MemberSignature,
}

impl MemberSignatureBuilder {
    fn new(owner: impl Into<Arc<str>>, slot: u32) -> Self {
        Self {
            signature: MemberSignature {
                owner: owner.into(),
                slot,
                super_type: "java.lang.Object".to_string(),
                interfaces: Vec::new(),
                methods: BTreeSet::new(),
                fields: BTreeSet::new(),
                enclosing_method: None,
            },
        }
    }

    pub fn super_type(mut self, name: impl Into<String>) -> Self {
        self.signature.super_type = name.into();
        self
    }

    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.signature.interfaces.push(name.into());
        self
    }

    pub fn method(mut self, descriptor: impl Into<String>) -> Self {
        self.signature.methods.insert(descriptor.into());
        self
    }

    pub fn field(mut self, descriptor: impl Into<String>) -> Self {
        self.signature.fields.insert(descriptor.into());
        self
    }

    pub fn enclosing_method(mut self, descriptor: impl Into<String>) -> Self {
        self.signature.enclosing_method = Some(descriptor.into());
        self
    }

    pub fn build(self) -> MemberSignature {
        self.signature
    }
}
