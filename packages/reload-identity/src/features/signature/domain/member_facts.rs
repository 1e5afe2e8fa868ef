//! Raw structural facts reported by a metadata source

use serde::{Deserialize, Serialize};

/// One method as reported by introspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodFacts {
    pub return_type: String,
    pub name: String,
    pub parameter_types: Vec<String>,

    /// Reported by introspection but declared on a supertype
    #[serde(default)]
    pub inherited: bool,
}

impl MethodFacts {
    pub fn new(
        return_type: impl Into<String>,
        name: impl Into<String>,
        parameter_types: &[&str],
    ) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            parameter_types: parameter_types.iter().map(|p| p.to_string()).collect(),
            inherited: false,
        }
    }

    pub fn inherited(mut self) -> Self {
        self.inherited = true;
        self
    }

    /// Comparison key: `ret name(p1,p2)`
    pub fn descriptor(&self) -> String {
        format!(
            "{} {}({})",
            self.return_type,
            self.name,
            self.parameter_types.join(",")
        )
    }
}

/// One field as reported by introspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFacts {
    pub type_name: String,
    pub name: String,

    #[serde(default)]
    pub inherited: bool,
}

impl FieldFacts {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            inherited: false,
        }
    }

    pub fn inherited(mut self) -> Self {
        self.inherited = true;
        self
    }

    /// Comparison key: `type name`
    pub fn descriptor(&self) -> String {
        format!("{} {}", self.type_name, self.name)
    }
}

/// Everything a metadata source knows about one member variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFacts {
    pub super_type: String,

    /// Declaration order
    #[serde(default)]
    pub interfaces: Vec<String>,

    #[serde(default)]
    pub methods: Vec<MethodFacts>,

    #[serde(default)]
    pub fields: Vec<FieldFacts>,

    /// Set when the variant is lexically inside a method
    #[serde(default)]
    pub enclosing_method: Option<MethodFacts>,
}

impl MemberFacts {
    pub fn new(super_type: impl Into<String>) -> Self {
        Self {
            super_type: super_type.into(),
            interfaces: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            enclosing_method: None,
        }
    }

    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    pub fn method(mut self, method: MethodFacts) -> Self {
        self.methods.push(method);
        self
    }

    pub fn field(mut self, field: FieldFacts) -> Self {
        self.fields.push(field);
        self
    }

    pub fn enclosed_by(mut self, method: MethodFacts) -> Self {
        self.enclosing_method = Some(method);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_descriptor() {
        let m = MethodFacts::new("void", "run", &[]);
        assert_eq!(m.descriptor(), "void run()");

        let m = MethodFacts::new("int", "compare", &["java.lang.Object", "java.lang.Object"]);
        assert_eq!(m.descriptor(), "int compare(java.lang.Object,java.lang.Object)");
    }

    #[test]
    fn test_field_descriptor() {
        assert_eq!(FieldFacts::new("int", "count").descriptor(), "int count");
    }
}
