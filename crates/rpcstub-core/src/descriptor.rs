//! Canonical parameter descriptors.
//!
//! [`ParamDescriptor::build`] normalizes a raw `param` node into a value the
//! type mapper can resolve without looking at the markup again. Named type
//! references are resolved against the [`TypeRegistry`] here, so a
//! descriptor that exists always has a host type.

// Internal imports (std, crate)
use std::fmt;

use crate::schema::{NamedKind, ParamNode, TypeRegistry};
use crate::Error;

/// Fully-qualified reference to a named schema type, e.g. `Common.Result`.
/// Always two segments: interface, then type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypePath(Vec<String>);

impl TypePath {
    pub fn new(interface: impl Into<String>, name: impl Into<String>) -> Self {
        Self(vec![interface.into(), name.into()])
    }

    /// Parse a type reference as written in a `type` attribute. A bare name
    /// is qualified with the owning interface.
    pub fn parse(reference: &str, owner: &str) -> crate::Result<Self> {
        let segments: Vec<&str> = reference.split('.').collect();
        let path = match segments.as_slice() {
            [name] => Self::new(owner, *name),
            [interface, name] => Self::new(*interface, *name),
            _ => {
                return Err(Error::schema(format!(
                    "type reference '{reference}' has more than two segments"
                )));
            }
        };
        if path.0.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::schema(format!(
                "type reference '{reference}' has an empty segment"
            )));
        }
        Ok(path)
    }

    pub fn interface(&self) -> &str {
        &self.0[0]
    }

    /// Type name part
    pub fn name(&self) -> &str {
        &self.0[1]
    }

    /// Segments joined with `sep`
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("."))
    }
}

/// Base type of a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    Float,
    Boolean,
    String,
    /// Enumeration, carried as an integer
    Enum(TypePath),
    Struct(TypePath),
}

impl ParamKind {
    /// Primitive kinds by their schema spelling
    fn primitive(type_name: &str) -> Option<Self> {
        match type_name {
            "Integer" => Some(Self::Integer),
            "Float" => Some(Self::Float),
            "Boolean" => Some(Self::Boolean),
            "String" => Some(Self::String),
            _ => None,
        }
    }
}

/// Value and size limits declared on a parameter. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub min_size: Option<String>,
    pub max_size: Option<String>,
}

/// Canonical description of one request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    pub name: String,
    pub kind: ParamKind,
    pub mandatory: bool,
    pub array: bool,
    pub constraints: Constraints,
}

impl ParamDescriptor {
    /// A mandatory scalar parameter
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            mandatory: true,
            array: false,
            constraints: Constraints::default(),
        }
    }

    pub fn optional(self) -> Self {
        Self {
            mandatory: false,
            ..self
        }
    }

    pub fn array(self) -> Self {
        Self {
            array: true,
            ..self
        }
    }

    /// Copy of this descriptor with the array modifier cleared
    pub fn without_array(&self) -> Self {
        Self {
            array: false,
            ..self.clone()
        }
    }

    /// Normalize a `param` node declared in interface `owner`.
    pub fn build(node: &ParamNode, owner: &str, registry: &TypeRegistry) -> crate::Result<Self> {
        let name = node
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                Error::schema(format!("param in interface '{owner}' has no 'name' attribute"))
            })?;
        let type_name = node.type_.as_deref().ok_or_else(|| {
            Error::schema(format!("param '{owner}.{name}' has no 'type' attribute"))
        })?;

        let kind = match ParamKind::primitive(type_name) {
            Some(kind) => kind,
            None => {
                let path = TypePath::parse(type_name, owner)?;
                match registry.lookup(&path) {
                    Some(NamedKind::Enum) => ParamKind::Enum(path),
                    Some(NamedKind::Struct) => ParamKind::Struct(path),
                    None => {
                        return Err(Error::schema(format!(
                            "param '{owner}.{name}' has type '{type_name}' which is neither a \
                             primitive nor a declared enum or struct"
                        )));
                    }
                }
            }
        };

        Ok(Self {
            name: name.to_string(),
            kind,
            mandatory: node.mandatory.as_deref() != Some("false"),
            array: node.array.as_deref() == Some("true"),
            constraints: Constraints {
                min_value: node.min_value.clone(),
                max_value: node.max_value.clone(),
                min_length: node.min_length.clone(),
                max_length: node.max_length.clone(),
                min_size: node.min_size.clone(),
                max_size: node.max_size.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::default();
        registry.add_enum("Common", "Result");
        registry.add_struct("Common", "TextField");
        registry.add_enum("UI", "Language");
        registry
    }

    fn node(name: &str, type_: &str) -> ParamNode {
        ParamNode {
            name: Some(name.to_string()),
            type_: Some(type_.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_primitive_defaults() {
        let desc = ParamDescriptor::build(&node("appID", "Integer"), "UI", &registry()).unwrap();
        assert_eq!(desc.name, "appID");
        assert_eq!(desc.kind, ParamKind::Integer);
        assert!(desc.mandatory);
        assert!(!desc.array);
        assert_eq!(desc.constraints, Constraints::default());
    }

    #[test]
    fn test_flags_only_accept_exact_literals() {
        let mut raw = node("x", "String");
        raw.mandatory = Some("false".to_string());
        raw.array = Some("true".to_string());
        let desc = ParamDescriptor::build(&raw, "UI", &registry()).unwrap();
        assert!(!desc.mandatory);
        assert!(desc.array);

        raw.mandatory = Some("no".to_string());
        raw.array = Some("yes".to_string());
        let desc = ParamDescriptor::build(&raw, "UI", &registry()).unwrap();
        assert!(desc.mandatory);
        assert!(!desc.array);
    }

    #[test]
    fn test_qualified_and_bare_references() {
        let reg = registry();
        let desc = ParamDescriptor::build(&node("r", "Common.Result"), "UI", &reg).unwrap();
        assert_eq!(desc.kind, ParamKind::Enum(TypePath::new("Common", "Result")));

        let desc = ParamDescriptor::build(&node("l", "Language"), "UI", &reg).unwrap();
        assert_eq!(desc.kind, ParamKind::Enum(TypePath::new("UI", "Language")));

        let desc = ParamDescriptor::build(&node("t", "Common.TextField"), "UI", &reg).unwrap();
        assert_eq!(
            desc.kind,
            ParamKind::Struct(TypePath::new("Common", "TextField"))
        );
    }

    #[test]
    fn test_missing_attributes_are_schema_errors() {
        let mut raw = node("x", "Integer");
        raw.type_ = None;
        let err = ParamDescriptor::build(&raw, "UI", &registry()).unwrap_err();
        assert!(matches!(err, Error::Schema(m) if m.contains("'type'")));

        let mut raw = node("x", "Integer");
        raw.name = None;
        assert!(ParamDescriptor::build(&raw, "UI", &registry()).is_err());
    }

    #[test]
    fn test_unresolvable_reference() {
        let reg = registry();
        // Bare names resolve against the owning interface only.
        assert!(ParamDescriptor::build(&node("t", "TextField"), "UI", &reg).is_err());
        assert!(ParamDescriptor::build(&node("t", "Common.Missing"), "UI", &reg).is_err());
        assert!(ParamDescriptor::build(&node("t", "A.B.C"), "UI", &reg).is_err());
        assert!(ParamDescriptor::build(&node("t", "Common."), "UI", &reg).is_err());
    }

    #[test]
    fn test_constraints_are_carried() {
        let mut raw = node("text", "String");
        raw.max_length = Some("500".to_string());
        let desc = ParamDescriptor::build(&raw, "UI", &registry()).unwrap();
        assert_eq!(desc.constraints.max_length.as_deref(), Some("500"));
        assert_eq!(desc.constraints.min_length, None);
    }

    #[test]
    fn test_modifier_copies_leave_original_untouched() {
        let desc = ParamDescriptor::new("ids", ParamKind::Integer).array().optional();
        let element = desc.without_array();
        assert!(desc.array && !desc.mandatory);
        assert!(!element.array && !element.mandatory);
    }

    #[test]
    fn test_type_path_display() {
        let path = TypePath::parse("Common.Result", "UI").unwrap();
        assert_eq!(path.to_string(), "Common.Result");
        assert_eq!(path.join("_"), "Common_Result");
        assert_eq!(path.interface(), "Common");
        assert_eq!(path.name(), "Result");
    }
}
