//! Parameter descriptor to Qt host type mapping.
//!
//! Modifiers are applied outermost first: an optional parameter is always a
//! `QVariant` in a signature, an array wraps its element type, and only then
//! is the base type looked at. Each step recurses on a copy of the
//! descriptor with the applied modifier cleared.
//!
//! # Examples
//!
//! ```
//! use rpcstub_core::descriptor::{ParamDescriptor, ParamKind};
//! use rpcstub_core::mapper;
//!
//! let ids = ParamDescriptor::new("ids", ParamKind::Integer).array();
//! assert_eq!(mapper::resolve(&ids).to_string(), "QList< int >");
//!
//! let optional_ids = ids.optional();
//! assert_eq!(mapper::resolve(&optional_ids).to_string(), "QVariant");
//! assert_eq!(mapper::resolve_unwrapped(&optional_ids).to_string(), "QList< int >");
//! ```

use std::fmt;

use crate::descriptor::{ParamDescriptor, ParamKind};

/// Which boundary a type is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingMode {
    /// Outer signature type; optional parameters collapse to `QVariant`
    Signature,
    /// Inner value type of an optional parameter; `mandatory` is ignored
    Unwrapped,
}

/// A Qt/C++ host type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QtType {
    /// `QVariant`, the container for optional values
    Variant,
    /// `QStringList`
    StringList,
    /// `QList< T >`
    List(Box<QtType>),
    Int,
    String,
    Bool,
    Double,
    /// Generated struct type, e.g. `Common_TextField`
    Struct(String),
}

impl fmt::Display for QtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variant => f.write_str("QVariant"),
            Self::StringList => f.write_str("QStringList"),
            Self::List(element) => write!(f, "QList< {element} >"),
            Self::Int => f.write_str("int"),
            Self::String => f.write_str("QString"),
            Self::Bool => f.write_str("bool"),
            Self::Double => f.write_str("double"),
            Self::Struct(name) => f.write_str(name),
        }
    }
}

/// Signature type of a parameter
pub fn resolve(param: &ParamDescriptor) -> QtType {
    resolve_in(param, MappingMode::Signature)
}

/// Value type of a parameter regardless of its optionality
pub fn resolve_unwrapped(param: &ParamDescriptor) -> QtType {
    resolve_in(param, MappingMode::Unwrapped)
}

pub fn resolve_in(param: &ParamDescriptor, mode: MappingMode) -> QtType {
    if mode == MappingMode::Signature && !param.mandatory {
        return QtType::Variant;
    }
    if param.array {
        let element = param.without_array();
        return match element.kind {
            ParamKind::String => QtType::StringList,
            _ => QtType::List(Box::new(resolve_in(&element, mode))),
        };
    }
    match &param.kind {
        ParamKind::Integer | ParamKind::Enum(_) => QtType::Int,
        ParamKind::String => QtType::String,
        ParamKind::Boolean => QtType::Bool,
        ParamKind::Float => QtType::Double,
        ParamKind::Struct(path) => QtType::Struct(path.join("_")),
    }
}
