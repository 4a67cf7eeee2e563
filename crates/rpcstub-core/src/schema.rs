//! Interface schema markup loading.
//!
//! The schema is an XML document with one `interface` element per remote
//! interface. Each interface declares `enum` and `struct` types and
//! `function` elements whose `messagetype` attribute marks them as a request
//! or a response:
//!
//! ```xml
//! <interfaces>
//!   <interface name="UI">
//!     <enum name="Language"><element name="EN-US"/></enum>
//!     <function name="SetAppIcon" messagetype="request" provider="sdl">
//!       <param name="syncFileName" type="String"/>
//!       <param name="appID" type="Integer" mandatory="false"/>
//!     </function>
//!     <function name="SetAppIcon" messagetype="response"/>
//!   </interface>
//! </interfaces>
//! ```
//!
//! Bare `request` and `response` elements are accepted as shorthand and may
//! be interleaved with `function` elements; interface children are kept in
//! one list so document order survives.
//!
//! The types here mirror the markup one-to-one and keep every attribute as an
//! optional string; normalization happens in [`crate::model`] and
//! [`crate::descriptor`].
//!
//! # Examples
//!
//! ```
//! use rpcstub_core::schema::SchemaDocument;
//!
//! let doc = SchemaDocument::parse(
//!     r#"<interfaces><interface name="UI"/></interfaces>"#,
//! ).unwrap();
//! assert_eq!(doc.interfaces.len(), 1);
//! assert_eq!(doc.interfaces[0].name.as_deref(), Some("UI"));
//! ```

// Internal imports (std, crate)
use std::collections::HashSet;
use std::path::Path;

use crate::descriptor::TypePath;

// External imports (alphabetized)
use serde::Deserialize;
use tokio::fs;

/// Root of a schema document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
    /// Optional name of the interface collection
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    /// Interfaces in document order
    #[serde(rename = "interface", default)]
    pub interfaces: Vec<InterfaceNode>,
}

/// One `interface` element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfaceNode {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    /// Child elements in document order
    #[serde(rename = "$value", default)]
    pub items: Vec<InterfaceItem>,
}

/// A child element of an `interface`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceItem {
    Enum(TypeNode),
    Struct(TypeNode),
    /// Request, response or notification, told apart by `messagetype`
    Function(FunctionNode),
    /// Shorthand request element
    Request(FunctionNode),
    /// Shorthand response element
    Response(FunctionNode),
    /// Descriptions and anything else the generator does not read
    #[serde(other)]
    Other,
}

impl InterfaceNode {
    pub fn enums(&self) -> impl Iterator<Item = &TypeNode> {
        self.items.iter().filter_map(|item| match item {
            InterfaceItem::Enum(node) => Some(node),
            _ => None,
        })
    }

    pub fn structs(&self) -> impl Iterator<Item = &TypeNode> {
        self.items.iter().filter_map(|item| match item {
            InterfaceItem::Struct(node) => Some(node),
            _ => None,
        })
    }
}

/// A named `enum` or `struct` declaration. Only the name matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeNode {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
}

/// A `function`, `request` or `response` element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionNode {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    /// `request`, `response` or `notification`
    #[serde(rename = "@messagetype", default)]
    pub message_type: Option<String>,

    /// Responder that answers the request
    #[serde(rename = "@provider", default)]
    pub provider: Option<String>,

    #[serde(rename = "param", default)]
    pub params: Vec<ParamNode>,
}

/// A `param` element with its attributes as written in the markup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamNode {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
    #[serde(rename = "@type", default)]
    pub type_: Option<String>,
    #[serde(rename = "@mandatory", default)]
    pub mandatory: Option<String>,
    #[serde(rename = "@array", default)]
    pub array: Option<String>,
    #[serde(rename = "@minvalue", default)]
    pub min_value: Option<String>,
    #[serde(rename = "@maxvalue", default)]
    pub max_value: Option<String>,
    #[serde(rename = "@minlength", default)]
    pub min_length: Option<String>,
    #[serde(rename = "@maxlength", default)]
    pub max_length: Option<String>,
    #[serde(rename = "@minsize", default)]
    pub min_size: Option<String>,
    #[serde(rename = "@maxsize", default)]
    pub max_size: Option<String>,
}

impl SchemaDocument {
    /// Parse schema markup from a string
    pub fn parse(content: &str) -> crate::Result<Self> {
        Ok(quick_xml::de::from_str(content)?)
    }

    /// Load schema markup from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading interface schema from {}", path.display());
        let content = fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    /// Collect every enum and struct declared in the document
    pub fn registry(&self) -> TypeRegistry {
        let mut registry = TypeRegistry::default();
        for iface in &self.interfaces {
            let Some(iface_name) = iface.name.as_deref() else {
                continue;
            };
            for node in iface.enums() {
                if let Some(name) = node.name.as_deref() {
                    registry.add_enum(iface_name, name);
                }
            }
            for node in iface.structs() {
                if let Some(name) = node.name.as_deref() {
                    registry.add_struct(iface_name, name);
                }
            }
        }
        registry
    }
}

impl FunctionNode {
    /// True when `messagetype` equals `kind`
    pub fn is(&self, kind: &str) -> bool {
        self.message_type.as_deref() == Some(kind)
    }
}

/// Kind of a named schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKind {
    Enum,
    Struct,
}

/// Enum and struct names declared across all interfaces, keyed by
/// (interface, type name)
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    enums: HashSet<(String, String)>,
    structs: HashSet<(String, String)>,
}

impl TypeRegistry {
    pub fn add_enum(&mut self, interface: &str, name: &str) {
        self.enums.insert((interface.to_string(), name.to_string()));
    }

    pub fn add_struct(&mut self, interface: &str, name: &str) {
        self.structs.insert((interface.to_string(), name.to_string()));
    }

    /// Resolve a type path to the kind of type it names.
    ///
    /// A name declared as both an enum and a struct resolves to the enum.
    pub fn lookup(&self, path: &TypePath) -> Option<NamedKind> {
        let key = (path.interface().to_string(), path.name().to_string());
        if self.enums.contains(&key) {
            Some(NamedKind::Enum)
        } else if self.structs.contains(&key) {
            Some(NamedKind::Struct)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"<?xml version="1.0" standalone="no"?>
<interfaces name="QT HMI API">
  <interface name="Common">
    <enum name="Result">
      <element name="SUCCESS" value="0"/>
    </enum>
    <struct name="TextField">
      <param name="fieldText" type="String" maxlength="500"/>
    </struct>
  </interface>
  <interface name="UI">
    <function name="Alert" messagetype="request" provider="sdl">
      <description>Request from HMI</description>
      <param name="alertStrings" type="Common.TextField" array="true" minsize="0" maxsize="3">
        <description>Array of lines</description>
      </param>
      <param name="duration" type="Integer" mandatory="false" minvalue="3000"/>
    </function>
    <enum name="Language"/>
    <function name="Alert" messagetype="response"/>
    <function name="OnReady" messagetype="notification"/>
  </interface>
</interfaces>
"#;

    fn functions(iface: &InterfaceNode) -> Vec<&FunctionNode> {
        iface
            .items
            .iter()
            .filter_map(|item| match item {
                InterfaceItem::Function(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_interfaces_and_functions() {
        let doc = SchemaDocument::parse(SAMPLE).unwrap();
        assert_eq!(doc.name.as_deref(), Some("QT HMI API"));
        assert_eq!(doc.interfaces.len(), 2);

        let ui = &doc.interfaces[1];
        assert_eq!(ui.name.as_deref(), Some("UI"));
        let found = functions(ui);
        assert_eq!(found.len(), 3);
        assert!(found[0].is("request"));
        assert_eq!(found[0].provider.as_deref(), Some("sdl"));
        assert!(found[1].is("response"));
        assert!(found[2].is("notification"));
        assert_eq!(ui.enums().count(), 1);
    }

    #[test]
    fn test_parse_param_attributes() {
        let doc = SchemaDocument::parse(SAMPLE).unwrap();
        let params = &functions(&doc.interfaces[1])[0].params;
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name.as_deref(), Some("alertStrings"));
        assert_eq!(params[0].type_.as_deref(), Some("Common.TextField"));
        assert_eq!(params[0].array.as_deref(), Some("true"));
        assert_eq!(params[0].max_size.as_deref(), Some("3"));
        assert_eq!(params[1].mandatory.as_deref(), Some("false"));
        assert_eq!(params[1].min_value.as_deref(), Some("3000"));
        assert_eq!(params[1].array, None);
    }

    #[test]
    fn test_registry() {
        let doc = SchemaDocument::parse(SAMPLE).unwrap();
        let registry = doc.registry();
        assert_eq!(
            registry.lookup(&TypePath::new("Common", "Result")),
            Some(NamedKind::Enum)
        );
        assert_eq!(
            registry.lookup(&TypePath::new("Common", "TextField")),
            Some(NamedKind::Struct)
        );
        assert_eq!(
            registry.lookup(&TypePath::new("UI", "Language")),
            Some(NamedKind::Enum)
        );
        assert_eq!(registry.lookup(&TypePath::new("UI", "Result")), None);
    }

    #[test]
    fn test_children_keep_document_order() {
        let doc = SchemaDocument::parse(
            r#"<interfaces><interface name="VR">
                 <description>Voice recognition</description>
                 <request name="Speak" provider="sdl"><param name="text" type="String"/></request>
                 <enum name="Language"/>
                 <function name="AddCommand" messagetype="request" provider="sdl"/>
                 <response name="Speak"/>
               </interface></interfaces>"#,
        )
        .unwrap();
        let items = &doc.interfaces[0].items;
        assert_eq!(items.len(), 5);
        assert!(matches!(items[0], InterfaceItem::Other));
        assert!(matches!(&items[1], InterfaceItem::Request(n) if n.params.len() == 1));
        assert!(matches!(items[2], InterfaceItem::Enum(_)));
        assert!(matches!(&items[3], InterfaceItem::Function(n) if n.is("request")));
        assert!(matches!(&items[4], InterfaceItem::Response(n) if n.name.as_deref() == Some("Speak")));
    }

    #[test]
    fn test_params_interleaved_with_descriptions() {
        let doc = SchemaDocument::parse(
            r#"<interfaces><interface name="UI">
                 <function name="Slider" messagetype="request" provider="sdl">
                   <param name="numTicks" type="Integer"/>
                   <description>Shown above the slider</description>
                   <param name="position" type="Integer"/>
                 </function>
               </interface></interfaces>"#,
        )
        .unwrap();
        let names: Vec<_> = functions(&doc.interfaces[0])[0]
            .params
            .iter()
            .filter_map(|p| p.name.as_deref())
            .collect();
        assert_eq!(names, vec!["numTicks", "position"]);
    }

    #[test]
    fn test_malformed_markup() {
        let err = SchemaDocument::parse("<interfaces><interface name=\"UI\">").unwrap_err();
        assert!(err.is_schema_error());
    }

    #[tokio::test]
    async fn test_from_file() -> crate::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("api.xml");
        tokio::fs::write(&path, SAMPLE).await?;

        let doc = SchemaDocument::from_file(&path).await?;
        assert_eq!(doc.interfaces.len(), 2);
        assert_eq!(
            doc.registry().lookup(&TypePath::new("UI", "Language")),
            Some(NamedKind::Enum)
        );
        Ok(())
    }
}
