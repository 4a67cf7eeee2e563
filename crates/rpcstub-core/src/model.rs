//! Immutable interface model built from a schema document.
//!
//! Every request parameter is normalized into a [`ParamDescriptor`] while the
//! model is built, so any schema fault surfaces here, before anything is
//! emitted.

// Internal imports (std, crate)
use std::collections::HashSet;

use crate::descriptor::ParamDescriptor;
use crate::schema::{FunctionNode, InterfaceItem, InterfaceNode, SchemaDocument, TypeRegistry};
use crate::Error;

/// A remote interface and the requests and responses it declares
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: String,
    pub requests: Vec<Request>,
    pub responses: Vec<Response>,
}

/// A request with its input parameters in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub name: String,
    pub params: Vec<ParamDescriptor>,
    /// Responder expected to answer the request
    pub provider: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub name: String,
    pub provider: Option<String>,
}

/// All interfaces of one schema, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiModel {
    pub interfaces: Vec<Interface>,
}

impl ApiModel {
    /// Build the model, failing on the first schema fault
    pub fn build(doc: &SchemaDocument) -> crate::Result<Self> {
        let registry = doc.registry();
        let mut seen = HashSet::new();
        let mut interfaces = Vec::with_capacity(doc.interfaces.len());

        for node in &doc.interfaces {
            let iface = Interface::build(node, &registry)?;
            if !seen.insert(iface.name.clone()) {
                return Err(Error::schema(format!(
                    "interface '{}' is declared more than once",
                    iface.name
                )));
            }
            interfaces.push(iface);
        }

        Ok(Self { interfaces })
    }

    pub fn request_count(&self) -> usize {
        self.interfaces.iter().map(|i| i.requests.len()).sum()
    }
}

impl Interface {
    fn build(node: &InterfaceNode, registry: &TypeRegistry) -> crate::Result<Self> {
        let name = node
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::schema("interface has no 'name' attribute"))?;

        let mut requests = Vec::new();
        let mut responses = Vec::new();
        for item in &node.items {
            match item {
                InterfaceItem::Function(function) if function.is("request") => {
                    requests.push(Request::build(function, &name, registry)?)
                }
                InterfaceItem::Function(function) if function.is("response") => {
                    responses.push(Response::build(function, &name)?)
                }
                InterfaceItem::Function(function) => log::debug!(
                    "Ignoring function {}.{} with message type {:?}",
                    name,
                    function.name.as_deref().unwrap_or("<unnamed>"),
                    function.message_type
                ),
                InterfaceItem::Request(function) => {
                    requests.push(Request::build(function, &name, registry)?)
                }
                InterfaceItem::Response(function) => {
                    responses.push(Response::build(function, &name)?)
                }
                InterfaceItem::Enum(_) | InterfaceItem::Struct(_) | InterfaceItem::Other => {}
            }
        }

        let mut seen = HashSet::new();
        for request in &requests {
            if !seen.insert(request.name.as_str()) {
                return Err(Error::schema(format!(
                    "request '{}.{}' is declared more than once",
                    name, request.name
                )));
            }
        }

        Ok(Self {
            name,
            requests,
            responses,
        })
    }
}

fn function_name(node: &FunctionNode, iface: &str) -> crate::Result<String> {
    node.name.clone().filter(|n| !n.is_empty()).ok_or_else(|| {
        Error::schema(format!(
            "function in interface '{iface}' has no 'name' attribute"
        ))
    })
}

impl Request {
    fn build(node: &FunctionNode, iface: &str, registry: &TypeRegistry) -> crate::Result<Self> {
        let name = function_name(node, iface)?;
        let mut params = Vec::with_capacity(node.params.len());
        let mut seen = HashSet::new();
        for param in &node.params {
            let desc = ParamDescriptor::build(param, iface, registry)?;
            if !seen.insert(desc.name.clone()) {
                return Err(Error::schema(format!(
                    "param '{}' of request '{}.{}' is declared more than once",
                    desc.name, iface, name
                )));
            }
            params.push(desc);
        }
        Ok(Self {
            name,
            params,
            provider: node.provider.clone(),
        })
    }
}

impl Response {
    fn build(node: &FunctionNode, iface: &str) -> crate::Result<Self> {
        Ok(Self {
            name: function_name(node, iface)?,
            provider: node.provider.clone(),
        })
    }
}
