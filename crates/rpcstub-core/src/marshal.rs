//! Marshalling bodies for generated request definitions.
//!
//! Every parameter is appended to one `QList<QVariant>` in declaration
//! order; the dispatcher reads the list positionally. Optional parameters
//! travel as an `OptionalArgument< T >` envelope carrying a presence flag and
//! the unwrapped value. Template arguments are spaced like the mapper's
//! `QList< T >` so nested lists never close with `>>`.

use crate::code::CodeBuilder;
use crate::descriptor::ParamDescriptor;
use crate::mapper;

/// Name of the argument accumulator in generated bodies
pub const ARGS: &str = "args";

/// Target of the dispatch statement closing a body
#[derive(Debug, Clone, Copy)]
pub struct Dispatch<'a> {
    /// Namespace of the generated dispatcher classes
    pub namespace: &'a str,
    pub interface: &'a str,
    /// Request name as declared in the schema
    pub request: &'a str,
    /// Name of the trailing callback parameter
    pub callback: &'a str,
}

/// Write the statements of a request definition body
pub fn write(code: &mut CodeBuilder, params: &[ParamDescriptor], dispatch: &Dispatch<'_>) {
    code.line(format!("QList<QVariant> {ARGS};"));
    for param in params {
        write_param(code, param);
    }
    code.line(format!(
        "new {ns}::{iface}_{req}({iface}, \"{req}\", {ARGS}, {cb});",
        ns = dispatch.namespace,
        iface = dispatch.interface,
        req = dispatch.request,
        cb = dispatch.callback,
    ));
}

fn write_param(code: &mut CodeBuilder, param: &ParamDescriptor) {
    let name = &param.name;
    if param.mandatory {
        code.line(format!("{ARGS} << {name};"));
        return;
    }
    let value_type = mapper::resolve_unwrapped(param);
    code.line(format!("OptionalArgument< {value_type} > o_{name};"));
    code.line(format!("o_{name}.presence = !{name}.isNull();"));
    code.line(format!("o_{name}.val = {name}.value< {value_type} >();"));
    code.line(format!("{ARGS} << QVariant::fromValue(o_{name});"));
}
