//! Declaration and definition fragments for paired requests.
//!
//! Both fragments of a request are rendered from one [`Signature`], so the
//! header and source can never disagree on a parameter list.

use serde::Serialize;

use crate::code::CodeBuilder;
use crate::config::Config;
use crate::descriptor::ParamDescriptor;
use crate::mapper::{self, QtType};
use crate::marshal::{self, Dispatch};
use crate::model::Interface;
use crate::pairing::RequestResponsePair;
use crate::variant::Variant;

/// Name of the trailing callback parameter of every generated method
pub const CALLBACK_PARAM: &str = "hmi_callback";

/// Parameter list and name of one generated method
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    /// `<Interface>_<Request>`
    pub name: String,
    pub params: Vec<(QtType, String)>,
    pub callback_type: &'static str,
}

impl Signature {
    fn new(iface: &str, request: &str, params: &[ParamDescriptor], variant: Variant) -> Self {
        Self {
            name: format!("{iface}_{request}"),
            params: params
                .iter()
                .map(|p| (mapper::resolve(p), p.name.clone()))
                .collect(),
            callback_type: variant.callback_type(),
        }
    }

    /// Comma-joined parameters including the callback
    pub fn parameter_list(&self) -> String {
        self.params
            .iter()
            .map(|(ty, name)| format!("{ty} {name}"))
            .chain(std::iter::once(format!("{} {CALLBACK_PARAM}", self.callback_type)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Host types of the parameter list in order, callback last
    pub fn parameter_types(&self) -> Vec<String> {
        self.params
            .iter()
            .map(|(ty, _)| ty.to_string())
            .chain(std::iter::once(self.callback_type.to_string()))
            .collect()
    }
}

/// Header declaration and source definition of one request
#[derive(Debug, Clone, Serialize)]
pub struct FragmentPair {
    pub request: String,
    /// Name of the paired response, if any
    pub response: Option<String>,
    #[serde(skip)]
    pub signature: Signature,
    pub declaration: String,
    pub definition: String,
}

/// Fragments generated for one interface, in request order
#[derive(Debug, Clone, Serialize)]
pub struct EmittedInterface {
    pub name: String,
    pub fragments: Vec<FragmentPair>,
}

/// Emits fragment pairs for one target class
#[derive(Debug, Clone)]
pub struct Emitter {
    variant: Variant,
    class_name: String,
    requests_namespace: String,
}

impl Emitter {
    pub fn new(
        variant: Variant,
        class_name: impl Into<String>,
        requests_namespace: impl Into<String>,
    ) -> Self {
        Self {
            variant,
            class_name: class_name.into(),
            requests_namespace: requests_namespace.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.variant,
            config.class_name.clone(),
            config.requests_namespace.clone(),
        )
    }

    pub fn emit(&self, iface: &Interface, pairs: &[RequestResponsePair<'_>]) -> EmittedInterface {
        let fragments = pairs.iter().map(|pair| self.fragment(iface, pair)).collect();
        EmittedInterface {
            name: iface.name.clone(),
            fragments,
        }
    }

    fn fragment(&self, iface: &Interface, pair: &RequestResponsePair<'_>) -> FragmentPair {
        let request = pair.request;
        let signature = Signature::new(&iface.name, &request.name, &request.params, self.variant);
        let params = signature.parameter_list();

        let declaration = format!("Q_INVOKABLE void {}({params});", signature.name);

        let mut code = CodeBuilder::new();
        let dispatch = Dispatch {
            namespace: &self.requests_namespace,
            interface: &iface.name,
            request: &request.name,
            callback: CALLBACK_PARAM,
        };
        code.block(
            format!("void {}::{}({params}) {{", self.class_name, signature.name),
            "}",
            |code| marshal::write(code, &request.params, &dispatch),
        );

        FragmentPair {
            request: request.name.clone(),
            response: pair.response.map(|r| r.name.clone()),
            signature,
            declaration,
            definition: code.build(),
        }
    }
}
