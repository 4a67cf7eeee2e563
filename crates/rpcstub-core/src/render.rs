//! Artifact rendering.
//!
//! The header and source skeletons are tera templates compiled into the
//! binary; emitted fragments are inserted verbatim.

// External imports (alphabetized)
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::Config;
use crate::emitter::EmittedInterface;
use crate::utils::header_guard;

/// Name written into the generated-file banner
pub const GENERATOR: &str = "rpcstub";

const HEADER_TEMPLATE: &str = "header.h.tera";
const SOURCE_TEMPLATE: &str = "source.cc.tera";

/// A rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

#[derive(Serialize)]
struct ArtifactContext<'a> {
    generator: &'a str,
    class_name: &'a str,
    header_name: String,
    source_name: String,
    guard: String,
    callback_include: &'a str,
    connection_mode: &'a str,
    dbus_service: &'a str,
    dbus_path: &'a str,
    interfaces: &'a [EmittedInterface],
}

/// Renders the header/source pair for one configuration
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> crate::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            (HEADER_TEMPLATE, include_str!("../templates/header.h.tera")),
            (SOURCE_TEMPLATE, include_str!("../templates/source.cc.tera")),
        ])?;
        Ok(Self { tera })
    }

    /// Render (header, source) from the emitted interfaces
    pub fn render(
        &self,
        config: &Config,
        interfaces: &[EmittedInterface],
    ) -> crate::Result<(Artifact, Artifact)> {
        let ctx = ArtifactContext {
            generator: GENERATOR,
            class_name: &config.class_name,
            header_name: config.header_file_name(),
            source_name: config.source_file_name(),
            guard: header_guard(&config.class_name),
            callback_include: config.variant.callback_include(),
            connection_mode: config.variant.connection_mode(),
            dbus_service: &config.dbus_service,
            dbus_path: &config.dbus_path,
            interfaces,
        };
        let context = Context::from_serialize(&ctx)?;

        let header = Artifact {
            file_name: ctx.header_name.clone(),
            contents: self.tera.render(HEADER_TEMPLATE, &context)?,
        };
        let source = Artifact {
            file_name: ctx.source_name.clone(),
            contents: self.tera.render(SOURCE_TEMPLATE, &context)?,
        };
        Ok((header, source))
    }
}
