//! rpcstub Core Library
//!
//! This library generates typed Qt caller stubs from an XML description of
//! remote interfaces: a header of `Q_INVOKABLE` declarations and a source
//! file whose definitions marshal their parameters into an ordered argument
//! list for an external dispatcher.

pub mod code;
pub mod config;
pub mod descriptor;
pub mod emitter;
pub mod error;
pub mod generate;
pub mod mapper;
pub mod marshal;
pub mod model;
pub mod pairing;
pub mod render;
pub mod schema;
pub mod utils;
pub mod variant;

pub use crate::{
    config::Config,
    error::{Error, Result},
    generate::{generate, generate_from_document, Generation},
    model::ApiModel,
    schema::SchemaDocument,
    variant::Variant,
};
