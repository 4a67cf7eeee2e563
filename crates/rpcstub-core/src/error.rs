//! Error handling for the rpcstub code generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! Every variant is fatal for a generation run: the generator stops on the
//! first error and writes no artifacts.
//!
//! # Examples
//!
//! ```
//! use rpcstub_core::error::{Error, Result};
//!
//! fn lookup(name: Option<&str>) -> Result<&str> {
//!     name.ok_or_else(|| Error::schema("param is missing the 'name' attribute"))
//! }
//!
//! assert!(lookup(None).is_err());
//! ```

use thiserror::Error;

/// Result type for rpcstub generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rpcstub generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed schema markup
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Missing attribute, unresolvable type reference or duplicate name in the schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Output variant selector that is not one of the supported variants
    #[error("Unsupported variant '{0}' (expected one of: 4.8.5, 5.1.0)")]
    UnsupportedVariant(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        Self::Schema(msg.into())
    }

    /// Returns true for faults in the input schema itself
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema(_) | Self::Xml(_))
    }
}
