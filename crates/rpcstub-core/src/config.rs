//! Configuration management for rpcstub code generation.
//!
//! This module defines the `Config` struct and related functionality for managing
//! code generation settings. The configuration can be loaded from a YAML file,
//! created programmatically, or assembled from command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use rpcstub_core::config::Config;
//! use rpcstub_core::variant::Variant;
//!
//! // Create a new config programmatically
//! let mut config = Config::new("QT_HMI_API.xml", "generated");
//! config.variant = Variant::Qt5;
//!
//! // Or load from a config file
//! # async fn load() -> rpcstub_core::Result<()> {
//! let config = Config::from_file("rpcstub.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::utils::to_snake_case;
use crate::variant::Variant;
use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for stub generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the interface schema (XML)
    pub schema_path: String,

    /// Output directory for the generated header and source
    pub output_dir: String,

    /// Qt variant the stubs target
    #[serde(default)]
    pub variant: Variant,

    /// Responder whose requests get stubs
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Name of the generated QObject class
    #[serde(default = "default_class_name")]
    pub class_name: String,

    /// D-Bus service the interface proxies connect to
    #[serde(default = "default_dbus_service")]
    pub dbus_service: String,

    /// D-Bus object path of the service
    #[serde(default = "default_dbus_path")]
    pub dbus_path: String,

    /// C++ namespace holding the dispatcher classes
    #[serde(default = "default_requests_namespace")]
    pub requests_namespace: String,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(schema_path: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_dir: output_dir.into(),
            variant: Variant::default(),
            provider: default_provider(),
            class_name: default_class_name(),
            dbus_service: default_dbus_service(),
            dbus_path: default_dbus_path(),
            requests_namespace: default_requests_namespace(),
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Reject values that would produce unusable artifacts
    pub fn validate(&self) -> crate::Result<()> {
        let required = [
            ("class_name", &self.class_name),
            ("provider", &self.provider),
            ("dbus_service", &self.dbus_service),
            ("requests_namespace", &self.requests_namespace),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::config(format!("'{field}' must not be empty")));
            }
        }
        if to_snake_case(&self.class_name).is_empty() {
            return Err(Error::config(format!(
                "class name '{}' yields an empty file name",
                self.class_name
            )));
        }
        Ok(())
    }

    /// File name of the generated header, e.g. `request_to_sdl.h`
    pub fn header_file_name(&self) -> String {
        format!("{}.h", to_snake_case(&self.class_name))
    }

    /// File name of the generated source, e.g. `request_to_sdl.cc`
    pub fn source_file_name(&self) -> String {
        format!("{}.cc", to_snake_case(&self.class_name))
    }
}

fn default_provider() -> String {
    "sdl".to_string()
}

fn default_class_name() -> String {
    "RequestToSDL".to_string()
}

fn default_dbus_service() -> String {
    "com.ford.sdl.core".to_string()
}

fn default_dbus_path() -> String {
    "/".to_string()
}

fn default_requests_namespace() -> String {
    "requests".to_string()
}
