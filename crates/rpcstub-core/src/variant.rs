//! Output variant definitions for rpcstub.
//!
//! A variant selects the Qt flavour the generated stubs target. It changes
//! only the host type of the trailing callback parameter and the connection
//! mode used to reach the dispatcher; type mapping and request pairing are
//! identical for every variant.
//!
//! # Examples
//!
//! ```
//! use rpcstub_core::variant::Variant;
//! use std::str::FromStr;
//!
//! let variant = Variant::from_str("5.1.0").unwrap();
//! assert_eq!(variant, Variant::Qt5);
//! assert_eq!(variant.callback_type(), "QJSValue");
//! assert_eq!(variant.to_string(), "5.1.0");
//!
//! // The default variant is Qt 4.8.5
//! assert_eq!(Variant::default(), Variant::Qt4);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported output variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Qt 4.8.5, callbacks are `QScriptValue`, direct connection
    #[default]
    Qt4,
    /// Qt 5.1.0, callbacks are `QJSValue`, blocking queued connection
    Qt5,
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4.8.5" => Ok(Variant::Qt4),
            "5.1.0" => Ok(Variant::Qt5),
            other => Err(Error::UnsupportedVariant(other.to_string())),
        }
    }
}

impl Variant {
    /// Returns the selector string accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qt4 => "4.8.5",
            Self::Qt5 => "5.1.0",
        }
    }

    /// Host type of the trailing callback parameter
    pub fn callback_type(&self) -> &'static str {
        match self {
            Self::Qt4 => "QScriptValue",
            Self::Qt5 => "QJSValue",
        }
    }

    /// Header that declares the callback type
    pub fn callback_include(&self) -> &'static str {
        match self {
            Self::Qt4 => "QtScript/QScriptValue",
            Self::Qt5 => "QtQml/QJSValue",
        }
    }

    /// `Qt::ConnectionType` used when invoking the dispatcher
    pub fn connection_mode(&self) -> &'static str {
        match self {
            Self::Qt4 => "Direct",
            Self::Qt5 => "BlockingQueued",
        }
    }

    /// Returns an iterator over all supported variants
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Qt4, Self::Qt5].iter().copied()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let selector = String::deserialize(deserializer)?;
        selector.parse().map_err(serde::de::Error::custom)
    }
}
