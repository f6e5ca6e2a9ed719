//! The operation bundle exchanged between the host and a plugin.
//!
//! The host builds one [`OperationBundle`] immediately before spawning a
//! plugin, encodes it with [`OperationBundle::to_argument`] and passes the
//! resulting JSON text as the plugin's only argument. The bundle is never
//! persisted or reused across invocations.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::error::ContractError;
use crate::relocate::relocated_path;

/// Metadata describing one completed file operation.
///
/// `details` and `properties` are opaque to the contract and may hold any
/// JSON value, including `null`.
///
/// # Example
///
/// ```
/// use importmanager_plugins::OperationBundle;
///
/// let bundle = OperationBundle::new(
///     "/downloads/report.pdf",
///     "/documents",
///     serde_json::json!({"handler": "move"}),
///     serde_json::json!({"tag": "work"}),
/// );
/// assert_eq!(bundle.source(), "/downloads/report.pdf");
/// assert_eq!(bundle.property("tag"), Some("work"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationBundle {
    source: String,
    destination: String,
    details: serde_json::Value,
    properties: serde_json::Value,
}

impl OperationBundle {
    /// Creates a bundle from its four required fields.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        details: serde_json::Value,
        properties: serde_json::Value,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            details,
            properties,
        }
    }

    /// Returns the path the operation read from.
    #[must_use]
    pub const fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Returns the path the operation wrote to.
    #[must_use]
    pub const fn destination(&self) -> &str {
        self.destination.as_str()
    }

    /// Returns the operation-specific metadata.
    #[must_use]
    pub const fn details(&self) -> &serde_json::Value {
        &self.details
    }

    /// Returns the additional metadata supplied by the host.
    #[must_use]
    pub const fn properties(&self) -> &serde_json::Value {
        &self.properties
    }

    /// Looks up a string-valued entry in `properties`.
    ///
    /// Returns `None` when `properties` is not an object, the key is absent,
    /// or the value is not a string.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(serde_json::Value::as_str)
    }

    /// Joins the basename of `source` onto `destination`.
    ///
    /// See [`relocated_path`] for the edge cases.
    #[must_use]
    pub fn relocated_path(&self) -> Option<Utf8PathBuf> {
        relocated_path(&self.source, &self.destination)
    }

    /// Encodes the bundle as the single command-line argument a plugin
    /// receives. Keys are emitted in contract order.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Encode`] if serialisation fails.
    pub fn to_argument(&self) -> Result<String, ContractError> {
        serde_json::to_string(self).map_err(ContractError::Encode)
    }
}

/// The required keys of an encoded [`OperationBundle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum BundleField {
    /// The `source` key.
    Source,
    /// The `destination` key.
    Destination,
    /// The `details` key.
    Details,
    /// The `properties` key.
    Properties,
}

impl BundleField {
    /// Every required key, in the order plugins read and print them.
    pub const ALL: [Self; 4] = [
        Self::Source,
        Self::Destination,
        Self::Details,
        Self::Properties,
    ];

    /// Returns the JSON key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }
}
