//! Errors raised while encoding or decoding the plugin argument.
//!
//! Every variant is terminal for the invocation that produced it. Plugins
//! surface them as a diagnostic on stderr followed by a nonzero exit.

use thiserror::Error;

use crate::bundle::BundleField;

/// Errors arising from the plugin argument contract.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The argument was absent, not valid JSON, or not a JSON object.
    #[error("malformed plugin argument: {message}")]
    MalformedInput {
        /// Human-readable description of the problem.
        message: String,
        /// Underlying JSON error, when the text failed to parse.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A required key was absent from the decoded object.
    #[error("operation bundle is missing required field '{field}'")]
    MissingField {
        /// The absent key.
        field: BundleField,
    },

    /// A required key was present but held the wrong kind of value.
    #[error("operation bundle field '{field}' must be a {expected}, found {found}")]
    InvalidField {
        /// The offending key.
        field: BundleField,
        /// JSON type the contract requires.
        expected: &'static str,
        /// JSON type that was supplied.
        found: &'static str,
    },

    /// The bundle could not be encoded as JSON.
    #[error("failed to encode operation bundle: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ContractError {
    /// Builds a [`ContractError::MalformedInput`] without an underlying cause.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
            source: None,
        }
    }

    /// Returns whether the argument itself was unusable.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Returns whether a required key was absent.
    #[must_use]
    pub const fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
