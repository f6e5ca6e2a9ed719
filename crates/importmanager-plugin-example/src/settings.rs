//! Logging settings for the plugin process.
//!
//! Settings are layered by `ortho_config` under the `IMPORTMANAGER_PLUGIN`
//! prefix. The host owns the plugin's argv, so only the program name is
//! handed to the loader and no command-line layer ever contributes.

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Environment variable holding the `tracing` filter expression.
pub const LOG_FILTER_ENV: &str = "IMPORTMANAGER_PLUGIN_LOG_FILTER";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "IMPORTMANAGER_PLUGIN_LOG_FORMAT";

/// Filter used when no filter is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Supported logging output formats.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Structured JSON suitable for ingestion by logging stacks.
    #[default]
    Json,
    /// Human-readable single line output.
    Compact,
}

impl TryFrom<String> for LogFormat {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// Errors raised while resolving [`PluginSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A configuration layer held an invalid value.
    #[error("failed to load plugin settings: {source}")]
    Load {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
}

/// Resolved logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "IMPORTMANAGER_PLUGIN")]
pub struct PluginSettings {
    /// `tracing` filter expression. Blank values fall back to
    /// [`DEFAULT_LOG_FILTER`].
    pub log_filter: Option<String>,
    /// Output format for log events.
    pub log_format: Option<LogFormat>,
}

impl PluginSettings {
    /// Resolves settings from the configuration files and environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] if any layer holds an invalid value,
    /// such as an unknown log format.
    pub fn from_env() -> Result<Self, SettingsError> {
        let program = OsString::from(env!("CARGO_PKG_NAME"));
        Self::load_from_iter([program]).map_err(|source| SettingsError::Load { source })
    }

    /// Returns the filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Returns the output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_default()
    }
}
