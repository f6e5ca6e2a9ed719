//! Reference post-processing plugin for the import manager.
//!
//! The plugin is invoked once per completed file operation with a single
//! JSON argument (see [`importmanager_plugins::OperationBundle`]). It prints
//! a blank line, the four bundle fields, and the path the file would take if
//! relocated under the destination using its original name. Nothing on disk
//! is touched.
//!
//! Any failure is reported on stderr by the binary, which then exits with a
//! nonzero status.

pub mod cli;
pub mod processor;
pub mod report;
pub mod settings;
pub mod telemetry;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::io::{self, Write};

use importmanager_plugins::ContractError;
use thiserror::Error;
use tracing::debug;

pub use self::cli::parse_invocation;
pub use self::processor::{BasenameRelocation, PostProcessError, PostProcessor};
pub use self::settings::{LogFormat, PluginSettings, SettingsError};

/// Tracing target for plugin dispatch.
const DISPATCH_TARGET: &str = "importmanager_plugin_example::dispatch";

/// Errors that terminate a plugin invocation.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The command line did not carry exactly one UTF-8 argument.
    #[error("{0}")]
    Usage(clap::Error),
    /// The argument did not satisfy the bundle contract.
    #[error(transparent)]
    Contract(#[from] ContractError),
    /// The post-processing step failed.
    #[error("post-processing failed: {0}")]
    PostProcess(#[from] PostProcessError),
    /// Writing to stdout failed.
    #[error("failed to write plugin output: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl PluginError {
    /// Returns whether the invocation failed before any field was read.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        match self {
            Self::Usage(_) => true,
            Self::Contract(error) => error.is_malformed_input(),
            Self::PostProcess(_) | Self::Write { .. } => false,
        }
    }
}

/// Runs one plugin invocation with a caller-supplied post-processor.
///
/// `args` is the full argument list including the program name.
///
/// # Errors
///
/// Returns a [`PluginError`] if the arguments are malformed, the bundle
/// violates the contract, the processor fails, or stdout cannot be written.
pub fn run_with_processor<I, T, P>(
    args: I,
    stdout: &mut impl Write,
    processor: &P,
) -> Result<(), PluginError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    P: PostProcessor,
{
    let bundle = parse_invocation(args)?;

    report::write_fields(stdout, &bundle).map_err(|source| PluginError::Write { source })?;

    let relocated = processor.process(&bundle)?;
    debug!(
        target: DISPATCH_TARGET,
        relocated = relocated.as_ref().map(|path| path.as_str()),
        "post-processing complete"
    );

    if let Some(path) = relocated {
        report::write_relocated(stdout, &path).map_err(|source| PluginError::Write { source })?;
    }
    Ok(())
}

/// Runs one plugin invocation using [`BasenameRelocation`].
///
/// # Errors
///
/// See [`run_with_processor`].
pub fn run<I, T>(args: I, stdout: &mut impl Write) -> Result<(), PluginError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with_processor(args, stdout, &BasenameRelocation)
}
