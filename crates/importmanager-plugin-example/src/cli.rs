//! Command-line parsing for the plugin process.
//!
//! The host passes exactly one positional argument. Parsing is kept behind
//! [`parse_invocation`] so the rest of the plugin never touches raw argv.
//! There are no flags: `--help`, `--` and any other text in that position is
//! treated as the bundle and must decode like one.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use importmanager_plugins::{OperationBundle, decode_argument};

use crate::PluginError;

/// Post-processing plugin invoked by the import manager.
#[derive(Debug, Parser)]
#[command(
    name = "importmanager-plugin-example",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct PluginCli {
    /// JSON-encoded operation bundle supplied by the host.
    #[arg(value_name = "BUNDLE", allow_hyphen_values = true)]
    bundle: String,
}

/// Parses the full argument list, including the program name, into a bundle.
///
/// # Errors
///
/// Returns [`PluginError::Usage`] when the argument is absent, repeated or
/// not UTF-8, and [`PluginError::Contract`] when it is not a valid bundle.
pub fn parse_invocation<I, T>(args: I) -> Result<OperationBundle, PluginError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if argv.len() > 2 {
        let error = PluginCli::command().error(
            ErrorKind::WrongNumberOfValues,
            format!("expected exactly one BUNDLE argument, found {}", argv.len() - 1),
        );
        return Err(PluginError::Usage(error));
    }

    let cli = PluginCli::try_parse_from(argv).map_err(PluginError::Usage)?;
    Ok(decode_argument(&cli.bundle)?)
}
