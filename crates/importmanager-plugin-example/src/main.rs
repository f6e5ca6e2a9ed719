//! Binary entrypoint for the example post-processing plugin.

use std::fmt::Display;
use std::io::{self, Write};
use std::process::ExitCode;

use importmanager_plugin_example::{PluginSettings, run, telemetry};

fn main() -> ExitCode {
    let settings = match PluginSettings::from_env() {
        Ok(settings) => settings,
        Err(error) => return report_failure(&error),
    };
    if let Err(error) = telemetry::initialise(&settings) {
        return report_failure(&error);
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match run(std::env::args_os(), &mut writer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&error),
    }
}

fn report_failure(error: &impl Display) -> ExitCode {
    writeln!(io::stderr().lock(), "{error}").ok();
    ExitCode::FAILURE
}
