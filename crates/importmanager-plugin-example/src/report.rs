//! Plain-text report written to stdout.
//!
//! The layout is a blank line, then `source`, `destination`, `details` and
//! `properties` on their own lines, then the relocated path when there is
//! one. Strings are written as-is; other JSON values use compact JSON.

use std::borrow::Cow;
use std::io::{self, Write};

use camino::Utf8Path;
use importmanager_plugins::OperationBundle;
use serde_json::Value;

/// Writes the leading blank line and the four bundle fields.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_fields(out: &mut impl Write, bundle: &OperationBundle) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", bundle.source())?;
    writeln!(out, "{}", bundle.destination())?;
    writeln!(out, "{}", display_value(bundle.details()))?;
    writeln!(out, "{}", display_value(bundle.properties()))?;
    out.flush()
}

/// Writes the relocated path line.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_relocated(out: &mut impl Write, path: &Utf8Path) -> io::Result<()> {
    writeln!(out, "{path}")?;
    out.flush()
}

fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
