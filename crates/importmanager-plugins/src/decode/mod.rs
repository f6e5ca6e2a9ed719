//! Plugin-side decoding of the single JSON argument.
//!
//! Decoding happens in two passes. The text is parsed into a JSON object,
//! then every required key is checked for presence before any value is
//! inspected, so a bundle missing `properties` reports that key even when
//! another field is also wrong.

use serde_json::{Map, Value};
use tracing::debug;

use crate::bundle::{BundleField, OperationBundle};
use crate::error::ContractError;

/// Tracing target for argument decoding.
const DECODE_TARGET: &str = "importmanager_plugins::decode";

/// Decodes the plugin argument into an [`OperationBundle`].
///
/// Keys beyond the four required ones are ignored.
///
/// # Errors
///
/// Returns [`ContractError::MalformedInput`] if the text is not a JSON
/// object, [`ContractError::MissingField`] if a required key is absent, or
/// [`ContractError::InvalidField`] if `source` or `destination` is not a
/// string.
///
/// # Example
///
/// ```
/// use importmanager_plugins::{BundleField, ContractError, decode_argument};
///
/// let error = decode_argument(r#"{"source":"/x","destination":"/y","details":null}"#)
///     .expect_err("properties is required");
/// assert!(matches!(
///     error,
///     ContractError::MissingField { field: BundleField::Properties }
/// ));
/// ```
pub fn decode_argument(argument: &str) -> Result<OperationBundle, ContractError> {
    let value: Value =
        serde_json::from_str(argument).map_err(|source| ContractError::MalformedInput {
            message: format!("argument is not valid JSON: {source}"),
            source: Some(source),
        })?;

    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Err(ContractError::malformed(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )));
        }
    };

    if let Some(field) = BundleField::ALL
        .into_iter()
        .find(|field| !object.contains_key(field.key()))
    {
        return Err(ContractError::MissingField { field });
    }

    let source = take_string(&mut object, BundleField::Source)?;
    let destination = take_string(&mut object, BundleField::Destination)?;
    let details = take_value(&mut object, BundleField::Details)?;
    let properties = take_value(&mut object, BundleField::Properties)?;

    debug!(
        target: DECODE_TARGET,
        source = %source,
        destination = %destination,
        ignored_keys = object.len(),
        "decoded operation bundle"
    );

    Ok(OperationBundle::new(source, destination, details, properties))
}

fn take_value(object: &mut Map<String, Value>, field: BundleField) -> Result<Value, ContractError> {
    object
        .remove(field.key())
        .ok_or(ContractError::MissingField { field })
}

fn take_string(
    object: &mut Map<String, Value>,
    field: BundleField,
) -> Result<String, ContractError> {
    match take_value(object, field)? {
        Value::String(text) => Ok(text),
        other => Err(ContractError::InvalidField {
            field,
            expected: "string",
            found: json_kind(&other),
        }),
    }
}

/// Names the JSON type of a value for diagnostics.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
