use serde_json::Value;
use tracing::debug;

use crate::descriptor::REGISTRY_TY;
use crate::error::{Result, SchemaError};
use crate::model::NetworksRegistry;
use crate::shape::validate;

/// Parse registry JSON text into a typed document.
///
/// The parsed JSON is checked against the registry shape before it is
/// converted, so any mismatch is reported with the path of the offending
/// value.
pub fn parse_registry(json: &str) -> Result<NetworksRegistry> {
    let value: Value = serde_json::from_str(json)?;
    registry_from_value(value)
}

/// Parse registry JSON bytes into a typed document.
pub fn parse_registry_slice(json: &[u8]) -> Result<NetworksRegistry> {
    let value: Value = serde_json::from_slice(json)?;
    registry_from_value(value)
}

/// Convert an already-parsed JSON value into a typed document.
pub fn registry_from_value(value: Value) -> Result<NetworksRegistry> {
    validate(&value, &REGISTRY_TY)?;
    let registry: NetworksRegistry = serde_json::from_value(value).map_err(SchemaError::Decode)?;

    debug!(
        networks = registry.networks.len(),
        version = %registry.version,
        "parsed networks registry"
    );
    Ok(registry)
}

/// Convert a typed document into a JSON value, re-checking its shape.
pub fn registry_to_value(registry: &NetworksRegistry) -> Result<Value> {
    let value = serde_json::to_value(registry).map_err(SchemaError::Encode)?;
    validate(&value, &REGISTRY_TY)?;
    Ok(value)
}

/// Serialize a typed document as pretty-printed JSON (2-space indent).
///
/// Object keys are emitted in sorted order.
pub fn registry_to_json(registry: &NetworksRegistry) -> Result<String> {
    let value = registry_to_value(registry)?;
    let mut json = serde_json::to_string_pretty(&value).map_err(SchemaError::Encode)?;
    json.push('\n');

    debug!(
        networks = registry.networks.len(),
        bytes = json.len(),
        "serialized networks registry"
    );
    Ok(json)
}
