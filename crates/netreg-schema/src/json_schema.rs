//! Optional cross-check against a published JSON Schema.
//!
//! The registry publishes a JSON Schema alongside each release. This module
//! compiles such a schema with `jsonschema` and validates documents with it,
//! independently of the built-in shape table.

use std::io::Read;
use std::path::Path;

use jsonschema::Validator;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, SchemaError};

/// Controls JSON Schema compilation and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaCheckConfig {
    /// Close every object schema that does not set `additionalProperties`.
    pub strict_mode: bool,
    /// Maximum number of violations included in an error message.
    pub max_reported_errors: usize,
    /// Maximum bytes allowed for a schema file.
    pub max_schema_file_size: usize,
}

impl Default for SchemaCheckConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            max_reported_errors: 4,
            max_schema_file_size: 1024 * 1024,
        }
    }
}

/// A compiled JSON Schema for registry documents.
pub struct JsonSchemaCheck {
    validator: Validator,
    config: SchemaCheckConfig,
}

impl JsonSchemaCheck {
    /// Compile a schema from a JSON value.
    pub fn from_value(schema: &Value, config: SchemaCheckConfig) -> Result<Self> {
        let mut schema = schema.clone();
        if config.strict_mode {
            close_objects(&mut schema);
        }

        let validator = jsonschema::validator_for(&schema)
            .map_err(|err| SchemaError::CompileFailed(err.to_string()))?;
        Ok(Self { validator, config })
    }

    /// Compile a schema from JSON text.
    pub fn from_json(schema_json: &str, config: SchemaCheckConfig) -> Result<Self> {
        let schema: Value = serde_json::from_str(schema_json)?;
        Self::from_value(&schema, config)
    }

    /// Compile a schema read from a file.
    pub fn from_path(path: &Path, config: SchemaCheckConfig) -> Result<Self> {
        let io_error = |source: std::io::Error| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::open(path).map_err(io_error)?;
        let limit = config.max_schema_file_size;
        let mut content = String::new();
        file.take(u64::try_from(limit.saturating_add(1)).unwrap_or(u64::MAX))
            .read_to_string(&mut content)
            .map_err(io_error)?;
        if content.len() > limit {
            return Err(SchemaError::LoadFailed(format!(
                "schema file too large (max {limit} bytes): {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), strict = config.strict_mode, "compiling JSON Schema");
        Self::from_json(&content, config)
    }

    /// Validate a document, reporting the first few violations.
    pub fn check(&self, document: &Value) -> Result<()> {
        let mut messages = self
            .validator
            .iter_errors(document)
            .take(self.config.max_reported_errors.max(1))
            .map(|err| err.to_string());

        match messages.next() {
            None => Ok(()),
            Some(first) => {
                let message = std::iter::once(first)
                    .chain(messages)
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(SchemaError::ValidationFailed(message))
            }
        }
    }

    /// Validate JSON text.
    pub fn check_json(&self, json: &str) -> Result<()> {
        let document: Value = serde_json::from_str(json)?;
        self.check(&document)
    }

    pub fn config(&self) -> &SchemaCheckConfig {
        &self.config
    }
}

// Keywords whose value is a single subschema.
const SUBSCHEMA_KEYWORDS: [&str; 11] = [
    "additionalProperties",
    "unevaluatedProperties",
    "propertyNames",
    "items",
    "additionalItems",
    "unevaluatedItems",
    "contains",
    "not",
    "if",
    "then",
    "else",
];

// Keywords whose value maps names to subschemas.
const SUBSCHEMA_MAP_KEYWORDS: [&str; 5] = [
    "properties",
    "patternProperties",
    "dependentSchemas",
    "$defs",
    "definitions",
];

// Keywords whose value is a list of subschemas.
const SUBSCHEMA_LIST_KEYWORDS: [&str; 4] = ["prefixItems", "allOf", "anyOf", "oneOf"];

fn close_objects(schema: &mut Value) {
    let map = match schema {
        Value::Object(map) => map,
        Value::Array(items) => {
            items.iter_mut().for_each(close_objects);
            return;
        }
        _ => return,
    };

    if describes_object(map) && !map.contains_key("additionalProperties") {
        map.insert("additionalProperties".to_string(), Value::Bool(false));
    }

    for keyword in SUBSCHEMA_KEYWORDS {
        if let Some(child) = map.get_mut(keyword) {
            close_objects(child);
        }
    }
    for keyword in SUBSCHEMA_MAP_KEYWORDS {
        if let Some(Value::Object(children)) = map.get_mut(keyword) {
            children.values_mut().for_each(close_objects);
        }
    }
    for keyword in SUBSCHEMA_LIST_KEYWORDS {
        if let Some(Value::Array(children)) = map.get_mut(keyword) {
            children.iter_mut().for_each(close_objects);
        }
    }
}

fn describes_object(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(kind)) => kind == "object",
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind == "object"),
        _ => ["properties", "required", "patternProperties"]
            .iter()
            .any(|keyword| map.contains_key(*keyword)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn registry_schema() -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "required": ["networks", "version"],
            "properties": {
                "version": { "type": "string" },
                "networks": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["id", "networkType"],
                        "properties": {
                            "id": { "type": "string" },
                            "networkType": { "enum": ["mainnet", "testnet", "devnet"] }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn valid_document_passes() {
        let check =
            JsonSchemaCheck::from_value(&registry_schema(), SchemaCheckConfig::default()).unwrap();
        let doc = json!({ "version": "0.6.0", "networks": [{ "id": "mainnet", "networkType": "mainnet" }] });
        assert!(check.check(&doc).is_ok());
    }

    #[test]
    fn violations_are_reported() {
        let check =
            JsonSchemaCheck::from_value(&registry_schema(), SchemaCheckConfig::default()).unwrap();
        let doc = json!({ "version": 6, "networks": [{ "id": "mainnet", "networkType": "moonnet" }] });
        match check.check(&doc) {
            Err(SchemaError::ValidationFailed(message)) => assert!(message.contains("; ")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn reported_errors_are_capped() {
        let config = SchemaCheckConfig {
            max_reported_errors: 1,
            ..SchemaCheckConfig::default()
        };
        let check = JsonSchemaCheck::from_value(&registry_schema(), config).unwrap();
        let doc = json!({ "version": 6, "networks": [{ "id": 1, "networkType": "moonnet" }] });
        match check.check(&doc) {
            Err(SchemaError::ValidationFailed(message)) => assert!(!message.contains("; ")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn strict_mode_closes_nested_objects() {
        let doc = json!({
            "version": "0.6.0",
            "networks": [{ "id": "mainnet", "networkType": "mainnet", "extra": true }]
        });

        let permissive =
            JsonSchemaCheck::from_value(&registry_schema(), SchemaCheckConfig::default()).unwrap();
        assert!(permissive.check(&doc).is_ok());

        let strict = JsonSchemaCheck::from_value(
            &registry_schema(),
            SchemaCheckConfig {
                strict_mode: true,
                ..SchemaCheckConfig::default()
            },
        )
        .unwrap();
        assert!(matches!(
            strict.check(&doc),
            Err(SchemaError::ValidationFailed(_))
        ));
    }

    #[test]
    fn invalid_schema_fails_compile() {
        let result = JsonSchemaCheck::from_json(
            r#"{"type":"definitely-not-a-type"}"#,
            SchemaCheckConfig::default(),
        );
        assert!(matches!(result, Err(SchemaError::CompileFailed(_))));
    }

    #[test]
    fn non_json_document_is_invalid_json() {
        let check =
            JsonSchemaCheck::from_value(&registry_schema(), SchemaCheckConfig::default()).unwrap();
        assert!(matches!(
            check.check_json("not-json"),
            Err(SchemaError::InvalidJson(_))
        ));
    }
}
