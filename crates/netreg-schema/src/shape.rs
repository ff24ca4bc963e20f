use chrono::{DateTime, SecondsFormat};
use serde_json::Value;

use crate::descriptor::{LiteralSet, ObjectDescriptor, Primitive, TypeDescriptor};
use crate::error::{ShapeError, ShapeErrorKind};

/// Longest string excerpt quoted in an error message.
const EXCERPT_CHARS: usize = 48;

/// Check `value` against `ty`, returning the first mismatch with its path.
pub fn validate(value: &Value, ty: &TypeDescriptor) -> Result<(), ShapeError> {
    match ty {
        TypeDescriptor::Primitive(primitive) => validate_primitive(value, *primitive),
        TypeDescriptor::Literal(set) => validate_literal(value, set),
        TypeDescriptor::Object(object) => validate_object(value, object),
        TypeDescriptor::Array(item) => validate_array(value, item),
    }
}

fn validate_primitive(value: &Value, primitive: Primitive) -> Result<(), ShapeError> {
    let ok = match primitive {
        Primitive::String => value.is_string(),
        Primitive::Number => value.is_number(),
        Primitive::Boolean => value.is_boolean(),
        Primitive::DateTime => return validate_date_time(value),
    };

    if ok {
        Ok(())
    } else {
        Err(mismatch(primitive.name(), value))
    }
}

// The parsed instant is rendered back and parsed again; both must agree.
fn validate_date_time(value: &Value) -> Result<(), ShapeError> {
    let Value::String(text) = value else {
        return Err(mismatch(Primitive::DateTime.name(), value));
    };

    let invalid = || ShapeError::new(ShapeErrorKind::InvalidDate(excerpt(text)));
    let parsed = DateTime::parse_from_rfc3339(text).map_err(|_| invalid())?;
    let rendered = parsed.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    let reparsed = DateTime::parse_from_rfc3339(&rendered).map_err(|_| invalid())?;

    if reparsed == parsed {
        Ok(())
    } else {
        Err(invalid())
    }
}

fn validate_literal(value: &Value, set: &LiteralSet) -> Result<(), ShapeError> {
    match value {
        Value::String(text) if set.contains(text) => Ok(()),
        other => Err(ShapeError::new(ShapeErrorKind::InvalidLiteral {
            expected: format!("{} ({})", set.name, set.values.join(", ")),
            found: describe(other),
        })),
    }
}

fn validate_object(value: &Value, object: &ObjectDescriptor) -> Result<(), ShapeError> {
    let Value::Object(map) = value else {
        return Err(mismatch(object.name, value));
    };

    for field in object.fields {
        match map.get(field.name) {
            Some(child) => validate(child, field.ty).map_err(|err| err.in_field(field.name))?,
            None if field.required => {
                return Err(ShapeError::new(ShapeErrorKind::MissingField).in_field(field.name));
            }
            None => {}
        }
    }

    if let Some(unknown) = map.keys().find(|key| object.field(key).is_none()) {
        return Err(ShapeError::new(ShapeErrorKind::UnknownField).in_field(unknown.as_str()));
    }

    Ok(())
}

fn validate_array(value: &Value, item: &TypeDescriptor) -> Result<(), ShapeError> {
    let Value::Array(items) = value else {
        return Err(mismatch("array", value));
    };

    for (index, child) in items.iter().enumerate() {
        validate(child, item).map_err(|err| err.at_index(index))?;
    }
    Ok(())
}

fn mismatch(expected: &str, found: &Value) -> ShapeError {
    ShapeError::new(ShapeErrorKind::TypeMismatch {
        expected: expected.to_string(),
        found: describe(found),
    })
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {:?}", excerpt(s)),
        Value::Array(items) => format!("array of {} items", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(EXCERPT_CHARS).collect();
    cut.push_str("...");
    cut
}
