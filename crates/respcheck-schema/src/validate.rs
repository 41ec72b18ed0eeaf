//! # Structural Validation
//!
//! Walks an actual document against an augmented [`SchemaNode`] in
//! lock-step, collecting every mismatch into one [`ValidationReport`].
//!
//! ## Rules
//!
//! - A kind mismatch at a pointer is recorded and the walk does not descend
//!   below that pointer.
//! - A required property absent from the actual object is recorded at the
//!   pointer of the missing property.
//! - Every element of an actual array is checked against the single item
//!   schema, whatever its position.
//! - Properties present in the actual document but not in the schema are
//!   ignored. The derived schema only asserts what the example contained.
//!
//! The walk never stops early.

use respcheck_core::{DocumentRole, Failure, JsonKind, JsonPointer, RespCheckError, ValidationReport};
use serde_json::Value;

use crate::materialize::SchemaNode;

/// Parse the actual response text and validate it against `schema`.
///
/// # Errors
///
/// Returns [`RespCheckError::Parse`] with [`DocumentRole::Actual`] if the
/// text is not well-formed JSON. Mismatches are never errors here; they are
/// returned in the report.
pub fn validate(schema: &SchemaNode, actual: &str) -> Result<ValidationReport, RespCheckError> {
    let value: Value = serde_json::from_str(actual)
        .map_err(|e| RespCheckError::parse(DocumentRole::Actual, e))?;
    Ok(validate_value(schema, &value))
}

/// Validate an already parsed actual document against `schema`.
pub fn validate_value(schema: &SchemaNode, actual: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    walk(schema, actual, &JsonPointer::root(), &mut report);
    report
}

fn walk(schema: &SchemaNode, value: &Value, pointer: &JsonPointer, report: &mut ValidationReport) {
    if let Some(expected) = schema.kind {
        let found = JsonKind::of(value);
        if found != expected {
            tracing::trace!(pointer = %pointer, %expected, %found, "kind mismatch");
            report.push(Failure::type_mismatch(pointer.clone(), expected, found));
            return;
        }
    }

    if let Value::Object(fields) = value {
        check_object(schema, fields, pointer, report);
    }

    if let (Some(items), Value::Array(elements)) = (schema.items.as_deref(), value) {
        for (index, element) in elements.iter().enumerate() {
            walk(items, element, &pointer.index(index), report);
        }
    }
}

fn check_object(
    schema: &SchemaNode,
    fields: &serde_json::Map<String, Value>,
    pointer: &JsonPointer,
    report: &mut ValidationReport,
) {
    let required = schema.required.as_deref().unwrap_or_default();
    let is_required = |name: &str| required.iter().any(|r| r == name);

    if let Some(properties) = &schema.properties {
        for (name, child) in properties {
            match fields.get(name) {
                Some(field) => walk(child, field, &pointer.key(name), report),
                None if is_required(name) => {
                    report.push(Failure::missing_property(pointer, name, child.kind));
                }
                None => {}
            }
        }
    }

    // Required names with no declared property schema.
    for name in required {
        let declared = schema
            .properties
            .as_ref()
            .is_some_and(|p| p.contains_key(name));
        if !declared && !fields.contains_key(name) {
            report.push(Failure::missing_property(pointer, name, None));
        }
    }
}
