//! # Validation Reports
//!
//! A `ValidationReport` is the ordered list of every mismatch found in one
//! validation call. Validators append to it and never stop early; an empty
//! report is the only success signal.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::JsonKind;
use crate::pointer::JsonPointer;

/// Category of a single mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The value at a pointer has a different JSON kind than expected.
    TypeMismatch,
    /// A required or expected object property is absent.
    MissingProperty,
    /// The HTTP status code differs from the expected one.
    StatusCode,
    /// Two scalar values differ (literal comparison only).
    ValueMismatch,
    /// Two arrays differ in length (literal comparison only).
    ArrayLength,
    /// An expected array element has no counterpart (literal comparison only).
    UnmatchedElement,
}

/// A single mismatch with its location and the expected vs found values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Category of the mismatch.
    pub kind: FailureKind,
    /// Location in the actual document. `None` for failures that are not
    /// about the body, such as a status-code mismatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<JsonPointer>,
    /// What the example or expectation called for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// What the actual document contained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
    /// One-line summary of the mismatch.
    pub message: String,
}

impl Failure {
    /// The value at `pointer` is of kind `found` where `expected` was required.
    pub fn type_mismatch(pointer: JsonPointer, expected: JsonKind, found: JsonKind) -> Self {
        Self {
            kind: FailureKind::TypeMismatch,
            message: format!(
                "instance type ({found}) does not match the expected type ({expected})"
            ),
            pointer: Some(pointer),
            expected: Some(expected.to_string()),
            found: Some(found.to_string()),
        }
    }

    /// The object at `parent` has no property `name`.
    ///
    /// The pointer addresses the missing property itself. `expected` is the
    /// kind the property should have had, when known.
    pub fn missing_property(parent: &JsonPointer, name: &str, expected: Option<JsonKind>) -> Self {
        Self {
            kind: FailureKind::MissingProperty,
            message: format!("object is missing required property \"{name}\""),
            pointer: Some(parent.key(name)),
            expected: expected.map(|k| k.to_string()),
            found: None,
        }
    }

    /// The response status code differs from the expected one.
    pub fn status_code(expected: u16, actual: u16) -> Self {
        Self {
            kind: FailureKind::StatusCode,
            message: "actual response code is not equal to expected response code".to_string(),
            pointer: None,
            expected: Some(expected.to_string()),
            found: Some(actual.to_string()),
        }
    }

    /// Two scalar values at `pointer` differ.
    pub fn value_mismatch(pointer: JsonPointer, expected: &Value, found: &Value) -> Self {
        Self {
            kind: FailureKind::ValueMismatch,
            message: "value does not match the expected value".to_string(),
            pointer: Some(pointer),
            expected: Some(expected.to_string()),
            found: Some(found.to_string()),
        }
    }

    /// The arrays at `pointer` have different lengths.
    pub fn array_length(pointer: JsonPointer, expected: usize, found: usize) -> Self {
        Self {
            kind: FailureKind::ArrayLength,
            message: format!("expected {expected} values but got {found}"),
            pointer: Some(pointer),
            expected: Some(expected.to_string()),
            found: Some(found.to_string()),
        }
    }

    /// No element of the actual array at `pointer` matches `expected`.
    pub fn unmatched_element(pointer: JsonPointer, expected: &Value) -> Self {
        Self {
            kind: FailureKind::UnmatchedElement,
            message: "could not find a matching element in the actual array".to_string(),
            pointer: Some(pointer),
            expected: Some(expected.to_string()),
            found: None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pointer {
            Some(p) if p.is_root() => write!(f, "  (root): {}", self.message),
            Some(p) => write!(f, "  {p}: {}", self.message),
            None => write!(f, "  (response): {}", self.message),
        }
    }
}

/// Ordered collection of every failure found in one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    failures: Vec<Failure>,
}

impl ValidationReport {
    /// An empty (successful) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure.
    pub fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// Record a status-code failure if `actual` differs from `expected`.
    pub fn check_status(&mut self, expected: u16, actual: u16) {
        if expected != actual {
            self.push(Failure::status_code(expected, actual));
        }
    }

    /// True when no failure was recorded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if there are no failures.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns a slice of all failures in discovery order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }
}

impl From<Vec<Failure>> for ValidationReport {
    fn from(failures: Vec<Failure>) -> Self {
        Self { failures }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_report_is_success() {
        let report = ValidationReport::new();
        assert!(report.is_success());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn matching_status_adds_nothing() {
        let mut report = ValidationReport::new();
        report.check_status(200, 200);
        assert!(report.is_success());
    }

    #[test]
    fn status_mismatch_is_recorded_without_pointer() {
        let mut report = ValidationReport::new();
        report.check_status(200, 404);
        let failure = &report.failures()[0];
        assert_eq!(failure.kind, FailureKind::StatusCode);
        assert!(failure.pointer.is_none());
        assert_eq!(failure.expected.as_deref(), Some("200"));
        assert_eq!(failure.found.as_deref(), Some("404"));
        assert!(report.to_string().contains("(response)"));
    }

    #[test]
    fn missing_property_points_at_the_property() {
        let failure =
            Failure::missing_property(&JsonPointer::root(), "name", Some(JsonKind::String));
        assert_eq!(failure.pointer.unwrap().as_str(), "/name");
        assert_eq!(failure.expected.as_deref(), Some("string"));
        assert!(failure.found.is_none());
    }

    #[test]
    fn status_failure_follows_body_failures() {
        let mut a = ValidationReport::from(vec![Failure::type_mismatch(
            JsonPointer::root().key("a"),
            JsonKind::Number,
            JsonKind::String,
        )]);
        a.check_status(201, 500);
        let kinds: Vec<_> = a.failures().iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![FailureKind::TypeMismatch, FailureKind::StatusCode]);
    }

    #[test]
    fn display_marks_root_pointer() {
        let failure = Failure::type_mismatch(JsonPointer::root(), JsonKind::Object, JsonKind::Array);
        assert!(failure.to_string().starts_with("  (root):"));
    }

    #[test]
    fn value_mismatch_renders_json_text() {
        let failure =
            Failure::value_mismatch(JsonPointer::root().key("s"), &json!("a"), &json!("b"));
        assert_eq!(failure.expected.as_deref(), Some("\"a\""));
        assert_eq!(failure.found.as_deref(), Some("\"b\""));
    }

    #[test]
    fn serialized_failure_omits_absent_fields() {
        let failure = Failure::missing_property(&JsonPointer::root(), "id", None);
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["kind"], "missing_property");
        assert_eq!(value["pointer"], "/id");
        assert!(value.get("expected").is_none());
        assert!(value.get("found").is_none());
    }
}
