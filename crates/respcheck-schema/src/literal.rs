//! # Literal Comparison
//!
//! Lenient value comparison of an expected payload against the actual one,
//! used when a test case does not ask for schema-derived validation.
//!
//! - Every expected object key must be present in the actual object with an
//!   equal value. Extra actual keys are allowed.
//! - Arrays must have the same length. Order is not significant: each
//!   expected element must be matched by a distinct actual element.
//! - Numbers compare by value, so `1` equals `1.0`.
//!
//! Like the structural validator, comparison collects every mismatch.

use respcheck_core::{DocumentRole, Failure, JsonKind, JsonPointer, RespCheckError, ValidationReport};
use serde_json::{Number, Value};

/// Parse both documents and compare them.
///
/// # Errors
///
/// Returns [`RespCheckError::Parse`] naming the document that is not
/// well-formed JSON. The expected document is parsed first.
pub fn compare(expected: &str, actual: &str) -> Result<ValidationReport, RespCheckError> {
    let expected: Value = serde_json::from_str(expected)
        .map_err(|e| RespCheckError::parse(DocumentRole::Expected, e))?;
    let actual: Value = serde_json::from_str(actual)
        .map_err(|e| RespCheckError::parse(DocumentRole::Actual, e))?;
    Ok(compare_values(&expected, &actual))
}

/// Compare two parsed documents.
pub fn compare_values(expected: &Value, actual: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    compare_at(expected, actual, &JsonPointer::root(), &mut report);
    report
}

fn compare_at(expected: &Value, actual: &Value, pointer: &JsonPointer, report: &mut ValidationReport) {
    match (expected, actual) {
        (Value::Object(want), Value::Object(got)) => {
            for (name, want_value) in want {
                match got.get(name) {
                    Some(got_value) => compare_at(want_value, got_value, &pointer.key(name), report),
                    None => report.push(Failure::missing_property(
                        pointer,
                        name,
                        Some(JsonKind::of(want_value)),
                    )),
                }
            }
        }
        (Value::Array(want), Value::Array(got)) => compare_arrays(want, got, pointer, report),
        (Value::Number(want), Value::Number(got)) => {
            if !numbers_equal(want, got) {
                report.push(Failure::value_mismatch(pointer.clone(), expected, actual));
            }
        }
        _ => {
            let (want_kind, got_kind) = (JsonKind::of(expected), JsonKind::of(actual));
            if want_kind != got_kind {
                report.push(Failure::type_mismatch(pointer.clone(), want_kind, got_kind));
            } else if expected != actual {
                report.push(Failure::value_mismatch(pointer.clone(), expected, actual));
            }
        }
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    a.as_f64() == b.as_f64()
}

fn matches(expected: &Value, actual: &Value) -> bool {
    compare_values(expected, actual).is_success()
}

/// Order-insensitive array comparison.
///
/// Expected elements are paired with actual elements by maximum bipartite
/// matching over the "matches" relation. Leftover expected elements are
/// diffed against leftover actual elements in index order, so a single
/// changed element still reports the deepest differing pointer.
fn compare_arrays(want: &[Value], got: &[Value], pointer: &JsonPointer, report: &mut ValidationReport) {
    if want.len() != got.len() {
        report.push(Failure::array_length(pointer.clone(), want.len(), got.len()));
        return;
    }

    let compatible: Vec<Vec<bool>> = want
        .iter()
        .map(|w| got.iter().map(|g| matches(w, g)).collect())
        .collect();

    // owner[j] = index of the expected element matched to actual element j.
    let mut owner: Vec<Option<usize>> = vec![None; got.len()];
    for i in 0..want.len() {
        let mut visited = vec![false; got.len()];
        assign(i, &compatible, &mut owner, &mut visited);
    }

    let mut matched_want = vec![false; want.len()];
    for i in owner.iter().flatten() {
        matched_want[*i] = true;
    }
    let leftover_want = (0..want.len()).filter(|i| !matched_want[*i]);
    let mut leftover_got = (0..got.len()).filter(|j| owner[*j].is_none());

    for i in leftover_want {
        match leftover_got.next() {
            Some(j) if j == i => compare_at(&want[i], &got[j], &pointer.index(i), report),
            _ => report.push(Failure::unmatched_element(pointer.index(i), &want[i])),
        }
    }
}

/// Augmenting-path step of Kuhn's matching algorithm.
fn assign(i: usize, compatible: &[Vec<bool>], owner: &mut [Option<usize>], visited: &mut [bool]) -> bool {
    for j in 0..owner.len() {
        if !compatible[i][j] || visited[j] {
            continue;
        }
        visited[j] = true;
        let free = match owner[j] {
            None => true,
            Some(other) => assign(other, compatible, owner, visited),
        };
        if free {
            owner[j] = Some(i);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use respcheck_core::FailureKind;
    use serde_json::json;

    fn kinds(report: &ValidationReport) -> Vec<FailureKind> {
        report.failures().iter().map(|f| f.kind).collect()
    }

    #[test]
    fn equal_documents_pass() {
        let doc = json!({"a": [1, {"b": null}], "c": "x"});
        assert!(compare_values(&doc, &doc).is_success());
    }

    #[test]
    fn extra_actual_keys_are_allowed() {
        let report = compare(r#"{"a": 1}"#, r#"{"a": 1, "b": 2}"#).unwrap();
        assert!(report.is_success());
    }

    #[test]
    fn missing_expected_key_fails() {
        let report = compare(r#"{"a": 1, "b": 2}"#, r#"{"a": 1}"#).unwrap();
        assert_eq!(kinds(&report), vec![FailureKind::MissingProperty]);
        assert_eq!(report.failures()[0].pointer.as_ref().unwrap().as_str(), "/b");
    }

    #[test]
    fn scalar_difference_fails_with_values() {
        let report = compare(r#"{"name": "a"}"#, r#"{"name": "b"}"#).unwrap();
        let failure = &report.failures()[0];
        assert_eq!(failure.kind, FailureKind::ValueMismatch);
        assert_eq!(failure.expected.as_deref(), Some("\"a\""));
        assert_eq!(failure.found.as_deref(), Some("\"b\""));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(compare("1", "1.0").unwrap().is_success());
        assert!(!compare("1", "2").unwrap().is_success());
        assert!(compare("18446744073709551615", "18446744073709551615")
            .unwrap()
            .is_success());
    }

    #[test]
    fn kind_difference_is_a_type_mismatch() {
        let report = compare(r#"{"a": 1}"#, r#"{"a": "1"}"#).unwrap();
        assert_eq!(kinds(&report), vec![FailureKind::TypeMismatch]);
    }

    #[test]
    fn array_order_is_not_significant() {
        assert!(compare("[1, 2, 3]", "[3, 1, 2]").unwrap().is_success());
        assert!(compare(r#"[{"id": 1}, {"id": 2}]"#, r#"[{"id": 2}, {"id": 1}]"#)
            .unwrap()
            .is_success());
    }

    #[test]
    fn array_length_must_match() {
        let report = compare("[1, 2]", "[1, 2, 3]").unwrap();
        assert_eq!(kinds(&report), vec![FailureKind::ArrayLength]);
    }

    #[test]
    fn ambiguous_lenient_matches_are_resolved() {
        // {} matches either element; {"a":1} only the first.
        let report = compare(r#"[{}, {"a": 1}]"#, r#"[{"a": 1}, {"b": 2}]"#).unwrap();
        assert!(report.is_success(), "unexpected failures:\n{report}");
    }

    #[test]
    fn changed_element_reports_deep_pointer() {
        let report = compare(
            r#"{"items": [{"x": 1}, {"x": 2}]}"#,
            r#"{"items": [{"x": 1}, {"x": 3}]}"#,
        )
        .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.failures()[0].pointer.as_ref().unwrap().as_str(),
            "/items/1/x"
        );
    }

    #[test]
    fn unmatched_element_without_counterpart() {
        let report = compare("[1, 2]", "[2, 5]").unwrap();
        assert_eq!(kinds(&report), vec![FailureKind::UnmatchedElement]);
        assert_eq!(report.failures()[0].pointer.as_ref().unwrap().as_str(), "/0");
    }

    #[test]
    fn malformed_documents_name_their_role() {
        let err = compare("{", "{}").unwrap_err();
        assert!(err.to_string().starts_with("malformed expected document"));
        let err = compare("{}", "nope").unwrap_err();
        assert!(err.to_string().starts_with("malformed actual document"));
    }
}
