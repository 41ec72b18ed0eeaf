//! # Response Validation Strategies
//!
//! A test case is validated either against a schema derived from its
//! example payload or by lenient literal equality. The choice is a value,
//! [`ResponseValidation`], selected once per test case.
//!
//! Both strategies always check the body and the status code and merge the
//! results into one report. A status mismatch does not short-circuit the
//! body check.

use std::fmt;
use std::str::FromStr;

use respcheck_core::{RespCheckError, ResponseExchange, ValidationReport};
use serde::{Deserialize, Serialize};

use crate::augment::augment;
use crate::diagnostics;
use crate::induce::induce;
use crate::literal;
use crate::materialize::{materialize, SchemaNode};
use crate::validate::validate;

/// Test-case id that selects schema-derived validation by default.
pub const SCHEMA_CASE_MARKER: &str = "schema";

/// How a response body is checked against its expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseValidation {
    /// Induce a schema from the expected body and validate structure only.
    #[serde(alias = "schema")]
    SchemaDerived,
    /// Compare values leniently against the expected body.
    #[serde(alias = "literal")]
    LiteralEquality,
}

impl ResponseValidation {
    /// `SchemaDerived` when `schema` is set, `LiteralEquality` otherwise.
    pub fn from_schema_flag(schema: bool) -> Self {
        if schema {
            Self::SchemaDerived
        } else {
            Self::LiteralEquality
        }
    }

    /// Pick the strategy for a test case: schema-derived when its id equals
    /// `marker`, ignoring ASCII case.
    pub fn for_test_case(test_case_id: &str, marker: &str) -> Self {
        Self::from_schema_flag(test_case_id.eq_ignore_ascii_case(marker))
    }

    /// Short name used in logs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SchemaDerived => "schema",
            Self::LiteralEquality => "literal",
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            Self::SchemaDerived => "expected response schema didn't match actual response",
            Self::LiteralEquality => "actual response body didn't contain expected response body",
        }
    }

    /// Check body and status code, returning every mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`RespCheckError::Parse`] if either body is malformed.
    pub fn evaluate(&self, exchange: &ResponseExchange) -> Result<ValidationReport, RespCheckError> {
        let mut report = match self {
            Self::SchemaDerived => {
                let schema = derive_schema(&exchange.expected_body)?;
                let report = validate(&schema, &exchange.actual_body)?;
                if !report.is_success() {
                    log_schema(&schema);
                }
                report
            }
            Self::LiteralEquality => literal::compare(&exchange.expected_body, &exchange.actual_body)?,
        };
        report.check_status(exchange.expected_status, exchange.actual_status);
        Ok(report)
    }

    /// Check body and status code; succeed only if nothing mismatched.
    ///
    /// # Errors
    ///
    /// Returns [`RespCheckError::Parse`] if either body is malformed, or
    /// [`RespCheckError::ValidationFailed`] carrying the aggregated
    /// diagnostic if any mismatch was found.
    pub fn validate(&self, exchange: &ResponseExchange) -> Result<(), RespCheckError> {
        tracing::debug!(strategy = self.as_str(), "validating response");
        let report = self.evaluate(exchange)?;
        match diagnostics::render(&report) {
            None => Ok(()),
            Some(diagnostic) => {
                tracing::warn!(
                    strategy = self.as_str(),
                    failures = report.len(),
                    "response validation failed"
                );
                Err(RespCheckError::ValidationFailed {
                    headline: self.headline().to_string(),
                    diagnostic,
                    report,
                })
            }
        }
    }
}

impl fmt::Display for ResponseValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "schema" | "schema_derived" | "schema-derived" => Ok(Self::SchemaDerived),
            "literal" | "literal_equality" | "literal-equality" => Ok(Self::LiteralEquality),
            other => Err(format!(
                "unknown validation mode \"{other}\" (expected \"schema\" or \"literal\")"
            )),
        }
    }
}

/// Derive the augmented schema for an example payload:
/// parse, induce, materialize, augment.
///
/// # Errors
///
/// Returns [`RespCheckError::Parse`] if the example is malformed.
pub fn derive_schema(example: &str) -> Result<SchemaNode, RespCheckError> {
    let types = induce(example)?;
    Ok(augment(materialize(&types)))
}

fn log_schema(schema: &SchemaNode) {
    match schema.to_json_string() {
        Ok(json) => tracing::error!(schema = %json, "expected response schema"),
        Err(e) => tracing::warn!(error = %e, "could not render expected response schema"),
    }
}
