//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Malformed JSON is always fatal and names which document was malformed.
//! - Structural mismatches and status-code mismatches share one variant and
//!   one aggregated diagnostic; there is never one error per mismatch.

use std::fmt;

use thiserror::Error;

use crate::report::ValidationReport;

/// Which of the documents in a validation call a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// The example payload a schema is induced from.
    Example,
    /// The live response body under test.
    Actual,
    /// The expected payload of a literal-equality comparison.
    Expected,
}

impl DocumentRole {
    /// Lowercase name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Example => "example",
            Self::Actual => "actual",
            Self::Expected => "expected",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for a validation call.
#[derive(Error, Debug)]
pub enum RespCheckError {
    /// A document was not well-formed JSON.
    #[error("malformed {role} document: {source}")]
    Parse {
        /// Which document failed to parse.
        role: DocumentRole,
        /// Underlying parser error, carrying line and column.
        #[source]
        source: serde_json::Error,
    },

    /// One or more mismatches (body or status code) were found.
    #[error("{headline}: {diagnostic}")]
    ValidationFailed {
        /// Strategy-specific lead-in for the diagnostic.
        headline: String,
        /// Multi-line rendering of every failure in `report`.
        diagnostic: String,
        /// The structured report the diagnostic was built from.
        report: ValidationReport,
    },

    /// A schema could not be rendered to JSON.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl RespCheckError {
    /// Build a parse error for the given document.
    pub fn parse(role: DocumentRole, source: serde_json::Error) -> Self {
        Self::Parse { role, source }
    }

    /// The aggregated report, if this error carries one.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::ValidationFailed { report, .. } => Some(report),
            _ => None,
        }
    }
}
