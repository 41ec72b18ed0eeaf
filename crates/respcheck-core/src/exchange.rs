//! # Response Exchange
//!
//! The inputs of one validation call as handed over by the calling harness:
//! the raw actual body, the expected (example) body, and both status codes.

use serde::{Deserialize, Serialize};

/// One observed response paired with what it was expected to look like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseExchange {
    /// Raw response payload as received.
    pub actual_body: String,
    /// Example payload (schema-derived) or literal expectation.
    pub expected_body: String,
    /// Status code the response carried.
    pub actual_status: u16,
    /// Status code the test case expects.
    pub expected_status: u16,
}

impl ResponseExchange {
    /// Pair an actual response with its expectation.
    pub fn new(
        actual_body: impl Into<String>,
        expected_body: impl Into<String>,
        actual_status: u16,
        expected_status: u16,
    ) -> Self {
        Self {
            actual_body: actual_body.into(),
            expected_body: expected_body.into(),
            actual_status,
            expected_status,
        }
    }

    /// Whether the actual response carried a non-blank body.
    pub fn has_actual_body(&self) -> bool {
        !self.actual_body.trim().is_empty()
    }
}
