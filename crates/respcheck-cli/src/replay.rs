//! # Replay Subcommand
//!
//! Runs a file of recorded test cases. Each case pairs a captured response
//! with its expectation; the validation strategy is picked per case from its
//! test-case id. Cases are independent: one failing or malformed case never
//! stops the others.
//!
//! ```yaml
//! - id: get-user
//!   test_case_id: schema
//!   expected_status: 200
//!   expected_body: {"id": 1, "name": "a"}
//!   actual_status: 200
//!   actual_body: '{"id": 7, "name": "b"}'
//! ```
//!
//! Bodies may be written as JSON text (a YAML string) or inline as YAML
//! structures, which are converted to JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use respcheck_core::ResponseExchange;
use respcheck_schema::ResponseValidation;

use crate::config::CliConfig;

/// Arguments for the `respcheck replay` subcommand.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// YAML or JSON file holding a list of recorded cases.
    #[arg(value_name = "FILE")]
    pub cases: PathBuf,
}

/// A response body as written in a cases file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordedBody {
    /// Raw text, passed through unchanged.
    Text(String),
    /// A YAML structure, converted to JSON text.
    Inline(serde_yaml::Value),
}

impl RecordedBody {
    /// The body as JSON text.
    ///
    /// Inline bodies must stay within the JSON subset of YAML: tagged values
    /// and non-string keys are rejected.
    pub fn to_text(&self) -> Result<String, serde_yaml::Error> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Inline(yaml) => {
                serde_yaml::from_value::<Value>(yaml.clone()).map(|json| json.to_string())
            }
        }
    }
}

/// One recorded test case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordedCase {
    /// Unique case identifier, used in output.
    pub id: String,
    /// Test-case id; selects the validation strategy.
    #[serde(default)]
    pub test_case_id: String,
    /// Status code the case expects.
    pub expected_status: u16,
    /// Example or expected body.
    pub expected_body: RecordedBody,
    /// Status code the response carried.
    pub actual_status: u16,
    /// Body the response carried. Absent or YAML `null` means no body.
    #[serde(default)]
    pub actual_body: Option<RecordedBody>,
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseResult {
    /// Body and status matched.
    Passed,
    /// Anything else, with the message that terminated the case.
    Failed(String),
}

/// A case id with its strategy and result.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    /// The case's `id`.
    pub id: String,
    /// Strategy the case was validated with.
    pub strategy: ResponseValidation,
    /// What happened.
    pub result: CaseResult,
}

/// Execute the replay subcommand.
///
/// Returns exit code: 0 if every case passed, 1 otherwise.
pub fn run_replay(args: &ReplayArgs, config: &CliConfig) -> Result<u8> {
    let content = crate::read_document(&args.cases)?;
    let cases: Vec<RecordedCase> = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid cases file {}", args.cases.display()))?;

    let outcomes = replay_cases(&cases, &config.schema_case_marker);
    let passed = outcomes
        .iter()
        .filter(|o| o.result == CaseResult::Passed)
        .count();

    for outcome in &outcomes {
        match &outcome.result {
            CaseResult::Passed => println!("PASS: {} ({})", outcome.id, outcome.strategy),
            CaseResult::Failed(message) => {
                println!("FAIL: {} ({}): {}", outcome.id, outcome.strategy, message)
            }
        }
    }

    println!("\nCases: {}/{} passed", passed, outcomes.len());
    Ok(if passed == outcomes.len() { 0 } else { 1 })
}

/// Run every case in order and collect the outcomes.
pub fn replay_cases(cases: &[RecordedCase], schema_marker: &str) -> Vec<CaseOutcome> {
    cases
        .iter()
        .map(|case| {
            let strategy = ResponseValidation::for_test_case(&case.test_case_id, schema_marker);
            tracing::info!(case = %case.id, %strategy, "starting test");
            let result = run_case(case, strategy);
            match &result {
                CaseResult::Passed => tracing::info!(case = %case.id, "test case result: PASS"),
                CaseResult::Failed(reason) => {
                    tracing::error!(case = %case.id, %reason, "test case result: FAIL")
                }
            }
            CaseOutcome {
                id: case.id.clone(),
                strategy,
                result,
            }
        })
        .collect()
}

fn run_case(case: &RecordedCase, strategy: ResponseValidation) -> CaseResult {
    let (actual, expected) = match body_texts(case) {
        Ok(pair) => pair,
        Err(reason) => return CaseResult::Failed(format!("unusable body: {reason}")),
    };

    let exchange = ResponseExchange::new(actual, expected, case.actual_status, case.expected_status);
    if !exchange.has_actual_body() {
        return CaseResult::Failed("actual response doesn't have a body".to_string());
    }

    match strategy.validate(&exchange) {
        Ok(()) => CaseResult::Passed,
        Err(e) => CaseResult::Failed(e.to_string()),
    }
}

fn body_texts(case: &RecordedCase) -> Result<(String, String), serde_yaml::Error> {
    let actual = match &case.actual_body {
        Some(body) => body.to_text()?,
        None => String::new(),
    };
    Ok((actual, case.expected_body.to_text()?))
}
