//! # Check Subcommand
//!
//! Validates one actual response body and status code against an example
//! (schema mode) or expected body (literal mode).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use respcheck_core::{RespCheckError, ResponseExchange, ValidationReport};
use respcheck_schema::ResponseValidation;

use crate::config::CliConfig;

/// Arguments for the `respcheck check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Example (schema mode) or expected (literal mode) response body.
    #[arg(long, value_name = "FILE")]
    pub example: PathBuf,

    /// Actual response body.
    #[arg(long, value_name = "FILE")]
    pub actual: PathBuf,

    /// Status code the response should carry.
    #[arg(long, default_value_t = 200)]
    pub expected_status: u16,

    /// Status code the response carried.
    #[arg(long, default_value_t = 200)]
    pub actual_status: u16,

    /// Validation mode: `schema` or `literal`. Defaults to the configured mode.
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ResponseValidation>,

    /// Print the failure report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let exchange = ResponseExchange::new(
        crate::read_document(&args.actual)?,
        crate::read_document(&args.example)?,
        args.actual_status,
        args.expected_status,
    );
    let mode = args.mode.unwrap_or(config.default_mode);
    tracing::info!(%mode, example = %args.example.display(), actual = %args.actual.display(), "checking response");

    match mode.validate(&exchange) {
        Ok(()) => {
            if args.json {
                println!("{}", report_json(&ValidationReport::new())?);
            } else {
                println!("PASS ({mode})");
            }
            Ok(0)
        }
        Err(RespCheckError::ValidationFailed {
            headline,
            diagnostic,
            report,
        }) => {
            if args.json {
                println!("{}", report_json(&report)?);
            } else {
                println!("FAIL ({mode}): {headline}");
                print!("{diagnostic}");
            }
            Ok(1)
        }
        Err(e) => Err(anyhow::Error::new(e).context("validation could not run")),
    }
}

/// Render a report as `{"success": bool, "failures": [...]}`.
pub fn report_json(report: &ValidationReport) -> Result<String> {
    let value = serde_json::json!({
        "success": report.is_success(),
        "failures": report.failures(),
    });
    serde_json::to_string_pretty(&value).context("cannot render report as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(example: PathBuf, actual: PathBuf, mode: ResponseValidation) -> CheckArgs {
        CheckArgs {
            example,
            actual,
            expected_status: 200,
            actual_status: 200,
            mode: Some(mode),
            json: false,
        }
    }

    #[test]
    fn passing_schema_check_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let example = write(dir.path(), "example.json", r#"{"id": 1, "name": "a"}"#);
        let actual = write(dir.path(), "actual.json", r#"{"id": 2, "name": "b", "x": 0}"#);
        let code = run_check(
            &args(example, actual, ResponseValidation::SchemaDerived),
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn failing_check_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let example = write(dir.path(), "example.json", r#"{"id": 1, "name": "a"}"#);
        let actual = write(dir.path(), "actual.json", r#"{"id": 1}"#);
        let mut check = args(example, actual, ResponseValidation::SchemaDerived);
        check.json = true;
        assert_eq!(run_check(&check, &CliConfig::default()).unwrap(), 1);
    }

    #[test]
    fn configured_default_mode_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let example = write(dir.path(), "example.json", r#"{"id": 1}"#);
        let actual = write(dir.path(), "actual.json", r#"{"id": 2}"#);
        let mut check = args(example, actual, ResponseValidation::LiteralEquality);
        check.mode = None;

        let literal = CliConfig::default();
        assert_eq!(run_check(&check, &literal).unwrap(), 1);

        let schema = CliConfig {
            default_mode: ResponseValidation::SchemaDerived,
            ..CliConfig::default()
        };
        assert_eq!(run_check(&check, &schema).unwrap(), 0);
    }

    #[test]
    fn status_mismatch_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let body = write(dir.path(), "body.json", r#"{"a": 1}"#);
        let mut check = args(body.clone(), body, ResponseValidation::SchemaDerived);
        check.actual_status = 404;
        assert_eq!(run_check(&check, &CliConfig::default()).unwrap(), 1);
    }

    #[test]
    fn malformed_body_is_an_operational_error() {
        let dir = tempfile::tempdir().unwrap();
        let example = write(dir.path(), "example.json", r#"{"a": 1}"#);
        let actual = write(dir.path(), "actual.json", "<html>");
        let err = run_check(
            &args(example, actual, ResponseValidation::SchemaDerived),
            &CliConfig::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("malformed actual document"));
    }

    #[test]
    fn report_json_shape() {
        let mut report = ValidationReport::new();
        report.check_status(200, 500);
        let value: serde_json::Value = serde_json::from_str(&report_json(&report).unwrap()).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["failures"][0]["kind"], "status_code");
        assert_eq!(value["failures"][0]["found"], "500");
    }
}
