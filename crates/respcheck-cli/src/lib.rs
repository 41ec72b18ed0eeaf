//! # respcheck-cli: Command-Line Front-End
//!
//! Provides the `respcheck` command-line interface over
//! `respcheck-schema`.
//!
//! ## Subcommands
//!
//! - `respcheck check`: validate one actual response body and status code.
//! - `respcheck schema`: print the schema derived from an example payload.
//! - `respcheck replay`: run a file of recorded test cases.
//!
//! ```bash
//! respcheck check --example expected.json --actual body.json --mode schema
//! respcheck check --example expected.json --actual body.json --actual-status 404
//! respcheck schema expected.json
//! respcheck -v replay cases.yaml
//! ```
//!
//! ## Exit Codes
//!
//! `0` when everything passed, `1` when any validation failed, `2` on an
//! operational error (unreadable file, malformed JSON, bad configuration).
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers read files and delegate to `respcheck-schema`; no validation
//!   logic lives here.

pub mod check;
pub mod config;
pub mod replay;
pub mod schema;

use std::path::Path;

use anyhow::{Context, Result};

/// Read a document from disk as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
