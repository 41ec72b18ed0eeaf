//! # Schema Subcommand
//!
//! Prints the augmented schema derived from an example payload. The schema
//! is rendered to stdout only; nothing is written to disk.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use respcheck_schema::derive_schema;

/// Arguments for the `respcheck schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Example response body to derive the schema from.
    #[arg(value_name = "FILE")]
    pub example: PathBuf,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    println!("{}", render_schema(&args.example)?);
    Ok(0)
}

fn render_schema(example: &std::path::Path) -> Result<String> {
    let text = crate::read_document(example)?;
    let schema = derive_schema(&text)
        .with_context(|| format!("cannot derive a schema from {}", example.display()))?;
    Ok(schema.to_json_pretty()?)
}
