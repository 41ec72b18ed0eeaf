//! # Diagnostics
//!
//! Renders a failing [`ValidationReport`] into one multi-line message. Each
//! failure becomes a block: a summary line, then the field pointer, the
//! expected value, and the actual value, each only when present.

use std::fmt::{self, Write};

use respcheck_core::{Failure, ValidationReport};

/// Render every failure in `report` into a single message.
///
/// Returns `None` for a successful report; there is nothing to diagnose.
pub fn render(report: &ValidationReport) -> Option<String> {
    if report.is_success() {
        return None;
    }
    let mut message = String::new();
    // Writing into a String cannot fail.
    let _ = report
        .failures()
        .iter()
        .try_for_each(|failure| render_failure(&mut message, failure));
    Some(message)
}

fn render_failure(out: &mut String, failure: &Failure) -> fmt::Result {
    writeln!(out, "Validation failure report:")?;
    writeln!(out, "{}", failure.message)?;
    if let Some(pointer) = &failure.pointer {
        writeln!(out, "Error at field: `{pointer}`")?;
    }
    if let Some(expected) = &failure.expected {
        writeln!(out, "Expected value was: `{expected}`")?;
    }
    if let Some(found) = &failure.found {
        writeln!(out, "Actual value was: `{found}`")?;
    }
    Ok(())
}
