//! CLI command implementations

pub mod check;
pub mod describe;
pub mod next;
pub mod path;
pub mod replay;

use serde::Serialize;

use crate::domain::ValidationResult;
use crate::errors::{CaseWorkflowError, Result};

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CaseWorkflowError::InvalidJson(e.to_string()))
}

/// Render a verdict as one human-readable line.
pub fn format_verdict(subject: &str, result: &ValidationResult) -> String {
    match (&result.error_kind, &result.message) {
        (Some(kind), Some(message)) => format!("rejected {} [{}]: {}", subject, kind, message),
        _ => format!("valid {}", subject),
    }
}

fn print_verdict(subject: &str, result: &ValidationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(result)?);
    } else {
        println!("{}", format_verdict(subject, result));
    }
    Ok(())
}
