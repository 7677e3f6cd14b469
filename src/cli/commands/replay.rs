//! Replay command - Audit a stored case history

use std::path::Path;

use serde::Serialize;

use crate::domain::{get_initial_state, TransitionRegistry, ValidationResult};
use crate::errors::Result;
use crate::fs;
use crate::schemas::{CaseHistory, CaseState};

use super::{format_verdict, to_json};

/// Outcome of replaying one case history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub case_id: String,

    /// Number of recorded transitions replayed
    pub transitions: usize,

    /// State the history ends in
    pub final_state: CaseState,

    pub verdict: ValidationResult,
}

/// Validate a case history against the registry.
///
/// A history with no recorded transitions has nothing to judge and is valid.
pub fn replay_history(registry: &TransitionRegistry, history: &CaseHistory) -> ReplayReport {
    let (path, contexts) = history.to_path(get_initial_state());
    let final_state = path.last().copied().unwrap_or(get_initial_state());

    let verdict = if contexts.is_empty() {
        ValidationResult::success()
    } else {
        registry.validate_workflow_path(&path, &contexts)
    };

    tracing::info!(
        case_id = %history.case_id,
        transitions = contexts.len(),
        outcome = verdict.outcome_code(),
        "replayed case history"
    );

    ReplayReport {
        case_id: history.case_id.clone(),
        transitions: contexts.len(),
        final_state,
        verdict,
    }
}

/// Replay the history in `file`, print the report and optionally save it
pub fn run(
    registry: &TransitionRegistry,
    file: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<ValidationResult> {
    let history = fs::read_case_history(file)?;
    let report = replay_history(registry, &history);

    if json {
        println!("{}", to_json(&report)?);
    } else {
        println!(
            "{}",
            format_verdict(&format!("case {}", report.case_id), &report.verdict)
        );
    }

    if let Some(output) = output {
        fs::write_json(output, &report)?;
    }

    Ok(report.verdict)
}
