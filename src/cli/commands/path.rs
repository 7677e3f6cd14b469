//! Path command - Validate a sequence of states

use std::path::Path;

use crate::domain::{TransitionContext, TransitionRegistry, ValidationResult};
use crate::errors::{CaseWorkflowError, Result};
use crate::fs;
use crate::schemas::{ActorRole, CaseState};

use super::print_verdict;

/// Resolve the per-hop contexts from a file or a single role.
fn resolve_contexts(
    states: &[CaseState],
    contexts: Option<&Path>,
    role: Option<ActorRole>,
) -> Result<Vec<TransitionContext>> {
    match (contexts, role) {
        (Some(file), _) => fs::read_json(file)
            .map_err(|e| CaseWorkflowError::wrap(e, "Failed to load transition contexts")),
        (None, Some(role)) => Ok(vec![
            TransitionContext::new(role);
            states.len().saturating_sub(1)
        ]),
        (None, None) => Err(CaseWorkflowError::InvalidArgument(
            "either --contexts or --role is required".to_string(),
        )),
    }
}

/// Validate `states` as a path and print the verdict
pub fn run(
    registry: &TransitionRegistry,
    states: &[CaseState],
    contexts: Option<&Path>,
    role: Option<ActorRole>,
    json: bool,
) -> Result<ValidationResult> {
    let contexts = resolve_contexts(states, contexts, role)?;
    let result = registry.validate_workflow_path(states, &contexts);

    let subject = states
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" -> ");
    print_verdict(&subject, &result, json)?;
    Ok(result)
}
