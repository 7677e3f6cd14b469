//! Path validation
//!
//! Applies the single-step validator across an ordered state sequence so a
//! full case history or a multi-step plan is judged with the same rules.

use crate::schemas::CaseState;

use super::registry::{default_registry, TransitionRegistry};
use super::validation::{ErrorKind, TransitionContext, ValidationResult};

impl TransitionRegistry {
    /// Validate `path` hop by hop, using `contexts[i]` for `path[i] -> path[i + 1]`.
    ///
    /// The first failing hop's verdict is returned unchanged. A context
    /// count that does not match the number of transitions is rejected
    /// before any hop is evaluated.
    pub fn validate_workflow_path(
        &self,
        path: &[CaseState],
        contexts: &[TransitionContext],
    ) -> ValidationResult {
        match path.len().checked_sub(1) {
            Some(transitions) if transitions == contexts.len() => {}
            Some(transitions) => {
                return ValidationResult::failure(
                    ErrorKind::PathContractViolation,
                    format!(
                        "One context is required per transition: path has {} transitions but {} contexts were provided",
                        transitions,
                        contexts.len()
                    ),
                );
            }
            None => {
                return ValidationResult::failure(
                    ErrorKind::PathContractViolation,
                    format!(
                        "One context is required per transition: path is empty but {} contexts were provided",
                        contexts.len()
                    ),
                );
            }
        }

        if path.len() < 2 {
            return ValidationResult::failure(
                ErrorKind::PathContractViolation,
                format!(
                    "A workflow path needs at least two states, got {}",
                    path.len()
                ),
            );
        }

        for (hop, (pair, ctx)) in path.windows(2).zip(contexts).enumerate() {
            let result = self.validate_transition(pair[0], pair[1], ctx);
            if !result.valid {
                tracing::debug!(hop, from = %pair[0], to = %pair[1], "workflow path rejected");
                return result;
            }
        }

        ValidationResult::success()
    }
}

/// Validate a path against the shared registry.
pub fn validate_workflow_path(
    path: &[CaseState],
    contexts: &[TransitionContext],
) -> ValidationResult {
    default_registry().validate_workflow_path(path, contexts)
}
