//! Check command - Validate a single transition

use crate::domain::{TransitionContext, TransitionRegistry, ValidationResult};
use crate::errors::Result;
use crate::schemas::{ActorRole, CaseState};

use super::print_verdict;

/// Validate `from -> to` for `role` and print the verdict
pub fn run(
    registry: &TransitionRegistry,
    from: CaseState,
    to: CaseState,
    role: ActorRole,
    days: Option<f64>,
    evidence: bool,
    json: bool,
) -> Result<ValidationResult> {
    let ctx = TransitionContext {
        actor_role: role,
        days_in_current_state: days,
        has_sufficient_evidence: evidence.then_some(true),
    };

    let result = registry.validate_transition(from, to, &ctx);
    print_verdict(&format!("{} -> {}", from, to), &result, json)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    #[test]
    fn test_check_without_evidence_flag() {
        let registry = TransitionRegistry::standard();
        let result = run(
            &registry,
            CaseState::Investigating,
            CaseState::PendingResponse,
            ActorRole::Officer,
            None,
            false,
            false,
        )
        .unwrap();
        assert_eq!(result.error_kind, Some(ErrorKind::MissingRequiredField));
    }

    #[test]
    fn test_check_with_evidence_flag() {
        let registry = TransitionRegistry::standard();
        let result = run(
            &registry,
            CaseState::Investigating,
            CaseState::PendingResponse,
            ActorRole::Officer,
            None,
            true,
            true,
        )
        .unwrap();
        assert!(result.valid);
    }
}
