//! Validation rules for case state transitions
//!
//! Checks run in a fixed order and the first failure wins:
//! edge existence, role authorization, SLA window, evidence.

use serde::{Deserialize, Serialize};

use crate::schemas::{ActorRole, CaseState};

use super::registry::{default_registry, Precondition, TransitionRegistry};

/// Caller-supplied facts about the proposed move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionContext {
    /// Role of the actor attempting the transition
    pub actor_role: ActorRole,

    /// Elapsed time in the current state, pre-computed by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_in_current_state: Option<f64>,

    /// Whether the caller has confirmed the evidence is sufficient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_sufficient_evidence: Option<bool>,
}

impl TransitionContext {
    pub fn new(actor_role: ActorRole) -> Self {
        TransitionContext {
            actor_role,
            days_in_current_state: None,
            has_sufficient_evidence: None,
        }
    }

    pub fn with_days(mut self, days: f64) -> Self {
        self.days_in_current_state = Some(days);
        self
    }

    pub fn with_evidence(mut self, sufficient: bool) -> Self {
        self.has_sufficient_evidence = Some(sufficient);
        self
    }
}

/// Why a transition or path was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// `(from, to)` is not a configured edge
    InvalidStateTransition,
    /// The edge exists but the actor's role may not use it
    InsufficientPermissions,
    /// The time window for the edge has elapsed
    SlaExpired,
    /// A required data precondition was not satisfied
    MissingRequiredField,
    /// The caller passed a malformed path (wrong context count or too few states)
    PathContractViolation,
}

impl ErrorKind {
    /// Stable code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorKind::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
            ErrorKind::SlaExpired => "SLA_EXPIRED",
            ErrorKind::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorKind::PathContractViolation => "PATH_CONTRACT_VIOLATION",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Verdict of a validation check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Failure category (absent when valid)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,

    /// Displayable reason for failure (absent when valid)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            error_kind: None,
            message: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            error_kind: Some(kind),
            message: Some(message.into()),
        }
    }

    /// Short code for logging: the error code, or `OK`.
    pub fn outcome_code(&self) -> &'static str {
        self.error_kind.map_or("OK", |kind| kind.code())
    }
}

fn check_precondition(
    precondition: &Precondition,
    from: CaseState,
    to: CaseState,
    ctx: &TransitionContext,
) -> Option<ValidationResult> {
    match precondition {
        Precondition::SlaWindow { max_days } => match ctx.days_in_current_state {
            Some(days) if !days.is_finite() || days < 0.0 => Some(ValidationResult::failure(
                ErrorKind::MissingRequiredField,
                format!(
                    "Days in {} must be a non-negative number to transition to {}, got {}",
                    from, to, days
                ),
            )),
            Some(days) if days > *max_days => Some(ValidationResult::failure(
                ErrorKind::SlaExpired,
                format!(
                    "Transition from {} to {} must occur within {} business days (case has been {} for {} days)",
                    from, to, max_days, from, days
                ),
            )),
            _ => None,
        },
        Precondition::SufficientEvidence => {
            if ctx.has_sufficient_evidence == Some(true) {
                None
            } else {
                Some(ValidationResult::failure(
                    ErrorKind::MissingRequiredField,
                    format!(
                        "Sufficient evidence is required to transition from {} to {}",
                        from, to
                    ),
                ))
            }
        }
    }
}

impl TransitionRegistry {
    /// Decide whether moving a case from `from` to `to` is legal under `ctx`.
    pub fn validate_transition(
        &self,
        from: CaseState,
        to: CaseState,
        ctx: &TransitionContext,
    ) -> ValidationResult {
        let result = self.evaluate(from, to, ctx);
        tracing::debug!(
            %from,
            %to,
            role = %ctx.actor_role,
            outcome = result.outcome_code(),
            "validated case transition"
        );
        result
    }

    fn evaluate(
        &self,
        from: CaseState,
        to: CaseState,
        ctx: &TransitionContext,
    ) -> ValidationResult {
        let Some(rule) = self.transition_rule(from, to) else {
            return ValidationResult::failure(
                ErrorKind::InvalidStateTransition,
                format!("Cannot transition from {} to {}", from, to),
            );
        };

        if !rule.permits(ctx.actor_role) {
            return ValidationResult::failure(
                ErrorKind::InsufficientPermissions,
                format!(
                    "Role {} is not authorized to transition from {} to {}",
                    ctx.actor_role, from, to
                ),
            );
        }

        rule.preconditions
            .iter()
            .find_map(|precondition| check_precondition(precondition, from, to, ctx))
            .unwrap_or_else(ValidationResult::success)
    }
}

/// Validate a transition against the shared registry.
pub fn validate_transition(
    from: CaseState,
    to: CaseState,
    ctx: &TransitionContext,
) -> ValidationResult {
    default_registry().validate_transition(from, to, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::WorkflowConfig;

    #[test]
    fn test_draft_to_submitted_by_member() {
        let result = validate_transition(
            CaseState::Draft,
            CaseState::Submitted,
            &TransitionContext::new(ActorRole::Member),
        );
        assert_eq!(result, ValidationResult::success());
    }

    #[test]
    fn test_unconfigured_edge_is_invalid() {
        let result = validate_transition(
            CaseState::Draft,
            CaseState::Closed,
            &TransitionContext::new(ActorRole::Admin),
        );
        assert!(!result.valid);
        assert_eq!(result.error_kind, Some(ErrorKind::InvalidStateTransition));
        assert_eq!(
            result.message.as_deref(),
            Some("Cannot transition from draft to closed")
        );
    }

    #[test]
    fn test_submitted_to_closed_names_both_states() {
        let result = validate_transition(
            CaseState::Submitted,
            CaseState::Closed,
            &TransitionContext::new(ActorRole::Admin),
        );
        assert_eq!(
            result.message.as_deref(),
            Some("Cannot transition from submitted to closed")
        );
    }

    #[test]
    fn test_nothing_leaves_closed() {
        for to in CaseState::ALL {
            for role in ActorRole::ALL {
                let result =
                    validate_transition(CaseState::Closed, to, &TransitionContext::new(role));
                assert_eq!(result.error_kind, Some(ErrorKind::InvalidStateTransition));
            }
        }
    }

    #[test]
    fn test_member_cannot_acknowledge() {
        let result = validate_transition(
            CaseState::Submitted,
            CaseState::Acknowledged,
            &TransitionContext::new(ActorRole::Member),
        );
        assert_eq!(result.error_kind, Some(ErrorKind::InsufficientPermissions));
        let message = result.message.unwrap();
        assert!(message.contains("member"));
        assert!(message.contains("submitted to acknowledged"));
    }

    #[test]
    fn test_acknowledgment_after_sla_expired() {
        let ctx = TransitionContext::new(ActorRole::Officer).with_days(3.0);
        let result = validate_transition(CaseState::Submitted, CaseState::Acknowledged, &ctx);
        assert_eq!(result.error_kind, Some(ErrorKind::SlaExpired));
        assert!(result.message.unwrap().contains("within 2 business days"));
    }

    #[test]
    fn test_acknowledgment_at_sla_boundary() {
        let ctx = TransitionContext::new(ActorRole::Steward).with_days(2.0);
        let result = validate_transition(CaseState::Submitted, CaseState::Acknowledged, &ctx);
        assert!(result.valid);
    }

    #[test]
    fn test_acknowledgment_with_unusable_elapsed_days() {
        for days in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            let ctx = TransitionContext::new(ActorRole::Officer).with_days(days);
            let result = validate_transition(CaseState::Submitted, CaseState::Acknowledged, &ctx);
            assert!(!result.valid, "days = {} should not pass", days);
            assert_eq!(result.error_kind, Some(ErrorKind::MissingRequiredField));
            assert!(result.message.unwrap().contains("non-negative number"));
        }
    }

    #[test]
    fn test_acknowledgment_with_zero_elapsed_days() {
        let ctx = TransitionContext::new(ActorRole::Officer).with_days(0.0);
        let result = validate_transition(CaseState::Submitted, CaseState::Acknowledged, &ctx);
        assert!(result.valid);
    }

    #[test]
    fn test_acknowledgment_without_elapsed_days() {
        let ctx = TransitionContext::new(ActorRole::Admin);
        let result = validate_transition(CaseState::Submitted, CaseState::Acknowledged, &ctx);
        assert!(result.valid);
    }

    #[test]
    fn test_role_checked_before_sla() {
        let ctx = TransitionContext::new(ActorRole::Member).with_days(10.0);
        let result = validate_transition(CaseState::Submitted, CaseState::Acknowledged, &ctx);
        assert_eq!(result.error_kind, Some(ErrorKind::InsufficientPermissions));
    }

    #[test]
    fn test_evidence_required_for_pending_response() {
        let base = TransitionContext::new(ActorRole::Officer);

        let result = validate_transition(
            CaseState::Investigating,
            CaseState::PendingResponse,
            &base.clone().with_evidence(false),
        );
        assert_eq!(result.error_kind, Some(ErrorKind::MissingRequiredField));

        let result =
            validate_transition(CaseState::Investigating, CaseState::PendingResponse, &base);
        assert_eq!(result.error_kind, Some(ErrorKind::MissingRequiredField));

        let result = validate_transition(
            CaseState::Investigating,
            CaseState::PendingResponse,
            &base.with_evidence(true),
        );
        assert!(result.valid);
    }

    #[test]
    fn test_steward_cannot_negotiate() {
        let result = validate_transition(
            CaseState::PendingResponse,
            CaseState::Negotiating,
            &TransitionContext::new(ActorRole::Steward),
        );
        assert_eq!(result.error_kind, Some(ErrorKind::InsufficientPermissions));

        let result = validate_transition(
            CaseState::PendingResponse,
            CaseState::Negotiating,
            &TransitionContext::new(ActorRole::Officer),
        );
        assert!(result.valid);
    }

    #[test]
    fn test_only_admin_closes_from_acknowledged() {
        let steward = validate_transition(
            CaseState::Acknowledged,
            CaseState::Closed,
            &TransitionContext::new(ActorRole::Steward),
        );
        assert_eq!(steward.error_kind, Some(ErrorKind::InsufficientPermissions));

        let admin = validate_transition(
            CaseState::Acknowledged,
            CaseState::Closed,
            &TransitionContext::new(ActorRole::Admin),
        );
        assert!(admin.valid);
    }

    #[test]
    fn test_member_cannot_withdraw_directly() {
        let submitted = validate_transition(
            CaseState::Submitted,
            CaseState::Withdrawn,
            &TransitionContext::new(ActorRole::Member),
        );
        assert_eq!(submitted.error_kind, Some(ErrorKind::InsufficientPermissions));

        let acknowledged = validate_transition(
            CaseState::Acknowledged,
            CaseState::Withdrawn,
            &TransitionContext::new(ActorRole::Member),
        );
        assert_eq!(acknowledged.error_kind, Some(ErrorKind::InvalidStateTransition));
    }

    #[test]
    fn test_configured_sla_threshold() {
        let registry = TransitionRegistry::from_config(&WorkflowConfig {
            acknowledgment_sla_days: 5.0,
            ..Default::default()
        })
        .unwrap();

        let ctx = TransitionContext::new(ActorRole::Officer).with_days(3.0);
        assert!(registry
            .validate_transition(CaseState::Submitted, CaseState::Acknowledged, &ctx)
            .valid);

        let ctx = TransitionContext::new(ActorRole::Officer).with_days(5.5);
        let result =
            registry.validate_transition(CaseState::Submitted, CaseState::Acknowledged, &ctx);
        assert!(result.message.unwrap().contains("within 5 business days"));
    }

    #[test]
    fn test_error_kind_codes() {
        assert_eq!(ErrorKind::InvalidStateTransition.code(), "INVALID_STATE_TRANSITION");
        assert_eq!(ErrorKind::InsufficientPermissions.code(), "INSUFFICIENT_PERMISSIONS");
        assert_eq!(ErrorKind::SlaExpired.code(), "SLA_EXPIRED");
        assert_eq!(ErrorKind::MissingRequiredField.code(), "MISSING_REQUIRED_FIELD");
        assert_eq!(ErrorKind::PathContractViolation.code(), "PATH_CONTRACT_VIOLATION");
        assert_eq!(
            serde_json::to_string(&ErrorKind::SlaExpired).unwrap(),
            "\"SLA_EXPIRED\""
        );
    }

    #[test]
    fn test_valid_result_serializes_without_error_fields() {
        let json = serde_json::to_string(&ValidationResult::success()).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
    }
}
