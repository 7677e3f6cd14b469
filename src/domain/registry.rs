//! Transition registry - the authoritative case workflow graph
//!
//! Every permitted move is an explicit edge keyed by `(from, to)` carrying
//! its own role set and preconditions:
//!
//! ```text
//! draft            -> submitted
//! submitted        -> acknowledged | withdrawn
//! acknowledged     -> investigating | closed
//! investigating    -> pending_response | resolved | withdrawn | closed
//! pending_response -> negotiating | escalated
//! escalated        -> resolved
//! resolved         -> closed
//! withdrawn        -> closed
//! ```
//!
//! A registry is built once and never mutated afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::Serialize;

use crate::errors::{CaseWorkflowError, Result};
use crate::schemas::{ActorRole, CaseState, WorkflowConfig};

/// Roles that handle a case once it has been filed.
const STAFF: &[ActorRole] = &[ActorRole::Steward, ActorRole::Officer, ActorRole::Admin];

/// A named check evaluated against the caller's context
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Precondition {
    /// The case must not have been in its current state for longer than `max_days`
    SlaWindow { max_days: f64 },
    /// The caller must confirm evidence is sufficient
    SufficientEvidence,
}

impl Precondition {
    /// Human-readable requirement text.
    pub fn describe(&self) -> String {
        match self {
            Precondition::SlaWindow { max_days } => {
                format!("must occur within {} business days", max_days)
            }
            Precondition::SufficientEvidence => "requires sufficient evidence".to_string(),
        }
    }
}

/// Authorization and preconditions attached to one edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRule {
    /// Roles permitted to execute the transition
    pub allowed_roles: BTreeSet<ActorRole>,

    /// Checks evaluated in order after authorization
    pub preconditions: Vec<Precondition>,
}

impl TransitionRule {
    pub fn permits(&self, role: ActorRole) -> bool {
        self.allowed_roles.contains(&role)
    }
}

/// Immutable table of every configured edge
#[derive(Debug, Clone)]
pub struct TransitionRegistry {
    rules: BTreeMap<(CaseState, CaseState), TransitionRule>,
}

static STANDARD: LazyLock<TransitionRegistry> = LazyLock::new(TransitionRegistry::standard);

/// The shared registry built from default configuration.
pub fn default_registry() -> &'static TransitionRegistry {
    &STANDARD
}

impl TransitionRegistry {
    /// Build the registry with default thresholds.
    pub fn standard() -> Self {
        Self::build(&WorkflowConfig::default())
    }

    /// Build the registry with thresholds taken from `config`.
    ///
    /// # Errors
    /// * `ConfigError` - If the SLA threshold is negative or not finite
    pub fn from_config(config: &WorkflowConfig) -> Result<Self> {
        let days = config.acknowledgment_sla_days;
        if !days.is_finite() || days < 0.0 {
            return Err(CaseWorkflowError::ConfigError(format!(
                "acknowledgment_sla_days must be a non-negative number, got {}",
                days
            )));
        }
        Ok(Self::build(config))
    }

    fn build(config: &WorkflowConfig) -> Self {
        use ActorRole::*;
        use CaseState::*;

        let mut registry = TransitionRegistry {
            rules: BTreeMap::new(),
        };

        registry.edge(Draft, Submitted, &[Member], vec![]);

        registry.edge(
            Submitted,
            Acknowledged,
            &[Officer, Steward, Admin],
            vec![Precondition::SlaWindow {
                max_days: config.acknowledgment_sla_days,
            }],
        );
        registry.edge(Submitted, Withdrawn, STAFF, vec![]);

        registry.edge(Acknowledged, Investigating, STAFF, vec![]);
        registry.edge(Acknowledged, Closed, &[Admin], vec![]);

        registry.edge(
            Investigating,
            PendingResponse,
            STAFF,
            vec![Precondition::SufficientEvidence],
        );
        registry.edge(Investigating, Resolved, STAFF, vec![]);
        registry.edge(Investigating, Withdrawn, STAFF, vec![]);
        registry.edge(Investigating, Closed, &[Admin], vec![]);

        // Stewards hand off to officers for negotiation.
        registry.edge(PendingResponse, Negotiating, &[Officer, Admin], vec![]);
        registry.edge(PendingResponse, Escalated, STAFF, vec![]);

        registry.edge(Escalated, Resolved, STAFF, vec![]);
        registry.edge(Resolved, Closed, STAFF, vec![]);
        registry.edge(Withdrawn, Closed, STAFF, vec![]);

        registry
    }

    fn edge(
        &mut self,
        from: CaseState,
        to: CaseState,
        roles: &[ActorRole],
        preconditions: Vec<Precondition>,
    ) {
        self.rules.insert(
            (from, to),
            TransitionRule {
                allowed_roles: roles.iter().copied().collect(),
                preconditions,
            },
        );
    }

    fn outgoing(&self, from: CaseState) -> impl Iterator<Item = (CaseState, &TransitionRule)> {
        self.rules
            .range((from, CaseState::Draft)..=(from, CaseState::Closed))
            .map(|(&(_, to), rule)| (to, rule))
    }

    /// Destinations reachable from `state` in one move. Empty for `closed`.
    pub fn allowed_transitions(&self, state: CaseState) -> BTreeSet<CaseState> {
        self.outgoing(state).map(|(to, _)| to).collect()
    }

    /// Destinations from `state` that `role` is authorized to move a case to.
    pub fn allowed_transitions_for_role(
        &self,
        state: CaseState,
        role: ActorRole,
    ) -> BTreeSet<CaseState> {
        self.outgoing(state)
            .filter(|(_, rule)| rule.permits(role))
            .map(|(to, _)| to)
            .collect()
    }

    /// The rule for a configured edge, or `None` if no such edge exists.
    pub fn transition_rule(&self, from: CaseState, to: CaseState) -> Option<&TransitionRule> {
        self.rules.get(&(from, to))
    }

    /// Union of roles across every outward edge of `from`.
    pub fn required_roles(&self, from: CaseState) -> BTreeSet<ActorRole> {
        self.outgoing(from)
            .flat_map(|(_, rule)| rule.allowed_roles.iter().copied())
            .collect()
    }

    /// Every configured edge with its rule, ordered by `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (CaseState, CaseState, &TransitionRule)> {
        self.rules.iter().map(|(&(from, to), rule)| (from, to, rule))
    }
}

impl Default for TransitionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Allowed destinations from `state` in the shared registry.
pub fn allowed_transitions(state: CaseState) -> BTreeSet<CaseState> {
    default_registry().allowed_transitions(state)
}

/// Role-filtered allowed destinations from `state` in the shared registry.
pub fn allowed_transitions_for_role(state: CaseState, role: ActorRole) -> BTreeSet<CaseState> {
    default_registry().allowed_transitions_for_role(state, role)
}

/// Rule for `(from, to)` in the shared registry.
pub fn transition_rule(from: CaseState, to: CaseState) -> Option<&'static TransitionRule> {
    default_registry().transition_rule(from, to)
}

/// Roles that may act on a case in `from`, per the shared registry.
pub fn required_roles(from: CaseState) -> BTreeSet<ActorRole> {
    default_registry().required_roles(from)
}
