//! Case state and actor role enumerations

use serde::{Deserialize, Serialize};

/// Workflow state of a union case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseState {
    /// Initial state - case is being prepared by the member
    Draft,
    /// Filed by the member, waiting for staff
    Submitted,
    /// Staff confirmed receipt
    Acknowledged,
    /// Facts are being gathered
    Investigating,
    /// Waiting on the employer or other party to respond
    PendingResponse,
    /// Settlement talks in progress
    Negotiating,
    /// Referred to arbitration
    Escalated,
    /// Outcome reached
    Resolved,
    /// Pulled by the member before an outcome
    Withdrawn,
    /// Terminal state
    Closed,
}

impl CaseState {
    /// Every case state, in lifecycle order.
    pub const ALL: [CaseState; 10] = [
        CaseState::Draft,
        CaseState::Submitted,
        CaseState::Acknowledged,
        CaseState::Investigating,
        CaseState::PendingResponse,
        CaseState::Negotiating,
        CaseState::Escalated,
        CaseState::Resolved,
        CaseState::Withdrawn,
        CaseState::Closed,
    ];

    /// The snake_case wire name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseState::Draft => "draft",
            CaseState::Submitted => "submitted",
            CaseState::Acknowledged => "acknowledged",
            CaseState::Investigating => "investigating",
            CaseState::PendingResponse => "pending_response",
            CaseState::Negotiating => "negotiating",
            CaseState::Escalated => "escalated",
            CaseState::Resolved => "resolved",
            CaseState::Withdrawn => "withdrawn",
            CaseState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for CaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CaseState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseState::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("Unknown case state: {}", s))
    }
}

/// Role of the party attempting a transition.
///
/// Roles carry no implicit ranking; every transition rule lists the roles
/// it permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Member,
    Steward,
    Officer,
    Admin,
}

impl ActorRole {
    pub const ALL: [ActorRole; 4] = [
        ActorRole::Member,
        ActorRole::Steward,
        ActorRole::Officer,
        ActorRole::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Member => "member",
            ActorRole::Steward => "steward",
            ActorRole::Officer => "officer",
            ActorRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActorRole::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown actor role: {}", s))
    }
}
