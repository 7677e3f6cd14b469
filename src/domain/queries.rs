//! Read-only questions about case states

use crate::schemas::CaseState;

/// The state every new case starts in.
pub const INITIAL_STATE: CaseState = CaseState::Draft;

/// The only state with no way out.
pub const TERMINAL_STATE: CaseState = CaseState::Closed;

pub fn get_initial_state() -> CaseState {
    INITIAL_STATE
}

/// Check if a state is the terminal state (closed).
pub fn is_terminal_state(state: CaseState) -> bool {
    state == TERMINAL_STATE
}

/// Check if a case in `state` represents ongoing work for staff.
///
/// Drafts are not yet visible to staff; resolved, withdrawn and closed
/// cases need no further work.
pub fn is_active_state(state: CaseState) -> bool {
    matches!(
        state,
        CaseState::Submitted
            | CaseState::Acknowledged
            | CaseState::Investigating
            | CaseState::PendingResponse
            | CaseState::Negotiating
            | CaseState::Escalated
    )
}

/// Check if a case in `state` is likely on an SLA clock or stalled.
pub fn requires_urgent_attention(state: CaseState) -> bool {
    matches!(
        state,
        CaseState::Submitted | CaseState::PendingResponse | CaseState::Escalated
    )
}

pub fn get_state_description(state: CaseState) -> &'static str {
    match state {
        CaseState::Draft => "case is being prepared and not yet visible to staff",
        CaseState::Submitted => "awaiting acknowledgment by staff",
        CaseState::Acknowledged => "receipt confirmed by staff, investigation not yet started",
        CaseState::Investigating => "staff are gathering facts and evidence",
        CaseState::PendingResponse => "awaiting a response from the employer or other party",
        CaseState::Negotiating => "settlement negotiations in progress",
        CaseState::Escalated => "referred to arbitration",
        CaseState::Resolved => "an outcome has been reached",
        CaseState::Withdrawn => "withdrawn before an outcome was reached",
        CaseState::Closed => "case is closed and no further changes are permitted",
    }
}
