//! Case history schema - A stored sequence of transitions for audit replay

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::TransitionContext;

use super::CaseState;

/// One recorded move in a case's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedTransition {
    /// State the case moved into
    pub to: CaseState,

    /// Context the move was made under
    pub context: TransitionContext,

    /// When the move was committed (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Full transition history of a single case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseHistory {
    /// Case identifier, carried through for reporting
    pub case_id: String,

    /// State the history starts from; the workflow's initial state if omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<CaseState>,

    /// Recorded transitions in commit order
    #[serde(default)]
    pub transitions: Vec<RecordedTransition>,
}

impl CaseHistory {
    /// Flatten the history into the state path and per-hop contexts the
    /// path validator expects.
    pub fn to_path(&self, default_initial: CaseState) -> (Vec<CaseState>, Vec<TransitionContext>) {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        path.push(self.initial.unwrap_or(default_initial));
        let mut contexts = Vec::with_capacity(self.transitions.len());
        for recorded in &self.transitions {
            path.push(recorded.to);
            contexts.push(recorded.context.clone());
        }
        (path, contexts)
    }
}
