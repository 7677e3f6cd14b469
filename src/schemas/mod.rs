//! Schema types for the case workflow
//!
//! Plain serde value types shared by the decision core and the CLI.

mod config;
mod history;
mod state;

pub use config::WorkflowConfig;
pub use history::{CaseHistory, RecordedTransition};
pub use state::{ActorRole, CaseState};
