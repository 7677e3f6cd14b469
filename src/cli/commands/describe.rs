//! Describe command - Show what a state means

use serde::Serialize;

use crate::domain::{
    get_state_description, is_active_state, is_terminal_state, requires_urgent_attention,
    TransitionRegistry,
};
use crate::errors::Result;
use crate::schemas::{ActorRole, CaseState};

use super::to_json;

#[derive(Debug, Serialize)]
struct StateSummary {
    state: CaseState,
    description: &'static str,
    terminal: bool,
    active: bool,
    urgent: bool,
    acting_roles: Vec<ActorRole>,
}

fn summarize(registry: &TransitionRegistry, state: CaseState) -> StateSummary {
    StateSummary {
        state,
        description: get_state_description(state),
        terminal: is_terminal_state(state),
        active: is_active_state(state),
        urgent: requires_urgent_attention(state),
        acting_roles: registry.required_roles(state).into_iter().collect(),
    }
}

/// Print the description and status flags of `state`
pub fn run(registry: &TransitionRegistry, state: CaseState, json: bool) -> Result<()> {
    let summary = summarize(registry, state);

    if json {
        println!("{}", to_json(&summary)?);
        return Ok(());
    }

    println!("{}: {}", summary.state, summary.description);
    println!("  terminal: {}", summary.terminal);
    println!("  active:   {}", summary.active);
    println!("  urgent:   {}", summary.urgent);
    if !summary.acting_roles.is_empty() {
        let roles = summary
            .acting_roles
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  roles:    {}", roles);
    }
    Ok(())
}
