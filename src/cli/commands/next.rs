//! Next command - List possible moves from a state

use serde::Serialize;

use crate::domain::{Precondition, TransitionRegistry};
use crate::errors::Result;
use crate::schemas::{ActorRole, CaseState};

use super::to_json;

#[derive(Debug, Serialize)]
struct NextMove<'a> {
    to: CaseState,
    roles: Vec<ActorRole>,
    preconditions: &'a [Precondition],
}

fn next_moves(
    registry: &TransitionRegistry,
    state: CaseState,
    role: Option<ActorRole>,
) -> Vec<NextMove<'_>> {
    let targets = match role {
        Some(role) => registry.allowed_transitions_for_role(state, role),
        None => registry.allowed_transitions(state),
    };

    targets
        .into_iter()
        .filter_map(|to| {
            registry.transition_rule(state, to).map(|rule| NextMove {
                to,
                roles: rule.allowed_roles.iter().copied().collect(),
                preconditions: &rule.preconditions,
            })
        })
        .collect()
}

/// Print the states reachable from `state`, optionally filtered by role
pub fn run(
    registry: &TransitionRegistry,
    state: CaseState,
    role: Option<ActorRole>,
    json: bool,
) -> Result<()> {
    let moves = next_moves(registry, state, role);

    if json {
        println!("{}", to_json(&moves)?);
        return Ok(());
    }

    if moves.is_empty() {
        println!("no transitions available from {}", state);
        return Ok(());
    }

    for next in &moves {
        let roles = next
            .roles
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join("|");
        let requirements = next
            .preconditions
            .iter()
            .map(Precondition::describe)
            .collect::<Vec<_>>();
        if requirements.is_empty() {
            println!("{} -> {} [{}]", state, next.to, roles);
        } else {
            println!(
                "{} -> {} [{}] {}",
                state,
                next.to,
                roles,
                requirements.join("; ")
            );
        }
    }
    Ok(())
}
