//! Domain logic for case workflow states and transitions

mod path;
mod queries;
mod registry;
mod validation;


pub use path::validate_workflow_path;
pub use queries::{
    get_initial_state, get_state_description, is_active_state, is_terminal_state,
    requires_urgent_attention, INITIAL_STATE, TERMINAL_STATE,
};
pub use registry::{
    allowed_transitions, allowed_transitions_for_role, default_registry, required_roles,
    transition_rule, Precondition, TransitionRegistry, TransitionRule,
};
pub use validation::{validate_transition, ErrorKind, TransitionContext, ValidationResult};
