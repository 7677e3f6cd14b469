//! Case workflow - the state machine governing how a union case moves
//! from draft to closure
//!
//! This library provides:
//! - Schema definitions for case states, actor roles, config and histories
//! - The transition registry, single-step and path validators
//! - Read-only queries (terminal, active, urgent, descriptions)
//! - Config loading and JSON file helpers for the CLI
//!
//! Validation is pure: verdicts are returned as values and nothing is
//! persisted here.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use domain::{
    validate_transition, validate_workflow_path, ErrorKind, TransitionContext,
    TransitionRegistry, ValidationResult,
};
pub use errors::{CaseWorkflowError, Result};
pub use schemas::{ActorRole, CaseState, WorkflowConfig};
