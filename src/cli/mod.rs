//! CLI module for case-workflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{ActorRole, CaseState};

/// case-workflow - Check union case transitions against the workflow rules
#[derive(Parser, Debug)]
#[command(name = "case-workflow")]
#[command(version)]
#[command(about = "Check union case transitions against the workflow rules")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a JSON workflow config (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a single transition
    Check {
        /// Current state
        from: CaseState,

        /// Proposed state
        to: CaseState,

        /// Role of the acting user (member, steward, officer, admin)
        #[arg(long)]
        role: ActorRole,

        /// Days the case has spent in its current state
        #[arg(long)]
        days: Option<f64>,

        /// Confirm the case evidence is sufficient
        #[arg(long)]
        evidence: bool,
    },

    /// Validate a sequence of states
    Path {
        /// States in order, at least two
        #[arg(required = true, num_args = 1..)]
        states: Vec<CaseState>,

        /// JSON file holding one context per transition
        #[arg(long, conflicts_with = "role")]
        contexts: Option<PathBuf>,

        /// Use this role for every transition instead of a contexts file
        #[arg(long)]
        role: Option<ActorRole>,
    },

    /// Replay a stored case history from the initial state
    Replay {
        /// Path to the case history JSON file
        file: PathBuf,

        /// Write the replay report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the states a case can move to next
    Next {
        /// Current state
        state: CaseState,

        /// Only show moves this role may make
        #[arg(long)]
        role: Option<ActorRole>,
    },

    /// Describe a state
    Describe {
        /// State to describe
        state: CaseState,
    },
}
