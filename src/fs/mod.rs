//! File system utilities for the case workflow CLI
//!
//! Provides JSON file operations.

mod json;

pub use json::{read_case_history, read_json, write_json};
