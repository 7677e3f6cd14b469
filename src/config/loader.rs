//! Configuration loading with defaults

use std::path::Path;

use crate::domain::TransitionRegistry;
use crate::errors::Result;
use crate::fs;
use crate::schemas::WorkflowConfig;

/// Load configuration from `path`, falling back to defaults.
///
/// A missing file yields the default configuration. Fields absent from
/// the file take their default values.
pub fn load_config(path: &Path) -> Result<WorkflowConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(WorkflowConfig::default());
    }
    fs::read_json(path)
}

/// Build the transition registry the process will use for its lifetime.
///
/// Without a config path the registry uses default thresholds.
pub fn load_registry(path: Option<&Path>) -> Result<TransitionRegistry> {
    match path {
        Some(path) => TransitionRegistry::from_config(&load_config(path)?),
        None => Ok(TransitionRegistry::standard()),
    }
}
