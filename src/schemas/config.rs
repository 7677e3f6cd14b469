//! Config schema - Tunable thresholds for the case workflow

use serde::{Deserialize, Serialize};

/// Configuration for building a transition registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum days a case may sit in `submitted` before acknowledgment
    /// is no longer permitted. Measured in whatever unit the caller's
    /// deadline computation uses (business days by default).
    #[serde(default = "default_acknowledgment_sla_days")]
    pub acknowledgment_sla_days: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_acknowledgment_sla_days() -> f64 {
    2.0
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        WorkflowConfig {
            schema_version: default_schema_version(),
            acknowledgment_sla_days: default_acknowledgment_sla_days(),
        }
    }
}
