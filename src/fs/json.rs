//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{CaseWorkflowError, Result};
use crate::schemas::CaseHistory;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON or does not match the expected shape
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CaseWorkflowError::FileNotFound(path.display().to_string())
        } else {
            CaseWorkflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        CaseWorkflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
///
/// # Errors
/// * `InvalidJson` - If the value cannot be serialized
/// * `Io` - If there's an error creating directories or writing the file
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| CaseWorkflowError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read a stored case history for audit replay.
pub fn read_case_history(path: &Path) -> Result<CaseHistory> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransitionContext;
    use crate::schemas::{ActorRole, CaseState, RecordedTransition};
    use tempfile::TempDir;

    fn sample_history() -> CaseHistory {
        CaseHistory {
            case_id: "case-001".to_string(),
            initial: None,
            transitions: vec![RecordedTransition {
                to: CaseState::Submitted,
                context: TransitionContext::new(ActorRole::Member),
                recorded_at: None,
            }],
        }
    }

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<CaseHistory> = read_json(&path);
        assert!(matches!(result.unwrap_err(), CaseWorkflowError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<CaseHistory> = read_json(&path);
        assert!(matches!(result.unwrap_err(), CaseWorkflowError::InvalidJson(_)));
    }

    #[test]
    fn test_read_json_unknown_state() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.json");
        fs::write(
            &path,
            r#"{"case_id": "c", "transitions": [{"to": "reopened", "context": {"actor_role": "admin"}}]}"#,
        )
        .unwrap();

        let result = read_case_history(&path);
        assert!(matches!(result.unwrap_err(), CaseWorkflowError::InvalidJson(_)));
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("history.json");

        write_json(&path, &sample_history()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_write_and_read_case_history() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.json");

        write_json(&path, &sample_history()).unwrap();

        let read = read_case_history(&path).unwrap();
        assert_eq!(read, sample_history());
    }
}
