//! TOML-based persisted planner state.
//!
//! One record holds everything the planner needs to start a session: the
//! day-type tag, the raw calendar text, the task registry, and the
//! free-form day note. Stored at `~/.config/dayblock/state.toml`.
//!
//! Loading is best-effort: hosts call [`PlannerState::load_or_default`] and
//! get an empty state on any failure, so storage problems never reach the
//! planning logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::day_type::DayType;
use crate::error::StateError;
use crate::task::TaskRegistry;

/// The single persisted planner record.
///
/// Every field carries a serde default so partial or older records still
/// load; the task registry round-trips losslessly, including absent review
/// fields and the id counter.
// Scalar fields stay ahead of the registry table so the TOML serializer
// never has to emit a value after a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerState {
    #[serde(default)]
    pub day_type: DayType,
    /// Raw, newline-delimited calendar text as the user typed it.
    #[serde(default)]
    pub calendar_text: String,
    /// Free-form end-of-day summary note.
    #[serde(default)]
    pub day_note: String,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tasks: TaskRegistry,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            day_type: DayType::default(),
            calendar_text: String::new(),
            day_note: String::new(),
            updated_at: Utc::now(),
            tasks: TaskRegistry::new(),
        }
    }
}

impl PlannerState {
    fn path() -> Result<PathBuf, StateError> {
        Ok(data_dir()?.join("state.toml"))
    }

    /// Load from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file is missing, unreadable, or does
    /// not parse. Hosts normally map all of these to a default state.
    pub fn load() -> Result<Self, StateError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from disk, returning default state on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be serialized or written.
    pub fn save(&self) -> Result<(), StateError> {
        self.save_to(&Self::path()?)
    }

    /// Refresh the record's modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn load_from(path: &Path) -> Result<Self, StateError> {
        let content = std::fs::read_to_string(path).map_err(|source| StateError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| StateError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn save_to(&self, path: &Path) -> Result<(), StateError> {
        let content = toml::to_string_pretty(self).map_err(|e| StateError::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| StateError::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::ReviewStatus;

    #[test]
    fn roundtrip_preserves_every_field() {
        let mut state = PlannerState::default();
        state.day_type = DayType::Creative;
        state.calendar_text = "09:30-10:00 Standup\n15:00 1:1\n".to_string();
        state.day_note = "Good day overall".to_string();
        let a = state.tasks.add("Write report", 90).unwrap();
        let b = state.tasks.add("Email pass", 30).unwrap();
        state.tasks.set_important(a, true);
        state
            .tasks
            .set_review(b, Some(ReviewStatus::Delayed), Some("ran long".into()));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        state.save_to(&path).unwrap();
        let loaded = PlannerState::load_from(&path).unwrap();

        assert_eq!(loaded.day_type, DayType::Creative);
        assert_eq!(loaded.calendar_text, state.calendar_text);
        assert_eq!(loaded.day_note, state.day_note);
        assert_eq!(loaded.tasks, state.tasks);
        // Absent optional review fields stay absent.
        assert_eq!(loaded.tasks.get(a).unwrap().review_status, None);
    }

    #[test]
    fn missing_file_is_an_error_mapped_to_default_by_the_host() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            PlannerState::load_from(&path),
            Err(StateError::ReadFailed { .. })
        ));
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            PlannerState::load_from(&path),
            Err(StateError::ParseFailed { .. })
        ));
    }

    #[test]
    fn partial_record_loads_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "day_type = \"light\"\n").unwrap();

        let loaded = PlannerState::load_from(&path).unwrap();
        assert_eq!(loaded.day_type, DayType::Light);
        assert!(loaded.calendar_text.is_empty());
        assert!(loaded.tasks.is_empty());
    }
}
