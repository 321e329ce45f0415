mod state;

pub use state::PlannerState;

use std::path::PathBuf;

use crate::error::StateError;

/// Returns `~/.config/dayblock[-dev]/` based on DAYBLOCK_ENV.
///
/// Set DAYBLOCK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StateError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYBLOCK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dayblock-dev")
    } else {
        base_dir.join("dayblock")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StateError::DataDir(e.to_string()))?;
    Ok(dir)
}
