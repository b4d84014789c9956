//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into [`crate::LocalHost`].
//! Lifecycle hooks never read environment variables.

use crate::constants::DEFAULT_STATE_FILE;
use crate::{ResourceError, ResourceResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    state_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(state_file: PathBuf) -> ResourceResult<Self> {
        if state_file.as_os_str().is_empty() {
            return Err(ResourceError::InvalidInput(
                "state file path cannot be empty".into(),
            ));
        }
        if state_file.is_dir() {
            return Err(ResourceError::InvalidInput(format!(
                "state file path is a directory: {}",
                state_file.display()
            )));
        }

        Ok(Self { state_file })
    }

    pub fn state_file(&self) -> &Path {
        &self.state_file
    }
}

/// Resolve the state file path from an optional override and environment value.
///
/// An explicit override wins; otherwise a non-blank `env_value` is used; otherwise
/// [`DEFAULT_STATE_FILE`] in the current directory.
pub fn state_file_from_env_value(
    override_path: Option<PathBuf>,
    env_value: Option<String>,
) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
}
