//! JSON state file used by the local host harness.
//!
//! A real host framework keeps resource state in its own store. This file format exists so the
//! lifecycle hooks can be driven end-to-end from the command line.
//!
//! ```text
//! {
//!   "version": 1,
//!   "resources": {
//!     "random_uuid.app": {
//!       "type": "random_uuid",
//!       "state": { "id": "…", "result": "…" }
//!     }
//!   }
//! }
//! ```

use crate::constants::STATE_FORMAT_VERSION;
use crate::state::UuidState;
use crate::{ResourceError, ResourceResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// State recorded for one resource address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub state: UuidState,
}

/// All tracked resources, keyed by address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFile {
    version: u32,
    #[serde(default)]
    resources: BTreeMap<String, StateEntry>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: STATE_FORMAT_VERSION,
            resources: BTreeMap::new(),
        }
    }
}

impl StateFile {
    /// Load state from `path`. A missing file is treated as empty state.
    pub fn load(path: &Path) -> ResourceResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no state file at {}, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(ResourceError::FileRead(e)),
        };

        let file: Self =
            serde_json::from_str(&contents).map_err(ResourceError::Deserialization)?;

        if file.version != STATE_FORMAT_VERSION {
            return Err(ResourceError::InvalidInput(format!(
                "unsupported state file version {} in {}",
                file.version,
                path.display()
            )));
        }

        Ok(file)
    }

    /// Write state to `path`, replacing the previous file in one rename.
    pub fn save(&self, path: &Path) -> ResourceResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(ResourceError::Serialization)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(ResourceError::FileWrite)?;
        }

        let tmp = temp_path(path);
        fs::write(&tmp, json).map_err(ResourceError::FileWrite)?;
        fs::rename(&tmp, path).map_err(ResourceError::FileWrite)?;

        Ok(())
    }

    pub fn get(&self, address: &str) -> ResourceResult<&StateEntry> {
        self.resources
            .get(address)
            .ok_or_else(|| ResourceError::AddressNotFound(address.to_string()))
    }

    pub fn contains(&self, address: &str) -> bool {
        self.resources.contains_key(address)
    }

    /// Track a new resource. Existing addresses are never overwritten.
    pub fn insert(&mut self, address: &str, entry: StateEntry) -> ResourceResult<()> {
        if self.contains(address) {
            return Err(ResourceError::AddressExists(address.to_string()));
        }
        self.resources.insert(address.to_string(), entry);
        Ok(())
    }

    pub fn remove(&mut self, address: &str) -> ResourceResult<StateEntry> {
        self.resources
            .remove(address)
            .ok_or_else(|| ResourceError::AddressNotFound(address.to_string()))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &StateEntry)> {
        self.resources.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
