//! Resource configuration and state for `random_uuid`.

use crate::{ResourceError, ResourceResult};
use random_uuid::CanonicalUuid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied configuration for a `random_uuid` resource.
///
/// `keepers` carries no meaning here. The host compares it between plans and recreates the
/// resource when it changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    #[serde(default)]
    pub keepers: BTreeMap<String, String>,
}

impl ResourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keeper(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keepers.insert(key.into(), value.into());
        self
    }
}

impl FromIterator<(String, String)> for ResourceConfig {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            keepers: iter.into_iter().collect(),
        }
    }
}

/// Parse a `key=value` keeper argument.
///
/// The value may be empty and may itself contain `=`; the key may not be empty.
pub fn parse_keeper(arg: &str) -> ResourceResult<(String, String)> {
    let (key, value) = arg.split_once('=').ok_or_else(|| {
        ResourceError::InvalidInput(format!("keeper must be in key=value form, got: '{arg}'"))
    })?;

    if key.trim().is_empty() {
        return Err(ResourceError::InvalidInput(format!(
            "keeper key cannot be empty: '{arg}'"
        )));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Stored state of a `random_uuid` resource.
///
/// `id` and `result` are always the same canonical UUID. Values are only produced by the
/// lifecycle hooks, and deserialisation rejects state where the two differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUuidState")]
pub struct UuidState {
    id: CanonicalUuid,
    result: CanonicalUuid,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    keepers: BTreeMap<String, String>,
}

impl UuidState {
    pub(crate) fn new(uuid: CanonicalUuid, keepers: BTreeMap<String, String>) -> Self {
        Self {
            id: uuid,
            result: uuid,
            keepers,
        }
    }

    pub fn id(&self) -> CanonicalUuid {
        self.id
    }

    pub fn result(&self) -> CanonicalUuid {
        self.result
    }

    pub fn keepers(&self) -> &BTreeMap<String, String> {
        &self.keepers
    }
}

#[derive(Deserialize)]
struct RawUuidState {
    id: CanonicalUuid,
    result: CanonicalUuid,
    #[serde(default)]
    keepers: BTreeMap<String, String>,
}

impl TryFrom<RawUuidState> for UuidState {
    type Error = String;

    fn try_from(raw: RawUuidState) -> Result<Self, Self::Error> {
        if raw.id != raw.result {
            return Err(format!(
                "state id '{}' does not match result '{}'",
                raw.id, raw.result
            ));
        }
        Ok(UuidState::new(raw.result, raw.keepers))
    }
}
