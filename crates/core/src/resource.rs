//! Lifecycle hooks for the `random_uuid` resource.
//!
//! The host framework calls these hooks and owns everything around them: planning, diffing
//! `keepers`, persisting state and reporting errors to the operator. Each hook either returns
//! complete state or an error; no hook returns partial state.

use crate::constants::RESOURCE_TYPE;
use crate::schema::{uuid_resource_schema, ResourceSchema};
use crate::state::{ResourceConfig, UuidState};
use crate::{ResourceError, ResourceResult};
use random_uuid::{canonicalise, CanonicalUuid, UuidError, UuidResult};
use std::collections::BTreeMap;

/// The capability set a host framework expects from a resource type.
pub trait Resource {
    type Config;
    type State;

    /// Type name the host uses to address this resource.
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> ResourceSchema;

    fn create(&self, config: Self::Config) -> ResourceResult<Self::State>;

    /// Refresh state from the outside world.
    fn read(&self, state: Self::State) -> ResourceResult<Self::State>;

    fn delete(&self, state: Self::State) -> ResourceResult<()>;

    /// Build state for an existing object identified by `id`.
    fn import(&self, id: &str) -> ResourceResult<Self::State>;
}

/// A resource whose only output is a random UUID.
#[derive(Clone, Copy, Debug)]
pub struct UuidResource {
    generator: fn() -> UuidResult<CanonicalUuid>,
}

impl Default for UuidResource {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidResource {
    /// Creates a resource that draws UUIDs from the operating system's secure random source.
    pub fn new() -> Self {
        Self {
            generator: CanonicalUuid::generate,
        }
    }

    /// Creates a resource that obtains new UUIDs from `generator`.
    pub fn with_generator(generator: fn() -> UuidResult<CanonicalUuid>) -> Self {
        Self { generator }
    }
}

impl Resource for UuidResource {
    type Config = ResourceConfig;
    type State = UuidState;

    fn type_name(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn schema(&self) -> ResourceSchema {
        uuid_resource_schema()
    }

    fn create(&self, config: ResourceConfig) -> ResourceResult<UuidState> {
        let uuid = (self.generator)().map_err(ResourceError::Generate)?;

        tracing::info!(id = %uuid, keepers = config.keepers.len(), "created {}", RESOURCE_TYPE);
        Ok(UuidState::new(uuid, config.keepers))
    }

    fn read(&self, state: UuidState) -> ResourceResult<UuidState> {
        // Nothing outside the state can drift.
        tracing::debug!(id = %state.id(), "read {}", RESOURCE_TYPE);
        Ok(state)
    }

    fn delete(&self, state: UuidState) -> ResourceResult<()> {
        tracing::info!(id = %state.id(), "deleted {}", RESOURCE_TYPE);
        Ok(())
    }

    fn import(&self, id: &str) -> ResourceResult<UuidState> {
        let rejected = |source: UuidError| {
            tracing::warn!(input = id, "rejected {} import", RESOURCE_TYPE);
            ResourceError::Import {
                input: id.to_string(),
                source,
            }
        };

        // Parse then format, so stored text comes from the same encoder as created values.
        let result = canonicalise(id).map_err(rejected)?;
        let uuid = CanonicalUuid::parse(&result).map_err(rejected)?;

        tracing::info!(id = %uuid, "imported {}", RESOURCE_TYPE);
        Ok(UuidState::new(uuid, BTreeMap::new()))
    }
}
