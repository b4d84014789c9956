//! Local host harness.
//!
//! Drives the [`Resource`] hooks against a [`StateFile`]. State is written only after a hook
//! succeeds, so a failed create or import leaves the file untouched.
//!
//! Changing `keepers` on an existing address is not detected here; recreate by deleting and
//! creating again.

use crate::config::CoreConfig;
use crate::resource::{Resource, UuidResource};
use crate::state::{ResourceConfig, UuidState};
use crate::state_file::{StateEntry, StateFile};
use crate::{ResourceError, ResourceResult};

pub struct LocalHost {
    config: CoreConfig,
    resource: UuidResource,
}

impl LocalHost {
    pub fn new(config: CoreConfig) -> Self {
        Self::with_resource(config, UuidResource::new())
    }

    pub fn with_resource(config: CoreConfig, resource: UuidResource) -> Self {
        Self { config, resource }
    }

    pub fn resource(&self) -> &UuidResource {
        &self.resource
    }

    pub fn create(&self, address: &str, config: ResourceConfig) -> ResourceResult<UuidState> {
        let mut file = self.load()?;
        if file.contains(address) {
            return Err(ResourceError::AddressExists(address.to_string()));
        }

        let state = self.resource.create(config)?;
        self.track(&mut file, address, state)
    }

    pub fn import(&self, address: &str, id: &str) -> ResourceResult<UuidState> {
        let mut file = self.load()?;
        if file.contains(address) {
            return Err(ResourceError::AddressExists(address.to_string()));
        }

        let state = self.resource.import(id)?;
        self.track(&mut file, address, state)
    }

    pub fn read(&self, address: &str) -> ResourceResult<UuidState> {
        let file = self.load()?;
        let entry = file.get(address)?;
        self.check_type(entry)?;

        self.resource.read(entry.state.clone())
    }

    pub fn delete(&self, address: &str) -> ResourceResult<UuidState> {
        let mut file = self.load()?;
        let entry = file.get(address)?;
        self.check_type(entry)?;

        let entry = file.remove(address)?;
        self.resource.delete(entry.state.clone())?;
        file.save(self.config.state_file())?;

        Ok(entry.state)
    }

    /// All tracked addresses with their state.
    pub fn list(&self) -> ResourceResult<Vec<(String, UuidState)>> {
        let file = self.load()?;
        Ok(file
            .entries()
            .map(|(address, entry)| (address.to_string(), entry.state.clone()))
            .collect())
    }

    fn load(&self) -> ResourceResult<StateFile> {
        StateFile::load(self.config.state_file())
    }

    fn track(
        &self,
        file: &mut StateFile,
        address: &str,
        state: UuidState,
    ) -> ResourceResult<UuidState> {
        file.insert(
            address,
            StateEntry {
                resource_type: self.resource.type_name().to_string(),
                state: state.clone(),
            },
        )?;
        file.save(self.config.state_file())?;

        Ok(state)
    }

    fn check_type(&self, entry: &StateEntry) -> ResourceResult<()> {
        if entry.resource_type != self.resource.type_name() {
            return Err(ResourceError::UnknownResourceType(
                entry.resource_type.clone(),
            ));
        }
        Ok(())
    }
}
