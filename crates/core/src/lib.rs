//! # Random Core
//!
//! Lifecycle glue for the `random_uuid` resource.
//!
//! This crate contains:
//! - The declarative schema the host framework validates and diffs against
//! - The [`Resource`] hook trait and its one implementation, [`UuidResource`]
//! - Resource configuration (`keepers`) and state (`id` and `result`)
//! - A local host harness that persists state to a JSON file
//!
//! **No codec logic**: UUID generation and canonical encoding live in `random-uuid`.

pub mod config;
pub mod constants;
mod error;
pub mod host;
pub mod resource;
pub mod schema;
pub mod state;
pub mod state_file;

pub use config::CoreConfig;
pub use error::{ResourceError, ResourceResult};
pub use host::LocalHost;
pub use resource::{Resource, UuidResource};
pub use schema::{uuid_resource_schema, Attribute, AttributeType, ResourceSchema};
pub use state::{parse_keeper, ResourceConfig, UuidState};
pub use state_file::{StateEntry, StateFile};
