//! Constants used throughout the core crate.

/// Type name the host uses to address the UUID resource.
pub const RESOURCE_TYPE: &str = "random_uuid";

/// Schema version of the `random_uuid` resource.
pub const SCHEMA_VERSION: u64 = 0;

/// Environment variable selecting the local state file.
pub const STATE_FILE_ENV: &str = "RANDOM_STATE_FILE";

/// State file used when no explicit path is configured.
pub const DEFAULT_STATE_FILE: &str = "random-state.json";

/// Format version written into the local state file.
pub const STATE_FORMAT_VERSION: u32 = 1;
