use random_uuid::UuidError;

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("error generating uuid: {0}")]
    Generate(#[source] UuidError),
    #[error("error parsing uuid bytes: {source}")]
    Import {
        input: String,
        #[source]
        source: UuidError,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported resource type: {0}")]
    UnknownResourceType(String),
    #[error("resource already exists in state: {0}")]
    AddressExists(String),
    #[error("resource not found in state: {0}")]
    AddressNotFound(String),
    #[error("failed to read state file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write state file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize state: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize state: {0}")]
    Deserialization(serde_json::Error),
}

pub type ResourceResult<T> = std::result::Result<T, ResourceError>;
