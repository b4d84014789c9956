//! UUID generation and canonical text encoding.
//!
//! The `random_uuid` resource stores a UUID as both its identifier and its `result` attribute.
//! Whether the value was generated or imported, the stored text is always the *canonical*
//! form: **36 lower-case hexadecimal characters in 8-4-4-4-12 hyphenated groups**.
//!
//! This crate provides:
//! - [`generate`]: a fresh random (version 4, RFC 4122 variant) UUID in canonical form.
//! - [`parse`] / [`format`]: the decode/encode pair that import uses to canonicalise
//!   externally supplied text.
//! - [`CanonicalUuid`]: a wrapper type that *guarantees* the canonical form once constructed.
//!
//! ## Canonical UUID form
//! - Length: 36
//! - Hyphens at offsets 8, 13, 18 and 23
//! - Characters: `0-9`, `a-f` and `-` only
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! ## Accepted input
//! [`parse`] is more permissive than the canonical form:
//! - hex digits may be upper or lower case
//! - an optional `urn:uuid:` prefix (any case) is stripped
//!
//! It does not inspect the version or variant bits, so any syntactically valid UUID is
//! accepted and round-trips unchanged apart from casing.

mod canonical;
mod codec;

// Re-export public types
pub use canonical::CanonicalUuid;
pub use codec::{
    canonicalise, format, generate, generate_bytes, generate_bytes_with, generate_with, parse,
    HYPHENATED_LEN, URN_PREFIX, UUID_LEN,
};
pub use rand::Error as RandError;

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// The secure random source could not supply entropy.
    #[error("failed to read random bytes: {0}")]
    Generation(#[source] rand::Error),

    /// Input text is not a well-formed UUID.
    #[error("invalid uuid '{input}': {reason}")]
    Format { input: String, reason: &'static str },

    /// Wrong number of bytes passed to [`format`].
    #[error("uuid must be 16 bytes, got {0}")]
    Length(usize),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
