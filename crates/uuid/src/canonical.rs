//! Wrapper type for UUIDs that are known to be in canonical form.

use crate::codec;
use crate::{UuidError, UuidResult};
use ::uuid::Uuid;
use std::{fmt, str::FromStr};

/// A UUID whose textual form is the canonical lower-case hyphenated encoding.
///
/// This wrapper type guarantees that once constructed, displaying the value produces the
/// 36-character string from [`codec::format`]. `Display` calls that function directly, so
/// created and imported values share one encoding path.
///
/// # Construction
/// - [`CanonicalUuid::generate`] creates a fresh random value (resource creation).
/// - [`CanonicalUuid::parse`] validates externally supplied text (resource import). Upper-case
///   digits and a `urn:uuid:` prefix are accepted and normalised away.
/// - [`CanonicalUuid::from_bytes`] wraps 16 raw bytes.
///
/// # Serialisation
/// With the `serde` feature, the value serialises as its canonical string and deserialises
/// through [`CanonicalUuid::parse`], so malformed state is rejected on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalUuid(Uuid);

impl CanonicalUuid {
    /// Generates a new random version 4 UUID.
    ///
    /// # Returns
    ///
    /// Returns the wrapped bytes from [`codec::generate_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Generation`] if the secure random source fails.
    pub fn generate() -> UuidResult<Self> {
        codec::generate_bytes().map(Self::from_bytes)
    }

    /// Validates UUID text and wraps it.
    ///
    /// # Arguments
    ///
    /// * `input` - UUID text in 8-4-4-4-12 form, any case, optionally prefixed by `urn:uuid:`.
    ///
    /// # Returns
    ///
    /// Returns a [`CanonicalUuid`] holding the decoded bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Format`] if `input` is not a well-formed UUID.
    pub fn parse(input: &str) -> UuidResult<Self> {
        codec::parse(input).map(Self::from_bytes)
    }

    /// Wraps 16 raw bytes. Any bit pattern is accepted.
    pub fn from_bytes(bytes: [u8; codec::UUID_LEN]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; codec::UUID_LEN] {
        self.0.as_bytes()
    }

    /// Returns the version number stored in the UUID's version nibble.
    ///
    /// Generated values are always version 4; imported values may carry any version.
    pub fn version(&self) -> usize {
        self.0.get_version_num()
    }
}

impl fmt::Display for CanonicalUuid {
    /// Formats the UUID in canonical form (36 lower-case characters, hyphenated).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always 16 bytes, so the length check cannot fail.
        let text = codec::format(self.as_bytes()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for CanonicalUuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalUuid::parse(s)
    }
}

impl TryFrom<&[u8]> for CanonicalUuid {
    type Error = UuidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; codec::UUID_LEN] = bytes
            .try_into()
            .map_err(|_| UuidError::Length(bytes.len()))?;
        Ok(Self::from_bytes(array))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CanonicalUuid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CanonicalUuid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        CanonicalUuid::parse(&text).map_err(serde::de::Error::custom)
    }
}
