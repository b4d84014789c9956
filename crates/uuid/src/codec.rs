//! Generate, parse and format canonical UUID text.
//!
//! Import and creation share [`format`] as the only encoding path, so stored state has the
//! same shape whichever way the value was produced.

use crate::{UuidError, UuidResult};
use rand::{rngs::OsRng, RngCore};
use uuid::{Builder, Uuid};

/// Number of raw bytes in a UUID.
pub const UUID_LEN: usize = 16;

/// Length of the canonical hyphenated text form.
pub const HYPHENATED_LEN: usize = 36;

/// Optional prefix accepted by [`parse`] (matched case-insensitively).
pub const URN_PREFIX: &str = "urn:uuid:";

const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Generates a new random UUID in canonical form.
///
/// Reads 16 bytes from the operating system's secure random source, sets the version nibble
/// to 4 and the variant bits to RFC 4122, then encodes via [`format`].
///
/// # Returns
///
/// Returns a 36-character lower-case hyphenated UUID string.
///
/// # Errors
///
/// Returns [`UuidError::Generation`] if the OS cannot supply entropy. There is no retry and no
/// fallback to a weaker source.
pub fn generate() -> UuidResult<String> {
    generate_with(&mut OsRng)
}

/// Generates a new random UUID in canonical form using `rng` as the entropy source.
///
/// # Arguments
///
/// * `rng` - Entropy source. Its fallible [`RngCore::try_fill_bytes`] is used, so a failing
///   source is reported rather than panicking.
///
/// # Returns
///
/// Returns a 36-character lower-case hyphenated UUID string.
///
/// # Errors
///
/// Returns [`UuidError::Generation`] if `rng` fails to fill the buffer.
pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R) -> UuidResult<String> {
    let bytes = generate_bytes_with(rng)?;
    format(&bytes)
}

/// Generates the 16 raw bytes of a new random UUID from the OS secure random source.
///
/// # Returns
///
/// Returns bytes with the version nibble set to 4 and the RFC 4122 variant bits set.
///
/// # Errors
///
/// Returns [`UuidError::Generation`] if the OS cannot supply entropy.
pub fn generate_bytes() -> UuidResult<[u8; UUID_LEN]> {
    generate_bytes_with(&mut OsRng)
}

/// Generates the 16 raw bytes of a new random UUID using `rng` as the entropy source.
///
/// # Arguments
///
/// * `rng` - Entropy source, read once through [`RngCore::try_fill_bytes`].
///
/// # Returns
///
/// Returns bytes with the version nibble set to 4 and the RFC 4122 variant bits set.
///
/// # Errors
///
/// Returns [`UuidError::Generation`] if `rng` fails to fill the buffer.
pub fn generate_bytes_with<R: RngCore + ?Sized>(rng: &mut R) -> UuidResult<[u8; UUID_LEN]> {
    let mut bytes = [0u8; UUID_LEN];
    rng.try_fill_bytes(&mut bytes).map_err(UuidError::Generation)?;

    Ok(Builder::from_random_bytes(bytes).into_uuid().into_bytes())
}

/// Decodes UUID text into its 16 raw bytes.
///
/// This is a purely syntactic check. Version and variant bits are not inspected, so any
/// UUID version is accepted.
///
/// # Arguments
///
/// * `input` - UUID text in the hyphenated 8-4-4-4-12 form. Hex digits may be in either case
///   and the text may be preceded by `urn:uuid:` (any case).
///
/// # Returns
///
/// Returns the 16 decoded bytes.
///
/// # Errors
///
/// Returns [`UuidError::Format`] naming `input` when the text has the wrong length, a hyphen
/// out of place, or a non-hex character.
pub fn parse(input: &str) -> UuidResult<[u8; UUID_LEN]> {
    let body = strip_urn_prefix(input);

    if body.len() != HYPHENATED_LEN {
        return Err(format_error(input, "expected 36 characters in 8-4-4-4-12 form"));
    }

    for (offset, b) in body.bytes().enumerate() {
        if HYPHEN_OFFSETS.contains(&offset) {
            if b != b'-' {
                return Err(format_error(input, "hyphens must separate 8-4-4-4-12 groups"));
            }
        } else if !b.is_ascii_hexdigit() {
            return Err(format_error(input, "contains non-hexadecimal characters"));
        }
    }

    let uuid = Uuid::parse_str(body)
        .map_err(|_| format_error(input, "contains non-hexadecimal characters"))?;

    Ok(uuid.into_bytes())
}

/// Encodes 16 bytes as canonical lower-case hyphenated text.
///
/// # Arguments
///
/// * `bytes` - Raw UUID bytes. Must be exactly 16 long.
///
/// # Returns
///
/// Returns the 36-character canonical string, hyphens after byte offsets 4, 6, 8 and 10.
///
/// # Errors
///
/// Returns [`UuidError::Length`] if `bytes` is not exactly 16 bytes long. Call sites within
/// this workspace always pass 16 bytes.
pub fn format(bytes: &[u8]) -> UuidResult<String> {
    let uuid = Uuid::from_slice(bytes).map_err(|_| UuidError::Length(bytes.len()))?;
    Ok(uuid.hyphenated().to_string())
}

/// Rewrites accepted UUID text in canonical form.
///
/// # Arguments
///
/// * `input` - Any text [`parse`] accepts.
///
/// # Returns
///
/// Returns `format(&parse(input)?)`. Applying it to its own output returns the same string.
///
/// # Errors
///
/// Returns [`UuidError::Format`] if `input` is rejected by [`parse`].
pub fn canonicalise(input: &str) -> UuidResult<String> {
    let bytes = parse(input)?;
    format(&bytes)
}

fn strip_urn_prefix(input: &str) -> &str {
    match input.get(..URN_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(URN_PREFIX) => &input[URN_PREFIX.len()..],
        _ => input,
    }
}

fn format_error(input: &str, reason: &'static str) -> UuidError {
    UuidError::Format {
        input: input.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";
    const SAMPLE_BYTES: [u8; 16] = [
        0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00,
        0x00,
    ];

    /// Entropy source that always fails, standing in for an exhausted OS interface.
    struct DrainedEntropy;

    impl RngCore for DrainedEntropy {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::other(
                "entropy source exhausted",
            )))
        }
    }

    fn is_canonical_shape(s: &str) -> bool {
        s.len() == HYPHENATED_LEN
            && s.bytes().enumerate().all(|(i, b)| {
                if HYPHEN_OFFSETS.contains(&i) {
                    b == b'-'
                } else {
                    matches!(b, b'0'..=b'9' | b'a'..=b'f')
                }
            })
    }

    #[test]
    fn test_generate_matches_canonical_shape() {
        let generated = generate().unwrap();

        assert!(is_canonical_shape(&generated), "got {generated}");
    }

    #[test]
    fn test_generate_sets_version_and_variant() {
        for _ in 0..100 {
            let generated = generate().unwrap();
            let bytes = parse(&generated).unwrap();

            assert_eq!(bytes[6] >> 4, 0x4, "version nibble of {generated}");
            assert_eq!(bytes[8] & 0xc0, 0x80, "variant bits of {generated}");
            assert_eq!(&generated[14..15], "4");
        }
    }

    #[test]
    fn test_generate_produces_no_duplicates() {
        let values: HashSet<String> = (0..10_000).map(|_| generate().unwrap()).collect();

        assert_eq!(values.len(), 10_000);
    }

    #[test]
    fn test_generate_with_seeded_rng_is_canonical() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = generate_with(&mut rng).unwrap();
        let second = generate_with(&mut rng).unwrap();

        assert!(is_canonical_shape(&first));
        assert!(is_canonical_shape(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_surfaces_entropy_failure() {
        let result = generate_with(&mut DrainedEntropy);

        match result {
            Err(UuidError::Generation(e)) => {
                assert!(e.to_string().contains("entropy source exhausted"));
            }
            other => panic!("Expected Generation error, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_bytes_surfaces_entropy_failure() {
        assert!(matches!(
            generate_bytes_with(&mut DrainedEntropy),
            Err(UuidError::Generation(_))
        ));
    }

    #[test]
    fn test_generate_bytes_sets_version_and_variant() {
        let bytes = generate_bytes().unwrap();

        assert_eq!(bytes[6] >> 4, 0x4);
        assert_eq!(bytes[8] & 0xc0, 0x80);
    }

    #[test]
    fn test_parse_sample_returns_bytes() {
        assert_eq!(parse(SAMPLE).unwrap(), SAMPLE_BYTES);
    }

    #[test]
    fn test_format_sample_bytes() {
        assert_eq!(format(&SAMPLE_BYTES).unwrap(), SAMPLE);
    }

    #[test]
    fn test_parse_accepts_uppercase_and_mixed_case() {
        assert_eq!(
            parse("550E8400-E29B-41D4-A716-446655440000").unwrap(),
            SAMPLE_BYTES
        );
        assert_eq!(
            parse("550e8400-E29b-41D4-a716-446655440000").unwrap(),
            SAMPLE_BYTES
        );
    }

    #[test]
    fn test_parse_accepts_urn_prefix() {
        assert_eq!(
            parse("urn:uuid:550e8400-e29b-41d4-a716-446655440000").unwrap(),
            SAMPLE_BYTES
        );
        assert_eq!(
            parse("URN:UUID:550E8400-E29B-41D4-A716-446655440000").unwrap(),
            SAMPLE_BYTES
        );
    }

    #[test]
    fn test_parse_accepts_any_version() {
        // Version 1 and the nil UUID are syntactically valid and must be accepted.
        assert!(parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8").is_ok());
        assert_eq!(
            parse("00000000-0000-0000-0000-000000000000").unwrap(),
            [0u8; 16]
        );
    }

    #[test]
    fn test_parse_rejects_not_a_uuid() {
        match parse("not-a-uuid") {
            Err(UuidError::Format { input, .. }) => assert_eq!(input, "not-a-uuid"),
            other => panic!("Expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(parse("").is_err());
        assert!(parse("550e8400-e29b-41d4-a716-44665544000").is_err());
        assert!(parse("550e8400-e29b-41d4-a716-4466554400000").is_err());
        assert!(parse("urn:uuid:").is_err());
    }

    #[test]
    fn test_parse_rejects_simple_form() {
        assert!(parse("550e8400e29b41d4a716446655440000").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex_characters() {
        match parse("550e8400-e29b-41d4-a716-44665544zzzz") {
            Err(UuidError::Format { reason, .. }) => assert!(reason.contains("non-hexadecimal")),
            other => panic!("Expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_misplaced_hyphens() {
        match parse("550e8400e-29b-41d4-a716-446655440000") {
            Err(UuidError::Format { reason, .. }) => assert!(reason.contains("hyphens")),
            other => panic!("Expected Format error, got {other:?}"),
        }
        assert!(parse("550e840-0e29b-41d4-a716-446655440000").is_err());
    }

    #[test]
    fn test_parse_rejects_braced_form() {
        assert!(parse("{550e8400-e29b-41d4-a716-446655440000}").is_err());
    }

    #[test]
    fn test_parse_rejects_multibyte_characters() {
        // 36 bytes long but not ASCII hex.
        assert!(parse("550e8400-e29b-41d4-a716-4466554400é").is_err());
    }

    #[test]
    fn test_format_rejects_wrong_length() {
        match format(&[0u8; 15]) {
            Err(UuidError::Length(15)) => {}
            other => panic!("Expected Length(15), got {other:?}"),
        }
        assert!(matches!(format(&[0u8; 17]), Err(UuidError::Length(17))));
        assert!(matches!(format(&[]), Err(UuidError::Length(0))));
    }

    #[test]
    fn test_parse_of_format_returns_original_bytes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut samples = vec![[0u8; 16], [0xffu8; 16], SAMPLE_BYTES];
        for _ in 0..64 {
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            samples.push(bytes);
        }

        for bytes in samples {
            assert_eq!(parse(&format(&bytes).unwrap()).unwrap(), bytes);
        }
    }

    #[test]
    fn test_canonicalise_is_a_fixed_point() {
        let inputs = [
            SAMPLE,
            "550E8400-E29B-41D4-A716-446655440000",
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000",
            "Urn:Uuid:550E8400-e29b-41D4-A716-446655440000",
        ];

        for input in inputs {
            let once = canonicalise(input).unwrap();
            assert_eq!(once, SAMPLE);
            assert!(is_canonical_shape(&once));
            assert_eq!(canonicalise(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_format_error_message_names_input() {
        let err = canonicalise("not-a-uuid").unwrap_err();

        assert!(err.to_string().contains("'not-a-uuid'"));
    }
}
