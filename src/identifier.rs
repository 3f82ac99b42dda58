//! The 128-bit identifier type and its canonical text form.
//!
//! Text is always `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`: 32 hex digits in an
//! 8-4-4-4-12 grouping. Parsing accepts either letter case, rendering always
//! emits lowercase.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Error;

/// Length of the canonical text form.
pub const ENCODED_LEN: usize = 36;

/// Offsets of the four hyphens in the canonical text form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Offset of the first hex digit of each byte in the canonical text form.
const PAIRS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";

/// A 16-byte universally unique identifier.
///
/// Equality, ordering and hashing all work on the raw bytes, so two values
/// parsed from differently-cased text compare equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Wraps raw bytes without touching the version or variant bits.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds a version 4, variant 1 identifier from 16 random bytes.
    ///
    /// The high nibble of byte 6 is forced to `0100` and the top two bits of
    /// byte 8 to `10`; the remaining 122 bits are kept as given.
    #[must_use]
    pub const fn from_random_bytes(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Parses the canonical hyphenated form, in any letter case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] unless `text` is exactly 36 bytes with
    /// hyphens at offsets 8, 13, 18 and 23 and hex digits everywhere else.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let text = text.as_bytes();
        if text.len() != ENCODED_LEN || HYPHENS.iter().any(|&at| text[at] != b'-') {
            return Err(Error::InvalidFormat);
        }

        let mut bytes = [0u8; 16];
        for (byte, &at) in bytes.iter_mut().zip(PAIRS.iter()) {
            let hi = hex_value(text[at]).ok_or(Error::InvalidFormat)?;
            let lo = hex_value(text[at + 1]).ok_or(Error::InvalidFormat)?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// Parses `text`, panicking when it is malformed.
    ///
    /// Meant for literals in tests and constants, not for runtime input.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not a canonical UUID.
    #[must_use]
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        match Self::parse(text) {
            Ok(uuid) => uuid,
            Err(err) => panic!("Uuid::must_parse({text:?}): {err}"),
        }
    }

    /// The raw 16 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the identifier, returning its bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// The version number stored in the high nibble of byte 6.
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Whether the variant bits mark an RFC 4122 (variant 1) layout.
    #[must_use]
    pub const fn is_rfc4122(&self) -> bool {
        self.0[8] & 0xc0 == 0x80
    }

    fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [b'-'; ENCODED_LEN];
        for (&byte, &at) in self.0.iter().zip(PAIRS.iter()) {
            buf[at] = LOWER_HEX[usize::from(byte >> 4)];
            buf[at + 1] = LOWER_HEX[usize::from(byte & 0x0f)];
        }
        buf
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.encode();
        // Only ASCII hex digits and hyphens are ever written.
        f.pad(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({self})")
    }
}

impl FromStr for Uuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl From<::uuid::Uuid> for Uuid {
    fn from(uuid: ::uuid::Uuid) -> Self {
        Self(uuid.into_bytes())
    }
}

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(UuidVisitor)
    }
}

struct UuidVisitor;

impl Visitor<'_> for UuidVisitor {
    type Value = Uuid;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hyphenated UUID string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Uuid, E> {
        Uuid::parse(v).map_err(|err| E::custom(format_args!("{err}: {v:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parses_lowercase_and_renders_identically() {
        let text = "d21484ef-9159-4d45-bebc-9e9439f832b1";
        let uuid = Uuid::parse(text).unwrap();
        assert_eq!(uuid.to_string(), text);
        assert_eq!(uuid.as_bytes()[0], 0xd2);
        assert_eq!(uuid.as_bytes()[15], 0xb1);
    }

    #[test]
    fn uppercase_input_renders_lowercase() {
        let uuid = Uuid::parse("92BAC1D0-3079-4B96-A64D-03F6CA5B1185").unwrap();
        assert_eq!(uuid.to_string(), "92bac1d0-3079-4b96-a64d-03f6ca5b1185");
    }

    #[test]
    fn case_does_not_affect_equality() {
        let lower = Uuid::must_parse("1f508e72-3876-4086-9dae-8dfce4614c8b");
        let mixed = Uuid::must_parse("1F508e72-3876-4086-9DaE-8dfce4614C8B");
        assert_eq!(lower, mixed);

        let mut set = HashSet::new();
        set.insert(lower);
        assert!(set.contains(&mixed));
    }

    #[test]
    fn rejects_malformed_text() {
        let cases = [
            "",
            "aae4d00d-adc3-489e-9e84-0c0848352b2",
            "aae4d00d-adc3-489e-9e84-0c0848352b20\n",
            "aae4d00d0adc3-489e-9e84-0c0848352b20",
            "aae4d00d-adc3f489e-9e84-0c0848352b20",
            "aae4d00d-adc3-489ea9e84-0c0848352b20",
            "aae4d00d-adc3-489e-9e84b0c0848352b20",
            "aae4d0xd-adc3-489e-9e84-0c0848352b20",
            "aae4d00d-adc3-489e-9e84-0c0848352-20",
            "aae4d00dadc3489e9e840c0848352b20",
            "{aae4d00d-adc3-489e-9e84-0c0848352b}",
            "aae4d00d-adc3-489e-9e84-0c0848352bé",
        ];
        for case in cases {
            assert_eq!(Uuid::parse(case), Err(Error::InvalidFormat), "accepted {case:?}");
        }
    }

    #[test]
    fn from_str_matches_parse() {
        let text = "810d3661-9f7c-471a-ac09-150eeb9e19f5";
        let parsed: Uuid = text.parse().unwrap();
        assert_eq!(parsed, Uuid::parse(text).unwrap());
    }

    #[test]
    #[should_panic(expected = "invalid UUID format")]
    fn must_parse_panics_on_bad_input() {
        let _ = Uuid::must_parse("not-a-uuid");
    }

    #[test]
    fn random_bytes_get_version_and_variant() {
        let uuid = Uuid::from_random_bytes([0xff; 16]);
        assert_eq!(uuid.version(), 4);
        assert!(uuid.is_rfc4122());
        assert_eq!(uuid.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");

        let uuid = Uuid::from_random_bytes([0x00; 16]);
        assert_eq!(uuid.version(), 4);
        assert!(uuid.is_rfc4122());
        assert_eq!(uuid.to_string(), "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn debug_wraps_canonical_text() {
        let uuid = Uuid::must_parse("58e4a778-46cc-449e-b798-4c427247be14");
        assert_eq!(format!("{uuid:?}"), "Uuid(58e4a778-46cc-449e-b798-4c427247be14)");
    }

    #[test]
    fn display_honours_width() {
        let uuid = Uuid::from_bytes([0; 16]);
        let padded = format!("{uuid:>40}");
        assert_eq!(padded.len(), 40);
        assert!(padded.starts_with("    0000"));
    }

    #[test]
    fn converts_from_uuid_crate() {
        let other = ::uuid::Uuid::parse_str("8c938d8d-f312-490f-baac-a5ea2c0abb4d").unwrap();
        let ours = Uuid::from(other);
        assert_eq!(ours.to_string(), other.to_string());
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let uuid = Uuid::must_parse("92BAC1D0-3079-4B96-A64D-03F6CA5B1185");
        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, "\"92bac1d0-3079-4b96-a64d-03f6ca5b1185\"");
    }

    #[test]
    fn deserialize_error_names_the_input() {
        let err = serde_json::from_str::<Uuid>("\"aae4d0xd-adc3-489e-9e84-0c0848352b20\"")
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid UUID format"), "{err}");
        assert!(err.contains("aae4d0xd"), "{err}");
    }

    #[test]
    fn deserialize_rejects_non_strings() {
        assert!(serde_json::from_str::<Uuid>("42").is_err());
        assert!(serde_json::from_str::<Uuid>("null").is_err());
    }
}
