//! SDP Fingerprint Attribute
//!
//! Implements the certificate fingerprint attribute defined in RFC 4572.
//! Format: a=fingerprint:<hash-func> <fingerprint>
//!
//! hash-func = "sha-1" / "sha-224" / "sha-256" / "sha-384" / "sha-512" /
//!             "md5" / "md2" / token
//! fingerprint = 2UHEX *(":" 2UHEX)
//!
//! Only the syntax and the algorithm name are checked here. Matching the
//! fingerprint against the peer certificate happens in the DTLS layer.

use crate::attributes::common::{separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::{Error, Result};
use nom::{
    character::complete::{char, hex_digit1},
    combinator::{map, verify},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash function of a certificate fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Md5,
    Md2,
    /// Any name outside the table above
    Unknown,
}

impl HashAlgorithm {
    /// Maps a hash function name, case-sensitively
    pub fn from_name(name: &str) -> Self {
        match name {
            "sha-1" => HashAlgorithm::Sha1,
            "sha-224" => HashAlgorithm::Sha224,
            "sha-256" => HashAlgorithm::Sha256,
            "sha-384" => HashAlgorithm::Sha384,
            "sha-512" => HashAlgorithm::Sha512,
            "md5" => HashAlgorithm::Md5,
            "md2" => HashAlgorithm::Md2,
            _ => HashAlgorithm::Unknown,
        }
    }

    /// # Panics
    ///
    /// Panics for `Unknown`, which no stored fingerprint can carry.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha-1",
            HashAlgorithm::Sha224 => "sha-224",
            HashAlgorithm::Sha256 => "sha-256",
            HashAlgorithm::Sha384 => "sha-384",
            HashAlgorithm::Sha512 => "sha-512",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Md2 => "md2",
            HashAlgorithm::Unknown => panic!("unknown hash algorithm has no textual form"),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What `push_entry` does with an implausible entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FingerprintMode {
    /// Panic: the caller built the entry itself, so a bad one is a bug
    Strict,
    /// Drop the entry: it came from input that was already validated
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub hash_func: HashAlgorithm,
    /// Colon separated hex bytes
    pub fingerprint: String,
}

/// All a=fingerprint lines of one level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FingerprintList {
    pub fingerprints: Vec<Fingerprint>,
}

impl FingerprintList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fingerprint given its textual algorithm name
    ///
    /// An entry whose algorithm is not in the known table, or whose
    /// fingerprint is empty, panics in `Strict` mode and is discarded in
    /// `Lenient` mode.
    pub fn push_entry(&mut self, algorithm: &str, fingerprint: &str, mode: FingerprintMode) {
        let hash_func = HashAlgorithm::from_name(algorithm);
        if hash_func == HashAlgorithm::Unknown || fingerprint.is_empty() {
            match mode {
                FingerprintMode::Strict => panic!(
                    "implausible fingerprint: algorithm {:?}, value {:?}",
                    algorithm, fingerprint
                ),
                FingerprintMode::Lenient => return,
            }
        }
        self.fingerprints.push(Fingerprint {
            hash_func,
            fingerprint: fingerprint.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for fp in &self.fingerprints {
            write!(
                out,
                "a={}:{} {}",
                AttributeKind::Fingerprint,
                fp.hash_func,
                fp.fingerprint
            )?;
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

/// Parser for fingerprint value (colon-separated hex values)
fn fingerprint_value_parser(input: &str) -> IResult<&str, String> {
    map(
        separated_list1(char(':'), verify(hex_digit1, |hex: &str| hex.len() <= 2)),
        |segments| segments.join(":"),
    )(input)
}

fn fingerprint_parser(input: &str) -> IResult<&str, (&str, String)> {
    separated_pair(token, separator, fingerprint_value_parser)(input)
}

/// Parses fingerprint attribute syntax: <hash-func> <fingerprint>
///
/// Returns the raw algorithm name and value; the algorithm is resolved by
/// `FingerprintList::push_entry`.
pub fn parse_fingerprint(value: &str) -> Result<(String, String)> {
    to_result(fingerprint_parser(value.trim()), AttributeKind::Fingerprint, value)
        .map(|(hash, fingerprint)| (hash.to_string(), fingerprint))
}

/// Parses one fingerprint line into a list, leniently
///
/// Fails when the syntax is wrong or when the entry was discarded.
pub(crate) fn parse_fingerprint_list(value: &str) -> Result<FingerprintList> {
    let (hash, fingerprint) = parse_fingerprint(value)?;
    let mut list = FingerprintList::new();
    list.push_entry(&hash, &fingerprint, FingerprintMode::Lenient);
    if list.is_empty() {
        return Err(Error::invalid_attribute(AttributeKind::Fingerprint.name(), value));
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA256: &str = "19:E2:1C:3B:4B:9F:81:E6:B8:5C:F4:A5:A8:D8:73:04:BB:05:2F:70:9F:04:A9:0E:05:E9:26:33:E8:70:88:A2";

    #[test]
    fn test_algorithm_table_is_case_sensitive() {
        assert_eq!(HashAlgorithm::from_name("sha-256"), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::from_name("md2"), HashAlgorithm::Md2);
        assert_eq!(HashAlgorithm::from_name("SHA-256"), HashAlgorithm::Unknown);
        assert_eq!(HashAlgorithm::from_name("sha-3"), HashAlgorithm::Unknown);
    }

    #[test]
    fn test_push_entry_modes() {
        let mut list = FingerprintList::new();
        list.push_entry("sha-256", SHA256, FingerprintMode::Strict);
        assert_eq!(list.len(), 1);

        list.push_entry("not-an-algorithm", "", FingerprintMode::Lenient);
        list.push_entry("sha-1", "", FingerprintMode::Lenient);
        list.push_entry("whirlpool", "AA:BB", FingerprintMode::Lenient);
        assert_eq!(list.len(), 1);
        assert_eq!(list.fingerprints[0].hash_func, HashAlgorithm::Sha256);
    }

    #[test]
    #[should_panic(expected = "implausible fingerprint")]
    fn test_strict_unknown_algorithm_panics() {
        FingerprintList::new().push_entry("not-an-algorithm", "AA:BB", FingerprintMode::Strict);
    }

    #[test]
    #[should_panic(expected = "implausible fingerprint")]
    fn test_strict_empty_fingerprint_panics() {
        FingerprintList::new().push_entry("sha-1", "", FingerprintMode::Strict);
    }

    #[test]
    #[should_panic(expected = "no textual form")]
    fn test_unknown_algorithm_cannot_render() {
        let _ = HashAlgorithm::Unknown.to_string();
    }

    #[test]
    fn test_parse_fingerprint() {
        let (hash, fp) = parse_fingerprint(&format!("sha-256 {}", SHA256)).unwrap();
        assert_eq!(hash, "sha-256");
        assert_eq!(fp, SHA256);

        assert!(parse_fingerprint("sha-256").is_err());
        assert!(parse_fingerprint("sha-256 ZZ:11").is_err());
        assert!(parse_fingerprint("sha-256 ABC:11").is_err());

        assert!(parse_fingerprint_list("sha-1 AA:BB").is_ok());
        assert!(parse_fingerprint_list("foo AA:BB").is_err());
    }

    #[test]
    fn test_serialize() {
        let mut list = FingerprintList::new();
        list.push_entry("sha-1", "AA:BB", FingerprintMode::Strict);
        list.push_entry("sha-512", "CC", FingerprintMode::Strict);
        let mut out = String::new();
        list.serialize(&mut out, "\n").unwrap();
        assert_eq!(out, "a=fingerprint:sha-1 AA:BB\na=fingerprint:sha-512 CC\n");
    }
}
