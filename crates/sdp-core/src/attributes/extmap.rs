//! SDP Extmap Attribute
//!
//! Implements the RTP header extension map attribute defined in RFC 5285.
//! Format: a=extmap:<value>["/"<direction>] <URI> <extensionattributes>
//!
//! mapentry = "extmap:" 1*5DIGIT ["/" direction]
//! direction = "sendonly" / "recvonly" / "sendrecv" / "inactive"

use crate::attributes::common::{byte_string, decimal, non_space, separator, to_result};
use crate::attributes::{AttributeKind, MediaDirection};
use crate::error::Result;
use nom::{
    character::complete::{alpha1, char},
    combinator::{map, map_opt, opt, verify},
    sequence::{preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One header extension mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extmap {
    /// Local identifier, 1..=65535
    pub entry: u16,
    /// Direction, omitted from the line when absent
    pub direction: Option<MediaDirection>,
    /// Extension URI
    pub extension_name: String,
    /// Extension-specific attributes, omitted when absent
    pub extension_attributes: Option<String>,
}

/// All a=extmap lines of one level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtmapList {
    pub extmaps: Vec<Extmap>,
}

impl ExtmapList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mapping
    ///
    /// # Panics
    ///
    /// Panics if `entry` is 0, which RFC 5285 reserves.
    pub fn push_entry(
        &mut self,
        entry: u16,
        direction: Option<MediaDirection>,
        extension_name: impl Into<String>,
        extension_attributes: Option<String>,
    ) {
        assert!(entry != 0, "extmap entry 0 is reserved");
        self.extmaps.push(Extmap {
            entry,
            direction,
            extension_name: extension_name.into(),
            extension_attributes,
        });
    }

    /// Finds a mapping by its identifier
    pub fn get(&self, entry: u16) -> Option<&Extmap> {
        self.extmaps.iter().find(|e| e.entry == entry)
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for extmap in &self.extmaps {
            write!(out, "a={}:{}", AttributeKind::Extmap, extmap)?;
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

impl fmt::Display for Extmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entry)?;
        if let Some(direction) = self.direction {
            write!(f, "/{}", direction)?;
        }
        write!(f, " {}", self.extension_name)?;
        if let Some(attributes) = &self.extension_attributes {
            write!(f, " {}", attributes)?;
        }
        Ok(())
    }
}

fn entry_parser(input: &str) -> IResult<&str, u16> {
    verify(decimal::<u16>, |entry| *entry != 0)(input)
}

fn direction_parser(input: &str) -> IResult<&str, MediaDirection> {
    map_opt(alpha1, MediaDirection::from_token)(input)
}

fn extmap_parser(input: &str) -> IResult<&str, Extmap> {
    map(
        tuple((
            entry_parser,
            opt(preceded(char('/'), direction_parser)),
            preceded(separator, non_space),
            opt(preceded(separator, byte_string)),
        )),
        |(entry, direction, name, attributes)| Extmap {
            entry,
            direction,
            extension_name: name.to_string(),
            extension_attributes: attributes.map(|a| a.trim_end().to_string()),
        },
    )(input)
}

/// Parses extmap attribute: <entry>[/<direction>] <uri> [<attributes>]
pub fn parse_extmap(value: &str) -> Result<Extmap> {
    to_result(extmap_parser(value.trim()), AttributeKind::Extmap, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extmap() {
        let extmap = parse_extmap("1 urn:ietf:params:rtp-hdrext:ssrc-audio-level").unwrap();
        assert_eq!(extmap.entry, 1);
        assert_eq!(extmap.direction, None);
        assert_eq!(extmap.extension_name, "urn:ietf:params:rtp-hdrext:ssrc-audio-level");
        assert_eq!(extmap.extension_attributes, None);

        let extmap = parse_extmap("2/sendonly urn:ietf:params:rtp-hdrext:toffset vad=on").unwrap();
        assert_eq!(extmap.entry, 2);
        assert_eq!(extmap.direction, Some(MediaDirection::SendOnly));
        assert_eq!(extmap.extension_attributes.as_deref(), Some("vad=on"));

        assert!(parse_extmap("65535 urn:x").is_ok());
        assert!(parse_extmap("0 urn:x").is_err());
        assert!(parse_extmap("65536 urn:x").is_err());
        assert!(parse_extmap("3/sideways urn:x").is_err());
        assert!(parse_extmap("4").is_err());
        assert!(parse_extmap("urn:x").is_err());
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let mut list = ExtmapList::new();
        list.push_entry(1, None, "urn:a", None);
        list.push_entry(3, Some(MediaDirection::RecvOnly), "urn:b", Some("x y".to_string()));

        let mut out = String::new();
        list.serialize(&mut out, "\r\n").unwrap();
        assert_eq!(out, "a=extmap:1 urn:a\r\na=extmap:3/recvonly urn:b x y\r\n");
        assert_eq!(list.get(3).map(|e| e.extension_name.as_str()), Some("urn:b"));
        assert!(list.get(2).is_none());
    }

    #[test]
    #[should_panic(expected = "reserved")]
    fn test_entry_zero_panics() {
        ExtmapList::new().push_entry(0, None, "urn:a", None);
    }
}
