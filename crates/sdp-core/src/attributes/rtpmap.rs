//! SDP RTP Map Attribute
//!
//! Implements the rtpmap attribute defined in RFC 4566.
//! Format: a=rtpmap:<payload type> <encoding name>/<clock rate>[/<encoding parameters>]
//!
//! The encoding parameters are the channel count for audio codecs. A count
//! of 0 means "not given" and is left off the line.

use crate::attributes::common::{decimal, positive_integer, separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{
    character::complete::char,
    combinator::{map, opt},
    sequence::{preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rtpmap {
    pub pt: String,
    pub name: String,
    pub clock: u32,
    /// 0 when absent
    pub channels: u32,
}

impl fmt::Display for Rtpmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.pt, self.name, self.clock)?;
        if self.channels != 0 {
            write!(f, "/{}", self.channels)?;
        }
        Ok(())
    }
}

/// All a=rtpmap lines of one media section, keyed by payload type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RtpmapList {
    pub rtpmaps: Vec<Rtpmap>,
}

impl RtpmapList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(
        &mut self,
        pt: impl Into<String>,
        name: impl Into<String>,
        clock: u32,
        channels: u32,
    ) {
        self.rtpmaps.push(Rtpmap {
            pt: pt.into(),
            name: name.into(),
            clock,
            channels,
        });
    }

    pub fn has_entry(&self, pt: &str) -> bool {
        self.rtpmaps.iter().any(|r| r.pt == pt)
    }

    /// Entry for `pt`; the first one wins if the payload type repeats
    ///
    /// # Panics
    ///
    /// Panics if there is no entry for `pt`. Check with `has_entry` first.
    pub fn get_entry(&self, pt: &str) -> &Rtpmap {
        match self.rtpmaps.iter().find(|r| r.pt == pt) {
            Some(rtpmap) => rtpmap,
            None => panic!("no rtpmap entry for payload type {}", pt),
        }
    }

    /// Replaces the entry for `pt` in place, or appends one
    pub(crate) fn upsert(&mut self, rtpmap: Rtpmap) {
        match self.rtpmaps.iter_mut().find(|r| r.pt == rtpmap.pt) {
            Some(existing) => *existing = rtpmap,
            None => self.rtpmaps.push(rtpmap),
        }
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for rtpmap in &self.rtpmaps {
            write!(out, "a={}:{}", AttributeKind::Rtpmap, rtpmap)?;
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

/// Parser for encoding name; '/' is not a token character
fn encoding_name(input: &str) -> IResult<&str, &str> {
    token(input)
}

fn rtpmap_parser(input: &str) -> IResult<&str, Rtpmap> {
    map(
        tuple((
            token,
            preceded(separator, encoding_name),
            preceded(char('/'), positive_integer),
            opt(preceded(char('/'), decimal::<u32>)),
        )),
        |(pt, name, clock, channels): (&str, &str, u32, Option<u32>)| Rtpmap {
            pt: pt.to_string(),
            name: name.to_string(),
            clock,
            channels: channels.unwrap_or(0),
        },
    )(input)
}

/// Parses rtpmap attribute: <payload type> <encoding name>/<clock rate>[/<channels>]
pub fn parse_rtpmap(value: &str) -> Result<Rtpmap> {
    to_result(rtpmap_parser(value.trim()), AttributeKind::Rtpmap, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtpmap_attribute_comprehensive() {
        let rtpmap = parse_rtpmap("111 opus/48000/2").unwrap();
        assert_eq!(rtpmap.pt, "111");
        assert_eq!(rtpmap.name, "opus");
        assert_eq!(rtpmap.clock, 48000);
        assert_eq!(rtpmap.channels, 2);

        let rtpmap = parse_rtpmap("96 H264/90000").unwrap();
        assert_eq!(rtpmap.channels, 0);
        assert!(parse_rtpmap("101 telephone-event/8000").is_ok());

        // Missing space
        assert!(parse_rtpmap("96H264/90000").is_err());
        // Missing clock rate
        assert!(parse_rtpmap("96 H264").is_err());
        // Non-numeric clock rate
        assert!(parse_rtpmap("96 H264/clock").is_err());
        // Trailing junk
        assert!(parse_rtpmap("96 H264/90000/1/2").is_err());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let mut list = RtpmapList::new();
        list.push_entry("96", "VP8", 90000, 0);
        list.push_entry("96", "VP9", 90000, 0);
        assert!(list.has_entry("96"));
        assert!(!list.has_entry("97"));
        assert_eq!(list.get_entry("96").name, "VP8");
    }

    #[test]
    #[should_panic(expected = "no rtpmap entry for payload type 8")]
    fn test_get_absent_entry_panics() {
        let mut list = RtpmapList::new();
        list.push_entry("0", "PCMU", 8000, 0);
        let _ = list.get_entry("8");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut list = RtpmapList::new();
        list.push_entry("0", "PCMU", 8000, 0);
        list.push_entry("8", "PCMA", 8000, 0);
        list.upsert(Rtpmap { pt: "0".into(), name: "PCMU".into(), clock: 16000, channels: 1 });
        assert_eq!(list.rtpmaps.len(), 2);
        assert_eq!(list.rtpmaps[0].clock, 16000);

        let mut out = String::new();
        list.serialize(&mut out, "\r\n").unwrap();
        assert_eq!(out, "a=rtpmap:0 PCMU/16000/1\r\na=rtpmap:8 PCMA/8000\r\n");
    }
}
