//! SDP SCTP Map Attribute
//!
//! Implements the sctpmap attribute from draft-ietf-mmusic-sctp-sdp-06.
//! Format: a=sctpmap:<number> <app> [max-message-size=<N>] [streams=<N>]
//!
//! The older draft form `a=sctpmap:5000 webrtc-datachannel 1024`, where the
//! bare trailing number is the stream count, is accepted on input.

use crate::attributes::common::{decimal, separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, opt},
    sequence::{preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sctpmap {
    /// SCTP port, used as the format identifier on the m= line
    pub number: u32,
    /// Application protocol, e.g. "webrtc-datachannel"
    pub app: String,
    /// 0 when absent
    pub max_message_size: u32,
    /// 0 when absent
    pub streams: u32,
}

/// All a=sctpmap lines of one media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SctpmapList {
    pub sctpmaps: Vec<Sctpmap>,
}

impl SctpmapList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(
        &mut self,
        number: u32,
        app: impl Into<String>,
        max_message_size: u32,
        streams: u32,
    ) {
        self.sctpmaps.push(Sctpmap {
            number,
            app: app.into(),
            max_message_size,
            streams,
        });
    }

    pub fn has_entry(&self, number: u32) -> bool {
        self.sctpmaps.iter().any(|s| s.number == number)
    }

    pub(crate) fn upsert(&mut self, sctpmap: Sctpmap) {
        match self.sctpmaps.iter_mut().find(|s| s.number == sctpmap.number) {
            Some(existing) => *existing = sctpmap,
            None => self.sctpmaps.push(sctpmap),
        }
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for sctpmap in &self.sctpmaps {
            write!(out, "a={}:{} {}", AttributeKind::Sctpmap, sctpmap.number, sctpmap.app)?;
            if sctpmap.max_message_size != 0 {
                write!(out, " max-message-size={}", sctpmap.max_message_size)?;
            }
            if sctpmap.streams != 0 {
                write!(out, " streams={}", sctpmap.streams)?;
            }
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

fn streams_parser(input: &str) -> IResult<&str, u32> {
    alt((preceded(tag("streams="), decimal::<u32>), decimal::<u32>))(input)
}

fn sctpmap_parser(input: &str) -> IResult<&str, Sctpmap> {
    map(
        tuple((
            decimal::<u32>,
            preceded(separator, token),
            opt(preceded(separator, preceded(tag("max-message-size="), decimal::<u32>))),
            opt(preceded(separator, streams_parser)),
        )),
        |(number, app, max_message_size, streams): (u32, &str, Option<u32>, Option<u32>)| {
            Sctpmap {
                number,
                app: app.to_string(),
                max_message_size: max_message_size.unwrap_or(0),
                streams: streams.unwrap_or(0),
            }
        },
    )(input)
}

/// Parses sctpmap attribute: <number> <app> [max-message-size=N] [streams=N | N]
pub fn parse_sctpmap(value: &str) -> Result<Sctpmap> {
    to_result(sctpmap_parser(value.trim()), AttributeKind::Sctpmap, value)
}
