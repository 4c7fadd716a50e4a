//! SDP RTCP Feedback Attribute
//!
//! Implements the rtcp-fb attribute defined in RFC 4585.
//! Format: a=rtcp-fb:<rtcp-fb-pt> SP <rtcp-fb-val>
//!
//! rtcp-fb-pt = "*" / fmt
//! rtcp-fb-val = "ack" / "app" / "ccm" / "nack" / "trr-int", followed by
//! optional parameters that are kept as one opaque string.

use crate::attributes::common::{byte_string, separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{
    combinator::{map, map_opt, opt},
    sequence::{preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RtcpFbType {
    Ack,
    App,
    Ccm,
    Nack,
    TrrInt,
}

impl RtcpFbType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RtcpFbType::Ack => "ack",
            RtcpFbType::App => "app",
            RtcpFbType::Ccm => "ccm",
            RtcpFbType::Nack => "nack",
            RtcpFbType::TrrInt => "trr-int",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ack" => Some(RtcpFbType::Ack),
            "app" => Some(RtcpFbType::App),
            "ccm" => Some(RtcpFbType::Ccm),
            "nack" => Some(RtcpFbType::Nack),
            "trr-int" => Some(RtcpFbType::TrrInt),
            _ => None,
        }
    }
}

impl fmt::Display for RtcpFbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcpFb {
    /// Payload type, or "*" for all formats
    pub pt: String,
    pub fb_type: RtcpFbType,
    /// Everything after the type; empty when there is nothing
    pub parameters: String,
}

/// All a=rtcp-fb lines of one media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RtcpFbList {
    pub feedbacks: Vec<RtcpFb>,
}

impl RtcpFbList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(
        &mut self,
        pt: impl Into<String>,
        fb_type: RtcpFbType,
        parameters: impl Into<String>,
    ) {
        self.feedbacks.push(RtcpFb {
            pt: pt.into(),
            fb_type,
            parameters: parameters.into(),
        });
    }

    /// Feedback entries that apply to `pt`, including wildcard ones
    pub fn for_payload_type<'a>(&'a self, pt: &'a str) -> impl Iterator<Item = &'a RtcpFb> + 'a {
        self.feedbacks.iter().filter(move |fb| fb.pt == pt || fb.pt == "*")
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for fb in &self.feedbacks {
            write!(out, "a={}:{} {}", AttributeKind::RtcpFb, fb.pt, fb.fb_type)?;
            if !fb.parameters.is_empty() {
                write!(out, " {}", fb.parameters)?;
            }
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

fn rtcp_fb_parser(input: &str) -> IResult<&str, RtcpFb> {
    map(
        tuple((
            token,
            preceded(separator, map_opt(token, RtcpFbType::from_token)),
            opt(preceded(separator, byte_string)),
        )),
        |(pt, fb_type, parameters): (&str, RtcpFbType, Option<&str>)| RtcpFb {
            pt: pt.to_string(),
            fb_type,
            parameters: parameters.map(|p| p.trim_end().to_string()).unwrap_or_default(),
        },
    )(input)
}

/// Parses rtcp-fb attribute: <pt> <type> [<parameters>]
pub fn parse_rtcp_fb(value: &str) -> Result<RtcpFb> {
    to_result(rtcp_fb_parser(value.trim()), AttributeKind::RtcpFb, value)
}
