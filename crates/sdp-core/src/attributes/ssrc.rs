//! SDP SSRC Attribute
//!
//! Implements the ssrc attribute defined in RFC 5576.
//! Format: a=ssrc:<ssrc-id> <attribute>[:<value>]
//!
//! The source attribute and its value are kept as one opaque string.

use crate::attributes::common::{byte_string, decimal, separator, to_result};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{combinator::map, sequence::separated_pair, IResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ssrc {
    pub ssrc: u32,
    /// e.g. "cname:user@example.com"
    pub attribute: String,
}

/// All a=ssrc lines of one media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SsrcList {
    pub ssrcs: Vec<Ssrc>,
}

impl SsrcList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(&mut self, ssrc: u32, attribute: impl Into<String>) {
        self.ssrcs.push(Ssrc {
            ssrc,
            attribute: attribute.into(),
        });
    }

    /// Distinct source ids, in first-seen order
    pub fn ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        for entry in &self.ssrcs {
            if !ids.contains(&entry.ssrc) {
                ids.push(entry.ssrc);
            }
        }
        ids
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for entry in &self.ssrcs {
            write!(out, "a={}:{} {}", AttributeKind::Ssrc, entry.ssrc, entry.attribute)?;
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

fn ssrc_parser(input: &str) -> IResult<&str, Ssrc> {
    map(
        separated_pair(decimal::<u32>, separator, byte_string),
        |(ssrc, attribute): (u32, &str)| Ssrc {
            ssrc,
            attribute: attribute.trim_end().to_string(),
        },
    )(input)
}

/// Parses ssrc attribute: <ssrc-id> <attribute>[:<value>]
pub fn parse_ssrc(value: &str) -> Result<Ssrc> {
    to_result(ssrc_parser(value.trim()), AttributeKind::Ssrc, value)
}
