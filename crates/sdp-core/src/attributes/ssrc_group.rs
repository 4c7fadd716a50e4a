//! SDP SSRC Group Attribute
//!
//! Implements the ssrc-group attribute defined in RFC 5576.
//! Format: a=ssrc-group:<semantics> *(SP <ssrc-id>)

use crate::attributes::common::{decimal, separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{
    combinator::{map, map_opt},
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SsrcGroupSemantics {
    /// Forward error correction (RFC 5576)
    Fec,
    /// Flow identification (RFC 5576)
    Fid,
    /// FEC framework (RFC 5956)
    FecFr,
    /// Duplication (RFC 7104)
    Dup,
}

impl SsrcGroupSemantics {
    pub fn as_str(&self) -> &'static str {
        match self {
            SsrcGroupSemantics::Fec => "FEC",
            SsrcGroupSemantics::Fid => "FID",
            SsrcGroupSemantics::FecFr => "FEC-FR",
            SsrcGroupSemantics::Dup => "DUP",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "FEC" => Some(SsrcGroupSemantics::Fec),
            "FID" => Some(SsrcGroupSemantics::Fid),
            "FEC-FR" => Some(SsrcGroupSemantics::FecFr),
            "DUP" => Some(SsrcGroupSemantics::Dup),
            _ => None,
        }
    }
}

impl fmt::Display for SsrcGroupSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsrcGroup {
    pub semantics: SsrcGroupSemantics,
    pub ssrcs: Vec<u32>,
}

/// All a=ssrc-group lines of one media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SsrcGroupList {
    pub groups: Vec<SsrcGroup>,
}

impl SsrcGroupList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(&mut self, semantics: SsrcGroupSemantics, ssrcs: Vec<u32>) {
        self.groups.push(SsrcGroup { semantics, ssrcs });
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for group in &self.groups {
            write!(out, "a={}:{}", AttributeKind::SsrcGroup, group.semantics)?;
            for ssrc in &group.ssrcs {
                write!(out, " {}", ssrc)?;
            }
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

fn ssrc_group_parser(input: &str) -> IResult<&str, SsrcGroup> {
    map(
        pair(
            map_opt(token, SsrcGroupSemantics::from_token),
            many0(preceded(separator, decimal::<u32>)),
        ),
        |(semantics, ssrcs)| SsrcGroup { semantics, ssrcs },
    )(input)
}

/// Parses ssrc-group attribute: <semantics> *(SP <ssrc-id>)
pub fn parse_ssrc_group(value: &str) -> Result<SsrcGroup> {
    to_result(ssrc_group_parser(value.trim()), AttributeKind::SsrcGroup, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ssrc_group() {
        let group = parse_ssrc_group("FID 1234 5678").unwrap();
        assert_eq!(group.semantics, SsrcGroupSemantics::Fid);
        assert_eq!(group.ssrcs, vec![1234, 5678]);

        let group = parse_ssrc_group("FEC-FR 1 2").unwrap();
        assert_eq!(group.semantics, SsrcGroupSemantics::FecFr);

        assert!(parse_ssrc_group("SIM 1 2 3").is_err());
        assert!(parse_ssrc_group("FID 1 x").is_err());
        assert!(parse_ssrc_group("FID 4294967296").is_err());
    }

    #[test]
    fn test_serialize() {
        let mut list = SsrcGroupList::new();
        list.push_entry(SsrcGroupSemantics::Dup, vec![7, 8]);
        let mut out = String::new();
        list.serialize(&mut out, "\r\n").unwrap();
        assert_eq!(out, "a=ssrc-group:DUP 7 8\r\n");
    }
}
