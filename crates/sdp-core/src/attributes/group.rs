//! SDP Group Attribute
//!
//! Implements the group attribute defined in RFC 5888.
//! Format: a=group:<semantics> *(SP <identification-tag>)
//!
//! Each group is written on a single line carrying all of its tags.

use crate::attributes::common::{separator, to_result, token};
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

/// Grouping semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupSemantics {
    /// Lip synchronization (RFC 5888)
    Ls,
    /// Flow identification (RFC 5888)
    Fid,
    /// Single reservation flow (RFC 3524)
    Srf,
    /// Alternative network address types (RFC 4091)
    Anat,
    /// Forward error correction (RFC 5956)
    Fec,
    /// FEC framework (RFC 5956)
    FecFr,
    /// Composite session (RFC 7104)
    Cs,
    /// Decoding dependency (RFC 5583)
    Ddp,
    /// Duplication (RFC 7104)
    Dup,
    /// Media bundling (draft-ietf-mmusic-sdp-bundle-negotiation)
    Bundle,
}

impl GroupSemantics {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupSemantics::Ls => "LS",
            GroupSemantics::Fid => "FID",
            GroupSemantics::Srf => "SRF",
            GroupSemantics::Anat => "ANAT",
            GroupSemantics::Fec => "FEC",
            GroupSemantics::FecFr => "FEC-FR",
            GroupSemantics::Cs => "CS",
            GroupSemantics::Ddp => "DDP",
            GroupSemantics::Dup => "DUP",
            GroupSemantics::Bundle => "BUNDLE",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "LS" => Some(GroupSemantics::Ls),
            "FID" => Some(GroupSemantics::Fid),
            "SRF" => Some(GroupSemantics::Srf),
            "ANAT" => Some(GroupSemantics::Anat),
            "FEC" => Some(GroupSemantics::Fec),
            "FEC-FR" => Some(GroupSemantics::FecFr),
            "CS" => Some(GroupSemantics::Cs),
            "DDP" => Some(GroupSemantics::Ddp),
            "DUP" => Some(GroupSemantics::Dup),
            "BUNDLE" => Some(GroupSemantics::Bundle),
            _ => None,
        }
    }
}

impl fmt::Display for GroupSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub semantics: GroupSemantics,
    /// Identification tags (mid values), in order
    pub tags: Vec<String>,
}

/// All a=group lines of the session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupList {
    pub groups: Vec<Group>,
}

impl GroupList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(&mut self, semantics: GroupSemantics, tags: Vec<String>) {
        self.groups.push(Group { semantics, tags });
    }

    /// First group with the given semantics
    pub fn find(&self, semantics: GroupSemantics) -> Option<&Group> {
        self.groups.iter().find(|g| g.semantics == semantics)
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for group in &self.groups {
            write!(out, "a={}:{}", AttributeKind::Group, group.semantics)?;
            for tag in &group.tags {
                write!(out, " {}", tag)?;
            }
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

fn semantics_parser(input: &str) -> IResult<&str, GroupSemantics> {
    map_opt(token, GroupSemantics::from_token)(input)
}

fn group_parser(input: &str) -> IResult<&str, Group> {
    map(
        pair(
            semantics_parser,
            many0(map(preceded(separator, token), |t: &str| t.to_string())),
        ),
        |(semantics, tags)| Group { semantics, tags },
    )(input)
}

/// Parses group attribute: <semantics> *(SP <identification-tag>)
pub fn parse_group(value: &str) -> Result<Group> {
    to_result(group_parser(value.trim()), AttributeKind::Group, value)
}
