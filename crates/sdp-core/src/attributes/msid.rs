//! SDP MSID Attribute
//!
//! Implements the msid attribute from draft-ietf-mmusic-msid.
//! Format: a=msid:<identifier> [SP <appdata>]
//!
//! identifier = 1*64token-char
//! appdata = 1*64token-char

use crate::attributes::common::{separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{
    combinator::{map, opt, verify},
    sequence::{pair, preceded},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msid {
    /// Media stream identifier
    pub identifier: String,
    /// Track identifier, omitted when absent
    pub appdata: Option<String>,
}

/// All a=msid lines of one media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MsidList {
    pub msids: Vec<Msid>,
}

impl MsidList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(&mut self, identifier: impl Into<String>, appdata: Option<String>) {
        self.msids.push(Msid {
            identifier: identifier.into(),
            appdata,
        });
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for msid in &self.msids {
            write!(out, "a={}:{}", AttributeKind::Msid, msid.identifier)?;
            if let Some(appdata) = &msid.appdata {
                write!(out, " {}", appdata)?;
            }
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

fn msid_token(input: &str) -> IResult<&str, &str> {
    verify(token, |s: &str| s.len() <= 64)(input)
}

fn msid_parser(input: &str) -> IResult<&str, Msid> {
    map(
        pair(msid_token, opt(preceded(separator, msid_token))),
        |(identifier, appdata): (&str, Option<&str>)| Msid {
            identifier: identifier.to_string(),
            appdata: appdata.map(str::to_string),
        },
    )(input)
}

/// Parses msid attribute: <identifier> [SP <appdata>]
pub fn parse_msid(value: &str) -> Result<Msid> {
    to_result(msid_parser(value.trim()), AttributeKind::Msid, value)
}
