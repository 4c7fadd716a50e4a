//! SDP Format Parameter (fmtp) Attribute
//!
//! Implements the fmtp attribute defined in RFC 4566.
//! Format: a=fmtp:<format> [<format specific parameters>]
//!
//! The parameters are kept as one opaque string; their structure is codec
//! specific. A line without parameters is kept with an empty string.

use crate::attributes::common::{byte_string, separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{combinator::{map, opt}, sequence::{pair, preceded}, IResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fmtp {
    /// Format (payload type) the parameters apply to
    pub format: String,
    pub parameters: String,
}

/// All a=fmtp lines of one media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FmtpList {
    pub fmtps: Vec<Fmtp>,
}

impl FmtpList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(&mut self, format: impl Into<String>, parameters: impl Into<String>) {
        self.fmtps.push(Fmtp {
            format: format.into(),
            parameters: parameters.into(),
        });
    }

    /// Parameters of the first entry for `format`
    pub fn get(&self, format: &str) -> Option<&str> {
        self.fmtps
            .iter()
            .find(|f| f.format == format)
            .map(|f| f.parameters.as_str())
    }

    /// Replaces the parameters of `format`, or appends a new entry
    pub(crate) fn upsert(&mut self, format: &str, parameters: &str) {
        match self.fmtps.iter_mut().find(|f| f.format == format) {
            Some(existing) => existing.parameters = parameters.to_string(),
            None => self.push_entry(format, parameters),
        }
    }

    /// Drops every entry for `format`
    pub(crate) fn remove(&mut self, format: &str) {
        self.fmtps.retain(|f| f.format != format);
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for fmtp in &self.fmtps {
            write!(out, "a={}:{}", AttributeKind::Fmtp, fmtp.format)?;
            if !fmtp.parameters.is_empty() {
                write!(out, " {}", fmtp.parameters)?;
            }
            out.write_str(terminator)?;
        }
        Ok(())
    }
}

fn fmtp_parser(input: &str) -> IResult<&str, Fmtp> {
    map(
        pair(token, opt(preceded(separator, byte_string))),
        |(format, parameters): (&str, Option<&str>)| Fmtp {
            format: format.to_string(),
            parameters: parameters.map(str::trim_end).unwrap_or_default().to_string(),
        },
    )(input)
}

/// Parses fmtp attribute: <format> [<format specific parameters>]
pub fn parse_fmtp(value: &str) -> Result<Fmtp> {
    to_result(fmtp_parser(value.trim()), AttributeKind::Fmtp, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fmtp() {
        let fmtp = parse_fmtp("96 profile-level-id=42e01f;packetization-mode=1").unwrap();
        assert_eq!(fmtp.format, "96");
        assert_eq!(fmtp.parameters, "profile-level-id=42e01f;packetization-mode=1");

        let fmtp = parse_fmtp("101 0-15").unwrap();
        assert_eq!(fmtp.parameters, "0-15");

        let fmtp = parse_fmtp("111 minptime=10; useinbandfec=1").unwrap();
        assert_eq!(fmtp.parameters, "minptime=10; useinbandfec=1");

        assert_eq!(parse_fmtp("96").unwrap().parameters, "");
        assert_eq!(parse_fmtp("96 ").unwrap().parameters, "");
        assert!(parse_fmtp("").is_err());
    }

    #[test]
    fn test_upsert_and_lookup() {
        let mut list = FmtpList::new();
        list.push_entry("96", "a=1");
        list.upsert("96", "a=2");
        list.upsert("97", "apt=96");
        assert_eq!(list.fmtps.len(), 2);
        assert_eq!(list.get("96"), Some("a=2"));
        assert_eq!(list.get("98"), None);

        list.remove("96");
        assert_eq!(list.get("96"), None);
        assert_eq!(list.fmtps.len(), 1);
    }

    #[test]
    fn test_serialize() {
        let mut list = FmtpList::new();
        list.push_entry("111", "minptime=10");
        list.push_entry("0", "");
        let mut out = String::new();
        list.serialize(&mut out, "\r\n").unwrap();
        assert_eq!(out, "a=fmtp:111 minptime=10\r\na=fmtp:0\r\n");

        let reparsed: Vec<Fmtp> = out
            .lines()
            .map(|line| parse_fmtp(line.trim_start_matches("a=fmtp:")).unwrap())
            .collect();
        assert_eq!(reparsed, list.fmtps);
    }
}
