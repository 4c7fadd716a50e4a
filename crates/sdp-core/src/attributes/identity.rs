//! SDP Identity Attribute
//!
//! Implements the identity attribute from draft-ietf-rtcweb-security-arch.
//! Format: a=identity:<assertion> [SP <extension> *(";" [SP] <extension>)]
//!
//! identity-assertion  = base64
//! identity-extension  = extension-att-name [ "=" extension-att-value ]

use crate::attributes::common::{separator, to_result};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::char,
    combinator::{map, opt, verify},
    multi::separated_list1,
    sequence::{pair, preceded},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Base64 identity assertion
    pub assertion: String,
    pub extensions: Vec<String>,
}

impl Identity {
    pub fn new(assertion: impl Into<String>) -> Self {
        Identity {
            assertion: assertion.into(),
            extensions: Vec::new(),
        }
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        write!(out, "a={}:{}", AttributeKind::Identity, self.assertion)?;
        for (i, extension) in self.extensions.iter().enumerate() {
            let sep = if i == 0 { " " } else { ";" };
            write!(out, "{}{}", sep, extension)?;
        }
        out.write_str(terminator)
    }
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
}

fn extension_parser(input: &str) -> IResult<&str, String> {
    map(
        verify(take_till1(|c: char| c == ';'), |ext: &str| !ext.trim().is_empty()),
        |ext: &str| ext.trim().to_string(),
    )(input)
}

fn identity_parser(input: &str) -> IResult<&str, Identity> {
    map(
        pair(
            take_while1(is_base64_char),
            opt(preceded(separator, separated_list1(char(';'), extension_parser))),
        ),
        |(assertion, extensions): (&str, Option<Vec<String>>)| Identity {
            assertion: assertion.to_string(),
            extensions: extensions.unwrap_or_default(),
        },
    )(input)
}

/// Parses identity attribute: <assertion> [SP <extension> *(";" [SP] <extension>)]
pub fn parse_identity(value: &str) -> Result<Identity> {
    to_result(identity_parser(value.trim()), AttributeKind::Identity, value)
}
