//! SDP ICE Options Attribute
//!
//! Implements the ice-options attribute defined in RFC 5245.
//! Format: a=ice-options:<ice-option-tag> *(SP <ice-option-tag>)
//!
//! All options are written on one line.

use crate::attributes::common::{separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{combinator::map, multi::separated_list1, IResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IceOptions {
    pub options: Vec<String>,
}

impl IceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry(&mut self, option: impl Into<String>) {
        self.options.push(option.into());
    }

    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        write!(out, "a={}:{}", AttributeKind::IceOptions, self.options.join(" "))?;
        out.write_str(terminator)
    }
}

fn ice_options_parser(input: &str) -> IResult<&str, IceOptions> {
    map(separated_list1(separator, token), |options: Vec<&str>| IceOptions {
        options: options.into_iter().map(str::to_string).collect(),
    })(input)
}

/// Parses ice-options attribute: <tag> *(SP <tag>)
pub fn parse_ice_options(value: &str) -> Result<IceOptions> {
    to_result(ice_options_parser(value.trim()), AttributeKind::IceOptions, value)
}
