//! Network and address type tokens
//!
//! Shared by the c= line and the a=rtcp attribute (RFC 4566 section 5.7,
//! RFC 3605).

use nom::{branch::alt, bytes::complete::tag, combinator::map, IResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Network type. RFC 4566 only defines "IN"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetType {
    Internet,
}

impl NetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetType::Internet => "IN",
        }
    }
}

impl fmt::Display for NetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address type of a connection address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddrType {
    Ip4,
    Ip6,
}

impl AddrType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddrType::Ip4 => "IP4",
            AddrType::Ip6 => "IP6",
        }
    }
}

impl fmt::Display for AddrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a network type token
pub fn net_type(input: &str) -> IResult<&str, NetType> {
    map(tag("IN"), |_| NetType::Internet)(input)
}

/// Parses an address type token
pub fn addr_type(input: &str) -> IResult<&str, AddrType> {
    alt((
        map(tag("IP4"), |_| AddrType::Ip4),
        map(tag("IP6"), |_| AddrType::Ip6),
    ))(input)
}
