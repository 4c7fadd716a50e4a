//! SDP RTCP Attribute
//!
//! Implements the rtcp attribute defined in RFC 3605.
//! Format: a=rtcp:<port> [<nettype> <addrtype> <connection-address>]

use crate::attributes::common::{decimal, non_space, separator, to_result};
use crate::attributes::AttributeKind;
use crate::error::Result;
use crate::network::{addr_type, net_type, AddrType, NetType};
use nom::{
    combinator::{map, opt},
    sequence::{pair, preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explicit RTCP destination, when it differs from the c= address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcpAddress {
    pub net_type: NetType,
    pub addr_type: AddrType,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rtcp {
    pub port: u16,
    pub address: Option<RtcpAddress>,
}

impl Rtcp {
    /// RTCP port only; the address comes from the c= line
    pub fn new(port: u16) -> Self {
        Rtcp { port, address: None }
    }

    pub fn with_address(
        port: u16,
        net_type: NetType,
        addr_type: AddrType,
        address: impl Into<String>,
    ) -> Self {
        Rtcp {
            port,
            address: Some(RtcpAddress {
                net_type,
                addr_type,
                address: address.into(),
            }),
        }
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        write!(out, "a={}:{}", AttributeKind::Rtcp, self.port)?;
        if let Some(addr) = &self.address {
            write!(out, " {} {} {}", addr.net_type, addr.addr_type, addr.address)?;
        }
        out.write_str(terminator)
    }
}

fn rtcp_address_parser(input: &str) -> IResult<&str, RtcpAddress> {
    map(
        tuple((
            preceded(separator, net_type),
            preceded(separator, addr_type),
            preceded(separator, non_space),
        )),
        |(net_type, addr_type, address)| RtcpAddress {
            net_type,
            addr_type,
            address: address.to_string(),
        },
    )(input)
}

fn rtcp_parser(input: &str) -> IResult<&str, Rtcp> {
    map(
        pair(decimal::<u16>, opt(rtcp_address_parser)),
        |(port, address)| Rtcp { port, address },
    )(input)
}

/// Parses rtcp attribute: <port> [<nettype> <addrtype> <address>]
pub fn parse_rtcp(value: &str) -> Result<Rtcp> {
    to_result(rtcp_parser(value.trim()), AttributeKind::Rtcp, value)
}
