//! Connection data (c=) of a media section
//!
//! Format: c=<nettype> <addrtype> <connection-address>
//!
//! IPv4 multicast addresses carry a TTL and an optional address count
//! (`224.2.1.1/127/3`); IPv6 multicast addresses only carry the count
//! (`ff15::101/3`), RFC 4566 section 5.7.

use crate::attributes::common::{decimal, separator};
use crate::error::{Error, Result};
use crate::network::{addr_type, net_type, AddrType, NetType};
use nom::{
    bytes::complete::take_till1,
    character::complete::char,
    multi::many_m_n,
    sequence::{preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub net_type: NetType,
    pub addr_type: AddrType,
    pub address: String,
    /// IPv4 multicast only
    pub ttl: Option<u8>,
    /// Number of consecutive multicast addresses
    pub count: Option<u32>,
}

impl Connection {
    /// Unicast connection address
    pub fn new(addr_type: AddrType, address: impl Into<String>) -> Self {
        Connection {
            net_type: NetType::Internet,
            addr_type,
            address: address.into(),
            ttl: None,
            count: None,
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.net_type, self.addr_type, self.address)?;
        if let Some(ttl) = self.ttl {
            write!(f, "/{}", ttl)?;
        }
        if let Some(count) = self.count {
            write!(f, "/{}", count)?;
        }
        Ok(())
    }
}

fn connection_parts(input: &str) -> IResult<&str, (NetType, AddrType, &str, Vec<u32>)> {
    let (input, (net, _, addr, _, address, suffixes)) = tuple((
        net_type,
        separator,
        addr_type,
        separator,
        take_till1(|c: char| c == '/' || c.is_whitespace()),
        many_m_n(0, 2, preceded(char('/'), decimal::<u32>)),
    ))(input)?;
    Ok((input, (net, addr, address, suffixes)))
}

/// Parses the value of a c= line
pub fn parse_connection_data(value: &str) -> Result<Connection> {
    let invalid = || Error::InvalidConnection(value.to_string());
    let (rest, (net_type, addr_type, address, suffixes)) =
        connection_parts(value.trim()).map_err(|_| invalid())?;
    if !rest.is_empty() {
        return Err(invalid());
    }

    let (ttl, count) = match (addr_type, suffixes.as_slice()) {
        (_, []) => (None, None),
        (AddrType::Ip4, [ttl]) => (Some(u8::try_from(*ttl).map_err(|_| invalid())?), None),
        (AddrType::Ip4, [ttl, count]) => {
            (Some(u8::try_from(*ttl).map_err(|_| invalid())?), Some(*count))
        }
        (AddrType::Ip6, [count]) => (None, Some(*count)),
        _ => return Err(invalid()),
    };

    Ok(Connection {
        net_type,
        addr_type,
        address: address.to_string(),
        ttl,
        count,
    })
}
