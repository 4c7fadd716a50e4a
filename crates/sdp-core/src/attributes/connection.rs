//! SDP Connection Attribute
//!
//! Implements the connection attribute defined in RFC 4145.
//! Format: a=connection:<conn-value>
//!
//! conn-value = "new" / "existing"

use crate::attributes::common::to_result;
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{branch::alt, bytes::complete::tag, combinator::map, IResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a TCP-based transport reuses an existing connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionValue {
    New,
    Existing,
}

impl ConnectionValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionValue::New => "new",
            ConnectionValue::Existing => "existing",
        }
    }
}

impl fmt::Display for ConnectionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn connection_value(input: &str) -> IResult<&str, ConnectionValue> {
    alt((
        map(tag("new"), |_| ConnectionValue::New),
        map(tag("existing"), |_| ConnectionValue::Existing),
    ))(input)
}

/// Parses connection attribute value: new / existing
pub fn parse_connection(value: &str) -> Result<ConnectionValue> {
    to_result(connection_value(value.trim()), AttributeKind::Connection, value)
}
