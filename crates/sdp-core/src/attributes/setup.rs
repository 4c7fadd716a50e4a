//! SDP Setup Attribute
//!
//! Implements the setup attribute defined in RFC 4145, used by DTLS-SRTP
//! (RFC 5763) to pick the DTLS client.
//! Format: a=setup:<role>
//!
//! role = "active" / "passive" / "actpass" / "holdconn"

use crate::attributes::common::to_result;
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{branch::alt, bytes::complete::tag, combinator::map, IResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection setup role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupRole {
    /// Endpoint initiates the connection
    Active,
    /// Endpoint accepts the connection
    Passive,
    /// Endpoint is willing to do either
    Actpass,
    /// Connection is not established for now
    Holdconn,
}

impl SetupRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupRole::Active => "active",
            SetupRole::Passive => "passive",
            SetupRole::Actpass => "actpass",
            SetupRole::Holdconn => "holdconn",
        }
    }
}

impl fmt::Display for SetupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn setup_role(input: &str) -> IResult<&str, SetupRole> {
    alt((
        map(tag("active"), |_| SetupRole::Active),
        map(tag("passive"), |_| SetupRole::Passive),
        map(tag("actpass"), |_| SetupRole::Actpass),
        map(tag("holdconn"), |_| SetupRole::Holdconn),
    ))(input)
}

/// Parses setup attribute value: active / passive / actpass / holdconn
pub fn parse_setup(value: &str) -> Result<SetupRole> {
    to_result(setup_role(value.trim()), AttributeKind::Setup, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setup() {
        assert_eq!(parse_setup("active").unwrap(), SetupRole::Active);
        assert_eq!(parse_setup("passive").unwrap(), SetupRole::Passive);
        assert_eq!(parse_setup("actpass").unwrap(), SetupRole::Actpass);
        assert_eq!(parse_setup(" holdconn ").unwrap(), SetupRole::Holdconn);

        assert!(parse_setup("").is_err());
        assert!(parse_setup("ACTIVE").is_err());
        assert!(parse_setup("activepassive").is_err());
        assert!(parse_setup("client").is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        let roles = [
            SetupRole::Active,
            SetupRole::Passive,
            SetupRole::Actpass,
            SetupRole::Holdconn,
        ];
        for role in roles {
            assert_eq!(parse_setup(&role.to_string()).unwrap(), role);
        }
    }
}
