//! SDP Remote Candidates Attribute
//!
//! Implements the remote-candidates attribute defined in RFC 5245.
//! Format: a=remote-candidates:<candidate> *(SP <candidate>)
//!
//! remote-candidate = component-ID SP connection-address SP port

use crate::attributes::common::{decimal, non_space, separator, to_result, token};
use crate::attributes::AttributeKind;
use crate::error::Result;
use nom::{
    combinator::map,
    multi::separated_list1,
    sequence::{preceded, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCandidate {
    /// Component id
    pub id: String,
    pub address: String,
    pub port: u16,
}

/// The controlling agent's choice of remote candidates, one per component
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoteCandidates {
    pub candidates: Vec<RemoteCandidate>,
}

impl RemoteCandidates {
    pub fn new(candidates: Vec<RemoteCandidate>) -> Self {
        RemoteCandidates { candidates }
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        write!(out, "a={}", AttributeKind::RemoteCandidates)?;
        for (i, candidate) in self.candidates.iter().enumerate() {
            let sep = if i == 0 { ":" } else { " " };
            write!(
                out,
                "{}{} {} {}",
                sep, candidate.id, candidate.address, candidate.port
            )?;
        }
        out.write_str(terminator)
    }
}

fn remote_candidate_parser(input: &str) -> IResult<&str, RemoteCandidate> {
    map(
        tuple((
            token,
            preceded(separator, non_space),
            preceded(separator, decimal::<u16>),
        )),
        |(id, address, port): (&str, &str, u16)| RemoteCandidate {
            id: id.to_string(),
            address: address.to_string(),
            port,
        },
    )(input)
}

fn remote_candidates_parser(input: &str) -> IResult<&str, RemoteCandidates> {
    map(
        separated_list1(separator, remote_candidate_parser),
        RemoteCandidates::new,
    )(input)
}

/// Parses remote-candidates attribute: <id> <address> <port> *(SP <id> <address> <port>)
pub fn parse_remote_candidates(value: &str) -> Result<RemoteCandidates> {
    to_result(
        remote_candidates_parser(value.trim()),
        AttributeKind::RemoteCandidates,
        value,
    )
}
