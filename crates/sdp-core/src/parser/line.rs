//! SDP line splitting
//!
//! Every SDP line has the form `<type>=<value>` where type is a single
//! character (RFC 4566 section 5).

use nom::{
    character::complete::{anychar, char, not_line_ending},
    combinator::verify,
    sequence::terminated,
    IResult,
};
use serde::{Deserialize, Serialize};

/// One `<type>=<value>` line with its 1-based position in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdpLine {
    pub number: usize,
    pub kind: char,
    pub value: String,
}

impl SdpLine {
    pub fn new(number: usize, kind: char, value: impl Into<String>) -> Self {
        SdpLine {
            number,
            kind,
            value: value.into(),
        }
    }

    /// Splits an a= value at its first ':' into name and optional value
    pub fn attribute_parts(&self) -> (&str, Option<&str>) {
        match self.value.split_once(':') {
            Some((name, value)) => (name.trim(), Some(value)),
            None => (self.value.trim(), None),
        }
    }
}

/// Parses a single SDP line into its type character and value.
/// Example: "m=audio 9 RTP/AVP 0" -> Ok(("", ('m', "audio 9 RTP/AVP 0")))
pub fn parse_sdp_line(input: &str) -> IResult<&str, (char, &str)> {
    let (input, key) =
        terminated(verify(anychar, |c: &char| c.is_ascii_lowercase()), char('='))(input)?;
    let (input, value) = not_line_ending(input)?;
    Ok((input, (key, value.trim())))
}
