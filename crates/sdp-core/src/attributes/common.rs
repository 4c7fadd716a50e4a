//! Common parsing utilities for SDP attributes
//!
//! Reusable nom parsers shared by the per-attribute grammars.

use crate::attributes::AttributeKind;
use crate::error::{Error, Result};
use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{digit1, space1},
    combinator::{map_res, rest, verify},
    IResult,
};
use std::str::FromStr;

/// Token characters from RFC 4566 section 9
pub fn is_token_char(c: char) -> bool {
    matches!(c,
        '!' | '#'..='\'' | '*' | '+' | '-' | '.' | '0'..='9' | 'A'..='Z' | '^'..='~')
}

/// Validates that a whole string is a non-empty RFC 4566 token
pub fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_token_char)
}

/// Parses a token (one or more token characters)
pub fn token(input: &str) -> IResult<&str, &str> {
    take_while1(is_token_char)(input)
}

/// Parses a run of non-whitespace characters
pub fn non_space(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == ' ' || c == '\t')(input)
}

/// Parses a positive integer
pub fn positive_integer(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

/// Parses a decimal number into any integer type, failing on overflow
pub fn decimal<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, |s: &str| s.parse::<T>())(input)
}

/// Parses one or more spaces or tabs
pub fn separator(input: &str) -> IResult<&str, &str> {
    space1(input)
}

/// Takes the rest of the input, which must not be empty
pub fn byte_string(input: &str) -> IResult<&str, &str> {
    verify(rest, |s: &str| !s.is_empty())(input)
}

/// Converts a nom result into ours, insisting the whole value was consumed
pub fn to_result<T>(res: IResult<&str, T>, kind: AttributeKind, value: &str) -> Result<T> {
    match res {
        Ok((remaining, parsed)) if remaining.trim().is_empty() => Ok(parsed),
        _ => Err(Error::invalid_attribute(kind.name(), value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        assert_eq!(token("BUNDLE audio").unwrap(), (" audio", "BUNDLE"));
        assert_eq!(token("webrtc-datachannel").unwrap(), ("", "webrtc-datachannel"));
        assert!(token(" leading").is_err());
        assert!(token("(paren)").is_err());

        assert!(is_valid_token("sha-256"));
        assert!(is_valid_token("a.b~c"));
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("has space"));
        assert!(!is_valid_token("semi;colon"));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(positive_integer("48000/2").unwrap(), ("/2", 48000));
        assert_eq!(decimal::<u16>("65535").unwrap(), ("", 65535));
        assert!(decimal::<u16>("65536").is_err());
        assert!(decimal::<u32>("x1").is_err());
    }

    #[test]
    fn test_to_result_requires_full_input() {
        let value = "96 extra";
        assert_eq!(
            to_result(positive_integer("96  "), AttributeKind::Ptime, "96  ").unwrap(),
            96
        );
        let err = to_result(positive_integer(value), AttributeKind::Ptime, value).unwrap_err();
        assert_eq!(err, Error::invalid_attribute("ptime", value));
    }

    #[test]
    fn test_byte_string_and_separator() {
        assert_eq!(byte_string("profile-level-id=42e01f").unwrap().1, "profile-level-id=42e01f");
        assert!(byte_string("").is_err());
        assert_eq!(separator(" \tx").unwrap(), ("x", " \t"));
        assert_eq!(non_space("a:b c").unwrap(), (" c", "a:b"));
    }
}
