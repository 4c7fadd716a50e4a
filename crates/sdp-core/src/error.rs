use thiserror::Error;

use crate::attributes::Level;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating SDP media sections
///
/// These cover malformed input only. Misuse of the API (looking up an entry
/// the caller never checked for, storing an attribute under the wrong kind)
/// panics instead of returning one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Attribute payload does not match the grammar of its kind
    #[error("Invalid {name} attribute: {value}")]
    InvalidAttribute { name: String, value: String },

    /// Attribute kind that may not appear at the given level
    #[error("{name} attribute is not allowed at {level} level")]
    NotAllowedAtLevel { name: String, level: Level },

    /// Second occurrence of an attribute that may only appear once
    #[error("Duplicate {0} attribute")]
    DuplicateAttribute(String),

    /// Malformed m= line
    #[error("Invalid media line: {0}")]
    InvalidMediaLine(String),

    /// Media type token not in the supported set
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Transport protocol token not in the supported set
    #[error("Unsupported media section protocol: {0}")]
    UnsupportedProtocol(String),

    /// Malformed c= line
    #[error("Invalid connection line: {0}")]
    InvalidConnection(String),

    /// Malformed b= line
    #[error("Invalid bandwidth line: {0}")]
    InvalidBandwidth(String),

    /// The parse tree has no media section at the requested level
    #[error("No media section at level {0}")]
    MissingMediaSection(usize),

    /// Line exceeding the configured maximum length
    #[error("Line {line} is {length} bytes long")]
    LineTooLong { line: usize, length: usize },

    /// Input that is not valid UTF-8
    #[error("SDP is not valid UTF-8")]
    InvalidEncoding,

    /// Load stopped because the caller's policy escalates structural errors
    #[error("Loading stopped at line {line}: {message}")]
    Escalated { line: usize, message: String },

    /// Parser error
    #[error("Parser error: {0}")]
    Parser(String),
}

impl Error {
    pub(crate) fn invalid_attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidAttribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Error::Parser(format!("Parsing failed: {err}"))
    }
}
