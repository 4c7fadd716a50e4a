//! Structured parse error reporting
//!
//! Loading never aborts on malformed input by default: each problem is
//! handed to an [`ErrorSink`] keyed by its 1-based source line and loading
//! moves on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Receives recoverable parse errors
pub trait ErrorSink {
    fn add_parse_error(&mut self, line: usize, message: &str);
}

/// One recorded error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Collects errors in the order they were reported
#[derive(Debug, Clone, Default)]
pub struct ErrorHolder {
    errors: Vec<ParseError>,
}

impl ErrorHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors reported against one line
    pub fn on_line(&self, line: usize) -> impl Iterator<Item = &ParseError> + '_ {
        self.errors.iter().filter(move |e| e.line == line)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl ErrorSink for ErrorHolder {
    fn add_parse_error(&mut self, line: usize, message: &str) {
        self.errors.push(ParseError {
            line,
            message: message.to_string(),
        });
    }
}
