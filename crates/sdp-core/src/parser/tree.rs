//! Parse tree boundary
//!
//! [`SdpTree`] is what the attribute list and media section load from: the
//! lines of an SDP document grouped by level, where level 0 is the session
//! and levels 1..=N are the media sections in order. [`SdpLines`] is the
//! line-oriented implementation used by this crate and its tests.

use crate::config::LoadConfig;
use crate::error::{Error, Result};
use crate::parser::errors::ErrorSink;
use crate::parser::line::{parse_sdp_line, SdpLine};
use bytes::Bytes;
use std::str;
use tracing::{debug, warn};

/// Lines of an SDP document, grouped by level
pub trait SdpTree {
    /// Number of media sections
    fn media_count(&self) -> usize;

    /// Lines of one level; empty past the last media section
    fn lines(&self, level: usize) -> &[SdpLine];

    /// The m= line that opens a media level
    fn media_line(&self, level: usize) -> Option<&SdpLine> {
        self.lines(level).iter().find(|l| l.kind == 'm')
    }

    /// The first c= line of a level
    fn connection_line(&self, level: usize) -> Option<&SdpLine> {
        self.lines(level).iter().find(|l| l.kind == 'c')
    }

    fn bandwidth_lines(&self, level: usize) -> Vec<&SdpLine> {
        self.lines(level).iter().filter(|l| l.kind == 'b').collect()
    }

    fn attribute_lines(&self, level: usize) -> Vec<&SdpLine> {
        self.lines(level).iter().filter(|l| l.kind == 'a').collect()
    }
}

/// SDP text split into typed lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdpLines {
    levels: Vec<Vec<SdpLine>>,
}

impl SdpLines {
    /// Splits `text` with the default configuration
    pub fn parse(text: &str, errors: &mut dyn ErrorSink) -> Result<Self> {
        Self::parse_with(text, &LoadConfig::default(), errors)
    }

    /// Splits `text` into levels
    ///
    /// Blank lines are ignored. Lines that are too long or not of the form
    /// `<type>=<value>` are reported and skipped, unless the configuration
    /// escalates errors.
    pub fn parse_with(
        text: &str,
        config: &LoadConfig,
        errors: &mut dyn ErrorSink,
    ) -> Result<Self> {
        let mut levels = vec![Vec::new()];

        for (index, raw) in text.lines().enumerate() {
            let number = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let result = if raw.len() > config.max_line_length {
                Err(Error::LineTooLong {
                    line: number,
                    length: raw.len(),
                })
            } else {
                parse_sdp_line(raw).map_err(Error::from)
            };

            match result {
                Ok((_, (kind, value))) => {
                    if kind == 'm' {
                        levels.push(Vec::new());
                    }
                    if let Some(level) = levels.last_mut() {
                        level.push(SdpLine::new(number, kind, value));
                    }
                }
                Err(err) => {
                    warn!(line = number, error = %err, "Skipping malformed SDP line");
                    errors.add_parse_error(number, &err.to_string());
                    if config.escalate_errors {
                        return Err(Error::Escalated {
                            line: number,
                            message: err.to_string(),
                        });
                    }
                }
            }
        }

        debug!(media_sections = levels.len() - 1, "Split SDP into levels");
        Ok(SdpLines { levels })
    }

    /// Splits raw bytes, which must be UTF-8
    pub fn from_bytes(
        content: &Bytes,
        config: &LoadConfig,
        errors: &mut dyn ErrorSink,
    ) -> Result<Self> {
        let text = str::from_utf8(content).map_err(|_| Error::InvalidEncoding)?;
        Self::parse_with(text, config, errors)
    }
}

impl SdpTree for SdpLines {
    fn media_count(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    fn lines(&self, level: usize) -> &[SdpLine] {
        self.levels.get(level).map(Vec::as_slice).unwrap_or(&[])
    }
}
