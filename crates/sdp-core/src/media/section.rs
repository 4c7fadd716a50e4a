//! Media section model
//!
//! A [`MediaSection`] is one `m=` block: the media line fields, an optional
//! `c=` override, the `b=` limits and the section's own attribute list. It
//! is either loaded once from a parse tree or built by the caller with
//! [`MediaSection::new`] and the codec / data channel helpers.

use crate::attribute_list::AttributeList;
use crate::attributes::common::{decimal, non_space, separator, token};
use crate::attributes::{Attribute, AttributeKind, Level, MediaDirection, Rtpmap, Sctpmap};
use crate::config::LoadConfig;
use crate::error::{Error, Result};
use crate::media::connection::{parse_connection_data, Connection};
use crate::media::types::{MediaType, Protocol};
use crate::parser::{ErrorSink, SdpLine, SdpTree};
use nom::{
    character::complete::char,
    combinator::opt,
    multi::many0,
    sequence::{preceded, separated_pair, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSection {
    level: usize,
    media_type: MediaType,
    port: u16,
    /// 0 when the m= line gives no port count
    port_count: u16,
    protocol: Protocol,
    formats: Vec<String>,
    connection: Option<Connection>,
    bandwidths: BTreeMap<String, u32>,
    attributes: AttributeList,
}

struct MediaLine<'a> {
    media: &'a str,
    port: u16,
    port_count: Option<u16>,
    protocol: &'a str,
    formats: Vec<&'a str>,
}

/// m=<media> <port>[/<number of ports>] <proto> <fmt> ...
fn media_line(input: &str) -> IResult<&str, MediaLine<'_>> {
    let (input, (media, _, port, port_count, _, protocol, formats)) = tuple((
        token,
        separator,
        decimal::<u16>,
        opt(preceded(char('/'), decimal::<u16>)),
        separator,
        non_space,
        many0(preceded(separator, non_space)),
    ))(input)?;
    Ok((
        input,
        MediaLine {
            media,
            port,
            port_count,
            protocol,
            formats,
        },
    ))
}

/// b=<bwtype>:<bandwidth>
fn bandwidth_line(input: &str) -> IResult<&str, (&str, u32)> {
    separated_pair(token, char(':'), decimal::<u32>)(input)
}

fn report(errors: &mut dyn ErrorSink, line: &SdpLine, err: &Error) {
    warn!(line = line.number, error = %err, "Rejecting media section");
    errors.add_parse_error(line.number, &err.to_string());
}

impl MediaSection {
    /// Empty section for the caller to fill in
    pub fn new(level: usize, media_type: MediaType, port: u16, protocol: Protocol) -> Self {
        MediaSection {
            level,
            media_type,
            port,
            port_count: 0,
            protocol,
            formats: Vec::new(),
            connection: None,
            bandwidths: BTreeMap::new(),
            attributes: AttributeList::new(Level::Media),
        }
    }

    /// Sets the media-level connection data
    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Adds a bandwidth limit in kilobits per second
    pub fn with_bandwidth(mut self, bw_type: impl Into<String>, kbps: u32) -> Self {
        self.bandwidths.insert(bw_type.into(), kbps);
        self
    }

    /// Loads the media section at `level` (1-based) from a parse tree
    ///
    /// Problems on the m=, c= or b= lines make the whole section unusable:
    /// they are reported to `errors` and returned. Attribute problems are
    /// reported and skipped unless `config` escalates them.
    pub fn load<T: SdpTree + ?Sized>(
        tree: &T,
        level: usize,
        config: &LoadConfig,
        errors: &mut dyn ErrorSink,
    ) -> Result<Self> {
        let m_line = tree
            .media_line(level)
            .ok_or(Error::MissingMediaSection(level))?;

        let mut section = Self::load_media_line(m_line, level).inspect_err(|err| {
            report(errors, m_line, err);
        })?;

        if let Some(c_line) = tree.connection_line(level) {
            let connection = parse_connection_data(&c_line.value).inspect_err(|err| {
                report(errors, c_line, err);
            })?;
            section.connection = Some(connection);
        }

        for b_line in tree.bandwidth_lines(level) {
            let (bw_type, kbps) = Self::load_bandwidth(&b_line.value).inspect_err(|err| {
                report(errors, b_line, err);
            })?;
            section.bandwidths.insert(bw_type, kbps);
        }

        section.attributes.load(tree, level, config, errors)?;

        debug!(
            level,
            media = %section.media_type,
            protocol = %section.protocol,
            formats = section.formats.len(),
            attributes = section.attributes.len(),
            "Loaded media section"
        );
        Ok(section)
    }

    fn load_media_line(line: &SdpLine, level: usize) -> Result<Self> {
        let parsed = match media_line(&line.value) {
            Ok((rest, parsed)) if rest.trim().is_empty() => parsed,
            _ => return Err(Error::InvalidMediaLine(line.value.clone())),
        };

        let media_type = MediaType::from_token(parsed.media)?;
        let protocol = Protocol::from_token(parsed.protocol)?;

        let mut section = MediaSection::new(level, media_type, parsed.port, protocol);
        section.port_count = parsed.port_count.unwrap_or(0);
        section.formats = parsed.formats.into_iter().map(String::from).collect();
        Ok(section)
    }

    fn load_bandwidth(value: &str) -> Result<(String, u32)> {
        match bandwidth_line(value) {
            Ok((rest, (bw_type, kbps))) if rest.trim().is_empty() => {
                Ok((bw_type.to_string(), kbps))
            }
            _ => Err(Error::InvalidBandwidth(value.to_string())),
        }
    }

    /// Nesting level in the owning description; 1 for the first m= section
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn port_count(&self) -> u16 {
        self.port_count
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Format identifiers in preference order
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Media-level c= line; the session-level one applies when absent
    pub fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    /// Bandwidth limit for a b= type token such as "AS" or "TIAS"
    pub fn bandwidth(&self, bw_type: &str) -> Option<u32> {
        self.bandwidths.get(bw_type).copied()
    }

    pub fn bandwidths(&self) -> &BTreeMap<String, u32> {
        &self.bandwidths
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeList {
        &mut self.attributes
    }

    /// Effective direction of this section
    ///
    /// The media-level direction wins, then the session-level one. With
    /// neither, RFC 4566 section 6 makes `sendrecv` the default.
    pub fn direction_attribute(&self, session: Option<&AttributeList>) -> MediaDirection {
        match self.attributes.resolve(AttributeKind::Direction, session) {
            Some(Attribute::Direction(direction)) => *direction,
            _ => MediaDirection::default(),
        }
    }

    /// Adds or updates a codec
    ///
    /// The payload type is appended to the format list unless already
    /// listed. Its rtpmap entry is replaced in place. Non-empty `fmtp`
    /// parameters replace those of the payload type; otherwise any fmtp
    /// left from an earlier call is dropped.
    pub fn add_codec(
        &mut self,
        pt: &str,
        name: &str,
        clock: u32,
        channels: u32,
        fmtp: Option<&str>,
    ) {
        if !self.formats.iter().any(|f| f == pt) {
            self.formats.push(pt.to_string());
        }

        self.attributes.rtpmap_mut().upsert(Rtpmap {
            pt: pt.to_string(),
            name: name.to_string(),
            clock,
            channels,
        });

        match fmtp.filter(|params| !params.is_empty()) {
            Some(params) => self.attributes.fmtp_mut().upsert(pt, params),
            None => {
                if let Some(Attribute::Fmtp(list)) = self.attributes.get_mut(AttributeKind::Fmtp) {
                    list.remove(pt);
                    if list.fmtps.is_empty() {
                        self.attributes.remove(AttributeKind::Fmtp);
                    }
                }
            }
        }
    }

    /// Adds or updates an SCTP data channel association
    ///
    /// `number` is the SCTP port, listed as a format of the section.
    pub fn add_data_channel(&mut self, number: u32, app: &str, streams: u32) {
        let format = number.to_string();
        if !self.formats.contains(&format) {
            self.formats.push(format);
        }

        self.attributes.sctpmap_mut().upsert(Sctpmap {
            number,
            app: app.to_string(),
            max_message_size: 0,
            streams,
        });
    }

    /// Writes the m= line, then c= and b= lines, then every attribute
    pub fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        write!(out, "m={} {}", self.media_type, self.port)?;
        if self.port_count != 0 {
            write!(out, "/{}", self.port_count)?;
        }
        write!(out, " {}", self.protocol)?;
        for format in &self.formats {
            write!(out, " {}", format)?;
        }
        out.write_str(terminator)?;

        if let Some(connection) = &self.connection {
            write!(out, "c={}", connection)?;
            out.write_str(terminator)?;
        }

        for (bw_type, kbps) in &self.bandwidths {
            write!(out, "b={}:{}", bw_type, kbps)?;
            out.write_str(terminator)?;
        }

        self.attributes.serialize(out, terminator)
    }
}

impl fmt::Display for MediaSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.serialize(f, "\r\n")
    }
}
