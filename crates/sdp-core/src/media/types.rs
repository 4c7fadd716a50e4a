//! Media type and transport protocol tokens of the m= line

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type (RFC 4566 section 5.14, RFC 8866)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Audio,
    Video,
    Text,
    Application,
    Message,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Audio => "audio",
            MediaType::Video => "video",
            MediaType::Text => "text",
            MediaType::Application => "application",
            MediaType::Message => "message",
        }
    }

    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "audio" => Ok(MediaType::Audio),
            "video" => Ok(MediaType::Video),
            "text" => Ok(MediaType::Text),
            "application" => Ok(MediaType::Application),
            "message" => Ok(MediaType::Message),
            _ => Err(Error::UnsupportedMediaType(token.to_string())),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport protocol of a media section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    RtpAvp,
    RtpAvpf,
    RtpSavp,
    RtpSavpf,
    Udp,
    Tcp,
    Udptl,
    TcpRtpAvp,
    TcpTls,
    TcpTlsRtpSavp,
    TcpTlsRtpSavpf,
    UdpTlsRtpSavp,
    UdpTlsRtpSavpf,
    DccpRtpAvp,
    DccpRtpSavp,
    TcpMsrp,
    TcpTlsMsrp,
    UdpTlsUdptl,
    Sctp,
    SctpDtls,
    DtlsSctp,
    UdpDtlsSctp,
    TcpDtlsSctp,
}

impl Protocol {
    pub const ALL: [Protocol; 23] = [
        Protocol::RtpAvp,
        Protocol::RtpAvpf,
        Protocol::RtpSavp,
        Protocol::RtpSavpf,
        Protocol::Udp,
        Protocol::Tcp,
        Protocol::Udptl,
        Protocol::TcpRtpAvp,
        Protocol::TcpTls,
        Protocol::TcpTlsRtpSavp,
        Protocol::TcpTlsRtpSavpf,
        Protocol::UdpTlsRtpSavp,
        Protocol::UdpTlsRtpSavpf,
        Protocol::DccpRtpAvp,
        Protocol::DccpRtpSavp,
        Protocol::TcpMsrp,
        Protocol::TcpTlsMsrp,
        Protocol::UdpTlsUdptl,
        Protocol::Sctp,
        Protocol::SctpDtls,
        Protocol::DtlsSctp,
        Protocol::UdpDtlsSctp,
        Protocol::TcpDtlsSctp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::RtpAvp => "RTP/AVP",
            Protocol::RtpAvpf => "RTP/AVPF",
            Protocol::RtpSavp => "RTP/SAVP",
            Protocol::RtpSavpf => "RTP/SAVPF",
            Protocol::Udp => "udp",
            Protocol::Tcp => "TCP",
            Protocol::Udptl => "udptl",
            Protocol::TcpRtpAvp => "TCP/RTP/AVP",
            Protocol::TcpTls => "TCP/TLS",
            Protocol::TcpTlsRtpSavp => "TCP/TLS/RTP/SAVP",
            Protocol::TcpTlsRtpSavpf => "TCP/TLS/RTP/SAVPF",
            Protocol::UdpTlsRtpSavp => "UDP/TLS/RTP/SAVP",
            Protocol::UdpTlsRtpSavpf => "UDP/TLS/RTP/SAVPF",
            Protocol::DccpRtpAvp => "DCCP/RTP/AVP",
            Protocol::DccpRtpSavp => "DCCP/RTP/SAVP",
            Protocol::TcpMsrp => "TCP/MSRP",
            Protocol::TcpTlsMsrp => "TCP/TLS/MSRP",
            Protocol::UdpTlsUdptl => "UDP/TLS/UDPTL",
            Protocol::Sctp => "SCTP",
            Protocol::SctpDtls => "SCTP/DTLS",
            Protocol::DtlsSctp => "DTLS/SCTP",
            Protocol::UdpDtlsSctp => "UDP/DTLS/SCTP",
            Protocol::TcpDtlsSctp => "TCP/DTLS/SCTP",
        }
    }

    /// Protocol tokens are matched case-insensitively; "udp" and "RTP/AVP"
    /// are both conventional spellings
    pub fn from_token(token: &str) -> Result<Self> {
        Protocol::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| Error::UnsupportedProtocol(token.to_string()))
    }

    /// Whether formats are RTP payload types described by a=rtpmap
    pub fn is_rtp(&self) -> bool {
        self.as_str().contains("RTP/")
    }

    /// Whether formats are SCTP ports or data channel protocols
    pub fn is_sctp(&self) -> bool {
        self.as_str().contains("SCTP")
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
