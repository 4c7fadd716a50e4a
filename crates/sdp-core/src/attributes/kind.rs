//! Attribute kind registry
//!
//! Maps every attribute kind to its canonical name and to the levels
//! (session, media) where RFC 4566 and its extensions allow it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an attribute line appears in an SDP document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Before the first m= line
    Session,
    /// Inside an m= section
    Media,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Session => write!(f, "session"),
            Level::Media => write!(f, "media"),
        }
    }
}

/// Closed set of attribute kinds
///
/// `Other` covers every attribute name this model does not recognise and
/// always sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeKind {
    BundleOnly,
    Candidate,
    Connection,
    Direction,
    Extmap,
    Fingerprint,
    Fmtp,
    Group,
    IceLite,
    IceMismatch,
    IceOptions,
    IcePwd,
    IceUfrag,
    Identity,
    Imageattr,
    Inactive,
    Label,
    Maxptime,
    Mid,
    Msid,
    MsidSemantic,
    Ptime,
    Recvonly,
    RemoteCandidates,
    Rtcp,
    RtcpFb,
    RtcpMux,
    RtcpRsize,
    Rtpmap,
    Sctpmap,
    Sendonly,
    Sendrecv,
    Setup,
    Ssrc,
    SsrcGroup,
    Other,
}

impl AttributeKind {
    /// Every kind, in declaration order, `Other` last
    pub const ALL: [AttributeKind; 36] = [
        AttributeKind::BundleOnly,
        AttributeKind::Candidate,
        AttributeKind::Connection,
        AttributeKind::Direction,
        AttributeKind::Extmap,
        AttributeKind::Fingerprint,
        AttributeKind::Fmtp,
        AttributeKind::Group,
        AttributeKind::IceLite,
        AttributeKind::IceMismatch,
        AttributeKind::IceOptions,
        AttributeKind::IcePwd,
        AttributeKind::IceUfrag,
        AttributeKind::Identity,
        AttributeKind::Imageattr,
        AttributeKind::Inactive,
        AttributeKind::Label,
        AttributeKind::Maxptime,
        AttributeKind::Mid,
        AttributeKind::Msid,
        AttributeKind::MsidSemantic,
        AttributeKind::Ptime,
        AttributeKind::Recvonly,
        AttributeKind::RemoteCandidates,
        AttributeKind::Rtcp,
        AttributeKind::RtcpFb,
        AttributeKind::RtcpMux,
        AttributeKind::RtcpRsize,
        AttributeKind::Rtpmap,
        AttributeKind::Sctpmap,
        AttributeKind::Sendonly,
        AttributeKind::Sendrecv,
        AttributeKind::Setup,
        AttributeKind::Ssrc,
        AttributeKind::SsrcGroup,
        AttributeKind::Other,
    ];

    /// Canonical attribute name, as written after `a=`
    ///
    /// `Direction` has no line of its own (it is written as one of the four
    /// direction flags); its name is only used in diagnostics.
    ///
    /// # Panics
    ///
    /// Panics for `AttributeKind::Other`: unrecognised attributes carry their
    /// own raw name.
    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::BundleOnly => "bundle-only",
            AttributeKind::Candidate => "candidate",
            AttributeKind::Connection => "connection",
            AttributeKind::Direction => "direction",
            AttributeKind::Extmap => "extmap",
            AttributeKind::Fingerprint => "fingerprint",
            AttributeKind::Fmtp => "fmtp",
            AttributeKind::Group => "group",
            AttributeKind::IceLite => "ice-lite",
            AttributeKind::IceMismatch => "ice-mismatch",
            AttributeKind::IceOptions => "ice-options",
            AttributeKind::IcePwd => "ice-pwd",
            AttributeKind::IceUfrag => "ice-ufrag",
            AttributeKind::Identity => "identity",
            AttributeKind::Imageattr => "imageattr",
            AttributeKind::Inactive => "inactive",
            AttributeKind::Label => "label",
            AttributeKind::Maxptime => "maxptime",
            AttributeKind::Mid => "mid",
            AttributeKind::Msid => "msid",
            AttributeKind::MsidSemantic => "msid-semantic",
            AttributeKind::Ptime => "ptime",
            AttributeKind::Recvonly => "recvonly",
            AttributeKind::RemoteCandidates => "remote-candidates",
            AttributeKind::Rtcp => "rtcp",
            AttributeKind::RtcpFb => "rtcp-fb",
            AttributeKind::RtcpMux => "rtcp-mux",
            AttributeKind::RtcpRsize => "rtcp-rsize",
            AttributeKind::Rtpmap => "rtpmap",
            AttributeKind::Sctpmap => "sctpmap",
            AttributeKind::Sendonly => "sendonly",
            AttributeKind::Sendrecv => "sendrecv",
            AttributeKind::Setup => "setup",
            AttributeKind::Ssrc => "ssrc",
            AttributeKind::SsrcGroup => "ssrc-group",
            AttributeKind::Other => panic!("unrecognized attributes have no canonical name"),
        }
    }

    /// Looks up the kind for an attribute name (ASCII case-insensitive)
    ///
    /// Unknown names map to `Other`. `Direction` is never returned: the
    /// direction flags map to their own kinds and are folded into a
    /// direction attribute when stored.
    pub fn from_name(name: &str) -> AttributeKind {
        let lower = name.to_ascii_lowercase();
        AttributeKind::ALL
            .iter()
            .copied()
            .filter(|kind| !matches!(kind, AttributeKind::Direction | AttributeKind::Other))
            .find(|kind| kind.name() == lower)
            .unwrap_or(AttributeKind::Other)
    }

    /// Whether the attribute may appear before the first m= line
    pub fn allowed_at_session_level(self) -> bool {
        match self {
            AttributeKind::Connection
            | AttributeKind::Direction
            | AttributeKind::Extmap
            | AttributeKind::Fingerprint
            | AttributeKind::Group
            | AttributeKind::IceLite
            | AttributeKind::IceOptions
            | AttributeKind::IcePwd
            | AttributeKind::IceUfrag
            | AttributeKind::Identity
            | AttributeKind::Inactive
            | AttributeKind::MsidSemantic
            | AttributeKind::Recvonly
            | AttributeKind::Sendonly
            | AttributeKind::Sendrecv
            | AttributeKind::Setup
            | AttributeKind::Other => true,

            AttributeKind::BundleOnly
            | AttributeKind::Candidate
            | AttributeKind::Fmtp
            | AttributeKind::IceMismatch
            | AttributeKind::Imageattr
            | AttributeKind::Label
            | AttributeKind::Maxptime
            | AttributeKind::Mid
            | AttributeKind::Msid
            | AttributeKind::Ptime
            | AttributeKind::RemoteCandidates
            | AttributeKind::Rtcp
            | AttributeKind::RtcpFb
            | AttributeKind::RtcpMux
            | AttributeKind::RtcpRsize
            | AttributeKind::Rtpmap
            | AttributeKind::Sctpmap
            | AttributeKind::Ssrc
            | AttributeKind::SsrcGroup => false,
        }
    }

    /// Whether the attribute may appear inside an m= section
    pub fn allowed_at_media_level(self) -> bool {
        match self {
            AttributeKind::Group
            | AttributeKind::IceLite
            | AttributeKind::Identity
            | AttributeKind::MsidSemantic => false,

            AttributeKind::BundleOnly
            | AttributeKind::Candidate
            | AttributeKind::Connection
            | AttributeKind::Direction
            | AttributeKind::Extmap
            | AttributeKind::Fingerprint
            | AttributeKind::Fmtp
            | AttributeKind::IceMismatch
            | AttributeKind::IceOptions
            | AttributeKind::IcePwd
            | AttributeKind::IceUfrag
            | AttributeKind::Imageattr
            | AttributeKind::Inactive
            | AttributeKind::Label
            | AttributeKind::Maxptime
            | AttributeKind::Mid
            | AttributeKind::Msid
            | AttributeKind::Ptime
            | AttributeKind::Recvonly
            | AttributeKind::RemoteCandidates
            | AttributeKind::Rtcp
            | AttributeKind::RtcpFb
            | AttributeKind::RtcpMux
            | AttributeKind::RtcpRsize
            | AttributeKind::Rtpmap
            | AttributeKind::Sctpmap
            | AttributeKind::Sendonly
            | AttributeKind::Sendrecv
            | AttributeKind::Setup
            | AttributeKind::Ssrc
            | AttributeKind::SsrcGroup
            | AttributeKind::Other => true,
        }
    }

    /// Legality at an arbitrary level
    pub fn allowed_at(self, level: Level) -> bool {
        match level {
            Level::Session => self.allowed_at_session_level(),
            Level::Media => self.allowed_at_media_level(),
        }
    }

    /// Whether a media-level lookup of this kind falls back to the session
    /// level when the media section does not define it
    pub fn inherits_from_session(self) -> bool {
        self != AttributeKind::Other
            && self.allowed_at_session_level()
            && self.allowed_at_media_level()
    }

    /// Kinds stored as a presence-only flag
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            AttributeKind::BundleOnly
                | AttributeKind::IceLite
                | AttributeKind::IceMismatch
                | AttributeKind::RtcpMux
                | AttributeKind::RtcpRsize
        )
    }

    /// Kinds stored as a single opaque string
    pub fn is_text(self) -> bool {
        matches!(
            self,
            AttributeKind::IcePwd
                | AttributeKind::IceUfrag
                | AttributeKind::Imageattr
                | AttributeKind::Label
                | AttributeKind::Mid
                | AttributeKind::MsidSemantic
        )
    }

    /// Kinds stored as a single unsigned number
    pub fn is_number(self) -> bool {
        matches!(self, AttributeKind::Maxptime | AttributeKind::Ptime)
    }

    /// Kinds stored as one string per attribute line
    pub fn is_multi_text(self) -> bool {
        matches!(self, AttributeKind::Candidate)
    }

    /// The four direction flags, which all store into `Direction`
    pub fn is_direction_flag(self) -> bool {
        matches!(
            self,
            AttributeKind::Inactive
                | AttributeKind::Recvonly
                | AttributeKind::Sendonly
                | AttributeKind::Sendrecv
        )
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
