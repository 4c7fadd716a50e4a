//! Media direction attributes
//!
//! RFC 4566 defines four property attributes that set the direction of a
//! media stream: a=sendrecv, a=sendonly, a=recvonly and a=inactive. They are
//! stored as a single direction attribute per level.

use crate::attributes::AttributeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a media stream
///
/// Defaults to `SendRecv`, which RFC 4566 section 6 assumes when neither the
/// media section nor the session carries a direction attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaDirection {
    #[default]
    SendRecv,
    SendOnly,
    RecvOnly,
    Inactive,
}

impl MediaDirection {
    /// The attribute name this direction is written as
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaDirection::SendRecv => "sendrecv",
            MediaDirection::SendOnly => "sendonly",
            MediaDirection::RecvOnly => "recvonly",
            MediaDirection::Inactive => "inactive",
        }
    }

    /// Maps one of the four direction tokens, case-sensitively
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "sendrecv" => Some(MediaDirection::SendRecv),
            "sendonly" => Some(MediaDirection::SendOnly),
            "recvonly" => Some(MediaDirection::RecvOnly),
            "inactive" => Some(MediaDirection::Inactive),
            _ => None,
        }
    }

    /// Maps a direction flag kind to its direction
    pub fn from_kind(kind: AttributeKind) -> Option<Self> {
        match kind {
            AttributeKind::Sendrecv => Some(MediaDirection::SendRecv),
            AttributeKind::Sendonly => Some(MediaDirection::SendOnly),
            AttributeKind::Recvonly => Some(MediaDirection::RecvOnly),
            AttributeKind::Inactive => Some(MediaDirection::Inactive),
            _ => None,
        }
    }

    /// The flag kind this direction is written as
    pub fn flag_kind(&self) -> AttributeKind {
        match self {
            MediaDirection::SendRecv => AttributeKind::Sendrecv,
            MediaDirection::SendOnly => AttributeKind::Sendonly,
            MediaDirection::RecvOnly => AttributeKind::Recvonly,
            MediaDirection::Inactive => AttributeKind::Inactive,
        }
    }

    pub fn sends(&self) -> bool {
        matches!(self, MediaDirection::SendRecv | MediaDirection::SendOnly)
    }

    pub fn receives(&self) -> bool {
        matches!(self, MediaDirection::SendRecv | MediaDirection::RecvOnly)
    }

    /// The direction the remote side sees
    pub fn reverse(&self) -> Self {
        match self {
            MediaDirection::SendOnly => MediaDirection::RecvOnly,
            MediaDirection::RecvOnly => MediaDirection::SendOnly,
            other => *other,
        }
    }
}

impl fmt::Display for MediaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
