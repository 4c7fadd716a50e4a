//! SDP attribute model
//!
//! Every `a=` line maps to one [`Attribute`] variant. Kinds that may repeat
//! (rtpmap, fmtp, ssrc, ...) are stored as one list-shaped variant holding
//! all entries of a level, so an attribute list never holds two values of
//! the same kind.
//!
//! | Module | Attribute | RFC |
//! |--------|-----------|-----|
//! | [`connection`] | `a=connection` | RFC 4145 |
//! | [`direction`] | `a=sendrecv` / `sendonly` / `recvonly` / `inactive` | RFC 4566 |
//! | [`extmap`] | `a=extmap` | RFC 5285 |
//! | [`fingerprint`] | `a=fingerprint` | RFC 4572 |
//! | [`fmtp`] | `a=fmtp` | RFC 4566 |
//! | [`group`] | `a=group` | RFC 5888 |
//! | [`ice_options`] | `a=ice-options` | RFC 5245 |
//! | [`identity`] | `a=identity` | draft-ietf-rtcweb-security-arch |
//! | [`msid`] | `a=msid` | draft-ietf-mmusic-msid |
//! | [`remote_candidates`] | `a=remote-candidates` | RFC 5245 |
//! | [`rtcp`] | `a=rtcp` | RFC 3605 |
//! | [`rtcp_fb`] | `a=rtcp-fb` | RFC 4585 |
//! | [`rtpmap`] | `a=rtpmap` | RFC 4566 |
//! | [`sctpmap`] | `a=sctpmap` | draft-ietf-mmusic-sctp-sdp |
//! | [`setup`] | `a=setup` | RFC 4145 |
//! | [`ssrc`] | `a=ssrc` | RFC 5576 |
//! | [`ssrc_group`] | `a=ssrc-group` | RFC 5576 |
//! | [`generic`] | everything else | |

pub mod common;
pub mod connection;
pub mod direction;
pub mod extmap;
pub mod fingerprint;
pub mod fmtp;
pub mod generic;
pub mod group;
pub mod ice_options;
pub mod identity;
mod kind;
pub mod msid;
pub mod remote_candidates;
pub mod rtcp;
pub mod rtcp_fb;
pub mod rtpmap;
pub mod sctpmap;
pub mod setup;
pub mod ssrc;
pub mod ssrc_group;

pub use connection::{parse_connection, ConnectionValue};
pub use direction::MediaDirection;
pub use extmap::{parse_extmap, Extmap, ExtmapList};
pub use fingerprint::{
    parse_fingerprint, Fingerprint, FingerprintList, FingerprintMode, HashAlgorithm,
};
pub use fmtp::{parse_fmtp, Fmtp, FmtpList};
pub use generic::{FlagAttribute, MultiStringAttribute, NumberAttribute, StringAttribute};
pub use group::{parse_group, Group, GroupList, GroupSemantics};
pub use ice_options::{parse_ice_options, IceOptions};
pub use identity::{parse_identity, Identity};
pub use kind::{AttributeKind, Level};
pub use msid::{parse_msid, Msid, MsidList};
pub use remote_candidates::{parse_remote_candidates, RemoteCandidate, RemoteCandidates};
pub use rtcp::{parse_rtcp, Rtcp, RtcpAddress};
pub use rtcp_fb::{parse_rtcp_fb, RtcpFb, RtcpFbList, RtcpFbType};
pub use rtpmap::{parse_rtpmap, Rtpmap, RtpmapList};
pub use sctpmap::{parse_sctpmap, Sctpmap, SctpmapList};
pub use setup::{parse_setup, SetupRole};
pub use ssrc::{parse_ssrc, Ssrc, SsrcList};
pub use ssrc_group::{parse_ssrc_group, SsrcGroup, SsrcGroupList, SsrcGroupSemantics};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One stored attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Connection(ConnectionValue),
    Direction(MediaDirection),
    Extmap(ExtmapList),
    Fingerprint(FingerprintList),
    Fmtp(FmtpList),
    Group(GroupList),
    IceOptions(IceOptions),
    Identity(Identity),
    Msid(MsidList),
    RemoteCandidates(RemoteCandidates),
    Rtcp(Rtcp),
    RtcpFb(RtcpFbList),
    Rtpmap(RtpmapList),
    Sctpmap(SctpmapList),
    Setup(SetupRole),
    Ssrc(SsrcList),
    SsrcGroup(SsrcGroupList),
    Flag(FlagAttribute),
    String(StringAttribute),
    Number(NumberAttribute),
    MultiString(MultiStringAttribute),
}

impl Attribute {
    /// The kind this attribute is stored under
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Connection(_) => AttributeKind::Connection,
            Attribute::Direction(_) => AttributeKind::Direction,
            Attribute::Extmap(_) => AttributeKind::Extmap,
            Attribute::Fingerprint(_) => AttributeKind::Fingerprint,
            Attribute::Fmtp(_) => AttributeKind::Fmtp,
            Attribute::Group(_) => AttributeKind::Group,
            Attribute::IceOptions(_) => AttributeKind::IceOptions,
            Attribute::Identity(_) => AttributeKind::Identity,
            Attribute::Msid(_) => AttributeKind::Msid,
            Attribute::RemoteCandidates(_) => AttributeKind::RemoteCandidates,
            Attribute::Rtcp(_) => AttributeKind::Rtcp,
            Attribute::RtcpFb(_) => AttributeKind::RtcpFb,
            Attribute::Rtpmap(_) => AttributeKind::Rtpmap,
            Attribute::Sctpmap(_) => AttributeKind::Sctpmap,
            Attribute::Setup(_) => AttributeKind::Setup,
            Attribute::Ssrc(_) => AttributeKind::Ssrc,
            Attribute::SsrcGroup(_) => AttributeKind::SsrcGroup,
            Attribute::Flag(flag) => flag.kind(),
            Attribute::String(string) => string.kind(),
            Attribute::Number(number) => number.kind(),
            Attribute::MultiString(multi) => multi.kind(),
        }
    }

    /// Name written after `a=`
    ///
    /// A direction attribute is written as its direction token; generic
    /// attributes of unrecognized kind report their raw name.
    pub fn name(&self) -> &str {
        match self {
            Attribute::Direction(direction) => direction.as_str(),
            Attribute::Flag(flag) => flag.name(),
            Attribute::String(string) => string.name(),
            Attribute::MultiString(multi) => multi.name(),
            other => other.kind().name(),
        }
    }

    /// Whether more lines of this kind merge into this value
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Attribute::Extmap(_)
                | Attribute::Fingerprint(_)
                | Attribute::Fmtp(_)
                | Attribute::Group(_)
                | Attribute::Msid(_)
                | Attribute::RtcpFb(_)
                | Attribute::Rtpmap(_)
                | Attribute::Sctpmap(_)
                | Attribute::Ssrc(_)
                | Attribute::SsrcGroup(_)
                | Attribute::MultiString(_)
        )
    }

    /// Writes the attribute's line(s), each followed by `terminator`
    pub fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        match self {
            Attribute::Connection(value) => {
                write!(out, "a={}:{}", AttributeKind::Connection, value)?;
                out.write_str(terminator)
            }
            Attribute::Direction(direction) => {
                write!(out, "a={}", direction)?;
                out.write_str(terminator)
            }
            Attribute::Extmap(list) => list.serialize(out, terminator),
            Attribute::Fingerprint(list) => list.serialize(out, terminator),
            Attribute::Fmtp(list) => list.serialize(out, terminator),
            Attribute::Group(list) => list.serialize(out, terminator),
            Attribute::IceOptions(options) => options.serialize(out, terminator),
            Attribute::Identity(identity) => identity.serialize(out, terminator),
            Attribute::Msid(list) => list.serialize(out, terminator),
            Attribute::RemoteCandidates(candidates) => candidates.serialize(out, terminator),
            Attribute::Rtcp(rtcp) => rtcp.serialize(out, terminator),
            Attribute::RtcpFb(list) => list.serialize(out, terminator),
            Attribute::Rtpmap(list) => list.serialize(out, terminator),
            Attribute::Sctpmap(list) => list.serialize(out, terminator),
            Attribute::Setup(role) => {
                write!(out, "a={}:{}", AttributeKind::Setup, role)?;
                out.write_str(terminator)
            }
            Attribute::Ssrc(list) => list.serialize(out, terminator),
            Attribute::SsrcGroup(list) => list.serialize(out, terminator),
            Attribute::Flag(flag) => flag.serialize(out, terminator),
            Attribute::String(string) => string.serialize(out, terminator),
            Attribute::Number(number) => number.serialize(out, terminator),
            Attribute::MultiString(multi) => multi.serialize(out, terminator),
        }
    }

    /// Builds an attribute from one `a=` line, split at the first ':'
    ///
    /// List kinds come back holding a single entry. Fingerprints are
    /// ingested leniently: an unknown hash function is an error here rather
    /// than a silently empty list.
    pub fn parse(name: &str, value: Option<&str>) -> Result<Attribute> {
        let kind = AttributeKind::from_name(name);
        let value = value.map(str::trim).filter(|v| !v.is_empty());
        let required = || value.ok_or_else(|| Error::invalid_attribute(name, ""));

        if kind.is_flag() || kind.is_direction_flag() {
            if let Some(value) = value {
                return Err(Error::invalid_attribute(name, value));
            }
        }

        let attribute = match kind {
            AttributeKind::Connection => Attribute::Connection(parse_connection(required()?)?),
            AttributeKind::Sendrecv => Attribute::Direction(MediaDirection::SendRecv),
            AttributeKind::Sendonly => Attribute::Direction(MediaDirection::SendOnly),
            AttributeKind::Recvonly => Attribute::Direction(MediaDirection::RecvOnly),
            AttributeKind::Inactive => Attribute::Direction(MediaDirection::Inactive),
            AttributeKind::Extmap => Attribute::Extmap(ExtmapList {
                extmaps: vec![parse_extmap(required()?)?],
            }),
            AttributeKind::Fingerprint => {
                Attribute::Fingerprint(fingerprint::parse_fingerprint_list(required()?)?)
            }
            AttributeKind::Fmtp => Attribute::Fmtp(FmtpList {
                fmtps: vec![parse_fmtp(required()?)?],
            }),
            AttributeKind::Group => Attribute::Group(GroupList {
                groups: vec![parse_group(required()?)?],
            }),
            AttributeKind::IceOptions => Attribute::IceOptions(parse_ice_options(required()?)?),
            AttributeKind::Identity => Attribute::Identity(parse_identity(required()?)?),
            AttributeKind::Msid => Attribute::Msid(MsidList {
                msids: vec![parse_msid(required()?)?],
            }),
            AttributeKind::RemoteCandidates => {
                Attribute::RemoteCandidates(parse_remote_candidates(required()?)?)
            }
            AttributeKind::Rtcp => Attribute::Rtcp(parse_rtcp(required()?)?),
            AttributeKind::RtcpFb => Attribute::RtcpFb(RtcpFbList {
                feedbacks: vec![parse_rtcp_fb(required()?)?],
            }),
            AttributeKind::Rtpmap => Attribute::Rtpmap(RtpmapList {
                rtpmaps: vec![parse_rtpmap(required()?)?],
            }),
            AttributeKind::Sctpmap => Attribute::Sctpmap(SctpmapList {
                sctpmaps: vec![parse_sctpmap(required()?)?],
            }),
            AttributeKind::Setup => Attribute::Setup(parse_setup(required()?)?),
            AttributeKind::Ssrc => Attribute::Ssrc(SsrcList {
                ssrcs: vec![parse_ssrc(required()?)?],
            }),
            AttributeKind::SsrcGroup => Attribute::SsrcGroup(SsrcGroupList {
                groups: vec![parse_ssrc_group(required()?)?],
            }),
            AttributeKind::BundleOnly
            | AttributeKind::IceLite
            | AttributeKind::IceMismatch
            | AttributeKind::RtcpMux
            | AttributeKind::RtcpRsize => Attribute::Flag(FlagAttribute::new(kind)),
            AttributeKind::IcePwd
            | AttributeKind::IceUfrag
            | AttributeKind::Imageattr
            | AttributeKind::Label
            | AttributeKind::Mid
            | AttributeKind::MsidSemantic => {
                Attribute::String(StringAttribute::new(kind, required()?))
            }
            AttributeKind::Maxptime | AttributeKind::Ptime => {
                let raw = required()?;
                let number = common::to_result(common::decimal::<u32>(raw), kind, raw)?;
                Attribute::Number(NumberAttribute::new(kind, number))
            }
            AttributeKind::Candidate => {
                let mut candidates = MultiStringAttribute::new(kind);
                candidates.push_entry(required()?);
                Attribute::MultiString(candidates)
            }
            AttributeKind::Direction | AttributeKind::Other => {
                if !common::is_valid_token(name) {
                    return Err(Error::invalid_attribute(name, value.unwrap_or_default()));
                }
                match value {
                    Some(value) => {
                        let mut other = MultiStringAttribute::other(name);
                        other.push_entry(value);
                        Attribute::MultiString(other)
                    }
                    None => Attribute::Flag(FlagAttribute::other(name)),
                }
            }
        };
        Ok(attribute)
    }

    /// Appends the entries of `other` to this list-shaped attribute
    ///
    /// Hands `other` back when the two cannot be merged: scalar kinds, or
    /// attributes of different kinds or names.
    pub(crate) fn merge(&mut self, other: Attribute) -> std::result::Result<(), Attribute> {
        match (self, other) {
            (Attribute::Extmap(a), Attribute::Extmap(b)) => a.extmaps.extend(b.extmaps),
            (Attribute::Fingerprint(a), Attribute::Fingerprint(b)) => {
                a.fingerprints.extend(b.fingerprints)
            }
            (Attribute::Fmtp(a), Attribute::Fmtp(b)) => a.fmtps.extend(b.fmtps),
            (Attribute::Group(a), Attribute::Group(b)) => a.groups.extend(b.groups),
            (Attribute::Msid(a), Attribute::Msid(b)) => a.msids.extend(b.msids),
            (Attribute::RtcpFb(a), Attribute::RtcpFb(b)) => a.feedbacks.extend(b.feedbacks),
            (Attribute::Rtpmap(a), Attribute::Rtpmap(b)) => a.rtpmaps.extend(b.rtpmaps),
            (Attribute::Sctpmap(a), Attribute::Sctpmap(b)) => a.sctpmaps.extend(b.sctpmaps),
            (Attribute::Ssrc(a), Attribute::Ssrc(b)) => a.ssrcs.extend(b.ssrcs),
            (Attribute::SsrcGroup(a), Attribute::SsrcGroup(b)) => a.groups.extend(b.groups),
            (Attribute::MultiString(a), Attribute::MultiString(b))
                if a.kind() == b.kind() && a.name().eq_ignore_ascii_case(b.name()) =>
            {
                a.append(b)
            }
            (_, other) => return Err(other),
        }
        Ok(())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.serialize(f, "\r\n")
    }
}

macro_rules! impl_from_value {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Attribute {
                fn from(value: $ty) -> Self {
                    Attribute::$variant(value)
                }
            }
        )*
    };
}

impl_from_value!(
    Connection(ConnectionValue),
    Direction(MediaDirection),
    Extmap(ExtmapList),
    Fingerprint(FingerprintList),
    Fmtp(FmtpList),
    Group(GroupList),
    IceOptions(IceOptions),
    Identity(Identity),
    Msid(MsidList),
    RemoteCandidates(RemoteCandidates),
    Rtcp(Rtcp),
    RtcpFb(RtcpFbList),
    Rtpmap(RtpmapList),
    Sctpmap(SctpmapList),
    Setup(SetupRole),
    Ssrc(SsrcList),
    SsrcGroup(SsrcGroupList),
    Flag(FlagAttribute),
    String(StringAttribute),
    Number(NumberAttribute),
    MultiString(MultiStringAttribute),
);
