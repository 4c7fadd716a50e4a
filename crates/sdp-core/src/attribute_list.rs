//! Attribute list container
//!
//! An [`AttributeList`] holds the attributes of one level (the session or
//! one media section), at most one per kind, in the order they were first
//! added. Kinds that repeat on the wire are list-shaped attributes, so
//! loading a second `a=rtpmap` line appends to the stored list instead of
//! adding a second slot.

use crate::attributes::{
    Attribute, AttributeKind, ConnectionValue, ExtmapList, FingerprintList, FmtpList, GroupList,
    IceOptions, Identity, Level, MediaDirection, MsidList, RemoteCandidates, Rtcp, RtcpFbList,
    RtpmapList, SctpmapList, SetupRole, SsrcGroupList, SsrcList,
};
use crate::config::LoadConfig;
use crate::error::{Error, Result};
use crate::parser::{ErrorSink, SdpLine, SdpTree};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeList {
    level: Level,
    attributes: Vec<Attribute>,
    /// Set once `load` has run; a list is loaded at most once
    #[serde(default)]
    loaded: bool,
}

impl AttributeList {
    pub fn new(level: Level) -> Self {
        AttributeList {
            level,
            attributes: Vec::new(),
            loaded: false,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Stored attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Whether an attribute of `kind` is stored
    ///
    /// For `Other`, whether any unrecognized attribute is stored.
    pub fn has(&self, kind: AttributeKind) -> bool {
        self.get_optional(kind).is_some()
    }

    /// # Panics
    ///
    /// Panics if nothing of `kind` is stored. Use `get_optional` or check
    /// with `has` first.
    pub fn get(&self, kind: AttributeKind) -> &Attribute {
        match self.get_optional(kind) {
            Some(attribute) => attribute,
            None => panic!("no {:?} attribute at {} level", kind, self.level),
        }
    }

    pub fn get_optional(&self, kind: AttributeKind) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: AttributeKind) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|a| a.kind() == kind)
    }

    /// Unrecognized attribute by its raw name (ASCII case-insensitive)
    pub fn other(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.kind() == AttributeKind::Other && a.name().eq_ignore_ascii_case(name))
    }

    /// Stores `attribute` under `kind`, replacing what was there
    ///
    /// The replacement keeps the original position. Unrecognized attributes
    /// are keyed by their raw name, so two different unknown names occupy
    /// two slots.
    ///
    /// # Panics
    ///
    /// Panics if `attribute` is not of `kind`.
    ///
    /// # Errors
    ///
    /// `NotAllowedAtLevel` when `kind` may not appear at this list's level.
    pub fn set(&mut self, kind: AttributeKind, attribute: Attribute) -> Result<()> {
        assert_eq!(
            attribute.kind(),
            kind,
            "attribute {} stored under the wrong kind",
            attribute.name()
        );
        if !kind.allowed_at(self.level) {
            return Err(Error::NotAllowedAtLevel {
                name: attribute.name().to_string(),
                level: self.level,
            });
        }
        match self.position(&attribute) {
            Some(index) => self.attributes[index] = attribute,
            None => self.attributes.push(attribute),
        }
        Ok(())
    }

    /// Removes and returns the attribute of `kind`
    ///
    /// For `Other`, removes the first unrecognized attribute.
    pub fn remove(&mut self, kind: AttributeKind) -> Option<Attribute> {
        let index = self.attributes.iter().position(|a| a.kind() == kind)?;
        Some(self.attributes.remove(index))
    }

    pub fn remove_other(&mut self, name: &str) -> Option<Attribute> {
        let index = self
            .attributes
            .iter()
            .position(|a| a.kind() == AttributeKind::Other && a.name().eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(index))
    }

    /// Looks `kind` up here, then in `session` for kinds legal at both levels
    ///
    /// A media-level value always wins; the session list is only consulted
    /// when this list has nothing of `kind`.
    pub fn resolve<'a>(
        &'a self,
        kind: AttributeKind,
        session: Option<&'a AttributeList>,
    ) -> Option<&'a Attribute> {
        self.get_optional(kind).or_else(|| {
            if self.level == Level::Media && kind.inherits_from_session() {
                session.and_then(|s| s.get_optional(kind))
            } else {
                None
            }
        })
    }

    fn position(&self, attribute: &Attribute) -> Option<usize> {
        let kind = attribute.kind();
        self.attributes.iter().position(|a| {
            a.kind() == kind
                && (kind != AttributeKind::Other || a.name().eq_ignore_ascii_case(attribute.name()))
        })
    }

    /// Slot for `attribute`'s kind, inserting `attribute` if there is none
    fn slot(&mut self, attribute: Attribute) -> &mut Attribute {
        let index = match self.position(&attribute) {
            Some(index) => index,
            None => {
                self.attributes.push(attribute);
                self.attributes.len() - 1
            }
        };
        &mut self.attributes[index]
    }

    /// Loads every a= line of `level` from the parse tree
    ///
    /// Malformed lines, kinds illegal at this level and repeated scalar
    /// attributes are reported to `errors` and skipped; the first value of a
    /// scalar kind is kept. With `escalate_errors` the first such problem
    /// stops loading.
    ///
    /// # Panics
    ///
    /// Panics if the list has already been loaded.
    pub fn load<T: SdpTree + ?Sized>(
        &mut self,
        tree: &T,
        level: usize,
        config: &LoadConfig,
        errors: &mut dyn ErrorSink,
    ) -> Result<()> {
        assert!(!self.loaded, "{} attribute list loaded twice", self.level);
        self.loaded = true;

        for line in tree.attribute_lines(level) {
            if let Err(err) = self.load_line(line, config) {
                warn!(line = line.number, error = %err, "Skipping attribute");
                errors.add_parse_error(line.number, &err.to_string());
                if config.escalate_errors {
                    return Err(Error::Escalated {
                        line: line.number,
                        message: err.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn load_line(&mut self, line: &SdpLine, config: &LoadConfig) -> Result<()> {
        let (name, value) = line.attribute_parts();
        let attribute = Attribute::parse(name, value)?;
        let kind = attribute.kind();

        if kind == AttributeKind::Other && !config.keep_unknown_attributes {
            debug!(line = line.number, attribute = name, "Dropping unrecognized attribute");
            return Ok(());
        }
        if !kind.allowed_at(self.level) {
            return Err(Error::NotAllowedAtLevel {
                name: attribute.name().to_string(),
                level: self.level,
            });
        }

        trace!(line = line.number, attribute = attribute.name(), "Storing attribute");
        match self.position(&attribute) {
            Some(index) => self.attributes[index]
                .merge(attribute)
                .map_err(|rejected| Error::DuplicateAttribute(rejected.name().to_string())),
            None => {
                self.attributes.push(attribute);
                Ok(())
            }
        }
    }

    /// Writes every attribute in insertion order
    pub fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for attribute in &self.attributes {
            attribute.serialize(out, terminator)?;
        }
        Ok(())
    }

    pub fn connection(&self) -> Option<ConnectionValue> {
        match self.get_optional(AttributeKind::Connection) {
            Some(Attribute::Connection(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn direction(&self) -> Option<MediaDirection> {
        match self.get_optional(AttributeKind::Direction) {
            Some(Attribute::Direction(direction)) => Some(*direction),
            _ => None,
        }
    }

    pub fn setup(&self) -> Option<SetupRole> {
        match self.get_optional(AttributeKind::Setup) {
            Some(Attribute::Setup(role)) => Some(*role),
            _ => None,
        }
    }

    pub fn extmap(&self) -> Option<&ExtmapList> {
        match self.get_optional(AttributeKind::Extmap) {
            Some(Attribute::Extmap(list)) => Some(list),
            _ => None,
        }
    }

    pub fn fingerprint(&self) -> Option<&FingerprintList> {
        match self.get_optional(AttributeKind::Fingerprint) {
            Some(Attribute::Fingerprint(list)) => Some(list),
            _ => None,
        }
    }

    pub fn fmtp(&self) -> Option<&FmtpList> {
        match self.get_optional(AttributeKind::Fmtp) {
            Some(Attribute::Fmtp(list)) => Some(list),
            _ => None,
        }
    }

    pub fn group(&self) -> Option<&GroupList> {
        match self.get_optional(AttributeKind::Group) {
            Some(Attribute::Group(list)) => Some(list),
            _ => None,
        }
    }

    pub fn ice_options(&self) -> Option<&IceOptions> {
        match self.get_optional(AttributeKind::IceOptions) {
            Some(Attribute::IceOptions(options)) => Some(options),
            _ => None,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self.get_optional(AttributeKind::Identity) {
            Some(Attribute::Identity(identity)) => Some(identity),
            _ => None,
        }
    }

    pub fn msid(&self) -> Option<&MsidList> {
        match self.get_optional(AttributeKind::Msid) {
            Some(Attribute::Msid(list)) => Some(list),
            _ => None,
        }
    }

    pub fn remote_candidates(&self) -> Option<&RemoteCandidates> {
        match self.get_optional(AttributeKind::RemoteCandidates) {
            Some(Attribute::RemoteCandidates(candidates)) => Some(candidates),
            _ => None,
        }
    }

    pub fn rtcp(&self) -> Option<&Rtcp> {
        match self.get_optional(AttributeKind::Rtcp) {
            Some(Attribute::Rtcp(rtcp)) => Some(rtcp),
            _ => None,
        }
    }

    pub fn rtcp_fb(&self) -> Option<&RtcpFbList> {
        match self.get_optional(AttributeKind::RtcpFb) {
            Some(Attribute::RtcpFb(list)) => Some(list),
            _ => None,
        }
    }

    pub fn rtpmap(&self) -> Option<&RtpmapList> {
        match self.get_optional(AttributeKind::Rtpmap) {
            Some(Attribute::Rtpmap(list)) => Some(list),
            _ => None,
        }
    }

    pub fn sctpmap(&self) -> Option<&SctpmapList> {
        match self.get_optional(AttributeKind::Sctpmap) {
            Some(Attribute::Sctpmap(list)) => Some(list),
            _ => None,
        }
    }

    pub fn ssrc(&self) -> Option<&SsrcList> {
        match self.get_optional(AttributeKind::Ssrc) {
            Some(Attribute::Ssrc(list)) => Some(list),
            _ => None,
        }
    }

    pub fn ssrc_group(&self) -> Option<&SsrcGroupList> {
        match self.get_optional(AttributeKind::SsrcGroup) {
            Some(Attribute::SsrcGroup(list)) => Some(list),
            _ => None,
        }
    }

    /// ICE candidate lines, without the `candidate:` prefix
    pub fn candidates(&self) -> &[String] {
        match self.get_optional(AttributeKind::Candidate) {
            Some(Attribute::MultiString(candidates)) => candidates.values(),
            _ => &[],
        }
    }

    /// Value of a single-string kind such as mid or ice-ufrag
    pub fn string(&self, kind: AttributeKind) -> Option<&str> {
        match self.get_optional(kind) {
            Some(Attribute::String(string)) => Some(string.value()),
            _ => None,
        }
    }

    /// Value of a number kind such as ptime
    pub fn number(&self, kind: AttributeKind) -> Option<u32> {
        match self.get_optional(kind) {
            Some(Attribute::Number(number)) => Some(number.value()),
            _ => None,
        }
    }

    pub fn mid(&self) -> Option<&str> {
        self.string(AttributeKind::Mid)
    }

    pub fn ice_ufrag(&self) -> Option<&str> {
        self.string(AttributeKind::IceUfrag)
    }

    pub fn ice_pwd(&self) -> Option<&str> {
        self.string(AttributeKind::IcePwd)
    }

    pub fn label(&self) -> Option<&str> {
        self.string(AttributeKind::Label)
    }

    pub fn msid_semantic(&self) -> Option<&str> {
        self.string(AttributeKind::MsidSemantic)
    }

    /// Raw a=imageattr value; its grammar is not interpreted
    pub fn imageattr(&self) -> Option<&str> {
        self.string(AttributeKind::Imageattr)
    }

    pub fn ptime(&self) -> Option<u32> {
        self.number(AttributeKind::Ptime)
    }

    pub fn maxptime(&self) -> Option<u32> {
        self.number(AttributeKind::Maxptime)
    }

    pub(crate) fn rtpmap_mut(&mut self) -> &mut RtpmapList {
        match self.slot(Attribute::Rtpmap(RtpmapList::new())) {
            Attribute::Rtpmap(list) => list,
            _ => unreachable!("rtpmap slot holds another variant"),
        }
    }

    pub(crate) fn fmtp_mut(&mut self) -> &mut FmtpList {
        match self.slot(Attribute::Fmtp(FmtpList::new())) {
            Attribute::Fmtp(list) => list,
            _ => unreachable!("fmtp slot holds another variant"),
        }
    }

    pub(crate) fn sctpmap_mut(&mut self) -> &mut SctpmapList {
        match self.slot(Attribute::Sctpmap(SctpmapList::new())) {
            Attribute::Sctpmap(list) => list,
            _ => unreachable!("sctpmap slot holds another variant"),
        }
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.serialize(f, "\r\n")
    }
}
