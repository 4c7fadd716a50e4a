// Attribute list container behaviour through the public API

use rvoip_sdp_core::attributes::{
    FingerprintList, FlagAttribute, MultiStringAttribute, NumberAttribute, Rtcp, RtpmapList,
    StringAttribute,
};
use rvoip_sdp_core::prelude::*;

#[test]
fn test_scalar_kind_is_stored_once() {
    let mut list = AttributeList::new(Level::Media);
    list.set(AttributeKind::Ptime, NumberAttribute::new(AttributeKind::Ptime, 20).into())
        .unwrap();
    list.set(AttributeKind::Ptime, NumberAttribute::new(AttributeKind::Ptime, 40).into())
        .unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list.ptime(), Some(40));
    assert_eq!(list.iter().filter(|a| a.kind() == AttributeKind::Ptime).count(), 1);
}

#[test]
fn test_every_kind_respects_level_legality() {
    for kind in AttributeKind::ALL {
        let attribute = match kind {
            AttributeKind::Group => Attribute::parse("group", Some("BUNDLE 0")).unwrap(),
            AttributeKind::IceLite => FlagAttribute::new(kind).into(),
            AttributeKind::Identity => Attribute::parse("identity", Some("YWJj")).unwrap(),
            AttributeKind::MsidSemantic => StringAttribute::new(kind, "WMS *").into(),
            AttributeKind::Rtpmap => Attribute::parse("rtpmap", Some("0 PCMU/8000")).unwrap(),
            AttributeKind::Mid => StringAttribute::new(kind, "0").into(),
            AttributeKind::RtcpMux => FlagAttribute::new(kind).into(),
            _ => continue,
        };

        for level in [Level::Session, Level::Media] {
            let mut list = AttributeList::new(level);
            let result = list.set(kind, attribute.clone());
            if kind.allowed_at(level) {
                assert!(result.is_ok(), "{:?} at {}", kind, level);
                assert!(list.has(kind));
            } else {
                assert_eq!(
                    result,
                    Err(Error::NotAllowedAtLevel {
                        name: attribute.name().to_string(),
                        level,
                    })
                );
                assert!(list.is_empty());
            }
        }
    }
}

#[test]
fn test_session_only_and_media_only_kinds() {
    let mut session = AttributeList::new(Level::Session);
    let mut media = AttributeList::new(Level::Media);

    assert!(media
        .set(AttributeKind::IceLite, FlagAttribute::new(AttributeKind::IceLite).into())
        .is_err());
    assert!(session
        .set(AttributeKind::RtcpMux, FlagAttribute::new(AttributeKind::RtcpMux).into())
        .is_err());
    assert!(session
        .set(AttributeKind::IceLite, FlagAttribute::new(AttributeKind::IceLite).into())
        .is_ok());
    assert!(media
        .set(AttributeKind::RtcpMux, FlagAttribute::new(AttributeKind::RtcpMux).into())
        .is_ok());
}

#[test]
#[should_panic(expected = "stored under the wrong kind")]
fn test_set_with_mismatched_kind_panics() {
    let mut list = AttributeList::new(Level::Media);
    let _ = list.set(
        AttributeKind::Ptime,
        NumberAttribute::new(AttributeKind::Maxptime, 120).into(),
    );
}

#[test]
#[should_panic(expected = "no Rtcp attribute")]
fn test_get_of_absent_kind_panics() {
    let list = AttributeList::new(Level::Media);
    list.get(AttributeKind::Rtcp);
}

#[test]
#[should_panic(expected = "no rtpmap entry for payload type 96")]
fn test_rtpmap_lookup_of_absent_payload_type_panics() {
    let mut rtpmaps = RtpmapList::new();
    rtpmaps.push_entry("0", "PCMU", 8000, 0);
    rtpmaps.get_entry("96");
}

#[test]
fn test_rtpmap_first_duplicate_wins() {
    let mut rtpmaps = RtpmapList::new();
    rtpmaps.push_entry("96", "VP8", 90000, 0);
    rtpmaps.push_entry("96", "VP9", 90000, 0);
    assert!(rtpmaps.has_entry("96"));
    assert_eq!(rtpmaps.get_entry("96").name, "VP8");
}

#[test]
#[should_panic(expected = "implausible fingerprint")]
fn test_strict_fingerprint_aborts() {
    let mut fingerprints = FingerprintList::new();
    fingerprints.push_entry("not-an-algorithm", "AA:BB", FingerprintMode::Strict);
}

#[test]
fn test_lenient_fingerprint_is_discarded() {
    let mut fingerprints = FingerprintList::new();
    fingerprints.push_entry("sha-1", "AA:BB", FingerprintMode::Strict);
    fingerprints.push_entry("not-an-algorithm", "", FingerprintMode::Lenient);
    fingerprints.push_entry("SHA-256", "AA:BB", FingerprintMode::Lenient);
    assert_eq!(fingerprints.len(), 1);
}

#[test]
fn test_loaded_fingerprint_with_unknown_hash_is_reported() {
    let text = "v=0\r\na=fingerprint:sha-3 AA:BB\r\na=fingerprint:sha-1 AA:BB\r\n";
    let mut errors = ErrorHolder::new();
    let tree = SdpLines::parse(text, &mut errors).unwrap();

    let mut list = AttributeList::new(Level::Session);
    list.load(&tree, 0, &LoadConfig::default(), &mut errors).unwrap();
    assert_eq!(list.fingerprint().unwrap().len(), 1);
    assert_eq!(list.to_string(), "a=fingerprint:sha-1 AA:BB\r\n");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].line, 2);
    assert_eq!(errors.errors()[0].message, "Invalid fingerprint attribute: sha-3 AA:BB");
}

#[test]
#[should_panic(expected = "session attribute list loaded twice")]
fn test_session_list_loads_once() {
    let text = "v=0\r\na=ice-lite\r\n";
    let mut errors = ErrorHolder::new();
    let tree = SdpLines::parse(text, &mut errors).unwrap();

    let mut session = AttributeList::new(Level::Session);
    session.load(&tree, 0, &LoadConfig::default(), &mut errors).unwrap();
    let _ = session.load(&tree, 0, &LoadConfig::default(), &mut errors);
}

#[test]
fn test_rtcp_omits_absent_address() {
    let mut list = AttributeList::new(Level::Media);
    list.set(AttributeKind::Rtcp, Rtcp::new(53020).into()).unwrap();
    assert_eq!(list.to_string(), "a=rtcp:53020\r\n");

    let rtcp = Rtcp::with_address(53020, NetType::Internet, AddrType::Ip6, "2001:db8::7");
    list.set(AttributeKind::Rtcp, rtcp.into()).unwrap();
    assert_eq!(list.to_string(), "a=rtcp:53020 IN IP6 2001:db8::7\r\n");
}

#[test]
fn test_remove_and_reinsert_moves_to_end() {
    let mut list = AttributeList::new(Level::Media);
    list.set(AttributeKind::Mid, StringAttribute::new(AttributeKind::Mid, "a").into())
        .unwrap();
    list.set(AttributeKind::Setup, SetupRole::Active.into()).unwrap();

    let mid = list.remove(AttributeKind::Mid).unwrap();
    list.set(AttributeKind::Mid, mid).unwrap();
    assert_eq!(list.to_string(), "a=setup:active\r\na=mid:a\r\n");
}

#[test]
fn test_unknown_attributes_follow_config() {
    let text = "v=0\r\na=x-foo:1\r\na=x-foo:2\r\na=x-bar\r\n";
    let mut errors = ErrorHolder::new();
    let tree = SdpLines::parse(text, &mut errors).unwrap();

    let mut kept = AttributeList::new(Level::Session);
    kept.load(&tree, 0, &LoadConfig::default(), &mut errors).unwrap();
    assert_eq!(kept.len(), 2);
    match kept.other("x-foo") {
        Some(Attribute::MultiString(values)) => assert_eq!(values.values(), ["1", "2"]),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(kept.to_string(), "a=x-foo:1\r\na=x-foo:2\r\na=x-bar\r\n");

    let config = LoadConfig {
        keep_unknown_attributes: false,
        ..LoadConfig::default()
    };
    let mut dropped = AttributeList::new(Level::Session);
    dropped.load(&tree, 0, &config, &mut errors).unwrap();
    assert!(dropped.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_candidates_accumulate() {
    let text = "m=audio 9 RTP/AVP 0\r\n\
a=candidate:0 1 UDP 2122252543 192.0.2.4 61665 typ host\r\n\
a=candidate:1 1 UDP 1686052607 203.0.113.7 61665 typ srflx\r\n";
    let mut errors = ErrorHolder::new();
    let tree = SdpLines::parse(text, &mut errors).unwrap();
    let mut list = AttributeList::new(Level::Media);
    list.load(&tree, 1, &LoadConfig::default(), &mut errors).unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list.candidates().len(), 2);
    assert_eq!(list.candidates()[1], "1 1 UDP 1686052607 203.0.113.7 61665 typ srflx");

    let mut built = MultiStringAttribute::new(AttributeKind::Candidate);
    built.push_entry("0 1 UDP 2122252543 192.0.2.4 61665 typ host");
    built.push_entry("1 1 UDP 1686052607 203.0.113.7 61665 typ srflx");
    assert_eq!(list.get(AttributeKind::Candidate), &Attribute::MultiString(built));
}

#[test]
fn test_kind_names_are_canonical() {
    for kind in AttributeKind::ALL {
        if matches!(kind, AttributeKind::Other | AttributeKind::Direction) {
            continue;
        }
        assert_eq!(AttributeKind::from_name(kind.name()), kind);
        assert_eq!(AttributeKind::from_name(&kind.name().to_uppercase()), kind);
    }
    assert_eq!(AttributeKind::from_name("x-unknown"), AttributeKind::Other);
    assert_eq!(AttributeKind::ALL.last(), Some(&AttributeKind::Other));
}

#[test]
#[should_panic(expected = "unrecognized attributes have no canonical name")]
fn test_other_kind_has_no_name() {
    AttributeKind::Other.name();
}

#[test]
fn test_json_round_trip() {
    let mut list = AttributeList::new(Level::Media);
    list.set(AttributeKind::Direction, MediaDirection::SendOnly.into()).unwrap();
    list.set(AttributeKind::Rtcp, Rtcp::new(9).into()).unwrap();
    let json = serde_json::to_string(&list).unwrap();
    let restored: AttributeList = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}
