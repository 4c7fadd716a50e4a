// Rendering a description, loading it back and rendering again must give the
// same text, for field values across their documented ranges.

use proptest::prelude::*;
use rvoip_sdp_core::attributes::{
    ExtmapList, FingerprintList, FlagAttribute, FmtpList, GroupList, GroupSemantics, IceOptions,
    Identity, MsidList, RemoteCandidate, RemoteCandidates, Rtcp, RtcpFbList, RtcpFbType,
    SsrcGroupList, SsrcGroupSemantics, SsrcList, StringAttribute,
};
use rvoip_sdp_core::prelude::*;

fn token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9._-]{0,11}"
}

fn ipv4() -> impl Strategy<Value = String> {
    any::<[u8; 4]>().prop_map(|[a, b, c, d]| format!("{}.{}.{}.{}", a, b, c, d))
}

fn direction() -> impl Strategy<Value = MediaDirection> {
    prop_oneof![
        Just(MediaDirection::SendRecv),
        Just(MediaDirection::SendOnly),
        Just(MediaDirection::RecvOnly),
        Just(MediaDirection::Inactive),
    ]
}

fn setup() -> impl Strategy<Value = SetupRole> {
    prop_oneof![
        Just(SetupRole::Active),
        Just(SetupRole::Passive),
        Just(SetupRole::Actpass),
        Just(SetupRole::Holdconn),
    ]
}

fn fingerprint() -> impl Strategy<Value = (&'static str, String)> {
    (
        prop::sample::select(vec![
            "sha-1", "sha-224", "sha-256", "sha-384", "sha-512", "md5", "md2",
        ]),
        prop::collection::vec(any::<u8>(), 1..33),
    )
        .prop_map(|(algorithm, bytes)| {
            let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
            (algorithm, hex.join(":"))
        })
}

prop_compose! {
    fn codec()(
        pt in 0u8..128,
        name in "[A-Za-z][A-Za-z0-9-]{0,9}",
        clock in 1u32..200_000,
        channels in 0u32..3,
        fmtp in prop::option::of("[a-z-]{1,12}=[0-9]{1,4}(;[a-z]{1,6}=[0-9]{1,3})?"),
    ) -> (String, String, u32, u32, Option<String>) {
        (pt.to_string(), name, clock, channels, fmtp)
    }
}

prop_compose! {
    fn extmap()(
        entry in 1u16..=u16::MAX,
        direction in prop::option::of(direction()),
        uri in "urn:[a-z]{1,8}:[a-z0-9-]{1,12}",
        attributes in prop::option::of("[a-z0-9]{1,8}"),
    ) -> (u16, Option<MediaDirection>, String, Option<String>) {
        (entry, direction, uri, attributes)
    }
}

prop_compose! {
    fn rtcp()(port in any::<u16>(), address in prop::option::of(ipv4())) -> Rtcp {
        match address {
            Some(address) => Rtcp::with_address(port, NetType::Internet, AddrType::Ip4, address),
            None => Rtcp::new(port),
        }
    }
}

prop_compose! {
    fn rtcp_fb()(
        pt in prop_oneof![Just("*".to_string()), "[0-9]{1,3}"],
        fb_type in prop::sample::select(vec![
            RtcpFbType::Ack,
            RtcpFbType::App,
            RtcpFbType::Ccm,
            RtcpFbType::Nack,
            RtcpFbType::TrrInt,
        ]),
        parameters in prop::option::of("[a-z0-9]{1,8}( [a-z0-9]{1,8})?"),
    ) -> (String, RtcpFbType, String) {
        (pt, fb_type, parameters.unwrap_or_default())
    }
}

prop_compose! {
    fn remote_candidates()(
        triples in prop::collection::vec(("[1-9]", ipv4(), any::<u16>()), 1..3),
    ) -> RemoteCandidates {
        RemoteCandidates::new(
            triples
                .into_iter()
                .map(|(id, address, port)| RemoteCandidate { id, address, port })
                .collect(),
        )
    }
}

fn media_section() -> impl Strategy<Value = MediaSection> {
    (
        any::<u16>(),
        (prop::collection::vec(codec(), 1..5), any::<bool>()),
        prop::collection::vec(extmap(), 0..4),
        prop::collection::vec(fingerprint(), 0..3),
        prop::collection::vec((token(), prop::option::of(token())), 0..3),
        prop::option::of(rtcp()),
        prop::collection::vec(rtcp_fb(), 0..4),
        prop::collection::vec((any::<u32>(), "cname:[a-zA-Z0-9]{1,16}"), 0..4),
        prop::option::of((
            prop::sample::select(vec![
                SsrcGroupSemantics::Fec,
                SsrcGroupSemantics::Fid,
                SsrcGroupSemantics::FecFr,
                SsrcGroupSemantics::Dup,
            ]),
            prop::collection::vec(any::<u32>(), 0..4),
        )),
        prop::option::of(setup()),
        prop::option::of(direction()),
        prop::option::of(remote_candidates()),
    )
        .prop_map(
            |(
                port,
                (codecs, bare_fmtp),
                extmaps,
                fingerprints,
                msids,
                rtcp,
                feedbacks,
                ssrcs,
                ssrc_group,
                setup,
                direction,
                remote,
            )| {
                let mut section =
                    MediaSection::new(1, MediaType::Audio, port, Protocol::UdpTlsRtpSavpf);
                for (pt, name, clock, channels, fmtp) in &codecs {
                    section.add_codec(pt, name, *clock, *channels, fmtp.as_deref());
                }

                let attributes = section.attributes_mut();
                // a=fmtp line with no parameters for the first codec
                let (first_pt, ..) = &codecs[0];
                if bare_fmtp && attributes.fmtp().is_none_or(|f| f.get(first_pt).is_none()) {
                    let mut fmtps = match attributes.remove(AttributeKind::Fmtp) {
                        Some(Attribute::Fmtp(list)) => list,
                        _ => FmtpList::new(),
                    };
                    fmtps.push_entry(first_pt.as_str(), "");
                    attributes.set(AttributeKind::Fmtp, fmtps.into()).unwrap();
                }
                if !extmaps.is_empty() {
                    let mut list = ExtmapList::new();
                    for (entry, direction, uri, attrs) in extmaps {
                        list.push_entry(entry, direction, uri, attrs);
                    }
                    attributes.set(AttributeKind::Extmap, list.into()).unwrap();
                }
                if !fingerprints.is_empty() {
                    let mut list = FingerprintList::new();
                    for (algorithm, value) in &fingerprints {
                        list.push_entry(algorithm, value, FingerprintMode::Strict);
                    }
                    attributes.set(AttributeKind::Fingerprint, list.into()).unwrap();
                }
                if !msids.is_empty() {
                    let mut list = MsidList::new();
                    for (identifier, appdata) in msids {
                        list.push_entry(identifier, appdata);
                    }
                    attributes.set(AttributeKind::Msid, list.into()).unwrap();
                }
                if let Some(rtcp) = rtcp {
                    attributes.set(AttributeKind::Rtcp, rtcp.into()).unwrap();
                }
                if !feedbacks.is_empty() {
                    let mut list = RtcpFbList::new();
                    for (pt, fb_type, parameters) in feedbacks {
                        list.push_entry(pt, fb_type, parameters);
                    }
                    attributes.set(AttributeKind::RtcpFb, list.into()).unwrap();
                }
                if !ssrcs.is_empty() {
                    let mut list = SsrcList::new();
                    for (ssrc, attribute) in ssrcs {
                        list.push_entry(ssrc, attribute);
                    }
                    attributes.set(AttributeKind::Ssrc, list.into()).unwrap();
                }
                if let Some((semantics, ids)) = ssrc_group {
                    let mut list = SsrcGroupList::new();
                    list.push_entry(semantics, ids);
                    attributes.set(AttributeKind::SsrcGroup, list.into()).unwrap();
                }
                if let Some(role) = setup {
                    attributes.set(AttributeKind::Setup, role.into()).unwrap();
                }
                if let Some(direction) = direction {
                    attributes.set(AttributeKind::Direction, direction.into()).unwrap();
                }
                if let Some(remote) = remote {
                    attributes.set(AttributeKind::RemoteCandidates, remote.into()).unwrap();
                }
                section
            },
        )
}

fn session_attributes() -> impl Strategy<Value = AttributeList> {
    (
        prop::collection::vec(
            (
                prop::sample::select(vec![
                    GroupSemantics::Ls,
                    GroupSemantics::Fid,
                    GroupSemantics::Srf,
                    GroupSemantics::Anat,
                    GroupSemantics::Fec,
                    GroupSemantics::FecFr,
                    GroupSemantics::Cs,
                    GroupSemantics::Ddp,
                    GroupSemantics::Dup,
                    GroupSemantics::Bundle,
                ]),
                prop::collection::vec(token(), 0..4),
            ),
            0..3,
        ),
        prop::option::of(prop::collection::vec(token(), 1..4)),
        prop::option::of((
            "[A-Za-z0-9+/]{4,24}={0,2}",
            prop::collection::vec("[a-z]{1,6}(=[a-z0-9]{1,6})?", 0..3),
        )),
        prop::collection::vec(fingerprint(), 0..3),
        prop::option::of(setup()),
        prop::option::of(direction()),
        prop::option::of(token()),
        any::<bool>(),
    )
        .prop_map(
            |(groups, ice_options, identity, fingerprints, setup, direction, semantic, lite)| {
                let mut list = AttributeList::new(Level::Session);
                if !groups.is_empty() {
                    let mut group_list = GroupList::new();
                    for (semantics, tags) in groups {
                        group_list.push_entry(semantics, tags);
                    }
                    list.set(AttributeKind::Group, group_list.into()).unwrap();
                }
                if let Some(options) = ice_options {
                    let mut ice = IceOptions::new();
                    for option in options {
                        ice.push_entry(option);
                    }
                    list.set(AttributeKind::IceOptions, ice.into()).unwrap();
                }
                if let Some((assertion, extensions)) = identity {
                    let mut value = Identity::new(assertion);
                    value.extensions = extensions;
                    list.set(AttributeKind::Identity, value.into()).unwrap();
                }
                if !fingerprints.is_empty() {
                    let mut fingerprint_list = FingerprintList::new();
                    for (algorithm, value) in &fingerprints {
                        fingerprint_list.push_entry(algorithm, value, FingerprintMode::Strict);
                    }
                    list.set(AttributeKind::Fingerprint, fingerprint_list.into()).unwrap();
                }
                if let Some(role) = setup {
                    list.set(AttributeKind::Setup, role.into()).unwrap();
                }
                if let Some(direction) = direction {
                    list.set(AttributeKind::Direction, direction.into()).unwrap();
                }
                if let Some(semantic) = semantic {
                    let value = StringAttribute::new(AttributeKind::MsidSemantic, semantic);
                    list.set(AttributeKind::MsidSemantic, value.into()).unwrap();
                }
                if lite {
                    let flag = FlagAttribute::new(AttributeKind::IceLite);
                    list.set(AttributeKind::IceLite, flag.into()).unwrap();
                }
                list
            },
        )
}

proptest! {
    #[test]
    fn test_media_section_round_trip(section in media_section()) {
        let text = format!("v=0\r\n{}", section);
        let mut errors = ErrorHolder::new();
        let tree = SdpLines::parse(&text, &mut errors).unwrap();
        let reloaded = MediaSection::load(&tree, 1, &LoadConfig::strict(), &mut errors).unwrap();

        prop_assert!(errors.is_empty(), "{:?}", errors.errors());
        prop_assert_eq!(reloaded.to_string(), section.to_string());
        prop_assert_eq!(reloaded.formats(), section.formats());
    }

    #[test]
    fn test_session_attributes_round_trip(list in session_attributes()) {
        let text = format!("v=0\r\n{}", list);
        let mut errors = ErrorHolder::new();
        let tree = SdpLines::parse(&text, &mut errors).unwrap();
        let mut reloaded = AttributeList::new(Level::Session);
        reloaded.load(&tree, 0, &LoadConfig::strict(), &mut errors).unwrap();

        prop_assert!(errors.is_empty(), "{:?}", errors.errors());
        prop_assert_eq!(reloaded.to_string(), list.to_string());
    }

    #[test]
    fn test_line_terminator_is_injected(section in media_section()) {
        let mut lf = String::new();
        section.serialize(&mut lf, "\n").unwrap();
        prop_assert_eq!(lf.replace('\n', "\r\n"), section.to_string());
    }
}
