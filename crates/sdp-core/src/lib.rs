//! Typed SDP attribute and media section model for rvoip
//!
//! This crate sits between raw SDP text and the offer/answer logic of the
//! rvoip stack. It provides the closed set of SDP attribute kinds with
//! their session/media legality rules, one typed value per attribute
//! grammar, an attribute list container, and the media section model with
//! canonical serialization.
//!
//! ```
//! use rvoip_sdp_core::prelude::*;
//!
//! let sdp = "v=0\r\n\
//! a=sendonly\r\n\
//! m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
//! a=rtpmap:111 opus/48000/2\r\n";
//!
//! let mut errors = ErrorHolder::new();
//! let tree = SdpLines::parse(sdp, &mut errors).unwrap();
//! let config = LoadConfig::default();
//!
//! let mut session = AttributeList::new(Level::Session);
//! session.load(&tree, 0, &config, &mut errors).unwrap();
//! let audio = MediaSection::load(&tree, 1, &config, &mut errors).unwrap();
//!
//! assert_eq!(audio.direction_attribute(Some(&session)), MediaDirection::SendOnly);
//! assert_eq!(audio.attributes().rtpmap().unwrap().get_entry("111").name, "opus");
//! assert!(errors.is_empty());
//! ```

pub mod attribute_list;
pub mod attributes;
pub mod config;
pub mod error;
pub mod media;
pub mod network;
pub mod parser;

pub use attribute_list::AttributeList;
pub use attributes::{Attribute, AttributeKind, Level, MediaDirection};
pub use config::LoadConfig;
pub use error::{Error, Result};
pub use media::{Connection, MediaSection, MediaType, Protocol};
pub use parser::{ErrorHolder, ErrorSink, SdpLines, SdpTree};

pub mod prelude {
    pub use crate::attribute_list::AttributeList;
    pub use crate::attributes::{
        Attribute, AttributeKind, FingerprintMode, Level, MediaDirection, SetupRole,
    };
    pub use crate::config::LoadConfig;
    pub use crate::error::{Error, Result};
    pub use crate::media::{Connection, MediaSection, MediaType, Protocol};
    pub use crate::network::{AddrType, NetType};
    pub use crate::parser::{ErrorHolder, ErrorSink, ParseError, SdpLines, SdpTree};
}
