//! Line-oriented SDP parse tree and error reporting

pub mod errors;
pub mod line;
pub mod tree;

pub use self::errors::{ErrorHolder, ErrorSink, ParseError};
pub use self::line::{parse_sdp_line, SdpLine};
pub use self::tree::{SdpLines, SdpTree};
