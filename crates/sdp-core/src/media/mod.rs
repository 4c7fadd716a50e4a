//! Media sections (`m=` blocks)

pub mod connection;
pub mod section;
pub mod types;

pub use connection::{parse_connection_data, Connection};
pub use section::MediaSection;
pub use types::{MediaType, Protocol};
