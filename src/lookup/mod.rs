pub mod client;
pub mod prefix;
pub mod types;

pub use client::{BinLookup, LookupClient};
pub use prefix::extract_bin;
pub use types::LookupResponse;
