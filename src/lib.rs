pub mod batch;
pub mod bulk;
pub mod config;
pub mod error;
pub mod lookup;
pub mod report;
pub mod utils;

pub use batch::{BatchProcessor, ItemOutcome};
pub use config::Config;
pub use error::{LookupError, Result};
pub use lookup::{BinLookup, LookupClient, LookupResponse};
