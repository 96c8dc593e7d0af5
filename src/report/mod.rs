pub mod formatter;

pub use formatter::{format_failure, format_record, join_reply};
