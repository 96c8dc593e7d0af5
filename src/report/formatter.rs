use crate::{error::LookupError, lookup::LookupResponse};

/// Four-line report for one card.
pub fn format_record(card: &str, response: &LookupResponse) -> String {
    format!(
        "CC: {}\nBIN: {}\nStatus: {}\nResponse: {}",
        card, response.bin, response.status, response.response
    )
}

/// Report for a card whose lookup failed.
pub fn format_failure(card: &str, error: &LookupError) -> String {
    format!("CC: {}\nError: {}", card, error)
}

/// Inline reply: records separated by a blank line.
pub fn join_reply(records: &[String]) -> String {
    records.join("\n\n")
}
