/// Number of leading characters that make up the issuer prefix.
pub const BIN_LENGTH: usize = 6;

/// Issuer prefix (BIN) of a card number.
///
/// No validation: input shorter than [`BIN_LENGTH`] comes back whole.
pub fn extract_bin(card: &str) -> &str {
    match card.char_indices().nth(BIN_LENGTH) {
        Some((end, _)) => &card[..end],
        None => card,
    }
}
