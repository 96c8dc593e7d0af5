use indicatif::{ProgressBar, ProgressStyle};

/// Mask a card number for logs, keeping the BIN and the last four characters.
pub fn mask_card(card: &str) -> String {
    let chars: Vec<char> = card.chars().collect();
    if chars.len() <= 10 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}{}", head, "*".repeat(chars.len() - 10), tail)
    }
}

/// Progress bar for a batch of `len` cards.
pub fn batch_progress(len: usize) -> ProgressBar {
    let progress = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} cards ({eta})") {
        progress.set_style(style.progress_chars("=> "));
    }
    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_card() {
        assert_eq!(mask_card("4111111111111111"), "411111******1111");
        assert_eq!(mask_card("41111111111"), "411111*1111");
    }

    #[test]
    fn test_mask_short_card_hides_everything() {
        assert_eq!(mask_card("510510"), "******");
        assert_eq!(mask_card(""), "");
    }
}
