//! Shared helpers for delivery channels.

/// Split `text` into consecutive chunks of at most `max_chars` characters.
///
/// Characters are Unicode scalar values, so a chunk never ends inside a
/// multi-byte sequence. Concatenating the chunks gives back `text`; empty
/// text gives no chunks.
pub fn split_message(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_short_message() {
        let chunks = split_message("hello", 4000);
        assert_eq!(chunks, vec!["hello"]);
    }

    #[test]
    fn test_split_empty_message() {
        assert!(split_message("", 4000).is_empty());
    }

    #[test]
    fn test_split_exact_multiple() {
        let text = "a".repeat(8000);
        let chunks = split_message(&text, 4000);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() == 4000));
    }

    #[test]
    fn test_split_count_is_ceiling() {
        for len in [1usize, 3999, 4000, 4001, 9999, 12000, 12001] {
            let text = "x".repeat(len);
            let chunks = split_message(&text, 4000);
            assert_eq!(chunks.len(), len.div_ceil(4000), "len {len}");
            assert_eq!(chunks.concat(), text);
        }
    }

    #[test]
    fn test_split_counts_characters_not_bytes() {
        // Cyrillic letters are two bytes each.
        let text = "\u{0416}".repeat(4001);
        let chunks = split_message(&text, 4000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 4000);
        assert_eq!(chunks[1], "\u{0416}");
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_split_ignores_newlines() {
        let text = "a\n".repeat(3000);
        let chunks = split_message(&text, 4000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 4000);
        assert_eq!(chunks.concat(), text);
    }
}
