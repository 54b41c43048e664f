/// Split free text into lowercase words, breaking on anything that isn't an ASCII letter.
/// Order and duplicates are preserved.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
}

/// Trimmed, lowercased dictionary entry, or `None` if it can't be scored.
pub fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_text() {
        let tokens: Vec<String> =
            tokenize("To be, or not to be: that is the question.").collect();
        assert_eq!(
            tokens,
            vec!["to", "be", "or", "not", "to", "be", "that", "is", "the", "question"]
        );
    }

    #[test]
    fn test_tokenize_splits_on_apostrophes_and_digits() {
        let tokens: Vec<String> = tokenize("O'er 2nd\tAct\nIII").collect();
        assert_eq!(tokens, vec!["o", "er", "nd", "act", "iii"]);
    }

    #[test]
    fn test_tokenize_drops_non_ascii_letters() {
        let tokens: Vec<String> = tokenize("naïve café").collect();
        assert_eq!(tokens, vec!["na", "ve", "caf"]);
    }

    #[test]
    fn test_normalize_entry() {
        assert_eq!(normalize_entry("  Hello \n"), Some("hello".to_string()));
        assert_eq!(normalize_entry(""), None);
        assert_eq!(normalize_entry("   "), None);
        assert_eq!(normalize_entry("can't"), None);
        assert_eq!(normalize_entry("über"), None);
    }
}
