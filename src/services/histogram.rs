use crate::models::Word;
use crate::services::tables::ALPHABET_LEN;

/// Per-word letter counts. Built fresh for every word and owned by it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterHistogram {
    counts: [u32; ALPHABET_LEN],
}

impl LetterHistogram {
    pub fn of(word: &Word) -> Self {
        let mut histogram = Self::default();
        for letter in word.ordinals() {
            histogram.counts[usize::from(letter)] += 1;
        }
        histogram
    }

    #[cfg(test)]
    fn count(&self, letter: u8) -> u32 {
        self.counts[usize::from(letter)]
    }

    /// `(letter, count)` for each letter that occurs at least once.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (0u8..)
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(text: &str) -> LetterHistogram {
        LetterHistogram::of(&Word::parse(text).unwrap())
    }

    #[test]
    fn test_distinct_letters() {
        let h = histogram("bags");
        assert_eq!(
            h.iter().collect::<Vec<_>>(),
            vec![(0, 1), (1, 1), (6, 1), (18, 1)]
        );
    }

    #[test]
    fn test_repeated_letters() {
        let h = histogram("mississippi");
        assert_eq!(h.count(b'i' - b'a'), 4);
        assert_eq!(h.count(b's' - b'a'), 4);
        assert_eq!(h.count(b'p' - b'a'), 2);
        assert_eq!(h.count(b'm' - b'a'), 1);
        assert_eq!(h.iter().count(), 4);
    }

    #[test]
    fn test_total_matches_length() {
        for text in ["a", "zzzzzzz", "quixotic", "honorificabilitudinitatibus"] {
            assert_eq!(histogram(text).total() as usize, text.len(), "{}", text);
        }
    }
}
