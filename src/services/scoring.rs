use crate::models::Word;
use crate::services::histogram::LetterHistogram;
use crate::services::tables::ScoringConfig;

/// Blank tiles on the board; a word needing more cannot be played.
pub const MAX_BLANKS: u32 = 2;

/// Bonus for a word that uses a full seven-tile rack.
pub const SEVEN_LETTER_BONUS: u32 = 50;

const DOUBLE_LETTER_PREFIX: usize = 3;

/// Number of letters in the word the tile supply can't cover and a blank must stand in for.
pub fn blanks_needed(histogram: &LetterHistogram, config: &ScoringConfig) -> u32 {
    histogram
        .iter()
        .map(|(letter, count)| count.saturating_sub(config.available_letters[letter]))
        .sum()
}

pub fn is_playable(histogram: &LetterHistogram, config: &ScoringConfig) -> bool {
    blanks_needed(histogram, config) <= MAX_BLANKS
}

/// Letter values summed over the tiles actually drawn from supply.
/// Letters covered by a blank are worth nothing.
pub fn base_score(histogram: &LetterHistogram, config: &ScoringConfig) -> u32 {
    histogram
        .iter()
        .map(|(letter, count)| {
            config.letter_scores[letter] * count.min(config.available_letters[letter])
        })
        .sum()
}

/// Highest single letter value among the first three letters and the rest of the word.
pub fn double_letter_bonus(word: &Word, config: &ScoringConfig) -> u32 {
    let first = word.ordinals().take(DOUBLE_LETTER_PREFIX);
    let rest = word.ordinals().skip(DOUBLE_LETTER_PREFIX);
    first
        .chain(rest)
        .map(|letter| config.letter_scores[letter])
        .max()
        .unwrap_or(0)
}

/// Score of the word placed on the board: base score and double-letter
/// bonus each counted twice, plus the seven-letter bonus.
pub fn placement_score(word: &Word, histogram: &LetterHistogram, config: &ScoringConfig) -> u32 {
    let base = base_score(histogram, config);
    let bonus = double_letter_bonus(word, config);
    let length_bonus = if word.len() == 7 { SEVEN_LETTER_BONUS } else { 0 };
    2 * base + 2 * bonus + length_bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tables::STANDARD_LETTER_SCORES;

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    fn score(text: &str) -> u32 {
        let config = ScoringConfig::default();
        let w = word(text);
        placement_score(&w, &LetterHistogram::of(&w), &config)
    }

    #[test]
    fn test_blanks_needed_within_supply() {
        let config = ScoringConfig::default();
        assert_eq!(blanks_needed(&LetterHistogram::of(&word("bags")), &config), 0);
        assert_eq!(blanks_needed(&LetterHistogram::of(&word("eeeeeeeeeeee")), &config), 0);
    }

    #[test]
    fn test_blanks_needed_over_supply() {
        let config = ScoringConfig::default();
        // z supply is 1
        let h = LetterHistogram::of(&word("zzzzzzz"));
        assert_eq!(blanks_needed(&h, &config), 6);
        assert!(!is_playable(&h, &config));

        // two extra z's, exactly the two blanks
        let h = LetterHistogram::of(&word("zzz"));
        assert_eq!(blanks_needed(&h, &config), 2);
        assert!(is_playable(&h, &config));

        // one missing q and two missing j's
        let h = LetterHistogram::of(&word("qqjjj"));
        assert_eq!(blanks_needed(&h, &config), 3);
        assert!(!is_playable(&h, &config));
    }

    #[test]
    fn test_base_score() {
        let config = ScoringConfig::default();
        assert_eq!(base_score(&LetterHistogram::of(&word("bags")), &config), 7);
        // only one z tile counts, the blanks add nothing
        assert_eq!(base_score(&LetterHistogram::of(&word("zzz")), &config), 10);
    }

    #[test]
    fn test_base_score_monotone_in_supply() {
        let w = word("pizzazz");
        let h = LetterHistogram::of(&w);
        let mut previous = 0;
        for z_supply in 0..6 {
            let mut available = crate::services::tables::STANDARD_AVAILABLE_LETTERS;
            available[25] = z_supply;
            let config = ScoringConfig::new(&STANDARD_LETTER_SCORES, &available).unwrap();
            let current = base_score(&h, &config);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_double_letter_bonus() {
        let config = ScoringConfig::default();
        assert_eq!(double_letter_bonus(&word("bags"), &config), 3);
        // the best letter sits in the middle of the word
        assert_eq!(double_letter_bonus(&word("aaaqaaa"), &config), 10);
        assert_eq!(double_letter_bonus(&word("ox"), &config), 8);
        assert_eq!(double_letter_bonus(&word("a"), &config), 1);
    }

    #[test]
    fn test_placement_score_at_table_bound() {
        use crate::services::tables::MAX_TABLE_VALUE;

        let config = ScoringConfig::new(&[MAX_TABLE_VALUE; 26], &[MAX_TABLE_VALUE; 26]).unwrap();
        let text: String = (b'a'..=b'z')
            .flat_map(|b| std::iter::repeat(char::from(b)).take(1_002))
            .collect();
        let w = word(&text);
        let h = LetterHistogram::of(&w);

        assert_eq!(blanks_needed(&h, &config), 26 * 2);
        assert_eq!(base_score(&h, &config), 26 * 1_000 * 1_000);
        assert_eq!(placement_score(&w, &h, &config), 2 * 26_000_000 + 2 * 1_000);
    }

    #[test]
    fn test_placement_score_bags() {
        assert_eq!(score("bags"), 20);
    }

    #[test]
    fn test_placement_score_seven_letters() {
        // base 1+1+1+1+2+1+1 = 8, bonus 2
        assert_eq!(score("readies"), 2 * 8 + 2 * 2 + 50);
        // eight letters get no length bonus
        assert_eq!(score("readiest"), 2 * 9 + 2 * 2);
    }
}
