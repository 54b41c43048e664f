use std::fs;
use std::ops::Index;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ALPHABET_LEN: usize = 26;

/// Upper bound for any letter value or tile count. Keeps a placement score
/// (at most `2 * 26 * MAX^2 + 2 * MAX + 50`) well inside `u32`.
pub const MAX_TABLE_VALUE: u32 = 1_000;

/// Standard English Scrabble letter values, `a` through `z`.
pub const STANDARD_LETTER_SCORES: [u32; ALPHABET_LEN] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Standard English Scrabble tile distribution, blanks excluded.
pub const STANDARD_AVAILABLE_LETTERS: [u32; ALPHABET_LEN] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// One value per letter, indexed by the letter's ordinal (`a` = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LetterTable([u32; ALPHABET_LEN]);

impl LetterTable {
    const fn new(values: [u32; ALPHABET_LEN]) -> Self {
        Self(values)
    }

    /// Builds a table from an arbitrary slice, rejecting anything that isn't
    /// 26 long or holds a value above [`MAX_TABLE_VALUE`].
    pub fn from_slice(table: &'static str, values: &[u32]) -> Result<Self, ConfigError> {
        let values: [u32; ALPHABET_LEN] = values
            .try_into()
            .map_err(|_| ConfigError::TableLength {
                table,
                len: values.len(),
            })?;
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| **v > MAX_TABLE_VALUE)
        {
            return Err(ConfigError::ValueOutOfRange {
                table,
                letter: char::from(b'a' + index as u8),
                value,
                max: MAX_TABLE_VALUE,
            });
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[u32; ALPHABET_LEN] {
        &self.0
    }
}

impl Index<u8> for LetterTable {
    type Output = u32;

    fn index(&self, letter: u8) -> &u32 {
        &self.0[usize::from(letter)]
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    letter_scores: Option<Vec<u32>>,
    available_letters: Option<Vec<u32>>,
}

/// The two read-only tables every scoring step consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub letter_scores: LetterTable,
    pub available_letters: LetterTable,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            letter_scores: LetterTable::new(STANDARD_LETTER_SCORES),
            available_letters: LetterTable::new(STANDARD_AVAILABLE_LETTERS),
        }
    }
}

impl ScoringConfig {
    pub fn new(letter_scores: &[u32], available_letters: &[u32]) -> Result<Self, ConfigError> {
        Ok(Self {
            letter_scores: LetterTable::from_slice("letterScores", letter_scores)?,
            available_letters: LetterTable::from_slice("availableLetters", available_letters)?,
        })
    }

    /// Parses `{"letterScores": [...], "availableLetters": [...]}`.
    /// A missing key falls back to the standard English table.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let defaults = Self::default();

        let letter_scores = match raw.letter_scores {
            Some(values) => LetterTable::from_slice("letterScores", &values)?,
            None => defaults.letter_scores,
        };
        let available_letters = match raw.available_letters {
            Some(values) => LetterTable::from_slice("availableLetters", &values)?,
            None => defaults.available_letters,
        };

        Ok(Self {
            letter_scores,
            available_letters,
        })
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        info!("Loaded scoring config from {}.", path);
        Ok(config)
    }
}
