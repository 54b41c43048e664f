use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::services::tables::ScoringConfig;

/// A non-empty run of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn parse(text: &str) -> Result<Self, InputError> {
        if text.is_empty() {
            return Err(InputError::Empty);
        }
        if let Some((position, character)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(InputError::InvalidCharacter {
                word: text.to_string(),
                character,
                position,
            });
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letter ordinals, `a` = 0.
    pub fn ordinals(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'a')
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// All words that reached the same placement score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreGroup {
    pub score: u32,
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Sequential,
    Parallel,
}

/// Everything the CLI prints for one pipeline run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub strategy: Strategy,
    pub corpus_words: usize,
    pub playable_words: usize,
    pub groups: Vec<ScoreGroup>,
}

/// Application state shared across all handlers
pub struct AppState {
    pub corpus: Arc<Vec<Word>>,
    pub dictionary: Arc<HashSet<String>>,
    pub config: Arc<ScoringConfig>,
}

#[derive(Serialize)]
pub struct WordResponse {
    pub word: Word,
    pub in_dictionary: bool,
    pub blanks_needed: u32,
    pub playable: bool,
    pub score: Option<u32>,
}

#[derive(Deserialize)]
pub struct TopQuery {
    pub count: Option<usize>,
    pub parallel: Option<bool>,
}

#[derive(Serialize)]
pub struct TopResponse {
    pub strategy: Strategy,
    pub groups: Vec<ScoreGroup>,
}
