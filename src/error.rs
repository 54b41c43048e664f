use std::io;
use thiserror::Error;

/// A word that cannot be scored against the 26-letter tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty word")]
    Empty,

    #[error("invalid character {character:?} at position {position} in word {word:?}")]
    InvalidCharacter {
        word: String,
        character: char,
        position: usize,
    },
}

/// Problems with the scoring tables, detected before any word is scored.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{table} must have exactly 26 entries, got {len}")]
    TableLength { table: &'static str, len: usize },

    #[error("{table} value {value} for letter {letter:?} exceeds the maximum of {max}")]
    ValueOutOfRange {
        table: &'static str,
        letter: char,
        value: u32,
        max: u32,
    },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("failed to load {kind} from {path}: {source}")]
pub struct LoadError {
    pub kind: &'static str,
    pub path: String,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum WordscoreError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type Result<T> = std::result::Result<T, WordscoreError>;
