//! Scrabble placement scoring over a word corpus.
//!
//! Every corpus word that is in the dictionary and can be spelled from the
//! tile supply (with at most two blanks) gets a placement score; the words
//! are then grouped by score and the best groups reported.

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{ConfigError, InputError, LoadError, Result, WordscoreError};
pub use models::{ScoreGroup, Strategy, Word};
pub use services::pipeline::{Dictionary, Pipeline, ScoreGroups};
pub use services::tables::{LetterTable, ScoringConfig};
