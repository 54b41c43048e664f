use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::error::InputError;
use crate::models::{ScoreGroup, Strategy, Word};
use crate::services::histogram::LetterHistogram;
use crate::services::scoring::{is_playable, placement_score};
use crate::services::tables::ScoringConfig;

pub const DEFAULT_TOP: usize = 3;

/// Membership test over the reference word list.
pub trait Dictionary: Sync {
    fn contains_word(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Words grouped under their placement score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreGroups {
    groups: BTreeMap<u32, Vec<Word>>,
}

impl ScoreGroups {
    pub fn insert(&mut self, score: u32, word: Word) {
        self.groups.entry(score).or_default().push(word);
    }

    /// Union of both groupings; lists under a shared score are concatenated, `self` first.
    pub fn merge(mut self, other: Self) -> Self {
        for (score, mut words) in other.groups {
            self.groups.entry(score).or_default().append(&mut words);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// The `n` highest-scoring groups, best first.
    pub fn top(self, n: usize) -> Vec<ScoreGroup> {
        self.groups
            .into_iter()
            .rev()
            .take(n)
            .map(|(score, words)| ScoreGroup { score, words })
            .collect()
    }
}

/// Score of a word if it can be played with the tile supply plus blanks.
pub fn score_word(word: &Word, config: &ScoringConfig) -> Option<u32> {
    let histogram = LetterHistogram::of(word);
    if !is_playable(&histogram, config) {
        return None;
    }
    Some(placement_score(word, &histogram, config))
}

/// Validates raw corpus text up front; one bad word aborts the whole run.
pub fn parse_corpus<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>, InputError> {
    words.iter().map(|w| Word::parse(w.as_ref())).collect()
}

pub struct Pipeline<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    config: &'a ScoringConfig,
    strategy: Strategy,
}

impl<'a, D: Dictionary + ?Sized> Pipeline<'a, D> {
    pub fn new(dictionary: &'a D, config: &'a ScoringConfig) -> Self {
        Self {
            dictionary,
            config,
            strategy: Strategy::Sequential,
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    fn keep(&self, word: &Word) -> Option<(u32, Word)> {
        if !self.dictionary.contains_word(word.as_str()) {
            return None;
        }
        score_word(word, self.config).map(|score| (score, word.clone()))
    }

    /// Filters and scores every corpus word, grouping survivors by score.
    pub fn group(&self, corpus: &[Word]) -> ScoreGroups {
        let start = Instant::now();
        let groups = match self.strategy {
            Strategy::Sequential => corpus
                .iter()
                .filter_map(|word| self.keep(word))
                .fold(ScoreGroups::default(), |mut groups, (score, word)| {
                    groups.insert(score, word);
                    groups
                }),
            Strategy::Parallel => corpus
                .par_iter()
                .filter_map(|word| self.keep(word))
                .fold(ScoreGroups::default, |mut groups, (score, word)| {
                    groups.insert(score, word);
                    groups
                })
                .reduce(ScoreGroups::default, ScoreGroups::merge),
        };

        info!(
            "Scored {} of {} corpus words into {} distinct scores ({:?}, {} ms)",
            groups.word_count(),
            corpus.len(),
            groups.len(),
            self.strategy,
            start.elapsed().as_millis()
        );
        groups
    }

    /// The `n` best score groups, best first.
    pub fn top(&self, corpus: &[Word], n: usize) -> Vec<ScoreGroup> {
        let groups = self.group(corpus).top(n);
        debug!(
            "Top scores: {:?}",
            groups.iter().map(|g| g.score).collect::<Vec<_>>()
        );
        groups
    }

    pub fn run(&self, corpus: &[Word]) -> Vec<ScoreGroup> {
        self.top(corpus, DEFAULT_TOP)
    }
}
