use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::LoadError;
use crate::models::Word;
use crate::utils::{normalize_entry, tokenize};

fn load_error(kind: &'static str, path: &Path, source: io::Error) -> LoadError {
    LoadError {
        kind,
        path: path.display().to_string(),
        source,
    }
}

/// Load words from a plain text file (one word per line)
pub fn load_words(file_path: &Path) -> io::Result<HashSet<String>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        match normalize_entry(&line) {
            Some(word) => {
                words.insert(word);
            }
            None if !line.trim().is_empty() => {
                debug!("Skipping unscorable dictionary entry {:?}", line.trim());
            }
            None => {}
        }
    }

    Ok(words)
}

/// `words.txt` -> `words.insertions.txt`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}.{}.txt", stem, suffix))
}

/// Load the dictionary, then merge in `<stem>.insertions.txt` and drop
/// `<stem>.deletions.txt` when those sit next to it.
pub fn load_dictionary(path: &Path) -> Result<HashSet<String>, LoadError> {
    let mut words = load_words(path).map_err(|e| load_error("dictionary", path, e))?;
    info!("Loaded {} dictionary words from {}.", words.len(), path.display());

    let insertions_path = sibling(path, "insertions");
    if insertions_path.exists() {
        let inserted = load_words(&insertions_path)
            .map_err(|e| load_error("dictionary insertions", &insertions_path, e))?;
        info!("Inserted {} words into dictionary.", inserted.len());
        words.extend(inserted);
    }

    let deletions_path = sibling(path, "deletions");
    if deletions_path.exists() {
        let deleted = load_words(&deletions_path)
            .map_err(|e| load_error("dictionary deletions", &deletions_path, e))?;
        info!("Deleted {} words from dictionary.", deleted.len());
        for word in deleted {
            words.remove(&word);
        }
    }

    if words.is_empty() {
        warn!("Dictionary at {} is empty; no word will score.", path.display());
    }
    info!("Total dictionary words: {}", words.len());
    Ok(words)
}

/// Tokenize a text file into the ordered corpus, duplicates kept.
pub fn load_corpus(path: &Path) -> Result<Vec<Word>, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| load_error("corpus", path, e))?;
    let corpus = corpus_from_text(&text);
    info!("Loaded {} corpus words from {}.", corpus.len(), path.display());
    Ok(corpus)
}

pub fn corpus_from_text(text: &str) -> Vec<Word> {
    tokenize(text)
        .filter_map(|token| Word::parse(&token).ok())
        .collect()
}
