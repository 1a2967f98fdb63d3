// src/dictionary.rs
//! Word lists loaded from disk: one entry per line, trimmed and lower-cased,
//! blank lines skipped. Duplicates collapse to a single entry.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LexError, Result};
use crate::pattern::keyword_tag;

/// Reads the normalized, non-blank entries of a word list in file order.
pub fn read_entries(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| LexError::from_io(path, e))?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| LexError::from_io(path, e))?;
        let word = line.trim().to_lowercase();
        if !word.is_empty() {
            entries.push(word);
        }
    }
    Ok(entries)
}

/// Keyword dictionary: normalized word -> synthesized `KW_<WORD>` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    tags: HashMap<String, String>,
}

impl KeywordTable {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(read_entries(path)?.into_iter().collect())
    }

    /// Loads the table, logging any failure and falling back to an empty table.
    /// An empty table means "no keywords known"; classification still runs.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => {
                log::info!("Dictionary loaded: {} keywords", table.len());
                table
            }
            Err(e) => {
                log::error!("Could not load keyword dictionary: {}", e);
                Self::default()
            }
        }
    }

    /// Tag for a word that is already lower-cased.
    pub fn tag(&self, word: &str) -> Option<&str> {
        self.tags.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let tags = iter
            .into_iter()
            .map(|w| {
                let word = w.into().trim().to_lowercase();
                let tag = keyword_tag(&word);
                (word, tag)
            })
            .filter(|(word, _)| !word.is_empty())
            .collect();
        KeywordTable { tags }
    }
}

/// Set of valid words for spell checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(read_entries(path)?.into_iter().collect())
    }

    /// Loads the set, logging any failure and falling back to an empty set.
    /// Callers treat an empty set as "dictionary unavailable".
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(set) => {
                log::info!("Dictionary loaded: {} words", set.len());
                set
            }
            Err(e) => {
                log::error!("Could not load word dictionary: {}", e);
                Self::default()
            }
        }
    }

    /// Membership for a word that is already lower-cased.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.into().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        WordSet { words }
    }
}
