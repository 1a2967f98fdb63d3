// src/tokenizer.rs

use std::fs;
use std::path::Path;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use lazy_static::lazy_static;

use crate::error::{LexError, Result};
use crate::pattern::PUNCTUATION_MARKS;

lazy_static! {
    /// Literal matcher over the punctuation set, used to pad every mark with spaces.
    static ref PUNCTUATION_MATCHER: AhoCorasick = AhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostFirst)
        .build(PUNCTUATION_MARKS)
        .unwrap_or_else(|e| panic!("AhoCorasick build error: {}", e));
}

/// How raw text is cut into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmenter {
    /// Maximal runs of non-whitespace. Case is preserved.
    Whitespace,
    /// Lower-case the text, isolate every punctuation mark, then split on whitespace.
    Punctuation,
}

impl Segmenter {
    /// Splits `text` into an ordered sequence of non-empty tokens.
    pub fn tokenize(self, text: &str) -> Vec<String> {
        match self {
            Segmenter::Whitespace => split_whitespace(text),
            Segmenter::Punctuation => split_whitespace(&isolate_punctuation(&text.to_lowercase())),
        }
    }
}

/// Separators beyond `char::is_whitespace`: the file, group, record and unit separators.
const INFORMATION_SEPARATORS: std::ops::RangeInclusive<char> = '\u{1c}'..='\u{1f}';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || INFORMATION_SEPARATORS.contains(&c)
}

fn split_whitespace(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inserts a space before and after every punctuation mark.
fn isolate_punctuation(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() + text.len() / 4);
    PUNCTUATION_MATCHER.replace_all_with(text, &mut spaced, |_mat, mark, dst| {
        dst.push(' ');
        dst.push_str(mark);
        dst.push(' ');
        true
    });
    spaced
}

/// Reads a whole source text file.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| LexError::from_io(path, e))
}

/// Reads a source text file, logging any failure and yielding an empty text.
pub fn read_source_or_empty(path: &Path) -> String {
    read_source(path).unwrap_or_else(|e| {
        log::error!("Could not read source text: {}", e);
        String::new()
    })
}
