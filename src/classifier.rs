// src/classifier.rs
//! Per-token classification. Each classifier walks a fixed rule order and the
//! first matching rule decides the category; dictionary membership always comes
//! before any pattern rule.

use std::fmt;

use crate::dictionary::{KeywordTable, WordSet};
use crate::pattern::{is_digits, is_identifier, is_punctuation};

/// Category assigned to a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Keyword found in the dictionary, carrying its `KW_<WORD>` tag.
    Keyword(String),
    Identifier,
    LexicalError,
    ValidSpanishWord,
    Punctuation,
    Digit,
    SpellingError,
}

impl Category {
    /// The label written to reports.
    pub fn label(&self) -> &str {
        match self {
            Category::Keyword(tag) => tag,
            Category::Identifier => "IDENTIFIER",
            Category::LexicalError => "LEXICAL_ERROR",
            Category::ValidSpanishWord => "VALID_SPANISH_WORD",
            Category::Punctuation => "PUNCTUATION",
            Category::Digit => "DIGIT",
            Category::SpellingError => "SPELLING_ERROR",
        }
    }

    /// Whether no rule matched the token.
    pub fn is_error(&self) -> bool {
        matches!(self, Category::LexicalError | Category::SpellingError)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags apply to the label.
        f.pad(self.label())
    }
}

/// A classified token: the lexeme as reported plus its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub lexeme: String,
    pub category: Category,
}

impl Classification {
    pub fn new(lexeme: impl Into<String>, category: Category) -> Self {
        Classification {
            lexeme: lexeme.into(),
            category,
        }
    }
}

/// Stateless token classification against a loaded dictionary.
pub trait Classify {
    fn classify(&self, token: &str) -> Classification;

    /// Classifies every token, preserving input order.
    fn classify_all(&self, tokens: &[String]) -> Vec<Classification> {
        tokens
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| self.classify(t))
            .collect()
    }
}

/// Keyword / identifier classification.
///
/// Rules: dictionary keyword (lexeme keeps its case), identifier shape
/// (lexeme lower-cased), otherwise lexical error (lexeme keeps its case).
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    keywords: KeywordTable,
}

impl KeywordClassifier {
    pub fn new(keywords: KeywordTable) -> Self {
        KeywordClassifier { keywords }
    }
}

impl Classify for KeywordClassifier {
    fn classify(&self, token: &str) -> Classification {
        let lower = token.to_lowercase();
        if let Some(tag) = self.keywords.tag(&lower) {
            return Classification::new(token, Category::Keyword(tag.to_string()));
        }
        if is_identifier(&lower) {
            return Classification::new(lower, Category::Identifier);
        }
        Classification::new(token, Category::LexicalError)
    }
}

type PatternRule = (fn(&str) -> bool, Category);

/// Pattern rules tried, in order, after the word-set lookup misses.
const SPELLING_PATTERN_RULES: [PatternRule; 2] = [
    (is_punctuation, Category::Punctuation),
    (is_digits, Category::Digit),
];

/// Spell-check classification.
///
/// Rules: valid word, single punctuation mark, digit run, otherwise spelling error.
/// The lexeme is always the lower-cased token.
#[derive(Debug, Clone, Default)]
pub struct SpellingClassifier {
    words: WordSet,
}

impl SpellingClassifier {
    pub fn new(words: WordSet) -> Self {
        SpellingClassifier { words }
    }
}

impl Classify for SpellingClassifier {
    fn classify(&self, token: &str) -> Classification {
        let lexeme = token.to_lowercase();
        if self.words.contains(&lexeme) {
            return Classification::new(lexeme, Category::ValidSpanishWord);
        }
        let category = SPELLING_PATTERN_RULES
            .into_iter()
            .find(|(matches, _)| matches(lexeme.as_str()))
            .map(|(_, category)| category)
            .unwrap_or(Category::SpellingError);
        Classification::new(lexeme, category)
    }
}
