// src/pattern.rs

use once_cell::sync::Lazy;
use unicode_general_category::{get_general_category, GeneralCategory};

// ----- CONSTANTS -----

/// Prefix of every synthesized keyword tag (`KW_IF`, `KW_RETURN`, ...).
pub const KEYWORD_TAG_PREFIX: &str = "KW_";

/// The fixed punctuation set. Each mark always becomes a standalone token
/// in the spelling segmenter.
pub static PUNCTUATION_MARKS: &[&str] = &[".", ",", ";", ":", "¿", "?", "¡", "!"];

/// Identifier shape: 2 to 8 characters of `a`-`z`, the first one of `s m r h i f`.
pub const IDENTIFIER_PATTERN_STR: &str = r"^(?=[smrhif])[a-z]{2,8}$";

// ----- COMPILED PATTERNS -----

static IDENTIFIER_REGEX: Lazy<fancy_regex::Regex> = Lazy::new(|| {
    fancy_regex::Regex::new(IDENTIFIER_PATTERN_STR)
        .unwrap_or_else(|e| panic!("Identifier compile error for pattern '{}': {}", IDENTIFIER_PATTERN_STR, e))
});

static PUNCTUATION_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    let class: String = PUNCTUATION_MARKS.iter().map(|m| regex::escape(m)).collect();
    let pattern = format!("^[{}]$", class);
    regex::Regex::new(&pattern)
        .unwrap_or_else(|e| panic!("Punctuation compile error for pattern '{}': {}", pattern, e))
});

// ----- PREDICATES -----

/// Whether an already lower-cased word has identifier shape.
pub fn is_identifier(word: &str) -> bool {
    // Only a backtrack-limit error can surface here, and it means "no match".
    matches!(IDENTIFIER_REGEX.is_match(word), Ok(true))
}

/// Whether `token` is exactly one mark from [`PUNCTUATION_MARKS`].
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION_REGEX.is_match(token)
}

/// Whether `token` is one or more decimal digits (any script, general category `Nd`).
pub fn is_digits(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| get_general_category(c) == GeneralCategory::DecimalNumber)
}

/// Builds the keyword tag for a dictionary word: `KW_` + upper-cased word.
pub fn keyword_tag(word: &str) -> String {
    format!("{}{}", KEYWORD_TAG_PREFIX, word.to_uppercase())
}
