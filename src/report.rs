// src/report.rs
//! Aggregation of classification results into summary counts and the
//! plain-text report written at the end of a run.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use crate::classifier::{Category, Classification};
use crate::config::Variant;
use crate::error::{LexError, Result};

const KEYWORD_RULE_WIDTH: usize = 40;
const KEYWORD_HEADER_WIDTH: usize = 22;
const KEYWORD_LEXEME_WIDTH: usize = 20;

const SPELLING_LEXEME_WIDTH: usize = 26;
const SPELLING_LABEL_WIDTH: usize = 30;
const SPELLING_TABLE_RULE_WIDTH: usize = 50;
const SPELLING_TITLE_RULE_WIDTH: usize = 11;
const SPELLING_ROWS_RULE_WIDTH: usize = 10;
const SPELLING_COUNT_RULE_WIDTH: usize = 5;

/// Right-pads `text` with spaces to `width` grapheme clusters. Longer text is left intact.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.graphemes(true).count();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(len));
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Per-category counts over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub lexical_errors: usize,
    pub valid_words: usize,
    pub punctuation: usize,
    pub digits: usize,
    pub spelling_errors: usize,
}

impl Summary {
    pub fn from_results(results: &[Classification]) -> Self {
        results.iter().fold(Summary::default(), |mut s, c| {
            s.total += 1;
            match c.category {
                Category::Keyword(_) => s.keywords += 1,
                Category::Identifier => s.identifiers += 1,
                Category::LexicalError => s.lexical_errors += 1,
                Category::ValidSpanishWord => s.valid_words += 1,
                Category::Punctuation => s.punctuation += 1,
                Category::Digit => s.digits += 1,
                Category::SpellingError => s.spelling_errors += 1,
            }
            s
        })
    }

    /// Total of the unmatched tokens, whichever classifier produced them.
    pub fn errors(&self) -> usize {
        self.lexical_errors + self.spelling_errors
    }
}

/// A finished, write-once report.
#[derive(Debug, Clone)]
pub struct Report {
    variant: Variant,
    title: String,
    source_name: String,
    results: Vec<Classification>,
    summary: Summary,
}

impl Report {
    /// Aggregates `results`. Returns `None` when there is nothing to report.
    pub fn aggregate(
        variant: Variant,
        title: impl Into<String>,
        source_name: impl Into<String>,
        results: Vec<Classification>,
    ) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let summary = Summary::from_results(&results);
        Some(Report {
            variant,
            title: title.into(),
            source_name: source_name.into(),
            results,
            summary,
        })
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Distinct lexemes that matched no rule, sorted.
    pub fn distinct_errors(&self) -> BTreeSet<&str> {
        self.results
            .iter()
            .filter(|c| c.category.is_error())
            .map(|c| c.lexeme.as_str())
            .collect()
    }

    /// Renders the full report text.
    pub fn render(&self) -> String {
        match self.variant {
            Variant::Keywords => self.render_keywords(),
            Variant::Spelling => self.render_spelling(),
        }
    }

    fn render_keywords(&self) -> String {
        let heavy = rule('=', KEYWORD_RULE_WIDTH);
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("{}\n", self.title));
        out.push_str(&format!("{}\n\n", heavy));
        out.push_str(&format!("{} -> {}\n", pad_right("LEXEMA", KEYWORD_HEADER_WIDTH), "TOKEN"));
        out.push_str(&format!("{}\n", heavy));
        for c in &self.results {
            out.push_str(&format!(
                "  {} -> {}\n",
                pad_right(&c.lexeme, KEYWORD_LEXEME_WIDTH),
                c.category
            ));
        }
        let s = &self.summary;
        out.push_str(&format!("{}\n", heavy));
        out.push_str(&format!("Total de tokens:     {}\n", s.total));
        out.push_str(&format!("Palabras clave:      {}\n", s.keywords));
        out.push_str(&format!("Identificadores:     {}\n", s.identifiers));
        out.push_str(&format!("Errores léxicos:     {}\n", s.lexical_errors));
        out
    }

    fn render_spelling(&self) -> String {
        let title_rule = rule('=', SPELLING_TITLE_RULE_WIDTH);
        let count_rule = rule('=', SPELLING_COUNT_RULE_WIDTH);
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("{}\n", self.title));
        out.push_str(&format!("{}\n\n", title_rule));
        out.push_str(&format!("ANÁLISIS LÉXICO DE '{}'\n", self.source_name));
        out.push_str(&format!("{}\n\n\n", title_rule));
        out.push_str(&format!(
            "{}{}\n",
            pad_right("LEXEMA", SPELLING_LEXEME_WIDTH),
            pad_right("CLASIFICACIÓN", SPELLING_LABEL_WIDTH)
        ));
        out.push_str(&format!("{}\n\n", rule('-', SPELLING_TABLE_RULE_WIDTH)));
        out.push_str(&format!("{}\n", rule('=', SPELLING_ROWS_RULE_WIDTH)));
        for c in &self.results {
            out.push_str(&format!(
                "{}{}\n",
                pad_right(&c.lexeme, SPELLING_LEXEME_WIDTH),
                pad_right(c.category.label(), SPELLING_LABEL_WIDTH)
            ));
        }
        out.push('\n');
        out.push_str(&format!("{}\n\n", rule('=', SPELLING_TABLE_RULE_WIDTH)));

        let s = &self.summary;
        let counts = [
            ("Total de lexemas detectados", s.total),
            ("Total de palabras validas", s.valid_words),
            ("Total de signos de puntuacion", s.punctuation),
            ("Total de dígitos", s.digits),
            ("Total de errores", s.spelling_errors),
        ];
        for (label, count) in counts {
            out.push_str(&format!("{}: {}\n{}\n", label, count, count_rule));
        }
        out
    }

    /// Writes the rendered report to `path`, replacing any previous file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| LexError::from_io(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.render().as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| LexError::from_io(path, e))
    }
}

/// What happened when a report was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    /// No results: nothing was written.
    Skipped,
    Written(Summary),
    /// The write failed; the failure has already been logged.
    Failed,
}

/// Aggregates `results` and writes the report to `path`.
///
/// Empty results are a no-op. Write failures are logged and never propagated.
pub fn generate_report(
    variant: Variant,
    title: &str,
    source_name: &str,
    results: Vec<Classification>,
    path: &Path,
) -> ReportStatus {
    let Some(report) = Report::aggregate(variant, title, source_name, results) else {
        log::debug!("No classification results; report not written");
        return ReportStatus::Skipped;
    };

    if variant == Variant::Spelling {
        log::debug!("Distinct spelling errors: {:?}", report.distinct_errors());
    }

    match report.write_to(path) {
        Ok(()) => {
            log::info!("Report saved to '{}'", path.display());
            ReportStatus::Written(*report.summary())
        }
        Err(e) => {
            log::error!("Could not save report: {}", e);
            ReportStatus::Failed
        }
    }
}
