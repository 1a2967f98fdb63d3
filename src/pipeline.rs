// src/pipeline.rs
//! One batch run: load dictionary, read and tokenize the source text, classify
//! every token and write the report. Every stage handles its own failures, so a
//! run always returns an [`Outcome`].

use std::io::Write;
use std::time::Instant;

use crate::classifier::{Classification, Classify, KeywordClassifier, SpellingClassifier};
use crate::config::{PipelineConfig, Variant};
use crate::dictionary::{KeywordTable, WordSet};
use crate::report::{generate_report, pad_right, ReportStatus};
use crate::tokenizer::{read_source_or_empty, Segmenter};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The spelling word list was missing or empty; nothing was tokenized.
    DictionaryUnavailable,
    Finished { tokens: usize, report: ReportStatus },
}

/// Runs the pipeline without console echo.
pub fn run(config: &PipelineConfig) -> Outcome {
    run_with_echo(config, None)
}

/// Runs the pipeline, echoing the per-token table to `echo` when given.
pub fn run_with_echo(config: &PipelineConfig, mut echo: Option<&mut dyn Write>) -> Outcome {
    let start = Instant::now();
    let results = match config.variant {
        Variant::Keywords => {
            let classifier = KeywordClassifier::new(KeywordTable::load_or_empty(&config.dictionary));
            classify_source(&classifier, Segmenter::Whitespace, config, &mut echo)
        }
        Variant::Spelling => {
            let words = WordSet::load_or_empty(&config.dictionary);
            if words.is_empty() {
                log::error!("Cannot continue without a dictionary");
                return Outcome::DictionaryUnavailable;
            }
            let classifier = SpellingClassifier::new(words);
            classify_source(&classifier, Segmenter::Punctuation, config, &mut echo)
        }
    };
    let tokens = results.len();
    log::debug!("Classified {} tokens in {:?}", tokens, start.elapsed());

    let source_name = config
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.input.display().to_string());
    let report = generate_report(config.variant, &config.title, &source_name, results, &config.output);
    Outcome::Finished { tokens, report }
}

fn classify_source<C: Classify>(
    classifier: &C,
    segmenter: Segmenter,
    config: &PipelineConfig,
    echo: &mut Option<&mut dyn Write>,
) -> Vec<Classification> {
    let text = read_source_or_empty(&config.input);
    let tokens = segmenter.tokenize(&text);
    let results = classifier.classify_all(&tokens);

    if let Some(out) = echo.as_deref_mut() {
        if let Err(e) = write_echo(out, config, &results) {
            log::debug!("Console echo failed: {}", e);
        }
    }
    results
}

fn write_echo(
    out: &mut dyn Write,
    config: &PipelineConfig,
    results: &[Classification],
) -> std::io::Result<()> {
    let input = config.input.display();
    match config.variant {
        Variant::Keywords => {
            let rule = "=".repeat(40);
            writeln!(out, "\n{}\nValidación de '{}'\n{}\n", rule, input, rule)?;
            for c in results {
                writeln!(out, "  {} -> {}", pad_right(&c.lexeme, 20), c.category)?;
            }
        }
        Variant::Spelling => {
            writeln!(out, "ANÁLISIS LÉXICO DE '{}'\n{}\n", input, "=".repeat(11))?;
            writeln!(out, "Total de lexemas detectados: {}\n", results.len())?;
            writeln!(out, "{} {}", pad_right("LEXEMA", 25), pad_right("CLASIFICACIÓN", 30))?;
            writeln!(out, "{}", "-".repeat(50))?;
            for c in results {
                writeln!(
                    out,
                    "{} {}",
                    pad_right(&c.lexeme, 25),
                    pad_right(c.category.label(), 30)
                )?;
            }
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn config(dir: &Path, variant: Variant) -> PipelineConfig {
        PipelineConfig {
            variant,
            dictionary: dir.join("dict.txt"),
            input: dir.join("input.txt"),
            output: dir.join("out.txt"),
            title: "TEST".to_string(),
        }
    }

    #[test]
    fn keyword_run_writes_report_and_echo() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), Variant::Keywords);
        fs::write(&cfg.dictionary, "if\nreturn\n").unwrap();
        fs::write(&cfg.input, "if mira return xyzxyzxyz").unwrap();

        let mut echo = Vec::new();
        let outcome = run_with_echo(&cfg, Some(&mut echo));
        match outcome {
            Outcome::Finished {
                tokens,
                report: ReportStatus::Written(summary),
            } => {
                assert_eq!(tokens, 4);
                assert_eq!(summary.keywords, 2);
                assert_eq!(summary.identifiers, 1);
                assert_eq!(summary.lexical_errors, 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        let echo = String::from_utf8(echo).unwrap();
        assert!(echo.contains("  mira                 -> IDENTIFIER\n"));
        assert!(cfg.output.exists());
    }

    #[test]
    fn keyword_run_continues_without_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), Variant::Keywords);
        fs::write(&cfg.input, "while mira").unwrap();

        let outcome = run(&cfg);
        assert!(matches!(
            outcome,
            Outcome::Finished { tokens: 2, report: ReportStatus::Written(s) }
                if s.keywords == 0 && s.identifiers == 1 && s.lexical_errors == 1
        ));
    }

    #[test]
    fn spelling_report_names_the_input_file_only() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), Variant::Spelling);
        assert!(cfg.input.is_absolute());
        fs::write(&cfg.dictionary, "hola\n").unwrap();
        fs::write(&cfg.input, "hola").unwrap();

        run(&cfg);
        let report = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(report.lines().nth(4), Some("ANÁLISIS LÉXICO DE 'input.txt'"));
    }

    #[test]
    fn spelling_run_stops_without_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), Variant::Spelling);
        fs::write(&cfg.input, "hola").unwrap();

        assert_eq!(run(&cfg), Outcome::DictionaryUnavailable);
        assert!(!cfg.output.exists());
    }

    #[test]
    fn empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), Variant::Spelling);
        fs::write(&cfg.dictionary, "hola\n").unwrap();
        fs::write(&cfg.input, "").unwrap();

        assert_eq!(
            run(&cfg),
            Outcome::Finished {
                tokens: 0,
                report: ReportStatus::Skipped
            }
        );
        assert!(!cfg.output.exists());
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), Variant::Keywords);
        fs::write(&cfg.dictionary, "if\n").unwrap();

        assert_eq!(
            run(&cfg),
            Outcome::Finished {
                tokens: 0,
                report: ReportStatus::Skipped
            }
        );
        assert!(!cfg.output.exists());
    }
}
