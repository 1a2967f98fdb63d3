use std::fs;
use std::path::Path;

use lexclass::{run, Outcome, PipelineConfig, ReportStatus, Variant};

fn config(dir: &Path, variant: Variant) -> PipelineConfig {
    PipelineConfig {
        variant,
        dictionary: dir.join("dict.txt"),
        input: dir.join("input.txt"),
        output: dir.join("report.txt"),
        title: "INFORME".to_string(),
    }
}

#[test]
fn reruns_produce_identical_reports() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path(), Variant::Spelling);
    fs::write(&cfg.dictionary, "el\nniño\ncome\nmanzanas\n").unwrap();
    fs::write(&cfg.input, "El niño come 3 manzanas; ¿y tú?\nXyz xyz.").unwrap();

    run(&cfg);
    let first = fs::read(&cfg.output).unwrap();
    run(&cfg);
    let second = fs::read(&cfg.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_token_is_reported_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path(), Variant::Keywords);
    fs::write(&cfg.dictionary, "while\n\n  FOR \n").unwrap();
    fs::write(&cfg.input, "While suma\tfor\n\nres X9 hola").unwrap();

    let (tokens, summary) = match run(&cfg) {
        Outcome::Finished {
            tokens,
            report: ReportStatus::Written(summary),
        } => (tokens, summary),
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(tokens, 6);
    assert_eq!(summary.total, 6);
    assert_eq!(
        summary.keywords + summary.identifiers + summary.lexical_errors,
        summary.total
    );

    let report = fs::read_to_string(&cfg.output).unwrap();
    let rows: Vec<&str> = report
        .lines()
        .filter(|l| l.starts_with("  ") && l.contains(" -> "))
        .collect();
    assert_eq!(
        rows,
        vec![
            "  While                -> KW_WHILE",
            "  suma                 -> IDENTIFIER",
            "  for                  -> KW_FOR",
            "  res                  -> IDENTIFIER",
            "  X9                   -> LEXICAL_ERROR",
            "  hola                 -> IDENTIFIER",
        ]
    );
}

#[test]
fn report_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path(), Variant::Keywords);
    fs::write(&cfg.dictionary, "if\n").unwrap();
    fs::write(&cfg.output, "stale contents that are much longer than anything new").unwrap();
    fs::write(&cfg.input, "if").unwrap();

    run(&cfg);
    let report = fs::read_to_string(&cfg.output).unwrap();
    assert!(!report.contains("stale"));
    assert!(report.contains("Total de tokens:     1\n"));
}
