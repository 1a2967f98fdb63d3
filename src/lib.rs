// src/lib.rs
//! Lexical classification of a text against a word list.
//!
//! A run loads a dictionary ([`dictionary`]), cuts the source text into tokens
//! ([`tokenizer`]), classifies each token by ordered rules ([`classifier`]) and
//! writes a plain-text report with summary counts ([`report`]).
//! [`pipeline::run`] wires the stages together from a [`config::PipelineConfig`].

pub mod classifier;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod pattern;
pub mod pipeline;
pub mod report;
pub mod tokenizer;

pub use classifier::{Category, Classification, Classify, KeywordClassifier, SpellingClassifier};
pub use config::{Cli, PipelineConfig, Variant};
pub use error::{LexError, Result};
pub use pipeline::{run, run_with_echo, Outcome};
pub use report::{Report, ReportStatus, Summary};
