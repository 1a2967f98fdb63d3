// src/config.rs
//! Run configuration.
//!
//! `defaults/lexclass.default.toml` is embedded into the binary. A `lexclass.toml`
//! in the working directory, an explicit `--config` file and command-line flags
//! are layered on top, in that order, before the result is resolved into a
//! [`PipelineConfig`].

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_TOML: &str = include_str!("../defaults/lexclass.default.toml");

/// Optional configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "lexclass.toml";

/// Which classification scheme a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Keywords from the dictionary, identifiers by pattern, everything else a lexical error.
    Keywords,
    /// Valid words from the dictionary, punctuation, digits, everything else a spelling error.
    Spelling,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Keywords => "keywords",
            Variant::Spelling => "spelling",
        }
    }
}

/// File locations for one variant.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub dictionary: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Deserialized, layered settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub variant: Variant,
    pub title: String,
    pub keywords: PathsConfig,
    pub spelling: PathsConfig,
}

impl Settings {
    /// Picks the paths of the selected variant.
    pub fn resolve(self) -> PipelineConfig {
        let paths = match self.variant {
            Variant::Keywords => self.keywords,
            Variant::Spelling => self.spelling,
        };
        PipelineConfig {
            variant: self.variant,
            dictionary: paths.dictionary,
            input: paths.input,
            output: paths.output,
            title: self.title,
        }
    }
}

/// Everything a single run needs, passed explicitly into [`crate::pipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub variant: Variant,
    pub dictionary: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
}

/// Layers configuration sources over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that may be absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<config::Value>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Settings> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[clap(
    name = "lexclass",
    version,
    about = "Classifies the tokens of a text against a dictionary and writes a report."
)]
pub struct Cli {
    /// Classification scheme.
    #[clap(long, value_enum)]
    pub variant: Option<Variant>,

    /// Dictionary file, one word per line.
    #[clap(short = 'd', long)]
    pub dictionary: Option<PathBuf>,

    /// Source text to classify.
    #[clap(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Report file. Overwritten on every run.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Title line written at the top of the report.
    #[clap(short = 't', long)]
    pub title: Option<String>,

    /// Extra TOML configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Do not echo the per-token table to stdout.
    #[clap(short = 'q', long)]
    pub quiet: bool,

    /// Enable debug logging.
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Layers every configuration source and applies the flags on top.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
        if let Some(path) = &self.config {
            loader = loader.with_file(path);
        }
        if let Some(variant) = self.variant {
            loader = loader.set_override("variant", variant.as_str())?;
        }
        if let Some(title) = &self.title {
            loader = loader.set_override("title", title.as_str())?;
        }

        let mut config = loader.build()?.resolve();
        if let Some(path) = &self.dictionary {
            config.dictionary = path.clone();
        }
        if let Some(path) = &self.input {
            config.input = path.clone();
        }
        if let Some(path) = &self.output {
            config.output = path.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_reproduce_keyword_file_names() {
        let config = Loader::new().build().expect("defaults to deserialize").resolve();
        assert_eq!(config.variant, Variant::Keywords);
        assert_eq!(config.dictionary, PathBuf::from("diccionario.txt"));
        assert_eq!(config.input, PathBuf::from("texto_entrada.txt"));
        assert_eq!(config.output, PathBuf::from("tokens_salida.txt"));
    }

    #[test]
    fn variant_override_switches_paths() {
        let config = Loader::new()
            .set_override("variant", "spelling")
            .expect("override to apply")
            .build()
            .expect("config to build")
            .resolve();
        assert_eq!(config.variant, Variant::Spelling);
        assert_eq!(config.dictionary, PathBuf::from("diccionario_espanol.txt"));
    }

    #[test]
    fn file_layer_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "title = \"PRACTICA\"\n[keywords]\noutput = \"reporte.txt\"").unwrap();
        let config = Loader::new().with_file(file.path()).build().unwrap().resolve();
        assert_eq!(config.title, "PRACTICA");
        assert_eq!(config.output, PathBuf::from("reporte.txt"));
        assert_eq!(config.input, PathBuf::from("texto_entrada.txt"));
    }

    #[test]
    fn required_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn cli_flags_win() {
        let cli = Cli::parse_from([
            "lexclass",
            "--variant",
            "spelling",
            "--dictionary",
            "palabras.txt",
            "--output",
            "salida.txt",
            "--title",
            "T",
        ]);
        let config = cli.pipeline_config().unwrap();
        assert_eq!(config.variant, Variant::Spelling);
        assert_eq!(config.dictionary, PathBuf::from("palabras.txt"));
        assert_eq!(config.input, PathBuf::from("texto_entrada.txt"));
        assert_eq!(config.output, PathBuf::from("salida.txt"));
        assert_eq!(config.title, "T");
    }
}
