// src/main.rs
use std::io;
use std::process;

use clap::Parser;

use lexclass::{run_with_echo, Cli, Outcome, ReportStatus};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let config = match cli.pipeline_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };
    log::debug!("Resolved configuration: {:?}", config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let echo: Option<&mut dyn io::Write> = if cli.quiet { None } else { Some(&mut handle) };

    match run_with_echo(&config, echo) {
        Outcome::DictionaryUnavailable => {}
        Outcome::Finished { tokens, report } => {
            log::debug!("Run finished with {} tokens", tokens);
            if let ReportStatus::Written(summary) = report {
                log::debug!("Summary: {:?}", summary);
            }
        }
    }
}
