//! Command-line interface for html-cleaner.

mod args;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use html_cleaner_rs::{CleanError, Cleaner, CleaningOptions, Result, clean_file};
use log::info;

use crate::args::Cli;

fn load_options(path: &Path) -> Result<CleaningOptions> {
    info!("loading options from {}", path.display());
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => CleanError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => CleanError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    serde_json::from_str(&raw).map_err(|e| CleanError::Config(format!("{}: {e}", path.display())))
}

fn build_options(cli: &Cli) -> Result<CleaningOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => CleaningOptions::default(),
    };
    for tag in &cli.remove_tags {
        options = options.with_removed_tag(tag.as_str());
    }
    for tag in &cli.unwrap_tags {
        options = options.with_unwrapped_tag(tag.as_str());
    }
    options.formatting.enabled = !cli.raw;
    Ok(options)
}

fn run(cli: &Cli) -> Result<()> {
    let options = build_options(cli)?;
    let cleaner = Cleaner::new(&options)?;
    clean_file(&cli.input, &cli.output, &cleaner)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", level))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => {
            println!(
                "Successfully cleaned HTML from '{}' to '{}'",
                cli.input.display(),
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
