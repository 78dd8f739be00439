//! bookmarks-page CLI application entry point
//!
//! Renders the sub-folders of a browser bookmarks folder into a static page.
//!
//! # Usage
//!
//! ```bash
//! # Read config.toml and template.html, write index.html
//! bookmarks-page
//!
//! # Explicit paths
//! bookmarks-page -c ~/links.toml -t page.html -o /srv/www/index.html
//!
//! # More detail on stderr
//! RUST_LOG=debug bookmarks-page
//! ```
//!
//! # Configuration
//!
//! ```toml
//! profile = "$HOME/.mozilla/firefox/abc.default"
//! bookmarks = "Toolbar"
//! title = "My Links"
//! ```

use bookmarks_page::{
    PageError,
    cli::Cli,
    config::PageConfig,
    pipeline::{self, Summary},
    render::RenderOptions,
};
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, PageError>;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Load the configuration and run the pipeline once
///
/// # Errors
///
/// Returns `PageError` from whichever stage failed first.
fn run(cli: &Cli) -> Result<Summary> {
    let config = PageConfig::load(&cli.config)?;
    let options = RenderOptions::new(config.title.clone());
    pipeline::generate(&config, &cli.run_paths(), &options)
}

/// Print an error and the chain of causes beneath it
fn report(err: &PageError) {
    eprintln!("{} {err}", "error:".red().bold());
    let mut source = err.source();
    while let Some(cause) = source {
        let line = cause.to_string();
        if !err.to_string().contains(&line) {
            eprintln!("  {} {line}", "caused by:".dimmed());
        }
        source = cause.source();
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(summary) => {
            if !cli.quiet {
                println!(
                    "{} Wrote {} ({} folders, {} bookmarks)",
                    "✓".green(),
                    summary.output.display(),
                    summary.folders,
                    summary.bookmarks
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}
