//! Command-line interface definitions and parsing
//!
//! Running without arguments reads `config.toml` and `template.html` from the
//! working directory and writes `index.html` there. Each of the three paths
//! can be overridden.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::pipeline::RunPaths;
use crate::render::{DEFAULT_OUTPUT_PATH, DEFAULT_TEMPLATE_PATH};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bookmarks-page")]
#[command(about = "Render a bookmarks folder into a static HTML page", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings document (profile, bookmarks, title)
    #[arg(short = 'c', long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Page template
    #[arg(short = 't', long = "template", value_name = "PATH", default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Rendered page, replaced on success
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Suppress informational output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Template and output paths for the run
    #[must_use]
    pub fn run_paths(&self) -> RunPaths {
        RunPaths::new(self.template.clone(), self.output.clone())
    }
}
