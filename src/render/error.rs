//! Page rendering error types

use thiserror::Error;

/// Errors raised while loading the template, rendering, or writing the page
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template file missing or unreadable
    #[error("Cannot read template {path}: {source}")]
    TemplateMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template syntax error or failure while evaluating it
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Output file could not be written
    #[error("Cannot write {path}: {source}")]
    RenderIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
