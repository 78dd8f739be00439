//! bookmarks-page - render a browser bookmarks folder as a static HTML page
//!
//! Reads the sub-folders of a named bookmarks folder from a Firefox-style
//! `places.sqlite`, collects the links in each in display order, and renders
//! them through a Tera template into a single HTML file.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod db;
pub mod model;
pub mod pipeline;
pub mod render;

#[cfg(test)]
pub mod testing;

pub use model::{Bookmark, BookmarksFolder};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PageError {
    /// Settings document missing, malformed, or incomplete
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Bookmark store could not be opened or queried
    #[error("Bookmark store error: {0}")]
    Db(#[from] db::DbError),
    /// Template could not be loaded or rendered, or the page not written
    #[error("Render error: {0}")]
    Render(#[from] render::RenderError),
}
