//! One run: configuration → bookmark store → model → rendered page
//!
//! The template is compiled before the database is touched so that a broken
//! template fails the run without reading anything. The store connection
//! lives only as long as extraction needs it.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::PageConfig;
use crate::db::BookmarkStore;
use crate::model::BookmarksFolder;
use crate::render::{self, PageTemplate, RenderOptions};
use crate::PageError;

/// Files a run reads and writes besides the bookmark store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub template: PathBuf,
    pub output: PathBuf,
}

impl RunPaths {
    #[must_use]
    pub fn new(template: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output: output.into(),
        }
    }
}

impl Default for RunPaths {
    fn default() -> Self {
        Self::new(render::DEFAULT_TEMPLATE_PATH, render::DEFAULT_OUTPUT_PATH)
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub folders: usize,
    pub bookmarks: usize,
    pub output: PathBuf,
}

/// Read the configured root folder's sub-folders and their bookmarks
///
/// # Errors
///
/// Returns `PageError::Db` if the store cannot be opened or queried.
pub fn extract_folders(config: &PageConfig) -> Result<Vec<BookmarksFolder>, PageError> {
    let store = BookmarkStore::open_profile(&config.profile)?;
    let folders = store.read_folders(&config.bookmarks)?;
    store.close()?;
    Ok(folders)
}

/// Render `folders` with `template` and write the page to `output`
///
/// # Errors
///
/// Returns `PageError::Render` if rendering or writing fails.
pub fn render_folders(
    template: &PageTemplate,
    folders: &[BookmarksFolder],
    options: &RenderOptions,
    output: &Path,
) -> Result<(), PageError> {
    let html = template.render(folders, options)?;
    render::write_page(output, &html)?;
    Ok(())
}

/// Run the whole pipeline once
///
/// # Errors
///
/// Returns the first `PageError` raised by any stage; nothing is written
/// unless every stage before the write succeeded.
pub fn generate(config: &PageConfig, paths: &RunPaths, options: &RenderOptions) -> Result<Summary, PageError> {
    let template = PageTemplate::load(&paths.template)?;
    let folders = extract_folders(config)?;
    render_folders(&template, &folders, options, &paths.output)?;

    let summary = Summary {
        folders: folders.len(),
        bookmarks: folders.iter().map(BookmarksFolder::len).sum(),
        output: paths.output.clone(),
    };
    info!(
        folders = summary.folders,
        bookmarks = summary.bookmarks,
        output = %summary.output.display(),
        "page generated"
    );
    Ok(summary)
}
