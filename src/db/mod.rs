//! Bookmark store reader
//!
//! Opens a browser profile's `places.sqlite` read-only and turns its
//! folder/bookmark tree into the domain model. Only two levels are read: the
//! direct sub-folders of a named root folder, and the links directly inside
//! each of those.

use rusqlite::{Connection, OpenFlags, params};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{PLACES_FILE, expand_path};
use crate::model::{Bookmark, BookmarksFolder};

pub mod error;
pub mod query;

pub use error::DbError;
pub use query::{BookmarkRow, FolderRow};

use query::{BOOKMARKS_SQL, FOLDER_TYPE, SUBFOLDERS_SQL};

/// Read-only handle on a Places database
///
/// The connection is released when the store is dropped or [`closed`](Self::close).
pub struct BookmarkStore {
    conn: Connection,
    path: PathBuf,
}

impl BookmarkStore {
    /// Opens the `places.sqlite` of a profile directory
    ///
    /// Environment variables in `profile` are expanded first.
    ///
    /// # Examples
    /// ```no_run
    /// use bookmarks_page::db::BookmarkStore;
    /// let store = BookmarkStore::open_profile("$HOME/.mozilla/firefox/abc.default").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if the profile has no bookmark database and
    /// `DbError::StoreOpen` if it cannot be opened as SQLite.
    pub fn open_profile(profile: &str) -> Result<Self, DbError> {
        Self::open(expand_path(profile).join(PLACES_FILE))
    }

    /// Opens a bookmark database file read-only
    ///
    /// The file header is checked immediately, so a file that is not an SQLite
    /// database fails here rather than on the first query.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if `path` does not exist and
    /// `DbError::StoreOpen` if it is unreadable or not a database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(DbError::NotFound(path.display().to_string()));
        }

        let open_error = |source| DbError::StoreOpen {
            path: path.display().to_string(),
            source,
        };

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&path, flags).map_err(open_error)?;
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(open_error)?;

        debug!(path = %path.display(), "opened bookmark database");
        Ok(Self { conn, path })
    }

    /// Location of the opened database file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists the direct sub-folders of the folder titled `root_title`
    ///
    /// A missing root folder is not an error: the result is simply empty.
    ///
    /// # Errors
    ///
    /// Returns `DbError::StoreQuery` if the query fails.
    pub fn list_subfolders(&self, root_title: &str) -> Result<Vec<FolderRow>, DbError> {
        let mut stmt = self.conn.prepare(SUBFOLDERS_SQL)?;
        let rows = stmt
            .query_map(params![FOLDER_TYPE, root_title], FolderRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(root = root_title, count = rows.len(), "listed sub-folders");
        Ok(rows)
    }

    /// Lists the links inside a folder, ordered by display position
    ///
    /// Entries without a URL (separators, nested folders, dangling
    /// references) are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DbError::StoreQuery` if the query fails.
    pub fn list_bookmarks_of(&self, folder_id: i64) -> Result<Vec<BookmarkRow>, DbError> {
        let mut stmt = self.conn.prepare_cached(BOOKMARKS_SQL)?;
        let rows = stmt
            .query_map(params![folder_id], BookmarkRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Reads every sub-folder of `root_title` together with its bookmarks
    ///
    /// # Errors
    ///
    /// Returns `DbError::StoreQuery` if any query fails.
    pub fn read_folders(&self, root_title: &str) -> Result<Vec<BookmarksFolder>, DbError> {
        let folders = self
            .list_subfolders(root_title)?
            .into_iter()
            .map(|folder| -> Result<BookmarksFolder, DbError> {
                let bookmarks = self
                    .list_bookmarks_of(folder.id)?
                    .into_iter()
                    .map(|row| Bookmark::new(row.title, row.url))
                    .collect();
                Ok(BookmarksFolder::new(folder.title, bookmarks))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if folders.is_empty() {
            info!(root = root_title, "no sub-folders found under root folder");
        }
        Ok(folders)
    }

    /// Closes the connection
    ///
    /// # Errors
    ///
    /// Returns `DbError::StoreQuery` if SQLite reports an error while closing.
    pub fn close(self) -> Result<(), DbError> {
        self.conn.close().map_err(|(_, e)| DbError::StoreQuery(e))
    }
}
