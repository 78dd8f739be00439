//! Testing utilities for bookmarks-page
//!
//! This module provides a `TestProfile` fixture: a temporary browser profile
//! directory holding a `places.sqlite` with the tables the reader queries.
//!
//! Only available when compiled with `cfg(test)`.

use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::PLACES_FILE;
use crate::db::BookmarkStore;

/// Columns of the Places schema the reader depends on
pub const PLACES_SCHEMA: &str = "
    CREATE TABLE moz_places (
        id INTEGER PRIMARY KEY,
        url LONGVARCHAR,
        title LONGVARCHAR
    );
    CREATE TABLE moz_bookmarks (
        id INTEGER PRIMARY KEY,
        type INTEGER,
        fk INTEGER DEFAULT NULL,
        parent INTEGER,
        position INTEGER,
        title LONGVARCHAR
    );
    INSERT INTO moz_bookmarks (id, type, parent, position, title) VALUES (1, 2, 0, 0, '');
";

/// Temporary profile directory with a writable bookmark database
///
/// The directory and database are removed when the fixture is dropped.
///
/// # Examples
/// ```ignore
/// let profile = TestProfile::new();
/// let toolbar = profile.add_folder(TestProfile::ROOT_ID, "Toolbar", 0);
/// profile.add_bookmark(toolbar, "Example", "https://example.com/", 0);
/// let store = profile.open();
/// ```
pub struct TestProfile {
    dir: TempDir,
    conn: Connection,
}

impl TestProfile {
    /// Id of the unnamed top-level folder every Places tree starts from
    pub const ROOT_ID: i64 = 1;

    /// Create a profile with an empty bookmark tree
    ///
    /// # Panics
    /// Panics if the temporary directory or database cannot be created.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create profile directory");
        let conn = Connection::open(dir.path().join(PLACES_FILE))
            .expect("Failed to create places database");
        conn.execute_batch(PLACES_SCHEMA)
            .expect("Failed to create places schema");
        Self { dir, conn }
    }

    /// Profile directory path
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Profile directory as a configuration string
    #[must_use]
    pub fn dir_string(&self) -> String {
        self.dir.path().display().to_string()
    }

    /// Path of the fixture's `places.sqlite`
    #[must_use]
    pub fn places_path(&self) -> PathBuf {
        self.dir.path().join(PLACES_FILE)
    }

    /// Open the fixture database through the reader
    ///
    /// # Panics
    /// Panics if the store cannot be opened.
    pub fn open(&self) -> BookmarkStore {
        BookmarkStore::open(self.places_path()).expect("Failed to open bookmark store")
    }

    fn insert_entry(&self, kind: i64, parent: i64, title: Option<&str>, fk: Option<i64>, position: i64) -> i64 {
        self.conn
            .execute(
                "INSERT INTO moz_bookmarks (type, fk, parent, position, title) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![kind, fk, parent, position, title],
            )
            .expect("Failed to insert bookmark entry");
        self.conn.last_insert_rowid()
    }

    fn insert_place(&self, url: &str) -> i64 {
        self.conn
            .execute("INSERT INTO moz_places (url) VALUES (?1)", params![url])
            .expect("Failed to insert place");
        self.conn.last_insert_rowid()
    }

    /// Add a folder and return its id
    pub fn add_folder(&self, parent: i64, title: &str, position: i64) -> i64 {
        self.insert_entry(2, parent, Some(title), None, position)
    }

    /// Add a folder whose title is `NULL`
    pub fn add_untitled_folder(&self, parent: i64, position: i64) -> i64 {
        self.insert_entry(2, parent, None, None, position)
    }

    /// Add a bookmark pointing at `url` and return its id
    pub fn add_bookmark(&self, parent: i64, title: &str, url: &str, position: i64) -> i64 {
        let place = self.insert_place(url);
        self.insert_entry(1, parent, Some(title), Some(place), position)
    }

    /// Add a bookmark whose title is `NULL`
    pub fn add_untitled_bookmark(&self, parent: i64, url: &str, position: i64) -> i64 {
        let place = self.insert_place(url);
        self.insert_entry(1, parent, None, Some(place), position)
    }

    /// Add a bookmark whose `fk` references no place
    pub fn add_dangling_bookmark(&self, parent: i64, title: &str, position: i64) -> i64 {
        self.insert_entry(1, parent, Some(title), Some(9_999), position)
    }

    /// Add a separator entry
    pub fn add_separator(&self, parent: i64, position: i64) -> i64 {
        self.insert_entry(3, parent, None, None, position)
    }
}

impl Default for TestProfile {
    fn default() -> Self {
        Self::new()
    }
}
