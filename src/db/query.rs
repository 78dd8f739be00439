//! SQL against the Places schema and the rows it yields
//!
//! `moz_bookmarks` holds folders (`type = 2`), bookmarks and separators in a
//! tree keyed by `parent`; bookmark rows point at their URL in `moz_places`
//! through `fk`.

use rusqlite::Row;

/// `moz_bookmarks.type` value for folders
pub const FOLDER_TYPE: i64 = 2;

/// Direct sub-folders of the folder titled `?1`
///
/// The root lookup is a scalar subquery: with several same-titled folders the
/// first one SQLite finds wins, and with none the comparison is against NULL
/// and nothing matches.
pub const SUBFOLDERS_SQL: &str = "\
    SELECT id, title \
    FROM moz_bookmarks \
    WHERE type = ?1 AND parent = ( \
        SELECT id FROM moz_bookmarks WHERE type = ?1 AND title = ?2 \
    )";

/// Bookmarks of folder `?1` with a non-empty URL, by display position
pub const BOOKMARKS_SQL: &str = "\
    SELECT moz_places.url, moz_bookmarks.title \
    FROM moz_bookmarks \
    LEFT JOIN moz_places ON moz_bookmarks.fk = moz_places.id \
    WHERE moz_places.url <> '' AND moz_bookmarks.parent = ?1 \
    ORDER BY moz_bookmarks.position";

/// A sub-folder of the root folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRow {
    pub id: i64,
    pub title: String,
}

impl FolderRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        })
    }
}

/// A bookmark entry resolved to its URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRow {
    pub url: String,
    pub title: String,
}

impl BookmarkRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            url: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        })
    }
}
