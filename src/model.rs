//! Domain model: bookmarks grouped into folders
//!
//! Both types are built once per run from the bookmark store and handed to the
//! renderer unchanged. The favicon URL of a bookmark is derived from its URL
//! whenever it is asked for, including during serialization.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;
use tracing::warn;
use url::Url;

/// A bookmark URL that cannot be split into scheme and host
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Cannot derive favicon from '{url}': {reason}")]
pub struct UrlParseError {
    pub url: String,
    pub reason: String,
}

/// A single bookmarked link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

impl Bookmark {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Site icon location, `<scheme>://<host>[:<port>]/favicon.ico`
    ///
    /// Path, query, fragment and credentials of the bookmark URL are dropped.
    ///
    /// # Examples
    /// ```
    /// use bookmarks_page::model::Bookmark;
    ///
    /// let bookmark = Bookmark::new("Example", "https://example.com/a?b=c#d");
    /// assert_eq!(bookmark.favicon_url().unwrap(), "https://example.com/favicon.ico");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `UrlParseError` if the URL does not parse or has no host
    /// (`place:` queries, `javascript:` bookmarklets).
    pub fn favicon_url(&self) -> Result<String, UrlParseError> {
        let parsed = Url::parse(&self.url).map_err(|e| UrlParseError {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        let host = parsed.host_str().filter(|h| !h.is_empty()).ok_or_else(|| UrlParseError {
            url: self.url.clone(),
            reason: "URL has no host".to_string(),
        })?;

        Ok(match parsed.port() {
            Some(port) => format!("{}://{host}:{port}/favicon.ico", parsed.scheme()),
            None => format!("{}://{host}/favicon.ico", parsed.scheme()),
        })
    }

    /// Favicon URL for display; empty when the URL has no usable host
    #[must_use]
    pub fn favicon_url_or_empty(&self) -> String {
        self.favicon_url().unwrap_or_else(|e| {
            warn!("{e}");
            String::new()
        })
    }
}

impl Serialize for Bookmark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Bookmark", 3)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("favicon_url", &self.favicon_url_or_empty())?;
        state.end()
    }
}

/// A named folder and its bookmarks in display order
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BookmarksFolder {
    pub name: String,
    pub bookmarks: Vec<Bookmark>,
}

impl BookmarksFolder {
    #[must_use]
    pub fn new(name: impl Into<String>, bookmarks: Vec<Bookmark>) -> Self {
        Self {
            name: name.into(),
            bookmarks,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
