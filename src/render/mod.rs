//! Page renderer
//!
//! Compiles the page template with Tera and renders the folder list into an
//! HTML document. Everything the template can see is passed in explicitly:
//!
//! - `folders`: the ordered folder list; each folder has `name` and
//!   `bookmarks`, each bookmark `title`, `url` and `favicon_url`
//! - `title`: the configured page title, empty when unset
//! - `random_class()`: a function returning a style-class label per call
//!
//! All interpolated values are HTML-escaped unless the template marks them
//! `| safe`.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tera::{Context, Tera, Value};
use tracing::debug;

use crate::model::BookmarksFolder;

pub mod error;
pub mod picker;

pub use error::RenderError;
pub use picker::{ClassPicker, FixedClassPicker, RandomClassPicker, STYLE_CLASSES};

/// Default template location, relative to the working directory
pub const DEFAULT_TEMPLATE_PATH: &str = "template.html";

/// Default output location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";

/// Name the template is registered under; the `.html` suffix keeps autoescaping on
const TEMPLATE_NAME: &str = "page.html";

/// Values bound into the template at render time
#[derive(Clone)]
pub struct RenderOptions {
    pub title: Option<String>,
    pub class_picker: Arc<dyn ClassPicker>,
}

impl RenderOptions {
    /// Options with the given title and a random style-class picker
    #[must_use]
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            class_picker: Arc::new(RandomClassPicker::default()),
        }
    }

    /// Replace the style-class picker
    #[must_use]
    pub fn with_class_picker(mut self, picker: impl ClassPicker + 'static) -> Self {
        self.class_picker = Arc::new(picker);
        self
    }
}

/// A compiled page template
#[derive(Debug, Clone)]
pub struct PageTemplate {
    tera: Tera,
}

impl PageTemplate {
    /// Read and compile a template file
    ///
    /// # Errors
    ///
    /// Returns `RenderError::TemplateMissing` if the file cannot be read and
    /// `RenderError::Template` if it does not compile.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| RenderError::TemplateMissing {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded template");
        Self::from_source(&source)
    }

    /// Compile a template from source text
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Template` on a syntax error.
    pub fn from_source(source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);
        tera.set_escape_fn(escape_html);
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Render the folder list into a finished document
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Template` if evaluating the template fails, for
    /// example on a reference to an unknown variable.
    pub fn render(&self, folders: &[BookmarksFolder], options: &RenderOptions) -> Result<String, RenderError> {
        let mut tera = self.tera.clone();
        let picker = Arc::clone(&options.class_picker);
        tera.register_function(
            "random_class",
            move |_args: &HashMap<String, Value>| -> tera::Result<Value> {
                Ok(Value::String(picker.pick()))
            },
        );

        let mut context = Context::new();
        context.insert("folders", folders);
        context.insert("title", options.title.as_deref().unwrap_or(""));

        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Escape text for HTML content and quoted attribute values
///
/// Slashes are left alone so URLs stay readable in the output.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Write `contents` to `path`, replacing any existing file
///
/// The page is written to a temporary file next to `path` and then renamed
/// over it, so a failed write leaves the previous page in place.
///
/// # Errors
///
/// Returns `RenderError::RenderIo` if the temporary file cannot be created or
/// written, or the rename fails.
pub fn write_page<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), RenderError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_error = |source| RenderError::RenderIo {
        path: path.display().to_string(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(io_error)?;
    }

    file.persist(path).map_err(|e| io_error(e.error))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote page");
    Ok(())
}
