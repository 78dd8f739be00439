//! Path expansion for configured profile directories
//!
//! Profile paths in the configuration may reference environment variables
//! (`$APPDATA/Mozilla/Firefox/Profiles/abc.default` or `${HOME}/.mozilla/...`)
//! and may start with `~`. Variables that are not set are left in place.

use regex::{Captures, Regex};
use std::path::PathBuf;
use std::sync::LazyLock;

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\w+)|\{([^}]*)\})").expect("variable pattern is a valid regex")
});

/// Expand environment variables and a leading `~` using the process environment
#[must_use]
pub fn expand_vars(input: &str) -> String {
    expand_vars_with(input, |name| std::env::var(name).ok())
}

/// Expand `$NAME` and `${NAME}` references using `lookup`
///
/// References for which `lookup` returns `None` are kept verbatim, so
/// `"$UNSET/x"` expands to `"$UNSET/x"`. A leading `~` followed by a path
/// separator (or nothing) is replaced by the home directory when one exists.
///
/// # Examples
/// ```
/// use bookmarks_page::config::expand_vars_with;
///
/// let expanded = expand_vars_with("${ROOT}/profile", |name| {
///     (name == "ROOT").then(|| "/home/u".to_string())
/// });
/// assert_eq!(expanded, "/home/u/profile");
/// ```
pub fn expand_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let expanded = VAR_PATTERN.replace_all(input, |caps: &Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        lookup(name).unwrap_or_else(|| caps[0].to_string())
    });

    expand_home(&expanded)
}

fn expand_home(path: &str) -> String {
    let Some(rest) = path.strip_prefix('~') else {
        return path.to_string();
    };
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\')) {
        return path.to_string();
    }
    match dirs::home_dir() {
        Some(home) => format!("{}{rest}", home.display()),
        None => path.to_string(),
    }
}

/// Expand a configured path into a `PathBuf`
#[must_use]
pub fn expand_path(input: &str) -> PathBuf {
    PathBuf::from(expand_vars(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "APPDATA" => Some("/home/u/.appdata".to_string()),
            "PROFILE" => Some("abc.default".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_expand_bare_variable() {
        assert_eq!(
            expand_vars_with("$APPDATA/Mozilla", lookup),
            "/home/u/.appdata/Mozilla"
        );
    }

    #[test]
    fn test_expand_braced_variable() {
        assert_eq!(
            expand_vars_with("${APPDATA}/Profiles/${PROFILE}", lookup),
            "/home/u/.appdata/Profiles/abc.default"
        );
    }

    #[test]
    fn test_unknown_variable_left_untouched() {
        assert_eq!(expand_vars_with("$NOPE/x/${ALSO_NOPE}", lookup), "$NOPE/x/${ALSO_NOPE}");
    }

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(expand_vars_with("/var/lib/profile", lookup), "/var/lib/profile");
    }

    #[test]
    fn test_dollar_without_name_unchanged() {
        assert_eq!(expand_vars_with("/price$/x", lookup), "/price$/x");
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let expanded = expand_vars_with("~/.mozilla", lookup);
        assert_eq!(expanded, format!("{}/.mozilla", home.display()));
    }

    #[test]
    fn test_tilde_inside_name_unchanged() {
        assert_eq!(expand_vars_with("~user/profile", lookup), "~user/profile");
    }
}
