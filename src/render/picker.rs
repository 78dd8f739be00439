//! Style-class selection for rendered bookmarks
//!
//! Templates call `random_class()` once per bookmark to vary its styling. The
//! choice is cosmetic; tests swap in a [`FixedClassPicker`] to get stable output.

use rand::seq::IndexedRandom;

/// Labels handed out by [`RandomClassPicker::default`]
pub const STYLE_CLASSES: &[&str] = &["dev", "social", "other"];

/// Source of style-class labels for the template
pub trait ClassPicker: Send + Sync {
    /// Return the label for the next bookmark
    fn pick(&self) -> String;
}

/// Uniformly random choice from a fixed set of labels, unseeded
#[derive(Debug, Clone)]
pub struct RandomClassPicker {
    classes: Vec<String>,
}

impl RandomClassPicker {
    /// Picker over a custom set of labels
    #[must_use]
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl Default for RandomClassPicker {
    fn default() -> Self {
        Self::with_classes(STYLE_CLASSES.iter().copied())
    }
}

impl ClassPicker for RandomClassPicker {
    fn pick(&self) -> String {
        self.classes
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_default()
    }
}

/// Always returns the same label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClassPicker(pub String);

impl FixedClassPicker {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self(class.into())
    }
}

impl ClassPicker for FixedClassPicker {
    fn pick(&self) -> String {
        self.0.clone()
    }
}
