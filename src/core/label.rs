//! # Deferred Labels
//!
//! Menu titles, headers and option names are stored as callables and
//! re-evaluated on every render, so a label can change between frames
//! (a live clock, a counter mutated by an action, ...).

use std::fmt;

/// Display text produced at render time.
pub struct Label(Box<dyn Fn() -> String>);

impl Label {
    /// A label that always renders the same text.
    pub fn fixed(text: impl Into<String>) -> Self {
        let text = text.into();
        Self(Box::new(move || text.clone()))
    }

    /// A label whose text is recomputed on every call to [`Label::text`].
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        Self(Box::new(f))
    }

    /// Evaluates the label. Never cached.
    pub fn text(&self) -> String {
        (self.0)()
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::fixed(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::fixed(text)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Label").field(&self.text()).finish()
    }
}
