//! Opaque rendered-markup wrapper.
//!
//! The composer never inspects section markup; it only moves it between
//! slots. Wrapping the string keeps the core decoupled from the component
//! crate that produced it.

use std::fmt;

/// A chunk of already-rendered HTML.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    /// Wrap rendered markup.
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Borrow the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// True for zero-length markup.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Html {
    fn from(content: String) -> Self {
        Self(content)
    }
}

impl From<&str> for Html {
    fn from(content: &str) -> Self {
        Self(content.to_string())
    }
}
