//! Render-phase failure taxonomy.
//!
//! Two kinds exist: a section loader failing to resolve, and a render thunk
//! failing while producing output. Both surface at the nearest
//! [`ErrorBoundary`](crate::boundary::ErrorBoundary); neither is fatal to
//! the page.

use std::fmt;

use thiserror::Error;

use crate::slot::SectionId;

/// A failure raised while producing a subtree's output.
///
/// Errors are `Clone` because a failed slot keeps its error until retried
/// and the boundary hands a reference to observers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A section's loader thunk failed to resolve (fetch, parse, render).
    #[error("section `{section}` failed to load: {message}")]
    Load {
        /// Section whose loader failed
        section: SectionId,
        /// Human-readable cause
        message: String,
    },

    /// A render thunk returned an error or panicked mid-render.
    #[error("render failed: {0}")]
    Render(String),
}

impl RenderError {
    /// Build a [`RenderError::Load`] from any displayable cause.
    pub fn load(section: SectionId, cause: impl fmt::Display) -> Self {
        Self::Load { section, message: cause.to_string() }
    }
}

/// Identifies the subtree a failure was observed in.
///
/// Handed to error observers alongside the error itself, for logging and
/// telemetry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostics {
    /// Section owning the failed subtree
    pub section: SectionId,
    /// Path of the subtree within the page, e.g. `page/skills`
    pub slot_path: String,
}

impl Diagnostics {
    /// Diagnostics for a section slot mounted directly under the page.
    pub fn for_section(section: SectionId) -> Self {
        Self { section, slot_path: format!("page/{}", section.slug()) }
    }
}
