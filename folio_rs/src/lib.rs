//! # folio
//!
//! Progressive renderer for a personal portfolio site.
//!
//! The page is composed from an eager hero plus five deferred sections
//! (About, Projects, Skills, Experience, Contact) in a fixed order. Each
//! deferred section occupies a *slot*: a skeleton placeholder holds its
//! position until the section's loader resolves, then the content is
//! swapped in place. Loads resolve independently and in any order; slot
//! positions never move.
//!
//! Every slot is wrapped in an [`ErrorBoundary`]: a render failure (a
//! loader error, or a panic trapped mid-render) is contained to that slot,
//! which shows a fallback panel with a "Try again" action while the rest of
//! the page stays live.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use folio::{ContentStore, PageComposer, RenderTarget, SectionId};
//!
//! # async fn demo() -> Result<(), folio::RenderError> {
//! let store = ContentStore::new("content");
//! let mut composer = PageComposer::new(store.hero().await?);
//! for id in SectionId::DEFERRED {
//!     composer.add_section(store.section_spec(id, RenderTarget::Client));
//! }
//!
//! composer.mount();          // placeholders render immediately
//! composer.settle().await;   // ...until loads resolve
//! let page = composer.render();
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! folio build            # render the site into dist/
//! folio check            # validate every content file renders
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Error boundary: Healthy/Failed state machine with guarded rendering.
pub mod boundary;

/// Page composer: fixed-order slots, cooperative swap loop, retry.
pub mod compose;

/// Optional `folio.toml` configuration.
pub mod config;

/// Content pipeline: JSON files -> typed data -> SSR'd section markup.
pub mod content;

/// Render-phase failure taxonomy and subtree diagnostics.
pub mod error;

/// Opaque rendered-markup wrapper.
pub mod html;

/// Slots, section ids, render targets and loader types.
pub mod slot;

pub use boundary::{BoundaryState, ErrorBoundary, ErrorObserver, DEFAULT_FALLBACK_HTML};
pub use compose::{slot_shell, PageComposer, SectionSpec};
pub use config::FolioConfig;
pub use content::ContentStore;
pub use error::{Diagnostics, RenderError};
pub use html::Html;
pub use slot::{RenderTarget, SectionFuture, SectionId, SectionLoader, SlotState};
