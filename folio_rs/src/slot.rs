//! Page slots: fixed positions that deferred sections resolve into.
//!
//! A slot owns everything one section needs: its placeholder, its loader
//! thunk, its render-target policy, its own error boundary, and the
//! generation/mounted guards that make stale swap-ins no-ops.

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::boundary::ErrorBoundary;
use crate::error::RenderError;
use crate::html::Html;

/// The sections of the page, in no particular order; see [`SectionId::PAGE_ORDER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Above-the-fold hero, never deferred
    Hero,
    /// About/bio section
    About,
    /// Project cards
    Projects,
    /// Skill groups
    Skills,
    /// Work-experience timeline
    Experience,
    /// Contact block
    Contact,
}

impl SectionId {
    /// Fixed page order, independent of load timing.
    pub const PAGE_ORDER: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// The below-the-fold sections, each loaded independently.
    pub const DEFERRED: [SectionId; 5] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// URL/id-safe name.
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Everything except the hero is deferred.
    pub const fn is_deferred(self) -> bool {
        !matches!(self, SectionId::Hero)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Static per-section policy: where the section's first render happens.
///
/// `Server` sections are inlined into the generated document; `Client`
/// sections ship as their skeleton plus a fragment swapped in by the inline
/// loader script. The policy is set at composition time and never changes
/// per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    /// Rendered into the document for the first paint
    Server,
    /// Skeleton in the first paint, content swapped in client-side
    #[default]
    Client,
}

/// The deferred unit of work a loader thunk produces.
pub type SectionFuture = LocalBoxFuture<'static, Result<Html, RenderError>>;

/// Re-invocable thunk producing a section's renderable content.
///
/// `Rc` because retry re-invokes the same thunk; local (non-`Send`) because
/// the whole render model is single-threaded and cooperative.
pub type SectionLoader = Rc<dyn Fn() -> SectionFuture>;

/// Load state of one slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SlotState {
    /// Loader in flight; placeholder is shown
    #[default]
    Pending,
    /// Content resolved and swapped in
    Ready(Html),
    /// Loader failed; the slot's boundary contains this on render
    Failed(RenderError),
}

/// One fixed position in the page layout, assigned to one section.
pub struct Slot {
    pub(crate) id: SectionId,
    pub(crate) placeholder: Html,
    pub(crate) loader: SectionLoader,
    pub(crate) target: RenderTarget,
    pub(crate) state: SlotState,
    pub(crate) boundary: ErrorBoundary,
    /// Bumped on retry/unmount so in-flight completions become stale.
    pub(crate) generation: u64,
    pub(crate) mounted: bool,
}

impl Slot {
    /// Current view of the slot, rendered through its boundary:
    /// skeleton while Pending, content when Ready, fallback when Failed.
    pub fn view(&mut self) -> Html {
        let state = &self.state;
        let placeholder = &self.placeholder;
        self.boundary.render_guarded(|| match state {
            SlotState::Pending => Ok(placeholder.clone()),
            SlotState::Ready(content) => Ok(content.clone()),
            SlotState::Failed(err) => Err(err.clone()),
        })
    }

    /// Section this slot is assigned to.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// The slot's render-target policy.
    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// The slot's skeleton placeholder.
    pub fn placeholder(&self) -> &Html {
        &self.placeholder
    }

    /// Current load state.
    pub fn state(&self) -> &SlotState {
        &self.state
    }

    /// True once the slot's boundary has contained a failure.
    pub fn is_failed(&self) -> bool {
        self.boundary.is_failed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_order_starts_with_hero_and_is_fixed() {
        assert_eq!(SectionId::PAGE_ORDER[0], SectionId::Hero);
        assert_eq!(
            &SectionId::PAGE_ORDER[1..],
            &SectionId::DEFERRED,
            "deferred sections follow the hero in canonical order"
        );
    }

    #[test]
    fn hero_is_never_deferred() {
        assert!(!SectionId::Hero.is_deferred());
        for id in SectionId::DEFERRED {
            assert!(id.is_deferred());
        }
    }

    #[test]
    fn section_ids_serialize_as_slugs() {
        let json = serde_json::to_string(&SectionId::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
        let back: SectionId = serde_json::from_str("\"projects\"").unwrap();
        assert_eq!(back, SectionId::Projects);
    }
}
