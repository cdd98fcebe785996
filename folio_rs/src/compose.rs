//! Page composer: eager hero plus fixed-order deferred slots.
//!
//! Mounting starts every slot's loader; completions are consumed
//! cooperatively on a single thread (no locks, no shared state between
//! slots). Slot *position* is fixed at composition time; only a slot's
//! *content* changes as loads resolve, in whatever order they finish.

use futures::future::FutureExt;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, trace, warn};

use crate::boundary::{ErrorBoundary, ErrorObserver};
use crate::error::{Diagnostics, RenderError};
use crate::html::Html;
use crate::slot::{RenderTarget, SectionFuture, SectionId, SectionLoader, Slot, SlotState};

/// Everything needed to compose one deferred section into the page.
pub struct SectionSpec {
    id: SectionId,
    loader: SectionLoader,
    placeholder: Html,
    target: RenderTarget,
    fallback: Option<Html>,
    observer: Option<ErrorObserver>,
}

impl SectionSpec {
    /// Spec with the default render target and fallback panel.
    pub fn new(id: SectionId, placeholder: Html, loader: SectionLoader) -> Self {
        Self {
            id,
            loader,
            placeholder,
            target: RenderTarget::default(),
            fallback: None,
            observer: None,
        }
    }

    /// Set the render-target policy.
    pub fn with_target(mut self, target: RenderTarget) -> Self {
        self.target = target;
        self
    }

    /// Supply custom fallback content for this section's boundary.
    pub fn with_fallback(mut self, fallback: Html) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Attach an error observer to this section's boundary.
    pub fn with_observer(
        mut self,
        observer: impl Fn(&RenderError, &Diagnostics) + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }
}

/// A loader completion, tagged with the generation it was started under.
struct SlotEvent {
    id: SectionId,
    generation: u64,
    outcome: Result<Html, RenderError>,
}

/// Arranges the hero and the deferred slots, drives their loads, and
/// renders page snapshots at any point in between.
pub struct PageComposer {
    hero: Html,
    slots: Vec<Slot>,
    in_flight: FuturesUnordered<futures::future::LocalBoxFuture<'static, SlotEvent>>,
}

impl PageComposer {
    /// New composer with the eagerly-rendered hero and no sections yet.
    pub fn new(hero: Html) -> Self {
        Self { hero, slots: Vec::new(), in_flight: FuturesUnordered::new() }
    }

    /// Append a deferred section. Composition order is page order; it never
    /// changes afterwards, regardless of load timing.
    pub fn add_section(&mut self, spec: SectionSpec) {
        let mut boundary = ErrorBoundary::new(Diagnostics::for_section(spec.id));
        if let Some(fallback) = spec.fallback {
            boundary = boundary.with_fallback(fallback);
        }
        if let Some(observer) = spec.observer {
            boundary = boundary.with_observer(observer);
        }

        self.slots.push(Slot {
            id: spec.id,
            placeholder: spec.placeholder,
            loader: spec.loader,
            target: spec.target,
            state: SlotState::Pending,
            boundary,
            generation: 0,
            mounted: true,
        });
    }

    /// Start every slot's loader. The page can be rendered immediately
    /// afterwards; pending slots show their placeholders.
    pub fn mount(&mut self) {
        for idx in 0..self.slots.len() {
            self.start_load(idx);
        }
    }

    fn start_load(&mut self, idx: usize) {
        let slot = &self.slots[idx];
        let id = slot.id;
        let generation = slot.generation;
        let future: SectionFuture = (slot.loader)();

        trace!(section = %id, generation, "loader started");
        self.in_flight.push(
            async move { SlotEvent { id, generation, outcome: future.await } }.boxed_local(),
        );
    }

    /// Wait for the next loader completion and apply its swap, skipping
    /// stale completions. Returns the swapped section, or `None` once no
    /// loads remain in flight.
    pub async fn next_swap(&mut self) -> Option<SectionId> {
        while let Some(event) = self.in_flight.next().await {
            let id = event.id;
            if self.apply(event) {
                return Some(id);
            }
        }
        None
    }

    /// Drive all in-flight loads to completion.
    ///
    /// A perpetually-pending loader never completes; callers that need a
    /// deadline should wrap this in their own timeout.
    pub async fn settle(&mut self) {
        while self.next_swap().await.is_some() {}
    }

    /// Apply a completion to its slot. Stale events (unmounted slot or
    /// generation mismatch after a retry) are dropped without touching
    /// state.
    fn apply(&mut self, event: SlotEvent) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|slot| slot.id == event.id) else {
            return false;
        };
        if !slot.mounted || slot.generation != event.generation {
            trace!(section = %event.id, "stale completion dropped");
            return false;
        }

        match event.outcome {
            Ok(content) => {
                debug!(section = %event.id, bytes = content.as_str().len(), "section swapped in");
                slot.state = SlotState::Ready(content);
            }
            Err(err) => {
                warn!(section = %event.id, %err, "section load failed");
                slot.state = SlotState::Failed(err);
            }
        }
        true
    }

    /// Reset the section's boundary, return its slot to Pending and
    /// re-invoke its loader. Returns false for unknown sections.
    ///
    /// This is the "Try again" action: manual, unbounded, no backoff.
    pub fn retry(&mut self, id: SectionId) -> bool {
        let Some(idx) = self.slots.iter().position(|slot| slot.id == id) else {
            return false;
        };
        {
            let slot = &mut self.slots[idx];
            slot.boundary.retry();
            slot.state = SlotState::Pending;
            slot.generation += 1;
            slot.mounted = true;
        }
        self.start_load(idx);
        true
    }

    /// Tear a slot down. Any in-flight completion for it becomes a no-op.
    pub fn unmount(&mut self, id: SectionId) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.id == id) {
            slot.mounted = false;
            slot.generation += 1;
        }
    }

    /// Snapshot of the whole page at the current instant: hero first, then
    /// every slot in composition order (skeleton | content | fallback).
    pub fn render(&mut self) -> Html {
        let mut body = String::new();
        body.push_str(slot_shell(SectionId::Hero, &self.hero, None).as_str());
        for slot in &mut self.slots {
            let id = slot.id;
            let inner = slot.view();
            body.push_str(slot_shell(id, &inner, None).as_str());
        }
        Html::new(body)
    }

    /// Current view of one slot, rendered through its boundary.
    pub fn slot_view(&mut self, id: SectionId) -> Option<Html> {
        self.slots.iter_mut().find(|slot| slot.id == id).map(Slot::view)
    }

    /// The eagerly-rendered hero.
    pub fn hero(&self) -> &Html {
        &self.hero
    }

    /// Shared access to a slot, for state inspection.
    pub fn slot(&self, id: SectionId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// Composed section ids, in page order.
    pub fn sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.slots.iter().map(|slot| slot.id)
    }
}

/// Fixed-position wrapper for a slot's current content.
///
/// `src` marks a client-target slot with the fragment URL the inline loader
/// script fetches and swaps in.
pub fn slot_shell(id: SectionId, inner: &Html, src: Option<&str>) -> Html {
    let slug = id.slug();
    match src {
        Some(src) => Html::new(format!(
            "<section class=\"slot\" id=\"{slug}\" data-slot=\"{slug}\" data-slot-src=\"{src}\">{inner}</section>"
        )),
        None => Html::new(format!(
            "<section class=\"slot\" id=\"{slug}\" data-slot=\"{slug}\">{inner}</section>"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn ready_loader(content: &'static str) -> SectionLoader {
        Rc::new(move || {
            async move { Ok::<_, RenderError>(Html::new(content)) }.boxed_local()
        })
    }

    fn spec(id: SectionId, content: &'static str) -> SectionSpec {
        SectionSpec::new(id, Html::new("<div class=\"skeleton\"></div>"), ready_loader(content))
    }

    #[tokio::test]
    async fn unmounted_render_shows_placeholders() {
        let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
        composer.add_section(spec(SectionId::About, "<p>about</p>"));

        // not mounted yet: loader untouched, skeleton in place
        let page = composer.render();
        assert!(page.as_str().contains("skeleton"));
        assert!(!page.as_str().contains("<p>about</p>"));
    }

    #[tokio::test]
    async fn settle_swaps_all_sections_in() {
        let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
        composer.add_section(spec(SectionId::About, "<p>about</p>"));
        composer.add_section(spec(SectionId::Projects, "<p>projects</p>"));

        composer.mount();
        composer.settle().await;

        let page = composer.render();
        assert!(page.as_str().contains("<p>about</p>"));
        assert!(page.as_str().contains("<p>projects</p>"));
        assert!(!page.as_str().contains("skeleton"));
    }

    #[tokio::test]
    async fn slot_shell_carries_fragment_src_for_client_slots() {
        let shell = slot_shell(SectionId::Skills, &Html::new("x"), Some("sections/skills.html"));
        assert!(shell.as_str().contains("data-slot-src=\"sections/skills.html\""));
        assert!(shell.as_str().contains("id=\"skills\""));
    }
}
