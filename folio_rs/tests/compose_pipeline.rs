//! Integration tests for the progressive composition pipeline:
//! slot ordering, skeleton swap-in, failure containment, retry, and
//! cancellation semantics.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::FutureExt;
use tokio::time::{sleep, timeout};

use folio::{
    Html, PageComposer, RenderError, SectionId, SectionLoader, SectionSpec, SlotState,
};

fn skeleton(id: SectionId) -> Html {
    Html::new(format!("<div class=\"skeleton\" data-for=\"{id}\"></div>"))
}

fn ready(content: &'static str) -> SectionLoader {
    Rc::new(move || async move { Ok::<_, RenderError>(Html::new(content)) }.boxed_local())
}

fn ready_after(content: &'static str, delay: Duration) -> SectionLoader {
    Rc::new(move || {
        async move {
            sleep(delay).await;
            Ok::<_, RenderError>(Html::new(content))
        }
        .boxed_local()
    })
}

fn failing(id: SectionId, message: &'static str) -> SectionLoader {
    Rc::new(move || {
        async move { Err::<Html, _>(RenderError::load(id, message)) }.boxed_local()
    })
}

/// Fails on the first invocation, succeeds afterwards. Returns the loader
/// and an invocation counter.
fn flaky(
    id: SectionId,
    content: &'static str,
) -> (SectionLoader, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0usize));
    let seen = calls.clone();
    let loader: SectionLoader = Rc::new(move || {
        let attempt = seen.get() + 1;
        seen.set(attempt);
        async move {
            if attempt == 1 {
                Err(RenderError::load(id, "network error"))
            } else {
                Ok(Html::new(content))
            }
        }
        .boxed_local()
    });
    (loader, calls)
}

fn spec(id: SectionId, loader: SectionLoader) -> SectionSpec {
    SectionSpec::new(id, skeleton(id), loader)
}

fn standard_composer() -> PageComposer {
    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(spec(SectionId::About, ready("<p>about</p>")));
    composer.add_section(spec(SectionId::Projects, ready("<p>projects</p>")));
    composer.add_section(spec(SectionId::Skills, ready("<p>skills</p>")));
    composer.add_section(spec(SectionId::Experience, ready("<p>experience</p>")));
    composer.add_section(spec(SectionId::Contact, ready("<p>contact</p>")));
    composer
}

fn slot_positions(page: &Html) -> Vec<usize> {
    SectionId::PAGE_ORDER
        .iter()
        .map(|id| {
            page.as_str()
                .find(&format!("data-slot=\"{}\"", id.slug()))
                .unwrap_or_else(|| panic!("slot {id} missing from page"))
        })
        .collect()
}

#[tokio::test]
async fn page_order_is_fixed_regardless_of_load_latency() {
    // reverse latency: contact resolves first, about last
    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(spec(
        SectionId::About,
        ready_after("<p>about</p>", Duration::from_millis(50)),
    ));
    composer.add_section(spec(
        SectionId::Projects,
        ready_after("<p>projects</p>", Duration::from_millis(40)),
    ));
    composer.add_section(spec(
        SectionId::Skills,
        ready_after("<p>skills</p>", Duration::from_millis(30)),
    ));
    composer.add_section(spec(
        SectionId::Experience,
        ready_after("<p>experience</p>", Duration::from_millis(20)),
    ));
    composer.add_section(spec(
        SectionId::Contact,
        ready_after("<p>contact</p>", Duration::from_millis(10)),
    ));

    composer.mount();

    let before = slot_positions(&composer.render());
    composer.settle().await;
    let page = composer.render();
    let after = slot_positions(&page);

    // Hero < About < Projects < Skills < Experience < Contact, both times
    assert!(before.windows(2).all(|w| w[0] < w[1]));
    assert!(after.windows(2).all(|w| w[0] < w[1]));
    assert!(page.as_str().contains("<p>contact</p>"));
}

#[tokio::test(start_paused = true)]
async fn delayed_section_shows_skeleton_then_swaps_in_place() {
    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(spec(
        SectionId::About,
        ready_after("<p>about content</p>", Duration::from_millis(50)),
    ));
    composer.add_section(spec(SectionId::Projects, ready("<p>projects</p>")));

    composer.mount();

    // during the 50ms window the skeleton holds About's position
    let page = composer.render();
    assert!(page.as_str().contains("data-for=\"about\""));
    assert!(!page.as_str().contains("<p>about content</p>"));
    let before = slot_positions_of(&page, &[SectionId::Hero, SectionId::About, SectionId::Projects]);

    composer.settle().await;

    let page = composer.render();
    assert!(page.as_str().contains("<p>about content</p>"));
    assert!(!page.as_str().contains("data-for=\"about\""));
    let after = slot_positions_of(&page, &[SectionId::Hero, SectionId::About, SectionId::Projects]);

    // same relative slot positions before and after the swap
    assert!(before.windows(2).all(|w| w[0] < w[1]));
    assert!(after.windows(2).all(|w| w[0] < w[1]));
}

fn slot_positions_of(page: &Html, ids: &[SectionId]) -> Vec<usize> {
    ids.iter()
        .map(|id| {
            page.as_str()
                .find(&format!("data-slot=\"{}\"", id.slug()))
                .unwrap_or_else(|| panic!("slot {id} missing from page"))
        })
        .collect()
}

#[tokio::test]
async fn failed_loader_shows_default_fallback_and_retry_reinvokes() {
    let (loader, calls) = flaky(SectionId::Projects, "<p>projects recovered</p>");

    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(spec(SectionId::About, ready("<p>about</p>")));
    composer.add_section(spec(SectionId::Projects, loader));

    composer.mount();
    composer.settle().await;

    let page = composer.render();
    assert!(page.as_str().contains("Something went wrong"));
    assert!(page.as_str().contains("Try again"));
    // placeholder removed, rest of the page unaffected
    assert!(!page.as_str().contains("data-for=\"projects\""));
    assert!(page.as_str().contains("<p>about</p>"));
    assert_eq!(calls.get(), 1);

    // "Try again" re-invokes the loader
    assert!(composer.retry(SectionId::Projects));
    composer.settle().await;
    assert_eq!(calls.get(), 2);

    let page = composer.render();
    assert!(page.as_str().contains("<p>projects recovered</p>"));
    assert!(!page.as_str().contains("Something went wrong"));
}

#[tokio::test]
async fn persistent_failure_reenters_failed_after_retry() {
    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(spec(
        SectionId::Skills,
        failing(SectionId::Skills, "still broken"),
    ));

    composer.mount();
    composer.settle().await;
    composer.render();
    assert!(composer.slot(SectionId::Skills).unwrap().is_failed());

    composer.retry(SectionId::Skills);
    assert!(!composer.slot(SectionId::Skills).unwrap().is_failed());

    composer.settle().await;
    let page = composer.render();
    // never renders fallback and children at once
    assert!(page.as_str().contains("Something went wrong"));
    assert!(!page.as_str().contains("data-for=\"skills\""));
    assert!(composer.slot(SectionId::Skills).unwrap().is_failed());
}

#[tokio::test]
async fn custom_fallback_replaces_default_panel() {
    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(
        spec(SectionId::Contact, failing(SectionId::Contact, "smtp down"))
            .with_fallback(Html::new("<p>Email me instead.</p>")),
    );

    composer.mount();
    composer.settle().await;

    let page = composer.render();
    assert!(page.as_str().contains("<p>Email me instead.</p>"));
    assert!(!page.as_str().contains("Something went wrong"));
}

#[tokio::test]
async fn observer_sees_failure_exactly_once_with_diagnostics() {
    let seen: Rc<Cell<usize>> = Rc::new(Cell::new(0));
    let count = seen.clone();

    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(
        spec(SectionId::Skills, failing(SectionId::Skills, "E")).with_observer(
            move |err, diag| {
                count.set(count.get() + 1);
                assert_eq!(diag.slot_path, "page/skills");
                assert!(err.to_string().contains("E"));
            },
        ),
    );

    composer.mount();
    composer.settle().await;

    composer.render();
    composer.render(); // repeated renders must not re-notify
    assert_eq!(seen.get(), 1);
}

#[tokio::test]
async fn failure_is_contained_to_its_own_slot() {
    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(spec(SectionId::About, ready("<p>about</p>")));
    composer.add_section(spec(SectionId::Projects, ready("<p>projects</p>")));
    composer.add_section(spec(
        SectionId::Skills,
        failing(SectionId::Skills, "boom"),
    ));
    composer.add_section(spec(SectionId::Experience, ready("<p>experience</p>")));
    composer.add_section(spec(SectionId::Contact, ready("<p>contact</p>")));

    composer.mount();
    composer.settle().await;
    composer.render();

    assert!(composer.slot(SectionId::Skills).unwrap().is_failed());
    for id in [SectionId::Experience, SectionId::Contact, SectionId::About] {
        assert!(!composer.slot(id).unwrap().is_failed(), "{id} must stay healthy");
    }
}

#[tokio::test(start_paused = true)]
async fn unmounted_slot_ignores_late_completion() {
    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(spec(
        SectionId::About,
        ready_after("<p>late about</p>", Duration::from_millis(100)),
    ));

    composer.mount();
    composer.unmount(SectionId::About);
    composer.settle().await;

    // the completion arrived but must not mutate unmounted state
    assert_eq!(
        composer.slot(SectionId::About).unwrap().state(),
        &SlotState::Pending
    );
}

#[tokio::test(start_paused = true)]
async fn perpetually_pending_loader_keeps_skeleton_visible() {
    let pending: SectionLoader =
        Rc::new(|| futures::future::pending::<Result<Html, RenderError>>().boxed_local());

    let mut composer = PageComposer::new(Html::new("<h1>hero</h1>"));
    composer.add_section(spec(SectionId::Experience, pending));
    composer.add_section(spec(SectionId::Contact, ready("<p>contact</p>")));

    composer.mount();

    // contact settles; experience never does
    let swapped = composer.next_swap().await;
    assert_eq!(swapped, Some(SectionId::Contact));

    let no_more = timeout(Duration::from_secs(3600), composer.next_swap()).await;
    assert!(no_more.is_err(), "pending loader must not complete");

    let page = composer.render();
    assert!(page.as_str().contains("data-for=\"experience\""));
    assert!(page.as_str().contains("<p>contact</p>"));
}

#[tokio::test]
async fn standard_page_contains_every_section_once() {
    let mut composer = standard_composer();
    composer.mount();
    composer.settle().await;

    let page = composer.render();
    for id in SectionId::PAGE_ORDER {
        let marker = format!("data-slot=\"{}\"", id.slug());
        assert_eq!(
            page.as_str().matches(&marker).count(),
            1,
            "{id} must appear exactly once"
        );
    }
}
