//! Error boundary: contain a render failure to a bounded subtree.
//!
//! A boundary wraps a subtree's render thunk in a local failure-trapping
//! scope. A failure (an `Err`, or a panic trapped mid-render) transitions
//! the boundary from Healthy to Failed and swaps the subtree's output for a
//! fallback panel with a "Try again" action. [`ErrorBoundary::retry`]
//! resets to Healthy; if the failure condition persists, the next guarded
//! render re-enters Failed.
//!
//! Only the render phase is guarded. Failures in observers or outside a
//! guarded thunk are out of contract and propagate normally.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::debug;

use crate::error::{Diagnostics, RenderError};
use crate::html::Html;

/// Default fallback panel, shown when no custom fallback is supplied.
pub const DEFAULT_FALLBACK_HTML: &str = r#"<div class="error-fallback" role="alert">
<div class="fallback-icon" aria-hidden="true">&#9888;</div>
<h2>Something went wrong</h2>
<p>This section failed to render. The rest of the page is unaffected.</p>
<button class="retry-btn" type="button">Try again</button>
</div>"#;

/// Boundary lifecycle: Healthy renders children, Failed renders fallback.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BoundaryState {
    /// Children render normally.
    #[default]
    Healthy,
    /// A descendant render failed; fallback is shown instead of children.
    Failed(RenderError),
}

/// External logging/telemetry sink, invoked once per Healthy -> Failed
/// transition. Must not panic (out of contract, see module docs).
pub type ErrorObserver = Box<dyn Fn(&RenderError, &Diagnostics)>;

/// Wraps a subtree and intercepts its rendering failures.
pub struct ErrorBoundary {
    state: BoundaryState,
    diagnostics: Diagnostics,
    fallback: Option<Html>,
    observer: Option<ErrorObserver>,
}

impl ErrorBoundary {
    /// New Healthy boundary identified by `diagnostics`.
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self { state: BoundaryState::Healthy, diagnostics, fallback: None, observer: None }
    }

    /// Replace the default fallback panel with custom content.
    pub fn with_fallback(mut self, fallback: Html) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Attach an error observer, called once per failure with the error and
    /// the diagnostics identifying the failed subtree.
    pub fn with_observer(
        mut self,
        observer: impl Fn(&RenderError, &Diagnostics) + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Render `children` inside the failure-trapping scope.
    ///
    /// While Failed, `children` is not invoked at all; the fallback is
    /// returned directly. A failure during this call transitions the
    /// boundary to Failed and returns the fallback.
    pub fn render_guarded<F>(&mut self, children: F) -> Html
    where
        F: FnOnce() -> Result<Html, RenderError>,
    {
        if matches!(self.state, BoundaryState::Failed(_)) {
            return self.fallback_view();
        }

        match trap_unwind(children) {
            Ok(html) => html,
            Err(err) => {
                debug!(slot = %self.diagnostics.slot_path, %err, "boundary captured render failure");
                if let Some(observer) = &self.observer {
                    observer(&err, &self.diagnostics);
                }
                self.state = BoundaryState::Failed(err);
                self.fallback_view()
            }
        }
    }

    /// Reset to Healthy so children get re-rendered on the next pass.
    /// Invoking on a Healthy boundary is a no-op.
    pub fn retry(&mut self) {
        self.state = BoundaryState::Healthy;
    }

    /// True while the boundary shows the fallback.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, BoundaryState::Failed(_))
    }

    /// The captured error, if Failed.
    pub fn error(&self) -> Option<&RenderError> {
        match &self.state {
            BoundaryState::Failed(err) => Some(err),
            BoundaryState::Healthy => None,
        }
    }

    fn fallback_view(&self) -> Html {
        match &self.fallback {
            Some(custom) => custom.clone(),
            None => Html::new(DEFAULT_FALLBACK_HTML),
        }
    }
}

/// Run a render thunk, converting a panic into a [`RenderError::Render`].
///
/// Rust has no exception-based render phase, so "a descendant synchronously
/// throws" maps to `Err` plus this unwind trap.
fn trap_unwind<F>(children: F) -> Result<Html, RenderError>
where
    F: FnOnce() -> Result<Html, RenderError>,
{
    match catch_unwind(AssertUnwindSafe(children)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "render panicked".to_string());
            Err(RenderError::Render(message))
        }
    }
}
