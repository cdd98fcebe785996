//! Root document component - the complete HTML page shell.
//!
//! The body content is produced by the composer in the `folio` core (hero
//! plus slot shells) and injected pre-rendered, so the shell stays agnostic
//! of slot states.

use leptos::prelude::*;

use crate::styles::{SECTION_LOADER_JS, SITE_CSS};

/// The complete HTML document for the portfolio page.
///
/// `body_html` is trusted, already-rendered markup (it comes from this
/// crate's own components via the composer, never from user input).
#[component]
pub fn PageDocument(title: String, body_html: String) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <main class="page" inner_html=body_html></main>
                // inner_html keeps leptos from entity-escaping the script body
                <script inner_html=SECTION_LOADER_JS></script>
            </body>
        </html>
    }
}
