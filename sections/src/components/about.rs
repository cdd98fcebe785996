//! About section - bio paragraphs plus short highlights.

use leptos::prelude::*;

use crate::types::Profile;

/// Bio paragraphs and highlight bullets from the shared [`Profile`].
#[component]
pub fn AboutSection(profile: Profile) -> impl IntoView {
    let highlights = if profile.highlights.is_empty() {
        view! { "" }.into_any()
    } else {
        view! {
            <ul class="about-highlights">
                {profile
                    .highlights
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="about">
            <p class="section-eyebrow">"About"</p>
            <h2 class="section-title">"Who I am"</h2>
            <div class="about-text">
                {profile
                    .about
                    .into_iter()
                    .map(|paragraph| view! { <p>{paragraph}</p> })
                    .collect::<Vec<_>>()}
            </div>
            {highlights}
        </div>
    }
}
