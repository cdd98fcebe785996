//! Hero section - always part of the first paint, never deferred.

use leptos::prelude::*;

use crate::types::Profile;

/// Above-the-fold hero: name, headline, tagline, primary actions.
#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
    let resume = if profile.resume_url.is_empty() {
        view! { "" }.into_any()
    } else {
        view! { <a href=profile.resume_url.clone()>"Resume"</a> }.into_any()
    };

    view! {
        <header class="hero" id="hero">
            <h1 class="hero-name">{profile.name}</h1>
            <p class="hero-headline">{profile.headline}</p>
            <p class="hero-tagline">{profile.tagline}</p>
            <p class="hero-meta">{profile.location}</p>
            <div class="hero-actions">
                <a href="#contact">"Get in touch"</a>
                {resume}
            </div>
        </header>
    }
}
