//! Experience section - work-history timeline.

use leptos::prelude::*;

use crate::components::{Icon, ICON_TERMINAL};
use crate::types::ExperienceEntry;

/// Vertical timeline of roles, most recent first (data order is kept).
#[component]
pub fn ExperienceSection(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <div class="experience">
            <p class="section-eyebrow">"Experience"</p>
            <h2 class="section-title">
                <Icon path=ICON_TERMINAL class="icon-sm" />
                " Where I've worked"
            </h2>
            <div class="timeline">
                {entries
                    .into_iter()
                    .map(|entry| view! { <TimelineEntry entry=entry /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// One timeline entry with role, period and achievement bullets.
#[component]
fn TimelineEntry(entry: ExperienceEntry) -> impl IntoView {
    let achievements = if entry.achievements.is_empty() {
        view! { "" }.into_any()
    } else {
        view! {
            <ul class="timeline-achievements">
                {entry
                    .achievements
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="timeline-entry">
            <h3 class="timeline-role">{entry.role}</h3>
            <p class="timeline-meta">{entry.company} " | " {entry.period}</p>
            <p>{entry.summary}</p>
            {achievements}
        </div>
    }
}
