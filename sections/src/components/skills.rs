//! Skills section - grouped skill lists.

use leptos::prelude::*;

use crate::components::{Icon, ICON_LIGHTNING};
use crate::types::SkillGroup;

/// Grid of skill groups, one card per group.
#[component]
pub fn SkillsSection(groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <div class="skills">
            <p class="section-eyebrow">"Skills"</p>
            <h2 class="section-title">"What I work with"</h2>
            <div class="skills-grid">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="skill-group">
                                <h3>
                                    <Icon path=ICON_LIGHTNING class="icon-sm" />
                                    {group.title}
                                </h3>
                                <ul>
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <li>{item}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
