//! Skeleton placeholders shown while a deferred section loads.
//!
//! Each skeleton matches the approximate visual footprint of its real
//! section so the swap-in causes no layout shift. They carry no state and
//! no text content, just shimmering blocks.

use leptos::prelude::*;

/// A run of shimmering text lines (wide / mid / narrow rotation).
#[component]
fn SkeletonLines(count: usize) -> impl IntoView {
    view! {
        {(0..count)
            .map(|i| {
                let class = match i % 3 {
                    0 => "skeleton-line wide",
                    1 => "skeleton-line mid",
                    _ => "skeleton-line narrow",
                };
                view! { <div class=class></div> }
            })
            .collect::<Vec<_>>()}
    }
}

/// A grid of shimmering card blocks.
#[component]
fn SkeletonCards(count: usize) -> impl IntoView {
    view! {
        <div class="skeleton-grid">
            {(0..count)
                .map(|_| view! { <div class="skeleton-block"></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Placeholder matching the About section: heading + paragraphs.
#[component]
pub fn AboutSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton" aria-hidden="true">
            <div class="skeleton-line narrow"></div>
            <SkeletonLines count=5 />
        </div>
    }
}

/// Placeholder matching the Projects card grid.
#[component]
pub fn ProjectsSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton" aria-hidden="true">
            <div class="skeleton-line narrow"></div>
            <SkeletonCards count=4 />
        </div>
    }
}

/// Placeholder matching the Skills group grid.
#[component]
pub fn SkillsSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton" aria-hidden="true">
            <div class="skeleton-line narrow"></div>
            <SkeletonCards count=3 />
        </div>
    }
}

/// Placeholder matching the Experience timeline.
#[component]
pub fn ExperienceSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton" aria-hidden="true">
            <div class="skeleton-line narrow"></div>
            <SkeletonLines count=6 />
        </div>
    }
}

/// Placeholder matching the Contact block.
#[component]
pub fn ContactSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton" aria-hidden="true">
            <div class="skeleton-line narrow"></div>
            <SkeletonLines count=2 />
            <div class="skeleton-block"></div>
        </div>
    }
}
