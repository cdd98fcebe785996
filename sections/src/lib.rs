//! # section-leptos
//!
//! Leptos SSR components for the folio portfolio site.
//!
//! This crate provides the *content* layer of the site: section components
//! (Hero, About, Projects, Skills, Experience, Contact), the skeleton
//! placeholders shown while a deferred section loads, and the page document
//! shell. The *composition* layer - deferred loading, error containment,
//! slot ordering - lives in the `folio` core crate, which consumes this one
//! through the `render_*` string entry points below.
//!
//! ## Quick Start
//!
//! ```rust
//! use section_leptos::{render_document, render_hero, types::Profile};
//!
//! let profile = Profile {
//!     name: "Ada Byron".into(),
//!     headline: "Systems engineer".into(),
//!     ..Default::default()
//! };
//!
//! let hero = render_hero(&profile);
//! let html = render_document("Ada Byron", &hero);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![doc(html_root_url = "https://docs.rs/section-leptos/0.3.2")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::{
    AboutSection, AboutSkeleton, ContactSection, ContactSkeleton, ExperienceSection,
    ExperienceSkeleton, HeroSection, PageDocument, ProjectsSection, ProjectsSkeleton,
    SkillsSection, SkillsSkeleton,
};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{ContactInfo, ExperienceEntry, Profile, Project, SkillGroup};

/// Render the complete HTML document around pre-rendered body markup.
///
/// `body_html` is the hero plus slot shells produced by the composer.
/// Returns a full document including `<!DOCTYPE html>`.
pub fn render_document(title: &str, body_html: &str) -> String {
    let doc = view! {
        <PageDocument title=title.to_string() body_html=body_html.to_string() />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render the hero section (eager, first paint).
pub fn render_hero(profile: &Profile) -> String {
    view! { <HeroSection profile=profile.clone() /> }.to_html()
}

/// Render the About section.
pub fn render_about(profile: &Profile) -> String {
    view! { <AboutSection profile=profile.clone() /> }.to_html()
}

/// Render the Projects section.
pub fn render_projects(projects: &[Project]) -> String {
    view! { <ProjectsSection projects=projects.to_vec() /> }.to_html()
}

/// Render the Skills section.
pub fn render_skills(groups: &[SkillGroup]) -> String {
    view! { <SkillsSection groups=groups.to_vec() /> }.to_html()
}

/// Render the Experience section.
pub fn render_experience(entries: &[ExperienceEntry]) -> String {
    view! { <ExperienceSection entries=entries.to_vec() /> }.to_html()
}

/// Render the Contact section.
pub fn render_contact(contact: &ContactInfo) -> String {
    view! { <ContactSection contact=contact.clone() /> }.to_html()
}

/// Render the About skeleton placeholder.
pub fn render_about_skeleton() -> String {
    view! { <AboutSkeleton /> }.to_html()
}

/// Render the Projects skeleton placeholder.
pub fn render_projects_skeleton() -> String {
    view! { <ProjectsSkeleton /> }.to_html()
}

/// Render the Skills skeleton placeholder.
pub fn render_skills_skeleton() -> String {
    view! { <SkillsSkeleton /> }.to_html()
}

/// Render the Experience skeleton placeholder.
pub fn render_experience_skeleton() -> String {
    view! { <ExperienceSkeleton /> }.to_html()
}

/// Render the Contact skeleton placeholder.
pub fn render_contact_skeleton() -> String {
    view! { <ContactSkeleton /> }.to_html()
}
