//! Leptos UI components for the portfolio page.
//!
//! Each component is a Leptos `#[component]` function rendered server-side
//! to static HTML. The composer in the `folio` core decides *when* each
//! section renders (eager hero, deferred everything else); these components
//! only decide *what* a section looks like.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── HeroSection            (eager, first paint)
//! ├── AboutSection           (deferred; AboutSkeleton meanwhile)
//! ├── ProjectsSection        (deferred; ProjectsSkeleton meanwhile)
//! │   └── ProjectCard
//! ├── SkillsSection          (deferred; SkillsSkeleton meanwhile)
//! ├── ExperienceSection      (deferred; ExperienceSkeleton meanwhile)
//! └── ContactSection         (deferred; ContactSkeleton meanwhile)
//! ```

mod about;
mod contact;
mod document;
mod experience;
mod hero;
mod icons;
mod projects;
mod skeletons;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use document::PageDocument;
pub use experience::ExperienceSection;
pub use hero::HeroSection;
pub use icons::{Icon, ICON_FOLDER, ICON_LIGHTNING, ICON_TERMINAL, ICON_WARNING_CIRCLE};
pub use projects::{ProjectCard, ProjectsSection};
pub use skeletons::{
    AboutSkeleton, ContactSkeleton, ExperienceSkeleton, ProjectsSkeleton, SkillsSkeleton,
};
pub use skills::SkillsSection;
