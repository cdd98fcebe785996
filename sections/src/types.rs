//! Content data types for the portfolio sections.
//!
//! These types define the data model each section renders from. They're
//! designed to be:
//!
//! - **Serializable** - content lives in plain JSON files, loaded via serde
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - partial content renders fine with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use section_leptos::types::{Profile, Project};
//!
//! let profile = Profile {
//!     name: "Ada Byron".into(),
//!     headline: "Systems engineer".into(),
//!     ..Default::default()
//! };
//!
//! let project = Project {
//!     name: "tracegraph".into(),
//!     description: "Distributed trace visualizer".into(),
//!     tech: vec!["Rust".into(), "WASM".into()],
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Identity and bio content, shared by the Hero and About sections.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    /// Display name shown in the hero heading
    pub name: String,
    /// One-line role/title under the name
    pub headline: String,
    /// Short hero tagline (one sentence)
    pub tagline: String,
    /// Where the person is based, e.g. "Berlin, remote-friendly"
    pub location: String,
    /// About-section paragraphs, in order
    pub about: Vec<String>,
    /// Short bullet highlights for the About section
    pub highlights: Vec<String>,
    /// Optional link to a hosted resume/CV
    pub resume_url: String,
}

/// One portfolio project card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    /// Project name
    pub name: String,
    /// One-paragraph description
    pub description: String,
    /// Technologies used, rendered as tags
    pub tech: Vec<String>,
    /// Source repository URL (empty = not shown)
    pub repo_url: String,
    /// Live demo URL (empty = not shown)
    pub demo_url: String,
    /// Featured projects get the wide card treatment
    pub featured: bool,
}

/// A named group of related skills, e.g. "Languages" or "Infrastructure".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillGroup {
    /// Group heading
    pub title: String,
    /// Skill names within the group
    pub items: Vec<String>,
}

/// One entry in the work-experience timeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExperienceEntry {
    /// Role title, e.g. "Senior Engineer"
    pub role: String,
    /// Employer name
    pub company: String,
    /// Human-readable period, e.g. "2021 - 2024"
    pub period: String,
    /// One-line summary of the role
    pub summary: String,
    /// Achievement bullets
    pub achievements: Vec<String>,
}

/// Contact channels for the Contact section.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactInfo {
    /// Primary email address (gets a copy-to-clipboard button)
    pub email: String,
    /// Closing note above the channels
    pub note: String,
    /// Additional channels (GitHub, LinkedIn, Mastodon, ...)
    pub channels: Vec<ContactChannel>,
}

/// A single external contact channel.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactChannel {
    /// Channel label, e.g. "GitHub"
    pub label: String,
    /// Profile URL
    pub url: String,
    /// Visible handle, e.g. "@ada"
    pub handle: String,
}
