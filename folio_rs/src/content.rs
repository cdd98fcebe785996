//! Content pipeline: JSON files -> typed data -> SSR'd section markup.
//!
//! Each section's content lives in its own JSON file under the content
//! directory, so each slot's load is a genuinely independent unit of
//! deferred work. A missing file, bad JSON, or bad shape surfaces as a
//! [`RenderError::Load`] - a render-phase failure the slot's boundary
//! contains like any other.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use futures::future::FutureExt;
use serde::de::DeserializeOwned;
use tracing::trace;

use section_leptos::types::{ContactInfo, ExperienceEntry, Profile, Project, SkillGroup};

use crate::compose::SectionSpec;
use crate::error::RenderError;
use crate::html::Html;
use crate::slot::{RenderTarget, SectionId, SectionLoader};

/// Content file for a section. Hero and About share `profile.json`.
pub fn content_file(id: SectionId) -> &'static str {
    match id {
        SectionId::Hero | SectionId::About => "profile.json",
        SectionId::Projects => "projects.json",
        SectionId::Skills => "skills.json",
        SectionId::Experience => "experience.json",
        SectionId::Contact => "contact.json",
    }
}

/// Builds section loader thunks over a content directory.
#[derive(Clone, Debug)]
pub struct ContentStore {
    dir: PathBuf,
}

impl ContentStore {
    /// Store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The content directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load and render the hero eagerly.
    ///
    /// The hero sits above every boundary, so its failure is the caller's
    /// to treat as fatal.
    pub async fn hero(&self) -> Result<Html, RenderError> {
        load_section(self.dir.clone(), SectionId::Hero).await
    }

    /// Loader thunk for a section. Re-invocable: every call re-reads the
    /// content file and re-renders.
    pub fn loader(&self, id: SectionId) -> SectionLoader {
        let dir = self.dir.clone();
        Rc::new(move || load_section(dir.clone(), id).boxed_local())
    }

    /// Ready-to-compose spec for a deferred section: this store's loader,
    /// the section's skeleton placeholder, and the given target policy.
    pub fn section_spec(&self, id: SectionId, target: RenderTarget) -> SectionSpec {
        SectionSpec::new(id, skeleton(id), self.loader(id)).with_target(target)
    }
}

/// The skeleton placeholder matching a section's footprint.
pub fn skeleton(id: SectionId) -> Html {
    let markup = match id {
        // hero is never deferred; an empty placeholder keeps this total
        SectionId::Hero => String::new(),
        SectionId::About => section_leptos::render_about_skeleton(),
        SectionId::Projects => section_leptos::render_projects_skeleton(),
        SectionId::Skills => section_leptos::render_skills_skeleton(),
        SectionId::Experience => section_leptos::render_experience_skeleton(),
        SectionId::Contact => section_leptos::render_contact_skeleton(),
    };
    Html::new(markup)
}

async fn load_section(dir: PathBuf, id: SectionId) -> Result<Html, RenderError> {
    trace!(section = %id, "loading content");
    let markup = match id {
        SectionId::Hero => {
            section_leptos::render_hero(&read_json::<Profile>(&dir, id).await?)
        }
        SectionId::About => {
            section_leptos::render_about(&read_json::<Profile>(&dir, id).await?)
        }
        SectionId::Projects => {
            section_leptos::render_projects(&read_json::<Vec<Project>>(&dir, id).await?)
        }
        SectionId::Skills => {
            section_leptos::render_skills(&read_json::<Vec<SkillGroup>>(&dir, id).await?)
        }
        SectionId::Experience => {
            section_leptos::render_experience(&read_json::<Vec<ExperienceEntry>>(&dir, id).await?)
        }
        SectionId::Contact => {
            section_leptos::render_contact(&read_json::<ContactInfo>(&dir, id).await?)
        }
    };
    Ok(Html::new(markup))
}

async fn read_json<T: DeserializeOwned>(dir: &Path, id: SectionId) -> Result<T, RenderError> {
    let path = dir.join(content_file(id));
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| RenderError::load(id, format!("{}: {}", path.display(), err)))?;
    serde_json::from_str(&raw)
        .map_err(|err| RenderError::load(id, format!("{}: {}", path.display(), err)))
}
