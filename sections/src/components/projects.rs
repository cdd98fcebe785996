//! Projects section - card grid with featured-project treatment.

use leptos::prelude::*;

use crate::components::{Icon, ICON_FOLDER};
use crate::types::Project;

/// Grid of project cards. Featured projects span the full row.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <div class="projects">
            <p class="section-eyebrow">"Projects"</p>
            <h2 class="section-title">"Selected work"</h2>
            <div class="projects-grid">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// One project card: name, description, tech tags, repo/demo links.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let class = if project.featured { "project-card featured" } else { "project-card" };

    let repo = if project.repo_url.is_empty() {
        view! { "" }.into_any()
    } else {
        view! { <a href=project.repo_url.clone()>"Source"</a> }.into_any()
    };
    let demo = if project.demo_url.is_empty() {
        view! { "" }.into_any()
    } else {
        view! { <a href=project.demo_url.clone()>"Live demo"</a> }.into_any()
    };

    view! {
        <article class=class>
            <h3 class="project-name">
                <Icon path=ICON_FOLDER class="icon-sm" />
                " "
                {project.name}
            </h3>
            <p class="project-desc">{project.description}</p>
            <div class="project-tags">
                {project
                    .tech
                    .into_iter()
                    .map(|tag| view! { <span>{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="project-links">{repo}{demo}</div>
        </article>
    }
}
