//! # folio CLI
//!
//! Renders the portfolio site:
//!
//! ```bash
//! folio build                       # content/ + folio.toml -> dist/
//! folio build --content c --out o   # explicit directories
//! folio check                       # validate every section renders
//! ```
//!
//! `build` inlines server-target sections and emits client-target sections
//! as skeletons plus `dist/sections/<slug>.html` fragments that the inline
//! loader script swaps in on the client.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use folio::{
    slot_shell, ContentStore, FolioConfig, PageComposer, RenderTarget, SectionId, SlotState,
};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Progressive static renderer for a personal portfolio site")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the site into the output directory
    Build {
        /// Site root (where folio.toml lives)
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Content directory (overrides folio.toml)
        #[arg(long)]
        content: Option<PathBuf>,
        /// Output directory (overrides folio.toml)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate that every content file loads and renders
    Check {
        /// Site root (where folio.toml lives)
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Content directory (overrides folio.toml)
        #[arg(long)]
        content: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build { root, content, out } => build(root, content, out).await,
        Command::Check { root, content } => check(root, content).await,
    }
}

async fn build(root: PathBuf, content: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let config = FolioConfig::load(&root);
    let content_dir = content.unwrap_or_else(|| root.join(&config.content_dir));
    let out_dir = out.unwrap_or_else(|| root.join(&config.out_dir));

    let store = ContentStore::new(&content_dir);

    // The hero sits above every boundary; its failure is fatal to the page.
    let hero = store
        .hero()
        .await
        .with_context(|| format!("hero failed to render from {}", content_dir.display()))?;

    let mut composer = PageComposer::new(hero);
    for id in SectionId::DEFERRED {
        composer.add_section(
            store
                .section_spec(id, config.target_for(id))
                .with_observer(|err, diag| error!(slot = %diag.slot_path, %err, "section render failure")),
        );
    }

    composer.mount();
    composer.settle().await;

    let fragments_dir = out_dir.join("sections");
    fs::create_dir_all(&fragments_dir)
        .with_context(|| format!("creating {}", fragments_dir.display()))?;

    let mut body = String::new();
    body.push_str(slot_shell(SectionId::Hero, composer.hero(), None).as_str());

    for id in SectionId::DEFERRED {
        match config.target_for(id) {
            RenderTarget::Server => {
                // inline the settled view: content, or the fallback panel
                // if this section's load failed
                let inner = composer.slot_view(id).unwrap_or_default();
                body.push_str(slot_shell(id, &inner, None).as_str());
            }
            RenderTarget::Client => {
                let fragment = composer.slot_view(id).unwrap_or_default();
                let fragment_path = fragments_dir.join(format!("{}.html", id.slug()));
                fs::write(&fragment_path, fragment.as_str())
                    .with_context(|| format!("writing {}", fragment_path.display()))?;

                let skeleton = folio::content::skeleton(id);
                let src = format!("sections/{}.html", id.slug());
                body.push_str(slot_shell(id, &skeleton, Some(&src)).as_str());
            }
        }

        if let Some(slot) = composer.slot(id) {
            if let SlotState::Failed(err) = slot.state() {
                warn!(section = %id, %err, "section shipped with fallback panel");
            }
        }
    }

    let html = section_leptos::render_document(&config.site.title, &body);
    let index_path = out_dir.join("index.html");
    fs::write(&index_path, &html).with_context(|| format!("writing {}", index_path.display()))?;

    info!(
        index = %index_path.display(),
        bytes = html.len(),
        "site rendered"
    );
    Ok(())
}

async fn check(root: PathBuf, content: Option<PathBuf>) -> Result<()> {
    let config = FolioConfig::load(&root);
    let content_dir = content.unwrap_or_else(|| root.join(&config.content_dir));
    let store = ContentStore::new(&content_dir);

    let mut failures = 0usize;
    for id in SectionId::PAGE_ORDER {
        match (store.loader(id))().await {
            Ok(html) => info!(section = %id, bytes = html.as_str().len(), "ok"),
            Err(err) => {
                failures += 1;
                error!(section = %id, %err, "failed");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} section(s) failed to render");
    }
    info!("all sections render");
    Ok(())
}
