//! Configuration file support for folio.
//!
//! Loads optional `folio.toml` from the site root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::slot::{RenderTarget, SectionId};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub site: SiteConfig,
    /// Directory holding the per-section JSON content files
    pub content_dir: PathBuf,
    /// Directory the generated site is written to
    pub out_dir: PathBuf,
    /// Per-section render-target overrides, e.g. `about = "server"`.
    /// Unlisted deferred sections default to `client`.
    pub render_targets: BTreeMap<SectionId, RenderTarget>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            content_dir: PathBuf::from("content"),
            out_dir: PathBuf::from("dist"),
            render_targets: BTreeMap::new(),
        }
    }
}

/// Site-wide settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { title: "Folio".to_string() }
    }
}

impl FolioConfig {
    /// Load config from `folio.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join("folio.toml"))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    warn!("failed to parse {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                warn!("failed to read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Render target for a section. The hero is always a server render;
    /// deferred sections default to client unless overridden.
    pub fn target_for(&self, id: SectionId) -> RenderTarget {
        if !id.is_deferred() {
            return RenderTarget::Server;
        }
        self.render_targets.get(&id).copied().unwrap_or_default()
    }
}
