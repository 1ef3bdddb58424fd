//! Configuration file support.
//!
//! Loads optional `codementor.toml` from the working directory, or the file
//! named by `--config`. Every field has a default, so a partial file is fine.

use std::path::{Path, PathBuf};

use codementor_page::PageOptions;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, SiteError};

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "codementor.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub render: RenderSection,
    pub preview: PreviewSection,
}

/// Document-level settings passed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// `lang` attribute of `<html>`
    pub lang: String,
    /// Favicon href
    pub favicon: String,
    /// Play entrance animations
    pub animations: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        let page = PageOptions::default();
        Self {
            lang: page.lang,
            favicon: page.favicon_href,
            animations: page.animations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    /// Output file for `render`
    pub out: PathBuf,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            out: PathBuf::from("dist/index.html"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreviewSection {
    pub host: String,
    /// 0 picks an ephemeral port
    pub port: u16,
}

impl Default for PreviewSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 4173,
        }
    }
}

impl SiteConfig {
    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist and parse. Without one, `codementor.toml`
    /// in `cwd` is used when present; problems with it only log a warning.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::load(cwd)),
        }
    }

    /// Load `codementor.toml` from the given directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(DEFAULT_CONFIG_FILE);
        if !config_path.exists() {
            debug!("no {} found, using defaults", config_path.display());
            return Self::default();
        }

        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        let config = toml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Renderer options, with `--no-animations` taking precedence.
    pub fn page_options(&self, no_animations: bool) -> PageOptions {
        PageOptions {
            lang: self.site.lang.clone(),
            favicon_href: self.site.favicon.clone(),
            animations: self.site.animations && !no_animations,
        }
    }
}
