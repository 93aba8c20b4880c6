//! Configuration file support.
//!
//! Loads an optional `e9th.toml`. Command-line flags override file values.

use std::path::{Path, PathBuf};

use e9th_site::{LayoutContext, PageOptions};
use serde::Deserialize;
use thiserror::Error;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "e9th.toml";

/// Output directory when neither the file nor the flags set one.
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub build: BuildSection,
}

/// Document metadata
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub title: Option<String>,
    pub description: Option<String>,
    pub lang: Option<String>,
}

/// Static build settings
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSection {
    /// Directory receiving `index.html`
    pub out_dir: Option<PathBuf>,
    /// Width used to classify the prerendered viewport
    pub viewport_width: Option<u32>,
    /// Initial sidebar flag baked into the shell
    pub sidebar_open: bool,
}

impl SiteConfig {
    /// Load from an explicit path, or from `e9th.toml` if present.
    ///
    /// An explicit path must exist; the implicit file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Page options with file values applied over the defaults.
    pub fn page_options(&self, viewport_width: Option<u32>) -> PageOptions {
        let defaults = PageOptions::default();
        let mut layout = LayoutContext {
            sidebar_open: self.build.sidebar_open,
            ..LayoutContext::default()
        };
        if let Some(width) = viewport_width.or(self.build.viewport_width) {
            layout = layout.with_width(width);
        }

        PageOptions {
            title: self.site.title.clone().unwrap_or(defaults.title),
            description: self.site.description.clone().unwrap_or(defaults.description),
            lang: self.site.lang.clone().unwrap_or(defaults.lang),
            layout,
        }
    }

    pub fn out_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.build.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}
