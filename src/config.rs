//! Optional `ohmydoc.yml` settings

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SETTINGS_FILE: &str = "ohmydoc.yml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Template used when neither the command line nor the environment picks one
    pub template: Option<String>,
    /// Default output path for `render`
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Load settings for the current directory.
    ///
    /// An explicit path must exist. Without one, a missing `ohmydoc.yml`
    /// means default settings.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::discover_in(Path::new("."), explicit)
    }

    pub fn discover_in(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                bail!("Settings file not found: {}", path.display());
            }
            return Self::load(path);
        }

        let path = dir.join(SETTINGS_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            debug!("No {SETTINGS_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!(path = %path.display(), "Loading settings");
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
