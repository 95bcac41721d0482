//! User configuration.
//!
//! An optional TOML file can pin the theme and locale so they do not have to
//! be passed on every launch. Lookup order is CLI flag, then config file, then
//! built-in default; the merge itself happens in `main`.

use crate::error::{Result, UpliftError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name under the platform config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application directory under the platform config directory.
const CONFIG_DIR: &str = "uplift";

/// User-configurable settings. All fields are optional; absent values fall
/// through to CLI defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Theme name as accepted by `ColorTheme::by_name`
    pub theme: Option<String>,
    /// Locale tag for the string table
    pub locale: Option<String>,
}

impl AppConfig {
    /// Load from the platform config directory. A missing file or an
    /// unavailable config directory yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. The file must exist and parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            UpliftError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: AppConfig = toml::from_str(&raw).map_err(|e| {
            UpliftError::config(format!("cannot parse {}: {e}", path.display()))
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Default location: `<config dir>/uplift/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}
