//! Configuration loading for airlink.
//!
//! The config file is TOML at `~/.airlink/config.toml`, or wherever
//! `AIRLINK_CONFIG` points:
//!
//! ```toml
//! [links]
//! forward_duplicates = "collapse"   # default: "preserve"
//! ```
//!
//! Raw structs keep every field optional; [`AirlinkConfig::link_settings`]
//! resolves them into the validated [`LinkSettings`].

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

use airlink_types::{ForwardDuplicates, LinkSettings, UnknownForwardDuplicates};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "AIRLINK_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct AirlinkConfig {
    pub links: Option<LinksConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinksConfig {
    pub forward_duplicates: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] TomlError),
    #[error(transparent)]
    ForwardDuplicates(#[from] UnknownForwardDuplicates),
}

impl AirlinkConfig {
    /// Load the user's config file.
    ///
    /// A missing file is not an error. Unreadable or malformed files are
    /// logged and treated as absent.
    pub fn load() -> Option<Self> {
        Self::load_at(&config_path()?)
    }

    fn load_at(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match Self::load_from(path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to load config at {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn link_settings(&self) -> Result<LinkSettings, ConfigError> {
        let forward_duplicates = match self
            .links
            .as_ref()
            .and_then(|links| links.forward_duplicates.as_deref())
        {
            Some(raw) => raw.parse::<ForwardDuplicates>()?,
            None => ForwardDuplicates::default(),
        };
        Ok(LinkSettings::new(forward_duplicates))
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

/// Settings from the user's config, or the defaults if there is none or it
/// does not resolve.
#[must_use]
pub fn load_link_settings() -> LinkSettings {
    resolve_link_settings(AirlinkConfig::load().as_ref())
}

fn resolve_link_settings(config: Option<&AirlinkConfig>) -> LinkSettings {
    let Some(config) = config else {
        return LinkSettings::default();
    };
    config.link_settings().unwrap_or_else(|err| {
        tracing::warn!("Ignoring link settings: {}", err);
        LinkSettings::default()
    })
}

fn config_path() -> Option<PathBuf> {
    config_path_from(env::var_os(CONFIG_PATH_ENV), dirs::home_dir())
}

/// An empty override counts as unset.
fn config_path_from(explicit: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(explicit) = explicit.filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    home.map(|home| home.join(".airlink").join("config.toml"))
}
