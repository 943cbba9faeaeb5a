//! Configuration loading for tidy.
//!
//! Operation defaults are read from TOML:
//!
//! ```toml
//! [string]
//! truncate_suffix = "..."
//! keep_spaces = true
//!
//! [list]
//! preserve_order = true
//!
//! [dict]
//! deep_merge = false
//! ```
//!
//! Every table and field is optional. The raw structs below mirror the file
//! and stay private; callers only ever see the resolved [`OpsDefaults`].

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tidy_types::{MergeDepth, OpsDefaults, OrderPolicy, SpacePolicy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    string: RawStringConfig,
    #[serde(default)]
    list: RawListConfig,
    #[serde(default)]
    dict: RawDictConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStringConfig {
    truncate_suffix: Option<String>,
    keep_spaces: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawListConfig {
    preserve_order: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDictConfig {
    deep_merge: Option<bool>,
}

impl RawConfig {
    fn resolve(self) -> Result<OpsDefaults, ConfigError> {
        let base = OpsDefaults::default();
        let suffix = self
            .string
            .truncate_suffix
            .unwrap_or_else(|| base.truncate_suffix().to_string());
        if suffix.chars().any(char::is_control) {
            return Err(ConfigError::Invalid(
                "string.truncate_suffix must not contain control characters".to_string(),
            ));
        }
        Ok(OpsDefaults::new(
            suffix,
            self.string
                .keep_spaces
                .map_or(base.space_policy(), SpacePolicy::from),
            self.list
                .preserve_order
                .map_or(base.order_policy(), OrderPolicy::from),
            self.dict
                .deep_merge
                .map_or(base.merge_depth(), MergeDepth::from),
        ))
    }
}

/// Parse operation defaults from TOML text.
pub fn load_from_str(text: &str) -> Result<OpsDefaults, ConfigError> {
    let raw: RawConfig = toml::from_str(text)?;
    raw.resolve()
}

/// Load operation defaults from a TOML file.
///
/// A missing file is not an error: the built-in defaults are used and a
/// warning is logged. Any other read failure is reported.
pub fn load_from_path(path: &Path) -> Result<OpsDefaults, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "config file not found; using defaults");
            return Ok(OpsDefaults::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let defaults = load_from_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(defaults)
}
