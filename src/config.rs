//! Site configuration.
//!
//! Loads `config.toml` from the working directory. The file is optional and
//! sparse: defaults apply to anything unspecified, and unknown keys are
//! rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content/posts"  # Root holding one subdirectory per section
//! ```
//!
//! The configured root is threaded into [`crate::store::ContentStore`]
//! explicitly rather than read from a global, so tests (and the `--source`
//! flag) can point the pipeline at any tree.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Root directory holding one subdirectory per section.
    pub content_root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
        }
    }
}

fn default_content_root() -> String {
    "content/posts".to_string()
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_root must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load `config.toml` from `dir`, falling back to defaults if absent.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join("config.toml");
    let config = if path.exists() {
        toml::from_str(&fs::read_to_string(&path)?)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    "\
# simple-press configuration
# All options are optional - defaults shown below

# Root directory holding one subdirectory per section
# (science/, life/, poetry/)
content_root = \"content/posts\"
"
    .to_string()
}
