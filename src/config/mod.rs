//! Sync configuration.
//!
//! Loaded from the `[sync]` table of a TOML file. Every field is optional.
//!
//! # Example
//!
//! ```toml
//! [sync]
//! inject_changes = true   # false: every file change reloads the page
//! bust_param = "rel"      # query key of the cache-busting suffix
//! verbose = false         # print debug logs
//! ```

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Characters that would break the `?<param>=<stamp>` suffix.
const RESERVED: &[char] = &['?', '&', '=', '#'];

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Patch stylesheets and images in place.
    /// - `true` (default): targeted patch when possible
    /// - `false`: every change is a full page reload
    pub inject_changes: bool,

    /// Query parameter name of the cache-busting suffix.
    pub bust_param: String,

    /// Print debug logs.
    pub verbose: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            inject_changes: true,
            bust_param: "rel".to_string(),
            verbose: false,
        }
    }
}

/// Top level of the config file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    sync: SyncConfig,
}

impl SyncConfig {
    /// Parse and validate TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.sync.validate()?;
        Ok(file.sync)
    }

    /// Load from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&content)
    }

    /// Load from a file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            crate::debug!("config"; "{} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bust_param.is_empty() {
            return Err(ConfigError::Validation(
                "sync.bust_param must not be empty".to_string(),
            ));
        }
        if self.bust_param.contains(RESERVED) {
            return Err(ConfigError::Validation(format!(
                "sync.bust_param `{}` must not contain any of ? & = #",
                self.bust_param
            )));
        }
        Ok(())
    }
}
