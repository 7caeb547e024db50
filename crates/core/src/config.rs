//! Configuration via `autolink.toml`
//!
//! All options have defaults, so an empty file (or no file at all) yields a
//! working configuration. The engine never writes configuration back.

use crate::error::{AutolinkError, AutolinkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Config file name looked up in the vault root.
pub const CONFIG_FILE_NAME: &str = "autolink.toml";

/// Default trailing-edge debounce window for automaton rebuilds.
pub const DEFAULT_REBUILD_DELAY_MS: u64 = 1000;

/// Index and matching configuration loaded from `autolink.toml`.
///
/// # Example
///
/// ```toml
/// enable_stemming = true
/// match_tags = false
/// keywords_filter = ["todo", "draft"]
/// rebuild_delay_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutolinkConfig {
    /// Normalize tokens to stems before indexing and matching.
    #[serde(default = "default_true")]
    pub enable_stemming: bool,
    /// Let tag-derived keywords participate in matching.
    #[serde(default = "default_true")]
    pub match_tags: bool,
    /// Keywords that are never inserted into the store.
    #[serde(default)]
    pub keywords_filter: Vec<String>,
    /// Debounce window before a settled keyword set triggers a rebuild.
    #[serde(default = "default_rebuild_delay_ms")]
    pub rebuild_delay_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_rebuild_delay_ms() -> u64 {
    DEFAULT_REBUILD_DELAY_MS
}

impl Default for AutolinkConfig {
    fn default() -> Self {
        Self {
            enable_stemming: true,
            match_tags: true,
            keywords_filter: Vec::new(),
            rebuild_delay_ms: DEFAULT_REBUILD_DELAY_MS,
        }
    }
}

impl AutolinkConfig {
    /// Debounce window as a `Duration`.
    pub fn rebuild_delay(&self) -> Duration {
        Duration::from_millis(self.rebuild_delay_ms)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Autolink configuration
#
# Match inflected forms of keywords ("searching" matches the note "Search").
# Turn this off if you are getting many false positives.
enable_stemming = true

# Let tags participate as keywords.
match_tags = true

# Keywords that should never be suggested.
keywords_filter = []

# Milliseconds to wait for edits to settle before rebuilding the matcher.
rebuild_delay_ms = 1000
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::Config` if the text is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(content: &str) -> AutolinkResult<Self> {
        toml::from_str(content)
            .map_err(|e| AutolinkError::config(format!("failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> AutolinkResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AutolinkError::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }
}
