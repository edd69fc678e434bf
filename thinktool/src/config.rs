//! Configuration management for thinktool
//!
//! Limits applied to tool input, loaded from environment variables with
//! sensible defaults:
//!
//! | Variable | Default |
//! |---|---|
//! | `THINKTOOL_MAX_CONTENT_LENGTH` | 50000 |
//! | `THINKTOOL_MAX_TAGS` | 50 |
//! | `THINKTOOL_MAX_TAG_LENGTH` | 100 |

use crate::common::env_loader::EnvLoader;

/// Prefix shared by every thinktool environment variable
pub const ENV_PREFIX: &str = "THINKTOOL";

const DEFAULT_MAX_CONTENT_LENGTH: usize = 50_000;
const DEFAULT_MAX_TAGS: usize = 50;
const DEFAULT_MAX_TAG_LENGTH: usize = 100;

/// Configuration settings for the thinktool server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum length in characters of thought content, appended thoughts and queries
    pub max_content_length: usize,
    /// Maximum number of tags on a single thought
    pub max_tags: usize,
    /// Maximum length in characters of a single tag or tag filter
    pub max_tag_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            max_tags: DEFAULT_MAX_TAGS,
            max_tag_length: DEFAULT_MAX_TAG_LENGTH,
        }
    }
}

impl Config {
    /// Create a configuration from defaults overridden by environment variables
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env_vars();
        tracing::debug!("Loaded configuration: {:?}", config);
        config
    }

    fn apply_env_vars(&mut self) {
        let loader = EnvLoader::new(ENV_PREFIX);
        let positive = |v: &usize| *v > 0;

        self.max_content_length =
            loader.load_validated("MAX_CONTENT_LENGTH", self.max_content_length, positive);
        self.max_tags = loader.load_parsed("MAX_TAGS", self.max_tags);
        self.max_tag_length =
            loader.load_validated("MAX_TAG_LENGTH", self.max_tag_length, positive);
    }
}
