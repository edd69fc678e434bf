//! Environment variable loading utilities
//!
//! Values that are missing or fail to parse fall back to the supplied default.

use std::env;
use std::str::FromStr;

/// Load an environment variable with type conversion and default
pub fn load_env_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Load an environment variable, keeping the default when the validator rejects it
pub fn load_env_validated<T, F>(key: &str, default: T, validator: F) -> T
where
    T: FromStr + Clone,
    F: Fn(&T) -> bool,
{
    let value = load_env_parsed(key, default.clone());
    if validator(&value) {
        value
    } else {
        tracing::warn!("Ignoring out-of-range value for {}", key);
        default
    }
}

/// Loader for environment variables sharing a common prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a parsed value with default
    pub fn load_parsed<T>(&self, suffix: &str, default: T) -> T
    where
        T: FromStr,
    {
        load_env_parsed(&self.key(suffix), default)
    }

    /// Load a validated value
    pub fn load_validated<T, F>(&self, suffix: &str, default: T, validator: F) -> T
    where
        T: FromStr + Clone,
        F: Fn(&T) -> bool,
    {
        load_env_validated(&self.key(suffix), default, validator)
    }
}
