//! Configuration management for altfeed.
//!
//! Configuration is read from `~/.config/altfeed/config.toml` (or the path
//! given with `--config`). A missing default file means built-in defaults;
//! nothing is written to disk.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::DEFAULT_WIDTH;

pub const DEFAULT_FEED_URL: &str = "https://xkcd.com/rss.xml";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub output: OutputConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Column to wrap alt text at
    pub width: usize,
    /// Split words longer than `width` instead of letting them overflow
    pub hard_wrap: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            hard_wrap: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("altfeed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. The file must exist.
    /// Missing fields in the file use default values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/altfeed/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("altfeed").join("config.toml"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.feed.url, "https://xkcd.com/rss.xml");
        assert_eq!(config.output.width, 80);
        assert!(!config.output.hard_wrap);
        assert_eq!(config.http.timeout_secs, 10);
        assert!(config.http.user_agent.starts_with("altfeed/"));
    }

    #[test]
    fn test_partial_config() {
        let content = r#"
[output]
hard_wrap = true
"#;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom value
        assert!(config.output.hard_wrap);
        // Default values
        assert_eq!(config.output.width, 80);
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.output.width, 80);
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[feed]
url = "https://example.com/rss.xml"

[output]
width = 60

[http]
timeout_secs = 3
user_agent = "test-agent"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.feed.url, "https://example.com/rss.xml");
        assert_eq!(config.output.width, 60);
        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.http.user_agent, "test-agent");
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nwidth = \"wide\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
