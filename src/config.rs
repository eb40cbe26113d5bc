use crate::defaults;
use crate::error::{PrefetchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub download: DownloadConfig,
    pub log: LogConfig,
}

/// Download configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DownloadConfig {
    /// Speech models fetched when the CLI does not name any.
    pub models: Vec<String>,
    /// Translation languages fetched when the CLI does not name any.
    pub languages: Vec<String>,
    /// Concurrent download limit.
    pub max_workers: usize,
    /// Cache directory; the OS default when unset.
    pub cache_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Extra log file, appended to in addition to stderr.
    pub file: Option<PathBuf>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            models: defaults::DEFAULT_SPEECH_MODELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            languages: defaults::DEFAULT_LANGUAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_workers: defaults::DEFAULT_MAX_WORKERS,
            cache_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|e| PrefetchError::ConfigParse {
            message: format!("{}: {}", path.display(), e),
        })?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Panics on invalid TOML so a corrupt file cannot be silently ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(PrefetchError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => panic!("Failed to load config from {}: {}", path.display(), e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - WHISPA_CACHE_DIR → download.cache_dir
    /// - WHISPA_MAX_WORKERS → download.max_workers
    /// - WHISPA_LOG_FILE → log.file
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var("WHISPA_CACHE_DIR")
            && !dir.is_empty()
        {
            self.download.cache_dir = Some(PathBuf::from(dir));
        }

        // Unparsable worker counts are ignored rather than erroring out.
        if let Ok(workers) = std::env::var("WHISPA_MAX_WORKERS")
            && let Ok(workers) = workers.parse::<usize>()
        {
            self.download.max_workers = workers;
        }

        if let Ok(file) = std::env::var("WHISPA_LOG_FILE")
            && !file.is_empty()
        {
            self.log.file = Some(PathBuf::from(file));
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/whispa/prefetch.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join(defaults::APP_DIR)
            .join("prefetch.toml")
    }
}
