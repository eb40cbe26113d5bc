//! Cache directory resolution.
//!
//! Models live under the OS application-cache base: `%LOCALAPPDATA%` on
//! Windows, `~/.cache` (or `$XDG_CACHE_HOME`) elsewhere, always joined with
//! `whispa/models`. A relative `.cache` fallback covers environments where
//! no cache base can be determined.

use crate::defaults;
use crate::error::{PrefetchError, Result};
use std::fs;
use std::path::PathBuf;

/// Get the default directory where models are stored.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join(defaults::APP_DIR)
        .join(defaults::MODELS_SUBDIR)
}

/// Resolve the cache directory and make sure it exists.
///
/// Uses `override_dir` when given, the default location otherwise. Missing
/// parent directories are created along the way.
///
/// # Errors
///
/// Returns [`PrefetchError::CacheDir`] when the directory cannot be created.
pub fn ensure_cache_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = override_dir.unwrap_or_else(default_cache_dir);
    fs::create_dir_all(&dir).map_err(|e| PrefetchError::CacheDir {
        path: dir.display().to_string(),
        source: e,
    })?;
    Ok(dir)
}
