//! Translation model downloads.
//!
//! Helsinki-NLP models are multi-file artifacts resolved through the
//! Hugging Face Hub client, with the hub cache redirected into the app's
//! cache directory. The hub client manages its own on-disk layout and skips
//! files it has already fetched.

use crate::error::{PrefetchError, Result};
use hf_hub::api::sync::ApiBuilder;
use std::path::{Path, PathBuf};

/// Files fetched for every translation model: the tokenizer set plus the
/// generation model weights.
pub const TRANSLATION_ARTIFACTS: &[&str] = &[
    "config.json",
    "tokenizer_config.json",
    "vocab.json",
    "source.spm",
    "target.spm",
    "pytorch_model.bin",
];

/// Directory the hub client uses for a repository inside the cache.
pub fn translation_model_dir(repo_id: &str, cache_dir: &Path) -> PathBuf {
    cache_dir.join(format!("models--{}", repo_id.replace('/', "--")))
}

/// Check if a translation model has a cache entry.
///
/// Presence of the repository directory means the hub client has fetched it
/// at least once; per-file completeness is the client's concern.
pub fn is_translation_model_installed(repo_id: &str, cache_dir: &Path) -> bool {
    translation_model_dir(repo_id, cache_dir).exists()
}

/// Download the tokenizer and generation-model artifacts for a language.
///
/// The hub client is synchronous, so the fetch runs on the blocking thread
/// pool.
///
/// # Errors
///
/// Returns an error if the hub API cannot be initialized or any artifact
/// fails to resolve.
pub async fn download_translation_model(
    language: &str,
    repo_id: &str,
    cache_dir: &Path,
    progress: bool,
) -> Result<()> {
    let language = language.to_string();
    let repo_id = repo_id.to_string();
    let cache_dir = cache_dir.to_path_buf();

    tokio::task::spawn_blocking(move || fetch_artifacts(&language, &repo_id, &cache_dir, progress))
        .await
        .map_err(|e| PrefetchError::Other(format!("translation download task failed: {e}")))?
}

fn fetch_artifacts(language: &str, repo_id: &str, cache_dir: &Path, progress: bool) -> Result<()> {
    let api = ApiBuilder::new()
        .with_cache_dir(cache_dir.to_path_buf())
        .with_progress(progress)
        .build()
        .map_err(|e| PrefetchError::Other(format!("hub API init: {e}")))?;
    let repo = api.model(repo_id.to_string());

    for filename in TRANSLATION_ARTIFACTS {
        let path = repo.get(filename).map_err(|e| PrefetchError::Download {
            name: language.to_string(),
            message: format!("{filename}: {e}"),
        })?;
        tracing::debug!(language, repo = repo_id, file = filename, path = %path.display(), "artifact resolved");
    }

    Ok(())
}
