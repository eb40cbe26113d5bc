//! Speech model downloads.
//!
//! Whisper models are single-file artifacts fetched over plain HTTPS from
//! the whisper.cpp repository on Hugging Face and stored directly in the
//! cache directory.

use crate::error::{PrefetchError, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const SPEECH_MODEL_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Download URL for a speech model.
///
/// Derived purely from the name, so any requested model produces a fetch
/// attempt whether or not it appears in the catalog.
pub fn speech_model_url(name: &str) -> String {
    format!("{SPEECH_MODEL_BASE_URL}/ggml-{name}.bin")
}

/// Full path of a speech model file inside the cache directory.
///
/// Always returns a path regardless of whether the model is in the catalog.
/// The file may or may not exist on disk.
pub fn speech_model_path(name: &str, cache_dir: &Path) -> PathBuf {
    cache_dir.join(format!("ggml-{name}.bin"))
}

/// Check if a speech model is already present in the cache.
pub fn is_speech_model_installed(name: &str, cache_dir: &Path) -> bool {
    speech_model_path(name, cache_dir).exists()
}

/// Download a speech model into the cache directory.
///
/// Skips the fetch when the file is already present. The body is streamed
/// to a temporary file and renamed into place once complete, so an
/// interrupted download never leaves a half-written model behind.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a
/// non-success status, or the file cannot be written.
pub async fn download_speech_model(name: &str, cache_dir: &Path, progress: bool) -> Result<PathBuf> {
    let path = speech_model_path(name, cache_dir);

    if path.exists() {
        tracing::debug!(model = name, path = %path.display(), "speech model already installed");
        return Ok(path);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let url = speech_model_url(name);
    tracing::debug!(model = name, url = %url, "requesting speech model");

    let client = reqwest::Client::new();
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(PrefetchError::Download {
            name: name.to_string(),
            message: format!("server returned {}", response.status()),
        });
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = if progress {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            // SAFETY: hardcoded template string — always valid
            #[allow(clippy::expect_used)]
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .expect("hardcoded progress bar template")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Stream to a temp file, rename into place once complete
    let temp_path = path.with_extension("tmp");
    let mut stream = response.bytes_stream();
    let mut file = fs::File::create(&temp_path)?;

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                drop(file);
                remove_partial(&temp_path);
                return Err(e.into());
            }
        };

        if let Err(e) = file.write_all(&chunk) {
            drop(file);
            remove_partial(&temp_path);
            return Err(e.into());
        }

        if let Some(ref pb) = pb {
            pb.inc(chunk.len() as u64);
        }
    }

    // Drop the handle before rename
    drop(file);
    fs::rename(&temp_path, &path)?;

    if let Some(pb) = pb {
        pb.finish_with_message("Downloaded");
    }

    tracing::debug!(model = name, path = %path.display(), "speech model installed");
    Ok(path)
}

fn remove_partial(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        tracing::warn!(path = %temp_path.display(), error = %e, "failed to remove partial download");
    }
}
