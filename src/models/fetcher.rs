//! Fetch seam between the orchestrator and the model sources.
//!
//! The orchestrator only sees this trait, so tests can swap in a mock and
//! exercise scheduling behavior without touching the network.

use crate::error::{PrefetchError, Result};
use crate::models::{speech, translation};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

/// Trait for fetching model artifacts into the cache.
#[async_trait::async_trait]
pub trait ModelFetcher: Send + Sync {
    /// Fetch one speech model by catalog name.
    async fn fetch_speech_model(&self, name: &str, cache_dir: &Path) -> Result<()>;

    /// Fetch the artifact set of one translation model.
    async fn fetch_translation_model(
        &self,
        language: &str,
        repo_id: &str,
        cache_dir: &Path,
    ) -> Result<()>;
}

/// Production fetcher backed by plain HTTPS (speech) and the Hugging Face
/// Hub client (translation).
#[derive(Debug, Clone)]
pub struct HubFetcher {
    progress: bool,
}

impl HubFetcher {
    /// Create a fetcher with progress reporting disabled.
    pub fn new() -> Self {
        Self { progress: false }
    }

    /// Enable or disable interactive progress reporting.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

impl Default for HubFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ModelFetcher for HubFetcher {
    async fn fetch_speech_model(&self, name: &str, cache_dir: &Path) -> Result<()> {
        speech::download_speech_model(name, cache_dir, self.progress).await?;
        Ok(())
    }

    async fn fetch_translation_model(
        &self,
        language: &str,
        repo_id: &str,
        cache_dir: &Path,
    ) -> Result<()> {
        translation::download_translation_model(language, repo_id, cache_dir, self.progress).await
    }
}

/// What a [`MockFetcher`] saw for one fetch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    pub kind: FetchKind,
    /// Speech model name or translation language.
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Speech,
    Translation,
}

/// Mock fetcher for testing.
///
/// Records every call, tracks how many fetches overlap, and can be
/// configured to delay, fail, or panic for specific keys.
#[derive(Debug, Default)]
pub struct MockFetcher {
    delay: Option<Duration>,
    fail_keys: HashSet<String>,
    panic_keys: HashSet<String>,
    calls: Mutex<Vec<RecordedFetch>>,
    concurrent: AtomicU32,
    max_concurrent: AtomicU32,
    saw_missing_cache_dir: AtomicBool,
}

impl MockFetcher {
    /// Create a mock where every fetch succeeds immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold each fetch open for `delay` before completing.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Configure fetches for `key` to fail.
    pub fn with_failure(mut self, key: &str) -> Self {
        self.fail_keys.insert(key.to_string());
        self
    }

    /// Configure fetches for `key` to panic.
    pub fn with_panic(mut self, key: &str) -> Self {
        self.panic_keys.insert(key.to_string());
        self
    }

    /// All calls seen so far, in completion-of-recording order.
    pub fn calls(&self) -> Vec<RecordedFetch> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Highest number of fetches that were in flight at the same time.
    pub fn max_concurrency_seen(&self) -> u32 {
        self.max_concurrent.load(Ordering::SeqCst)
    }

    /// Whether any fetch ran before its cache directory existed.
    pub fn saw_missing_cache_dir(&self) -> bool {
        self.saw_missing_cache_dir.load(Ordering::SeqCst)
    }

    async fn run(&self, kind: FetchKind, key: &str, cache_dir: &Path) -> Result<()> {
        if !cache_dir.is_dir() {
            self.saw_missing_cache_dir.store(true, Ordering::SeqCst);
        }

        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedFetch {
                kind,
                key: key.to_string(),
            });

        let current = self.concurrent.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_concurrent.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.concurrent.fetch_sub(1, Ordering::SeqCst);

        if self.panic_keys.contains(key) {
            panic!("mock fetch panic for {key}");
        }
        if self.fail_keys.contains(key) {
            return Err(PrefetchError::Download {
                name: key.to_string(),
                message: "mock fetch failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ModelFetcher for MockFetcher {
    async fn fetch_speech_model(&self, name: &str, cache_dir: &Path) -> Result<()> {
        self.run(FetchKind::Speech, name, cache_dir).await
    }

    async fn fetch_translation_model(
        &self,
        language: &str,
        _repo_id: &str,
        cache_dir: &Path,
    ) -> Result<()> {
        self.run(FetchKind::Translation, language, cache_dir).await
    }
}
