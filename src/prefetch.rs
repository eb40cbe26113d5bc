//! Concurrent model prefetch orchestration.
//!
//! Turns the requested model and language lists into fetch tasks, runs them
//! on the Tokio runtime with a semaphore bounding how many are in flight,
//! and folds every outcome into a single success flag. A failing task is
//! logged and counted; it never stops the other downloads.

use crate::cache;
use crate::defaults;
use crate::error::Result;
use crate::models::catalog;
use crate::models::fetcher::ModelFetcher;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// One unit of download work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTask {
    Speech {
        name: String,
    },
    Translation {
        language: String,
        repo_id: &'static str,
    },
}

/// Options for a prefetch run.
#[derive(Debug, Clone)]
pub struct PrefetchOptions {
    /// Speech models to fetch, by catalog name.
    pub speech_models: Vec<String>,
    /// Languages whose translation models to fetch.
    pub languages: Vec<String>,
    /// Cache directory override; the OS default when `None`.
    pub cache_dir: Option<PathBuf>,
    /// Maximum number of downloads in flight; values below 1 count as 1.
    pub max_workers: usize,
}

impl Default for PrefetchOptions {
    fn default() -> Self {
        Self {
            speech_models: defaults::DEFAULT_SPEECH_MODELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            languages: defaults::DEFAULT_LANGUAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            cache_dir: None,
            max_workers: defaults::DEFAULT_MAX_WORKERS,
        }
    }
}

/// Build the task list for a prefetch run.
///
/// Every requested speech model becomes a task, catalog member or not;
/// unknown names simply fail at download time. Languages without a catalog
/// entry produce no task.
pub fn plan_tasks(speech_models: &[String], languages: &[String]) -> Vec<FetchTask> {
    let mut tasks = Vec::with_capacity(speech_models.len() + languages.len());

    for name in speech_models {
        tasks.push(FetchTask::Speech { name: name.clone() });
    }

    for language in languages {
        match catalog::get_translation_model(language) {
            Some(info) => tasks.push(FetchTask::Translation {
                language: language.clone(),
                repo_id: info.repo_id,
            }),
            None => {
                tracing::debug!(language = %language, "no translation model for language, skipping");
            }
        }
    }

    tasks
}

/// Download all requested models with bounded concurrency.
///
/// Ensures the cache directory exists, then runs one task per model with at
/// most `max_workers` downloads in flight. Returns `Ok(true)` only when
/// every task succeeded; an empty request is a success. Task failures and
/// panics are contained per task and land in the returned flag, so after
/// setup this function does not error.
///
/// # Errors
///
/// Returns an error only when the cache directory cannot be created.
pub async fn download_all<F>(fetcher: &Arc<F>, options: &PrefetchOptions) -> Result<bool>
where
    F: ModelFetcher + ?Sized + 'static,
{
    let cache_dir = cache::ensure_cache_dir(options.cache_dir.clone())?;
    let tasks = plan_tasks(&options.speech_models, &options.languages);

    if tasks.is_empty() {
        tracing::info!("nothing to download");
        return Ok(true);
    }

    let max_workers = options.max_workers.max(1);
    tracing::info!(
        tasks = tasks.len(),
        max_workers,
        cache_dir = %cache_dir.display(),
        "starting model prefetch"
    );

    let semaphore = Arc::new(Semaphore::new(max_workers));
    let mut handles = Vec::with_capacity(tasks.len());

    for task in tasks {
        let permit = semaphore.clone().acquire_owned().await;
        let fetcher = Arc::clone(fetcher);
        let cache_dir = cache_dir.clone();

        handles.push(tokio::spawn(async move {
            let _permit = permit; // Hold permit until done
            run_task(fetcher.as_ref(), &task, &cache_dir).await
        }));
    }

    let mut success = true;
    for handle in handles {
        let ok = match handle.await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!(error = %e, "download task panicked");
                false
            }
        };
        success &= ok;
    }

    if success {
        tracing::info!("all models downloaded");
    } else {
        tracing::warn!("some model downloads failed");
    }
    Ok(success)
}

async fn run_task<F>(fetcher: &F, task: &FetchTask, cache_dir: &std::path::Path) -> bool
where
    F: ModelFetcher + ?Sized,
{
    match task {
        FetchTask::Speech { name } => {
            if let Some(info) = catalog::get_speech_model(name) {
                tracing::info!(model = %name, size_mb = info.size_mb, "downloading speech model");
            } else {
                tracing::info!(model = %name, "downloading speech model");
            }
            match fetcher.fetch_speech_model(name, cache_dir).await {
                Ok(()) => {
                    tracing::info!(model = %name, "speech model ready");
                    true
                }
                Err(e) => {
                    tracing::error!(model = %name, error = %e, "speech model download failed");
                    false
                }
            }
        }
        FetchTask::Translation { language, repo_id } => {
            tracing::info!(language = %language, repo = repo_id, "downloading translation model");
            match fetcher
                .fetch_translation_model(language, repo_id, cache_dir)
                .await
            {
                Ok(()) => {
                    tracing::info!(language = %language, "translation model ready");
                    true
                }
                Err(e) => {
                    tracing::error!(language = %language, error = %e, "translation model download failed");
                    false
                }
            }
        }
    }
}
