//! End-to-end prefetch runs through the public crate API.
//!
//! These tests drive `download_all` the way `main` does, with a mock fetcher
//! standing in for the network. One test uses the real `HubFetcher` against
//! a pre-seeded cache, which resolves without any network access.

use std::sync::Arc;
use std::time::Duration;
use whispa_prefetch::models::fetcher::{FetchKind, MockFetcher};
use whispa_prefetch::{HubFetcher, PrefetchOptions, download_all};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_default_shaped_run_fetches_all_requested() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(MockFetcher::new());
    let options = PrefetchOptions {
        speech_models: strings(&["tiny", "base", "small"]),
        languages: strings(&["English", "Spanish"]),
        cache_dir: Some(tmp.path().to_path_buf()),
        max_workers: 2,
    };

    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(ok, "all mock fetches succeed, so the run should too");

    let calls = fetcher.calls();
    assert_eq!(calls.len(), 5, "three speech models plus two languages");

    let speech: Vec<&str> = calls
        .iter()
        .filter(|c| c.kind == FetchKind::Speech)
        .map(|c| c.key.as_str())
        .collect();
    let translation: Vec<&str> = calls
        .iter()
        .filter(|c| c.kind == FetchKind::Translation)
        .map(|c| c.key.as_str())
        .collect();

    for name in ["tiny", "base", "small"] {
        assert!(speech.contains(&name), "missing speech fetch for {}", name);
    }
    for language in ["English", "Spanish"] {
        assert!(
            translation.contains(&language),
            "missing translation fetch for {}",
            language
        );
    }
}

#[tokio::test]
async fn test_one_model_one_language_makes_two_fetches() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(MockFetcher::new());
    let options = PrefetchOptions {
        speech_models: strings(&["tiny"]),
        languages: strings(&["English"]),
        cache_dir: Some(tmp.path().to_path_buf()),
        max_workers: 2,
    };

    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(ok);

    let calls = fetcher.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().any(|c| c.kind == FetchKind::Speech));
    assert!(calls.iter().any(|c| c.kind == FetchKind::Translation));
}

#[tokio::test]
async fn test_unknown_language_produces_no_fetch() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(MockFetcher::new());
    let options = PrefetchOptions {
        speech_models: strings(&["tiny"]),
        languages: strings(&["Klingon"]),
        cache_dir: Some(tmp.path().to_path_buf()),
        max_workers: 2,
    };

    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(ok, "an unknown language is skipped, not failed");

    let calls = fetcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].kind, FetchKind::Speech);
    assert_eq!(calls[0].key, "tiny");
}

#[tokio::test]
async fn test_unrecognized_speech_name_still_fetched() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(MockFetcher::new());
    let options = PrefetchOptions {
        speech_models: strings(&["enormous"]),
        languages: vec![],
        cache_dir: Some(tmp.path().to_path_buf()),
        max_workers: 2,
    };

    // Speech names are forwarded as-is; only languages are catalog-checked.
    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(ok);

    let calls = fetcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].key, "enormous");
}

#[tokio::test]
async fn test_failure_does_not_stop_other_downloads() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(MockFetcher::new().with_failure("Spanish"));
    let options = PrefetchOptions {
        speech_models: strings(&["tiny", "base"]),
        languages: strings(&["English", "Spanish"]),
        cache_dir: Some(tmp.path().to_path_buf()),
        max_workers: 2,
    };

    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(!ok, "one failed fetch should fail the whole run");
    assert_eq!(
        fetcher.calls().len(),
        4,
        "the failing fetch must not cancel its siblings"
    );
}

#[tokio::test]
async fn test_worker_limit_holds_across_model_kinds() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(MockFetcher::new().with_delay(Duration::from_millis(30)));
    let options = PrefetchOptions {
        speech_models: strings(&["tiny", "base", "small"]),
        languages: strings(&["English", "French", "German"]),
        cache_dir: Some(tmp.path().to_path_buf()),
        max_workers: 2,
    };

    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(ok);
    assert!(
        fetcher.max_concurrency_seen() <= 2,
        "saw {} fetches in flight with a limit of 2",
        fetcher.max_concurrency_seen()
    );
}

#[tokio::test]
async fn test_cache_dir_created_before_first_fetch() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("whispa").join("models");
    let fetcher = Arc::new(MockFetcher::new());
    let options = PrefetchOptions {
        speech_models: strings(&["tiny"]),
        languages: strings(&["English"]),
        cache_dir: Some(nested.clone()),
        max_workers: 2,
    };

    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(ok);
    assert!(nested.is_dir());
    assert!(
        !fetcher.saw_missing_cache_dir(),
        "no fetch should start before the cache directory exists"
    );
}

#[tokio::test]
async fn test_empty_request_succeeds_without_fetches() {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(MockFetcher::new());
    let options = PrefetchOptions {
        speech_models: vec![],
        languages: vec![],
        cache_dir: Some(tmp.path().to_path_buf()),
        max_workers: 2,
    };

    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(ok, "nothing to do is a success");
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn test_cached_speech_models_resolve_offline() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("ggml-tiny.bin"), b"cached weights").unwrap();
    std::fs::write(tmp.path().join("ggml-base.bin"), b"cached weights").unwrap();

    // The real fetcher short-circuits on present files, so this run
    // never touches the network.
    let fetcher = Arc::new(HubFetcher::new());
    let options = PrefetchOptions {
        speech_models: strings(&["tiny", "base"]),
        languages: vec![],
        cache_dir: Some(tmp.path().to_path_buf()),
        max_workers: 2,
    };

    let ok = download_all(&fetcher, &options).await.unwrap();
    assert!(ok, "cached models should resolve without downloading");
}
