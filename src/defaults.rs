//! Default configuration constants for whispa-prefetch.
//!
//! This module provides shared constants used by the CLI and the config
//! layer to ensure consistency and eliminate duplication.

/// Speech models fetched when none are requested.
///
/// The three smallest variants cover the quality/latency range most users
/// pick from on first run; medium and large are opt-in.
pub const DEFAULT_SPEECH_MODELS: &[&str] = &["tiny", "base", "small"];

/// Translation languages fetched when none are requested.
pub const DEFAULT_LANGUAGES: &[&str] = &["English", "Spanish"];

/// Default number of concurrent downloads.
///
/// Two parallel fetches keep a typical connection busy without starving
/// either transfer. The large models are bandwidth-bound, not count-bound.
pub const DEFAULT_MAX_WORKERS: usize = 2;

/// Application directory name under the OS cache base.
pub const APP_DIR: &str = "whispa";

/// Subdirectory of the app cache that holds downloaded models.
pub const MODELS_SUBDIR: &str = "models";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;

    #[test]
    fn default_models_exist_in_catalog() {
        for name in DEFAULT_SPEECH_MODELS {
            assert!(
                catalog::get_speech_model(name).is_some(),
                "default model {} missing from catalog",
                name
            );
        }
    }

    #[test]
    fn default_languages_exist_in_catalog() {
        for language in DEFAULT_LANGUAGES {
            assert!(
                catalog::get_translation_model(language).is_some(),
                "default language {} missing from catalog",
                language
            );
        }
    }
}
