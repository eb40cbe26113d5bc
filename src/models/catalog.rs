//! Model catalogs for the Whispa app.
//!
//! Two tables: Whisper speech models (sized variants of the same
//! architecture) and Helsinki-NLP translation models (one repository per
//! language pair). Sizes are download estimates shown to the user; they are
//! not verified against the fetched artifacts.

/// Metadata for a Whisper speech model.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechModelInfo {
    /// Model identifier (e.g., "tiny", "base", "large").
    pub name: &'static str,
    /// Approximate download size in MB, for display only.
    pub size_mb: u32,
}

/// Metadata for a translation model.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationModelInfo {
    /// Target language as shown in the UI (e.g., "Spanish").
    pub language: &'static str,
    /// Hugging Face repository containing the model.
    pub repo_id: &'static str,
}

/// Available speech models, ordered by size (smallest first).
pub const SPEECH_MODELS: &[SpeechModelInfo] = &[
    SpeechModelInfo {
        name: "tiny",
        size_mb: 150,
    },
    SpeechModelInfo {
        name: "base",
        size_mb: 290,
    },
    SpeechModelInfo {
        name: "small",
        size_mb: 461,
    },
    SpeechModelInfo {
        name: "medium",
        size_mb: 1500,
    },
    SpeechModelInfo {
        name: "large",
        size_mb: 2900,
    },
];

/// Languages the app can translate to, with their opus-mt repositories.
pub const TRANSLATION_MODELS: &[TranslationModelInfo] = &[
    TranslationModelInfo {
        language: "English",
        repo_id: "Helsinki-NLP/opus-mt-ROMANCE-en",
    },
    TranslationModelInfo {
        language: "Spanish",
        repo_id: "Helsinki-NLP/opus-mt-en-es",
    },
    TranslationModelInfo {
        language: "French",
        repo_id: "Helsinki-NLP/opus-mt-en-fr",
    },
    TranslationModelInfo {
        language: "German",
        repo_id: "Helsinki-NLP/opus-mt-en-de",
    },
    TranslationModelInfo {
        language: "Chinese",
        repo_id: "Helsinki-NLP/opus-mt-en-zh",
    },
    TranslationModelInfo {
        language: "Japanese",
        repo_id: "Helsinki-NLP/opus-mt-en-jap",
    },
];

/// Look up a speech model by name (exact, case-sensitive match).
pub fn get_speech_model(name: &str) -> Option<&'static SpeechModelInfo> {
    SPEECH_MODELS.iter().find(|m| m.name == name)
}

/// Look up a translation model by language (exact, case-sensitive match).
pub fn get_translation_model(language: &str) -> Option<&'static TranslationModelInfo> {
    TRANSLATION_MODELS.iter().find(|m| m.language == language)
}

/// List all speech models in catalog order.
pub fn list_speech_models() -> &'static [SpeechModelInfo] {
    SPEECH_MODELS
}

/// List all translation models in catalog order.
pub fn list_translation_models() -> &'static [TranslationModelInfo] {
    TRANSLATION_MODELS
}

/// Speech model names, for CLI value restriction.
pub fn speech_model_names() -> Vec<&'static str> {
    SPEECH_MODELS.iter().map(|m| m.name).collect()
}

/// Translation language names, for CLI value restriction.
pub fn translation_languages() -> Vec<&'static str> {
    TRANSLATION_MODELS.iter().map(|m| m.language).collect()
}
