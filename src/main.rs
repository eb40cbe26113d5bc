use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use whispa_prefetch::cache::default_cache_dir;
use whispa_prefetch::cli::{Cli, Commands};
use whispa_prefetch::config::Config;
use whispa_prefetch::models::catalog::{list_speech_models, list_translation_models};
use whispa_prefetch::models::fetcher::HubFetcher;
use whispa_prefetch::models::speech::is_speech_model_installed;
use whispa_prefetch::models::translation::is_translation_model_installed;
use whispa_prefetch::prefetch::{PrefetchOptions, download_all};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = load_config(cli.config.as_deref())?;

            let log_file = cli.log_file.or_else(|| config.log.file.clone());
            whispa_prefetch::logging::init(cli.quiet, cli.verbose, log_file.as_deref())?;

            let options = PrefetchOptions {
                speech_models: cli.models.unwrap_or_else(|| config.download.models.clone()),
                languages: cli
                    .languages
                    .unwrap_or_else(|| config.download.languages.clone()),
                cache_dir: cli.cache_dir.or_else(|| config.download.cache_dir.clone()),
                max_workers: cli.max_workers.unwrap_or(config.download.max_workers),
            };

            // Progress bars only on an interactive terminal
            let progress = !cli.quiet && std::io::stderr().is_terminal();
            let fetcher = Arc::new(HubFetcher::new().with_progress(progress));

            let all_ok = download_all(&fetcher, &options).await?;
            if !all_ok {
                std::process::exit(1);
            }
        }
        Some(Commands::List) => {
            let config = load_config(cli.config.as_deref())?;
            list_catalog(cli.cache_dir.or(config.download.cache_dir));
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "whispa-prefetch",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/whispa/prefetch.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        // Load from custom path
        Config::load(path)?
    } else {
        // Try default path, fall back to defaults
        let default_path = Config::default_path();
        Config::load_or_default(&default_path)
    };

    // Apply environment variable overrides
    Ok(config.with_env_overrides())
}

/// Print both catalogs with per-model cache status.
fn list_catalog(cache_dir: Option<PathBuf>) {
    let cache_dir = cache_dir.unwrap_or_else(default_cache_dir);

    println!("Cache directory: {}", cache_dir.display());
    println!();

    println!("Speech models:");
    for model in list_speech_models() {
        let status = if is_speech_model_installed(model.name, &cache_dir) {
            "installed".green().to_string()
        } else {
            "not installed".dimmed().to_string()
        };
        println!("  {} ({}MB, {})", model.name, model.size_mb, status);
    }

    println!();
    println!("Translation models:");
    for model in list_translation_models() {
        let status = if is_translation_model_installed(model.repo_id, &cache_dir) {
            "installed".green().to_string()
        } else {
            "not installed".dimmed().to_string()
        };
        println!("  {} ({}, {})", model.language, model.repo_id, status);
    }
}
