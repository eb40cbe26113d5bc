//! Logging setup.
//!
//! Events go to stderr, and optionally to an append-mode log file as well.
//! The default filter keeps the tool at `info` while capping the chatty hub
//! and HTTP dependencies; `RUST_LOG` overrides the whole filter.

use crate::error::{PrefetchError, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize logging for the process.
///
/// `quiet` caps output at warnings; each `verbose` step lowers the level
/// (`-v` debug, `-vv` trace). When `log_file` is set, its parent directory
/// is created and events are appended there with ANSI colors disabled.
pub fn init(quiet: bool, verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(quiet, verbose)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).map_err(|e| {
                    PrefetchError::Other(format!(
                        "Failed to create log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    PrefetchError::Other(format!(
                        "Failed to open log file {}: {e}",
                        path.display()
                    ))
                })?;

            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
    }

    tracing::debug!(
        version = %crate::version_string(),
        os = std::env::consts::OS,
        "logging initialized"
    );

    Ok(())
}

/// Build the default filter directives for the requested verbosity.
fn default_directives(quiet: bool, verbose: u8) -> String {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    format!("{level},hf_hub=warn,reqwest=warn")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_info_by_default() {
        assert_eq!(default_directives(false, 0), "info,hf_hub=warn,reqwest=warn");
    }

    #[test]
    fn test_default_directives_verbose_steps() {
        assert_eq!(
            default_directives(false, 1),
            "debug,hf_hub=warn,reqwest=warn"
        );
        assert_eq!(
            default_directives(false, 2),
            "trace,hf_hub=warn,reqwest=warn"
        );
        assert_eq!(
            default_directives(false, 5),
            "trace,hf_hub=warn,reqwest=warn"
        );
    }

    #[test]
    fn test_default_directives_quiet_wins() {
        assert_eq!(default_directives(true, 0), "warn,hf_hub=warn,reqwest=warn");
        assert_eq!(default_directives(true, 3), "warn,hf_hub=warn,reqwest=warn");
    }
}
