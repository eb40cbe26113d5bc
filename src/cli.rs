//! Command-line interface for whispa-prefetch
//!
//! Provides argument parsing using clap derive macros.

use crate::models::catalog;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pre-download speech and translation models for the Whispa app
#[derive(Parser, Debug)]
#[command(
    name = "whispa-prefetch",
    version,
    about = "Pre-download speech and translation models for the Whispa app"
)]
pub struct Cli {
    /// Subcommand to execute; none means run the prefetch
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Speech models to download (default: tiny base small)
    #[arg(
        long,
        value_name = "MODEL",
        num_args = 1..,
        value_parser = PossibleValuesParser::new(catalog::speech_model_names())
    )]
    pub models: Option<Vec<String>>,

    /// Translation languages to download (default: English Spanish)
    #[arg(
        long,
        value_name = "LANGUAGE",
        num_args = 1..,
        value_parser = PossibleValuesParser::new(catalog::translation_languages())
    )]
    pub languages: Option<Vec<String>>,

    /// Cache directory for downloaded models (default: OS cache location)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Maximum parallel downloads (default: 2)
    #[arg(long, value_name = "N")]
    pub max_workers: Option<usize>,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog models and whether they are cached
    List,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
