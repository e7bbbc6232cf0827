//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Catalog file of `title | id | tags` lines
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Seed for PLAY_RANDOM, for repeatable sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Prompt printed before each command
    #[arg(long)]
    pub prompt: Option<String>,

    /// Do not offer to play a search result after searching
    #[arg(long)]
    pub no_search_prompt: bool,
}

/// Arguments for the catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file of `title | id | tags` lines
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Catalog output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}
