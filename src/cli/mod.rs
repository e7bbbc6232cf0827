//! CLI module for vidcat
//!
//! This module handles command-line argument parsing, the interactive session
//! loop and the presentation of session results.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;
pub mod dispatcher;
pub mod render;
pub mod repl;
pub mod tokenizer;

pub use args::{CatalogArgs, OutputFormat, RunArgs};

/// vidcat interactive video catalog
///
/// Browse a catalog of videos, simulate playback, keep playlists and flag
/// videos from a line-oriented prompt.
#[derive(Parser, Debug)]
#[command(name = "vidcat")]
#[command(about = "vidcat - An interactive video catalog session")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to vidcat.toml or config/vidcat.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// The command to execute; an interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive session
    Run(RunArgs),
    /// Print the loaded catalog
    Catalog(CatalogArgs),
}
