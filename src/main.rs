//! vidcat interactive video catalog
//!
//! A line-oriented session over a fixed catalog of videos: simulated playback,
//! named playlists, search and moderation flags.
//!
//! # Usage
//!
//! ```bash
//! vidcat run --catalog videos.txt
//! vidcat catalog --format json
//! echo "PLAY amazing_cats_video_id" | vidcat run --seed 7
//! ```

use anyhow::Result;
use clap::Parser;

use vidcat_cli::cli::{commands, Cli};

/// Main entry point for the vidcat CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::execute(cli)
}
