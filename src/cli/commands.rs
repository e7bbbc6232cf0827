//! Command implementations

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::{ConfigLayer, RandomPicker, SessionConfig, TextCatalogLoader};
use crate::app::SessionController;
use crate::cli::args::{CatalogArgs, OutputFormat, RunArgs};
use crate::cli::dispatcher::Dispatcher;
use crate::cli::repl::{Repl, ReplOptions};
use crate::cli::{Cli, Commands};
use crate::config_initialization::initialize_configuration_hierarchy;
use crate::domain::model::{Video, VideoCatalog};
use crate::domain::rules::SearchPolicy;
use crate::ports::CatalogSource;
use crate::utils::logging::{LogFormat, LogLevel, LoggingSystem};

/// Resolve configuration, start logging and run the requested command
pub fn execute(cli: Cli) -> Result<()> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(RunArgs::default()));

    let mut overrides = ConfigLayer {
        log_level: cli.log_level.as_deref().map(str::parse::<LogLevel>).transpose()?,
        log_format: cli.log_format.as_deref().map(str::parse::<LogFormat>).transpose()?,
        ..ConfigLayer::default()
    };
    match &command {
        Commands::Run(args) => {
            overrides.catalog_path = args.catalog.clone();
            overrides.random_seed = args.seed;
            overrides.prompt = args.prompt.clone();
            if args.no_search_prompt {
                overrides.search_prompt = Some(false);
            }
        }
        Commands::Catalog(args) => overrides.catalog_path = args.catalog.clone(),
    }

    let config = initialize_configuration_hierarchy(cli.config.as_deref(), overrides)
        .context("Failed to resolve configuration")?;

    let logging = LoggingSystem::new(config.logging());
    logging.initialize();
    logging.log_system_info();

    match command {
        Commands::Run(_) => run(&config),
        Commands::Catalog(args) => catalog(&config, args),
    }
}

/// Execute the run command
pub fn run(config: &SessionConfig) -> Result<()> {
    info!("Starting interactive session");

    let catalog = load_catalog(config);
    let picker = RandomPicker::from_seed(config.random_seed);
    let mut session = SessionController::new(catalog, Box::new(picker));
    let dispatcher = Dispatcher::new()?;

    let options = ReplOptions {
        prompt: config.prompt.clone(),
        search_prompt: config.search_prompt,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), options, dispatcher);
    repl.run(&mut session).context("Session terminated on an I/O error")?;

    info!(
        "Session ended with {} playlists and {} flagged videos",
        session.playlists().len(),
        session.moderation().flagged_count()
    );
    Ok(())
}

/// Execute the catalog command
pub fn catalog(config: &SessionConfig, args: CatalogArgs) -> Result<()> {
    let loader = TextCatalogLoader::new(&config.catalog_path);
    let mut videos = loader
        .load_videos()
        .with_context(|| format!("Failed to load catalog {}", loader.describe()))?;
    videos.sort_by(SearchPolicy::display_order);

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => {
            for video in &videos {
                writeln!(stdout, "{}", video)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&videos)
                .context("Failed to serialize catalog to JSON")?;
            writeln!(stdout, "{}", json)?;
        }
        OutputFormat::Yaml => {
            let yaml =
                serde_yaml::to_string(&videos).context("Failed to serialize catalog to YAML")?;
            write!(stdout, "{}", yaml)?;
        }
    }

    info!("Printed {} videos", videos.len());
    Ok(())
}

/// Load the catalog for a session. A failed load leaves the session with no videos.
fn load_catalog(config: &SessionConfig) -> VideoCatalog {
    let loader = TextCatalogLoader::new(&config.catalog_path);
    let videos: Vec<Video> = match loader.load_videos() {
        Ok(videos) => videos,
        Err(err) => {
            warn!("Continuing with an empty catalog: {}", err);
            Vec::new()
        }
    };
    VideoCatalog::from_videos(videos)
}
