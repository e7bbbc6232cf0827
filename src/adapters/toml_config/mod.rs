// TOML config adapter - Session configuration from TOML files

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{VidcatError, VidcatResult};
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Files searched, in order, when no config path is given
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["vidcat.toml", "config/vidcat.toml"];

/// Resolved session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub catalog_path: PathBuf,
    pub prompt: String,
    pub search_prompt: bool,
    pub random_seed: Option<u64>,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("videos.txt"),
            prompt: "YT> ".to_string(),
            search_prompt: true,
            random_seed: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
        }
    }
}

impl SessionConfig {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
        }
    }

    /// Overlay every value the layer sets
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(path) = layer.catalog_path {
            self.catalog_path = path;
        }
        if let Some(prompt) = layer.prompt {
            self.prompt = prompt;
        }
        if let Some(search_prompt) = layer.search_prompt {
            self.search_prompt = search_prompt;
        }
        if let Some(seed) = layer.random_seed {
            self.random_seed = Some(seed);
        }
        if let Some(level) = layer.log_level {
            self.log_level = level;
        }
        if let Some(format) = layer.log_format {
            self.log_format = format;
        }
    }
}

/// One partial layer of configuration (file, environment or CLI)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub catalog_path: Option<PathBuf>,
    pub prompt: Option<String>,
    pub search_prompt: Option<bool>,
    pub random_seed: Option<u64>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    vidcat: ConfigLayer,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse a `[vidcat]` table from TOML text
    pub fn parse(content: &str, origin: &str) -> VidcatResult<ConfigLayer> {
        let parsed: ConfigFile = toml::from_str(content).map_err(|e| VidcatError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(parsed.vidcat)
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> VidcatResult<ConfigLayer> {
        let shown = path.display().to_string();
        if !path.exists() {
            return Err(VidcatError::ConfigNotFound { path: shown });
        }
        let content = std::fs::read_to_string(path)?;
        info!("Loading configuration from: {}", shown);
        Self::parse(&content, &shown)
    }

    /// Load the first default config file that exists, if any
    pub fn load_default() -> VidcatResult<Option<ConfigLayer>> {
        for candidate in DEFAULT_CONFIG_PATHS {
            let path = Path::new(candidate);
            if path.exists() {
                return Self::load(path).map(Some);
            }
        }
        debug!("No configuration file found");
        Ok(None)
    }
}
