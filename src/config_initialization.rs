//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::toml_config::{ConfigLayer, SessionConfig, TomlConfigAdapter};
use crate::error::{VidcatError, VidcatResult};

/// Environment variables and the keys they override
pub const ENV_MAPPINGS: &[(&str, &str)] = &[
    ("VIDCAT_CATALOG", "catalog_path"),
    ("VIDCAT_PROMPT", "prompt"),
    ("VIDCAT_SEARCH_PROMPT", "search_prompt"),
    ("VIDCAT_SEED", "random_seed"),
    ("VIDCAT_LOG_LEVEL", "log_level"),
    ("VIDCAT_LOG_FORMAT", "log_format"),
];

/// Resolve configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(
    config_path: Option<&Path>,
    cli_overrides: ConfigLayer,
) -> VidcatResult<SessionConfig> {
    resolve_configuration(config_path, |key| std::env::var(key).ok(), cli_overrides)
}

/// Same as [`initialize_configuration_hierarchy`] with an injectable environment
pub fn resolve_configuration<E>(
    config_path: Option<&Path>,
    env: E,
    cli_overrides: ConfigLayer,
) -> VidcatResult<SessionConfig>
where
    E: Fn(&str) -> Option<String>,
{
    // Step 1: defaults
    let mut config = SessionConfig::default();

    // Step 2: file
    let file_layer = match config_path {
        Some(path) => Some(TomlConfigAdapter::load(path)?),
        None => TomlConfigAdapter::load_default()?,
    };
    if let Some(layer) = file_layer {
        config.apply(layer);
    }

    // Step 3: environment
    config.apply(environment_layer(env)?);

    // Step 4: CLI
    config.apply(cli_overrides);

    info!(
        "Configuration resolved: catalog={}, log_level={}",
        config.catalog_path.display(),
        config.log_level
    );
    Ok(config)
}

/// Read `VIDCAT_*` variables into a layer
pub fn environment_layer<E>(env: E) -> VidcatResult<ConfigLayer>
where
    E: Fn(&str) -> Option<String>,
{
    let mut layer = ConfigLayer::default();
    let mut env_overrides = 0;

    for &(env_var, key) in ENV_MAPPINGS {
        let Some(value) = env(env_var) else {
            continue;
        };
        info!("Found environment override: {} = {}", env_var, value);
        env_overrides += 1;

        match key {
            "catalog_path" => layer.catalog_path = Some(PathBuf::from(value)),
            "prompt" => layer.prompt = Some(value),
            "search_prompt" => layer.search_prompt = Some(parse_value(key, &value)?),
            "random_seed" => layer.random_seed = Some(parse_value(key, &value)?),
            "log_level" => layer.log_level = Some(value.parse()?),
            "log_format" => layer.log_format = Some(value.parse()?),
            _ => {}
        }
    }

    if env_overrides > 0 {
        info!("Applied {} environment variable overrides", env_overrides);
    }
    Ok(layer)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> VidcatResult<T> {
    value.trim().parse().map_err(|_| VidcatError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logging::{LogFormat, LogLevel};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn config_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", body).unwrap();
        file
    }

    #[test]
    fn test_environment_layer() {
        let layer = environment_layer(env_from(&[
            ("VIDCAT_CATALOG", "env.txt"),
            ("VIDCAT_SEED", "5"),
            ("VIDCAT_SEARCH_PROMPT", "false"),
            ("VIDCAT_LOG_LEVEL", "debug"),
            ("VIDCAT_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(layer.catalog_path, Some(PathBuf::from("env.txt")));
        assert_eq!(layer.random_seed, Some(5));
        assert_eq!(layer.search_prompt, Some(false));
        assert_eq!(layer.log_level, Some(LogLevel::Debug));
        assert_eq!(layer.log_format, Some(LogFormat::Json));
        assert_eq!(layer.prompt, None);
    }

    #[test]
    fn test_invalid_environment_value() {
        let err = environment_layer(env_from(&[("VIDCAT_SEED", "soon")])).unwrap_err();
        assert!(matches!(err, VidcatError::InvalidConfig { .. }));
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let file = config_file(
            "[vidcat]\ncatalog_path = \"file.txt\"\nprompt = \"file> \"\nrandom_seed = 1\n",
        );
        let env = env_from(&[("VIDCAT_PROMPT", "env> "), ("VIDCAT_SEED", "2")]);
        let cli = ConfigLayer {
            random_seed: Some(3),
            ..ConfigLayer::default()
        };

        let config = resolve_configuration(Some(file.path()), env, cli).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("file.txt"));
        assert_eq!(config.prompt, "env> ");
        assert_eq!(config.random_seed, Some(3));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = resolve_configuration(
            Some(Path::new("/no/such/config.toml")),
            env_from(&[]),
            ConfigLayer::default(),
        );
        assert!(matches!(result, Err(VidcatError::ConfigNotFound { .. })));
    }
}
