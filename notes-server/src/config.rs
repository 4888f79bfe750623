use serde::Deserialize;

use std::{env, fs, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read config from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("pg_dsn must be set when the postgres store is selected")]
    MissingDsn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub store: StoreKind,
    #[serde(default)]
    pub pg_dsn: Option<String>,
}

const fn default_port() -> u16 {
    8000
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str::<Self>(contents)?.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.store == StoreKind::Postgres && self.pg_dsn.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingDsn);
        }
        Ok(self)
    }
}

/// Looks for `$NOTES_SERVER_CONFIG`, then `config.yaml`, then
/// `config.example.yaml`, and finally reads `PORT`, `STORE` and `PG_DSN`
/// from the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let config_path =
        env::var("NOTES_SERVER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    for candidate in [config_path.as_str(), "config.yaml", "config.example.yaml"] {
        if !Path::new(candidate).exists() {
            continue;
        }
        if candidate == "config.example.yaml" && candidate != config_path {
            tracing::warn!(
                "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
                 \n This file should not be used and should be replaced with actual data",
                config_path
            );
        } else if candidate != config_path {
            tracing::warn!(
                "Config file '{}' not found, falling back to '{}'",
                config_path,
                candidate
            );
        }
        let contents = fs::read_to_string(candidate)?;
        return Config::from_yaml(&contents);
    }

    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    envy::from_env::<Config>()?.validate()
}
