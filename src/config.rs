use std::env;
use std::net::SocketAddr;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const CONFIG_DIR: &str = "config";
const DEFAULT_ENV: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum AppConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("invalid bind address: {0}")]
    BindAddr(String),
}

/// Application configuration, layered from built-in defaults, optional
/// `config/*.toml` files and `APP__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    /// Run embedded migrations on startup
    pub auto_migrate: bool,

    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_connect_timeout_secs: u64,
    pub db_acquire_timeout_secs: u64,
    pub db_idle_timeout_secs: u64,
}

impl AppConfig {
    pub fn new(database_url: String, host: String, port: u16, environment: String) -> Self {
        Self {
            database_url,
            host,
            port,
            environment,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            auto_migrate: false,
            db_max_connections: 10,
            db_min_connections: 1,
            db_connect_timeout_secs: 30,
            db_acquire_timeout_secs: 8,
            db_idle_timeout_secs: 600,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEFAULT_ENV
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, AppConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| AppConfigError::BindAddr(format!("{}:{}", self.host, self.port)))
    }
}

/// Initializes the global tracing subscriber. `RUST_LOG` overrides the
/// configured level when set.
pub fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. Environment variables (APP_*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let config = Config::builder()
        .set_default("database_url", "sqlite://fulfilment.db?mode=rwc")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)?
        .set_default("environment", DEFAULT_ENV)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("auto_migrate", true)?
        .set_default("db_max_connections", 10)?
        .set_default("db_min_connections", 1)?
        .set_default("db_connect_timeout_secs", 30)?
        .set_default("db_acquire_timeout_secs", 8)?
        .set_default("db_idle_timeout_secs", 600)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_parses_host_and_port() {
        let cfg = AppConfig::new(
            "sqlite::memory:".into(),
            "127.0.0.1".into(),
            18_080,
            "test".into(),
        );
        assert_eq!(cfg.bind_addr().unwrap().port(), 18_080);
    }

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let cfg = AppConfig::new(
            "sqlite::memory:".into(),
            "not a host".into(),
            8080,
            "test".into(),
        );
        assert!(cfg.bind_addr().is_err());
    }
}
