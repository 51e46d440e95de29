use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use database::postgres::PostgresConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `RUN_MIGRATIONS`, default true
    pub run_migrations: bool,
    /// `SHUTDOWN_TIMEOUT_SECS`, default 30
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let run_migrations = env_parse_or_default("RUN_MIGRATIONS", "true")?;
        let shutdown_timeout = Duration::from_secs(env_parse_or_default("SHUTDOWN_TIMEOUT_SECS", "30")?);

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            run_migrations,
            shutdown_timeout,
        })
    }
}
