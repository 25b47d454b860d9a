use serde::Deserialize;
use crate::config::env::{self, EnvKey};

#[derive(Debug, thiserror::Error)]
#[error("missing required environment variable `{0}`")]
pub struct ConfigError(pub &'static str);

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get(EnvKey::DatabaseUrl)
                .map_err(|_| ConfigError(EnvKey::DatabaseUrl.as_str()))?,
            database_max_connections: env::get_parsed(EnvKey::DatabaseMaxConnections, 20),
            run_migrations: env::get_parsed(EnvKey::RunMigrations, true),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}
