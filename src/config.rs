//! Configuration module for loading and parsing TOML configuration files.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Records inserted into an empty store at startup.
    pub seed: SeedConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5555,
        }
    }
}

/// Database configuration.
///
/// Without a `url` the server keeps its data in memory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string.
    pub url: Option<String>,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Seconds to wait for a free connection.
    pub acquire_timeout_secs: u64,
    /// Whether embedded migrations run at startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
            run_migrations: true,
        }
    }
}

/// Seed data configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Restaurants to create.
    pub restaurants: Vec<SeedRestaurant>,
    /// Pizzas to create.
    pub pizzas: Vec<SeedPizza>,
}

/// A restaurant seed entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRestaurant {
    /// Restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
}

/// A pizza seed entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPizza {
    /// Pizza name.
    pub name: String,
    /// Free-text ingredient list.
    pub ingredients: String,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides values from the process environment.
    ///
    /// Recognises `HOST`, `PORT`, `DATABASE_URL` and the older `DB_URI`.
    ///
    /// # Errors
    /// Returns error if `PORT` is not a valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overrides values using the given variable lookup.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("PORT must be a number: {port}")))?;
        }

        if let Some(url) = lookup("DATABASE_URL").or_else(|| lookup("DB_URI")) {
            self.database.url = Some(url);
        }

        Ok(())
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "database max_connections must be positive".to_string(),
            ));
        }

        for restaurant in &self.seed.restaurants {
            if restaurant.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "seed restaurant name cannot be empty".to_string(),
                ));
            }
            if restaurant.address.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "seed restaurant {} address cannot be empty",
                    restaurant.name
                )));
            }
        }

        for pizza in &self.seed.pizzas {
            if pizza.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "seed pizza name cannot be empty".to_string(),
                ));
            }
            if pizza.ingredients.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "seed pizza {} ingredients cannot be empty",
                    pizza.name
                )));
            }
        }

        Ok(())
    }
}
