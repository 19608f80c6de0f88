use std::env;
use std::path::PathBuf;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for movie-service.
///
/// Loaded once at startup; any missing or malformed value aborts startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub images: ImagesConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
}

/// JWT authentication configuration.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

/// Image file storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ImagesConfig {
    pub directory: PathBuf,
}

fn default_max_connections() -> u32 {
    5
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl JwtConfig {
    /// Lifetime of issued tokens.
    ///
    /// # Errors
    /// Returns error if the minutes do not fit a duration
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_minutes(self.expiration_minutes).ok_or_else(|| {
            ConfigError::Message("jwt.expiration_minutes is out of range".into())
        })
    }
}

impl ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub fn http_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        Self::from_source(configuration)
    }

    /// Deserialize and validate an already assembled configuration.
    ///
    /// # Errors
    /// Returns error if values are missing, mistyped or out of range
    pub fn from_source(configuration: ConfigBuilder) -> Result<Self, ConfigError> {
        let config: Config = configuration.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message("database.url must not be empty".into()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Message(
                "database.max_connections must be at least 1".into(),
            ));
        }
        if self.jwt.secret.len() < auth::MIN_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                auth::MIN_SECRET_BYTES
            )));
        }
        if self.jwt.expiration_minutes <= 0 {
            return Err(ConfigError::Message(
                "jwt.expiration_minutes must be positive".into(),
            ));
        }
        if self.jwt.token_ttl()? > Duration::days(auth::MAX_TOKEN_TTL_DAYS) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must not exceed {} days",
                auth::MAX_TOKEN_TTL_DAYS
            )));
        }
        Ok(())
    }
}
