//! Application configuration loaded from environment.

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public base URL of the service (e.g. `http://localhost`).
    pub public_host: String,
    /// Listen port. Passed through as-is; a bad value fails at bind time.
    pub port: String,
    pub db_user: String,
    pub db_password: String,
    /// MySQL `host:port`.
    pub db_address: String,
    pub db_name: String,
    /// HS256 signing secret. Empty means token issuance fails.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration_seconds: i64,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

const DEFAULT_JWT_EXPIRATION_SECONDS: i64 = 3600 * 24 * 7;

impl Config {
    /// Load the `.env` file, then resolve every setting from the environment.
    /// A missing or unreadable `.env` file is an error.
    pub fn load() -> Result<Self, ConfigLoadError> {
        dotenvy::dotenv()?;
        Self::from_env()
    }

    /// Resolve settings from the process environment only.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, falling back to defaults per key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, fallback: &str| lookup(key).unwrap_or_else(|| fallback.to_string());

        let jwt_expiration_seconds = match lookup("JWT_EXPIRATION_IN_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigLoadError::InvalidJwtExpiration(raw))?,
            None => DEFAULT_JWT_EXPIRATION_SECONDS,
        };

        Ok(Self {
            public_host: get("PUBLIC_HOST", "http://localhost"),
            port: get("PORT", "8080"),
            db_user: get("DB_USER", "root"),
            db_password: get("DB_PASSWORD", ""),
            db_address: format!("{}:{}", get("DB_HOST", "localhost"), get("DB_PORT", "3306")),
            db_name: get("DB_NAME", "ecom"),
            jwt_secret: get("JWT_SECRET", ""),
            jwt_expiration_seconds,
            log_level: get("LOG_LEVEL", "info"),
        })
    }

    /// Connection URL for the MySQL pool.
    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}/{}",
            self.db_user, self.db_password, self.db_address, self.db_name
        )
    }

    /// Bind address for the HTTP listener.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("cannot read .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("Invalid JWT_EXPIRATION_IN_SECONDS: {0}")]
    InvalidJwtExpiration(String),
}
