//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub directory: DirectoryConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8084".to_string(),
                "http://127.0.0.1:8084".to_string(),
            ],
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Which user directory implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryBackend {
    /// Three fixed in-memory records
    #[default]
    Mock,
    /// SQLite database at `database_path`
    Sqlite,
}

impl std::str::FromStr for DirectoryBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ConfigError::Invalid(format!(
                "unknown directory backend '{}', use mock or sqlite",
                other
            ))),
        }
    }
}

/// User directory configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub backend: DirectoryBackend,

    #[serde(default = "default_database_path")]
    pub database_path: String,

    #[serde(default = "default_call_timeout")]
    pub call_timeout_ms: u64,

    #[serde(default = "default_seed_if_empty")]
    pub seed_if_empty: bool,
}

fn default_database_path() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("socialauto").join("directory.db").to_string_lossy().to_string())
        .unwrap_or_else(|| "./socialauto_data/directory.db".to_string())
}

fn default_call_timeout() -> u64 {
    5000
}

fn default_seed_if_empty() -> bool {
    true
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            backend: DirectoryBackend::default(),
            database_path: default_database_path(),
            call_timeout_ms: default_call_timeout(),
            seed_if_empty: default_seed_if_empty(),
        }
    }
}

impl DirectoryConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

/// Static session tokens accepted by the API
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_sessions")]
    pub sessions: Vec<SessionEntry>,
}

/// One accepted session token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionEntry {
    pub token: String,
    pub user_id: String,
}

fn default_sessions() -> Vec<SessionEntry> {
    vec![SessionEntry {
        token: "demo".to_string(),
        user_id: "1".to_string(),
    }]
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            sessions: default_sessions(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("socialauto").join("config.toml")),
            Some(PathBuf::from("/etc/socialauto/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = var("SOCIALAUTO_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("SOCIALAUTO_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid SOCIALAUTO_API_PORT: {}", port),
            }
        }

        // Directory overrides
        if let Some(backend) = var("SOCIALAUTO_DIRECTORY_BACKEND") {
            match backend.parse() {
                Ok(b) => self.directory.backend = b,
                Err(e) => tracing::warn!("Ignoring SOCIALAUTO_DIRECTORY_BACKEND: {}", e),
            }
        }
        if let Some(path) = var("SOCIALAUTO_DATABASE_PATH") {
            self.directory.database_path = path;
        }

        // Logging overrides
        if let Some(level) = var("SOCIALAUTO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SOCIALAUTO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    let database_path = toml::Value::String(default_database_path());

    format!(
        r#"# SocialAuto Configuration
#
# Environment variables override these settings:
# - SOCIALAUTO_API_HOST
# - SOCIALAUTO_API_PORT
# - SOCIALAUTO_DIRECTORY_BACKEND
# - SOCIALAUTO_DATABASE_PATH
# - SOCIALAUTO_LOG_LEVEL
# - SOCIALAUTO_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins (empty = allow any)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

# Request timeout in seconds
request_timeout_secs = 30

[directory]
# User directory backend: mock or sqlite
backend = "mock"

# SQLite database file (sqlite backend only)
database_path = {database_path}

# Deadline for a single directory call (ms)
call_timeout_ms = 5000

# Insert the demo users into an empty database
seed_if_empty = true

# Accepted session tokens
[[auth.sessions]]
token = "demo"
user_id = "1"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_file_uses_resolved_database_path() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.directory.database_path, default_database_path());
        assert!(!config.directory.database_path.starts_with('~'));
    }

    #[test]
    fn test_default_config_file_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.api.port, 8082);
        assert_eq!(config.directory.backend, DirectoryBackend::Mock);
        assert_eq!(config.directory.call_timeout(), Duration::from_millis(5000));
        assert_eq!(config.auth.sessions, default_sessions());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::parse("[api]\nport = 9000\n").unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.auth.sessions.len(), 1);
        assert!(config.directory.seed_if_empty);
    }

    #[test]
    fn test_backend_parsing() {
        let config = Config::parse("[directory]\nbackend = \"sqlite\"\n").unwrap();
        assert_eq!(config.directory.backend, DirectoryBackend::Sqlite);

        assert!(Config::parse("[directory]\nbackend = \"redis\"\n").is_err());
        assert_eq!("SQLite".parse::<DirectoryBackend>().unwrap(), DirectoryBackend::Sqlite);
        assert!("redis".parse::<DirectoryBackend>().is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SOCIALAUTO_API_PORT", "9100"),
            ("SOCIALAUTO_DIRECTORY_BACKEND", "sqlite"),
            ("SOCIALAUTO_DATABASE_PATH", "/tmp/dir.db"),
            ("SOCIALAUTO_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.port, 9100);
        assert_eq!(config.directory.backend, DirectoryBackend::Sqlite);
        assert_eq!(config.directory.database_path, "/tmp/dir.db");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "SOCIALAUTO_API_PORT").then(|| "http".to_string()));
        assert_eq!(config.api.port, 8082);
    }

    #[test]
    fn test_load_reports_path() {
        let err = Config::load(Path::new("/definitely/missing/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
