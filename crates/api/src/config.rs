use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    /// Admin gate and session settings
    pub admin: AdminConfig,
    /// Outbound lead relay
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub site: SiteBehaviorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Public site origin used for canonical and Open Graph URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_backend")]
    pub backend: StorageBackend,

    /// Directory holding one JSON file per key (file backend only)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Largest value accepted for a single key
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Emit Strict-Transport-Security (only behind TLS)
    #[serde(default)]
    pub hsts_enabled: bool,
}

#[derive(Clone, Deserialize)]
pub struct AdminConfig {
    /// Argon2id PHC string of the admin password
    #[serde(default)]
    pub password_hash: String,

    /// HMAC secret for session tokens, at least 32 bytes
    #[serde(default)]
    pub session_secret: String,

    /// Session lifetime in seconds (default: 28800 = 8 hours)
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: i64,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password_hash", &"[REDACTED]")
            .field("session_secret", &"[REDACTED]")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// When false, leads are stored locally only
    #[serde(default = "default_relay_enabled")]
    pub enabled: bool,

    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,

    /// Client-side timeout for one relay attempt
    #[serde(default = "default_relay_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: default_relay_enabled(),
            endpoint: default_relay_endpoint(),
            timeout_ms: default_relay_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteBehaviorConfig {
    /// Resolve unpublished pages to not-found on direct navigation
    #[serde(default)]
    pub enforce_publish_gate: bool,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_storage_backend() -> StorageBackend {
    StorageBackend::File
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_max_value_bytes() -> usize {
    persistence::store::DEFAULT_MAX_VALUE_BYTES
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_session_ttl() -> i64 {
    28800 // 8 hours
}
fn default_relay_enabled() -> bool {
    true
}
fn default_relay_endpoint() -> String {
    "https://formspree.io/f/xeejvlgq".to_string()
}
fn default_relay_timeout_ms() -> u64 {
    10000
}

/// Minimum length of the session signing secret.
const MIN_SESSION_SECRET_BYTES: usize = 32;

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with FC__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FC").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Defaults are embedded so tests do not depend on config files.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30
            base_url = "https://jaitea.com"

            [storage]
            backend = "memory"
            data_dir = "data"
            max_value_bytes = 5242880

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []
            hsts_enabled = false

            [admin]
            password_hash = ""
            session_secret = ""
            session_ttl_secs = 28800

            [relay]
            enabled = true
            endpoint = "https://formspree.io/f/xeejvlgq"
            timeout_ms = 10000

            [site]
            enforce_publish_gate = false
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.admin.password_hash.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "FC__ADMIN__PASSWORD_HASH environment variable must be set".to_string(),
            ));
        }

        if !shared::password::is_valid_hash(&self.admin.password_hash) {
            return Err(ConfigValidationError::InvalidValue(
                "admin.password_hash is not a valid PHC hash string".to_string(),
            ));
        }

        if self.admin.session_secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(ConfigValidationError::InvalidValue(format!(
                "admin.session_secret must be at least {} bytes",
                MIN_SESSION_SECRET_BYTES
            )));
        }

        if self.admin.session_ttl_secs <= 0 {
            return Err(ConfigValidationError::InvalidValue(
                "admin.session_ttl_secs must be positive".to_string(),
            ));
        }

        if self.relay.enabled
            && shared::validation::validate_https_url(&self.relay.endpoint).is_err()
        {
            return Err(ConfigValidationError::InvalidValue(
                "relay.endpoint must be an https URL when the relay is enabled".to_string(),
            ));
        }

        if self.storage.backend == StorageBackend::File
            && self.storage.data_dir.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::MissingRequired(
                "storage.data_dir must be set for the file backend".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn valid_overrides(hash: &str) -> Vec<(&'static str, String)> {
        vec![
            ("admin.password_hash", hash.to_string()),
            ("admin.session_secret", SECRET.to_string()),
        ]
    }

    fn load(overrides: &[(&str, String)]) -> Config {
        let borrowed: Vec<(&str, &str)> = overrides.iter().map(|(k, v)| (*k, v.as_str())).collect();
        Config::load_for_test(&borrowed).expect("Failed to load config")
    }

    #[test]
    fn test_config_load_with_defaults() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.relay.timeout_ms, 10000);
        assert!(!config.site.enforce_publish_gate);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_env_override() {
        let config = Config::load_for_test(&[
            ("server.port", "9000"),
            ("logging.level", "debug"),
            ("storage.backend", "file"),
            ("site.enforce_publish_gate", "true"),
        ])
        .expect("Failed to load config");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.site.enforce_publish_gate);
    }

    #[test]
    fn test_config_validation_passes() {
        let hash = shared::password::hash_admin_password("letmein").unwrap();
        let config = load(&valid_overrides(&hash));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_missing_password_hash() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");
        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("FC__ADMIN__PASSWORD_HASH"));
    }

    #[test]
    fn test_config_validation_short_secret() {
        let hash = shared::password::hash_admin_password("letmein").unwrap();
        let mut overrides = valid_overrides(&hash);
        overrides[1].1 = "too-short".to_string();

        let result = load(&overrides).validate();
        assert!(result.unwrap_err().to_string().contains("session_secret"));
    }

    #[test]
    fn test_config_validation_plain_http_relay() {
        let hash = shared::password::hash_admin_password("letmein").unwrap();
        let mut overrides = valid_overrides(&hash);
        overrides.push(("relay.endpoint", "http://formspree.io/f/x".to_string()));

        let result = load(&overrides).validate();
        assert!(result.unwrap_err().to_string().contains("relay.endpoint"));

        overrides.push(("relay.enabled", "false".to_string()));
        assert!(load(&overrides).validate().is_ok());
    }

    #[test]
    fn test_admin_config_debug_redacts() {
        let hash = shared::password::hash_admin_password("letmein").unwrap();
        let config = load(&valid_overrides(&hash));
        let debug = format!("{:?}", config.admin);
        assert!(!debug.contains(SECRET));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::load_for_test(&[("server.host", "127.0.0.1"), ("server.port", "3000")])
            .expect("Failed to load config");
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }
}
