//! Server configuration loaded from environment variables.
//!
//! `.env` is honoured when `main` calls `dotenvy::dotenv()` before
//! [`ApiConfig::from_env`].

use axum::http::HeaderValue;
use notes_core::defaults;

/// Environment variable names.
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const APP_ENV: &str = "APP_ENV";
    /// Comma-separated CORS origin list. Unset, empty or `*` allows any origin.
    pub const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
    /// "json" or "text" (default: "text")
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Path to log file (optional, enables daily-rotated file logging)
    pub const LOG_FILE: &str = "LOG_FILE";
    /// "true"/"false" override ANSI colors (auto-detected by default)
    pub const LOG_ANSI: &str = "LOG_ANSI";
}

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Reported by the health endpoint
    pub environment: String,
    pub cors_origins: CorsOrigins,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
    pub log_file: Option<String>,
    pub log_ansi: Option<bool>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            environment: defaults::ENVIRONMENT.to_string(),
            cors_origins: CorsOrigins::Any,
            max_body_bytes: defaults::MAX_BODY_BYTES,
            log_format: LogFormat::Text,
            log_file: None,
            log_ansi: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(env_vars::HOST).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(env_vars::PORT) {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!(
                    "Invalid {} '{}', using default {}",
                    env_vars::PORT,
                    port,
                    defaults::PORT
                ),
            }
        }
        if let Some(env) = lookup(env_vars::APP_ENV).filter(|e| !e.trim().is_empty()) {
            config.environment = env.trim().to_string();
        }
        if let Some(origins) = lookup(env_vars::ALLOWED_ORIGINS) {
            config.cors_origins = parse_allowed_origins(&origins);
        }
        if let Some(limit) = lookup(env_vars::MAX_BODY_BYTES) {
            match limit.trim().parse() {
                Ok(limit) => config.max_body_bytes = limit,
                Err(_) => tracing::warn!(
                    "Invalid {} '{}', using default {}",
                    env_vars::MAX_BODY_BYTES,
                    limit,
                    defaults::MAX_BODY_BYTES
                ),
            }
        }
        if let Some(format) = lookup(env_vars::LOG_FORMAT) {
            config.log_format = if format.trim().eq_ignore_ascii_case("json") {
                LogFormat::Json
            } else {
                LogFormat::Text
            };
        }
        config.log_file = lookup(env_vars::LOG_FILE).filter(|f| !f.trim().is_empty());
        config.log_ansi = lookup(env_vars::LOG_ANSI).map(|v| v == "true" || v == "1");

        config
    }

    /// `host:port` string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated origin list.
///
/// An empty list or a `*` entry allows any origin. Entries that are not
/// valid header values are skipped with a warning.
pub fn parse_allowed_origins(origins: &str) -> CorsOrigins {
    let entries: Vec<&str> = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return CorsOrigins::Any;
    }

    let list: Vec<HeaderValue> = entries
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if list.is_empty() {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(list)
    }
}
