use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_GENERATIVE_ENDPOINT: &str = "http://localhost:11434/api/generate";
const DEFAULT_GENERATIVE_MODEL: &str = "mistral";
const DEFAULT_GENERATIVE_TIMEOUT_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub generative: GenerativeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            generative: GenerativeConfig::load()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Remote text-generation capability consulted before the deterministic evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerativeConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_GENERATIVE_ENDPOINT.to_string(),
            model: DEFAULT_GENERATIVE_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_GENERATIVE_TIMEOUT_SECS),
        }
    }
}

impl GenerativeConfig {
    fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let enabled = match env::var("GENERATIVE_ENABLED") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "GENERATIVE_ENABLED",
            })?,
            Err(_) => defaults.enabled,
        };

        let endpoint = env::var("GENERATIVE_ENDPOINT").unwrap_or(defaults.endpoint);
        if reqwest::Url::parse(&endpoint).is_err() {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }

        let model = env::var("GENERATIVE_MODEL").unwrap_or(defaults.model);

        let timeout = match env::var("GENERATIVE_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout),
            },
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            enabled,
            endpoint,
            model,
            timeout,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidFlag { name: &'static str },
    InvalidEndpoint(String),
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFlag { name } => {
                write!(f, "{name} must be one of true/false, yes/no, on/off, 1/0")
            }
            ConfigError::InvalidEndpoint(value) => {
                write!(f, "GENERATIVE_ENDPOINT '{value}' is not a valid URL")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "GENERATIVE_TIMEOUT_SECS must be a positive number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidFlag { .. }
            | ConfigError::InvalidEndpoint(_)
            | ConfigError::InvalidTimeout => None,
        }
    }
}
