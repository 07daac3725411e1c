use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::diagnosis::{DiagnosisConfig, MissingLifestylePolicy, DEFAULT_RECOMMENDATION_LIMIT};

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
    pub diagnosis: DiagnosisConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let include_targets = env::var("APP_LOG_TARGETS")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                include_targets,
            },
            diagnosis: load_diagnosis()?,
        })
    }
}

fn load_diagnosis() -> Result<DiagnosisConfig, ConfigError> {
    let thresholds_path = env::var("APP_THRESHOLDS_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from);

    let recommendation_limit = match env::var("APP_RECOMMENDATION_LIMIT") {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or(ConfigError::InvalidRecommendationLimit)?,
        Err(_) => DEFAULT_RECOMMENDATION_LIMIT,
    };

    let missing_lifestyle = match env::var("APP_MISSING_LIFESTYLE") {
        Ok(raw) => parse_lifestyle_policy(&raw)?,
        Err(_) => MissingLifestylePolicy::default(),
    };

    Ok(DiagnosisConfig {
        thresholds_path,
        recommendation_limit,
        missing_lifestyle,
    })
}

fn parse_lifestyle_policy(raw: &str) -> Result<MissingLifestylePolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "skip" => Ok(MissingLifestylePolicy::Skip),
        "zero" | "zero_default" => Ok(MissingLifestylePolicy::ZeroDefault),
        _ => Err(ConfigError::InvalidLifestylePolicy(raw.to_string())),
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
    pub include_targets: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRecommendationLimit,
    InvalidLifestylePolicy(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRecommendationLimit => {
                write!(f, "APP_RECOMMENDATION_LIMIT must be a positive integer")
            }
            ConfigError::InvalidLifestylePolicy(value) => write!(
                f,
                "APP_MISSING_LIFESTYLE must be 'skip' or 'zero_default' (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidRecommendationLimit
            | ConfigError::InvalidLifestylePolicy(_) => None,
        }
    }
}
