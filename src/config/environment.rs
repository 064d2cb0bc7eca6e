// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Environment-based configuration management for production deployment

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use stride_core::errors::{AppError, AppResult};
use tracing::info;

/// Default HTTP port when `HTTP_PORT` is unset
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default plan cache entry lifetime, one week
const DEFAULT_PLAN_CACHE_TTL_SECS: u64 = 604_800;

/// Default bound on cached plans
const DEFAULT_PLAN_CACHE_MAX_ENTRIES: usize = 10_000;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration for browser clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or "*" to allow any origin
    pub allowed_origins: String,
}

/// Plan cache sizing and lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCacheConfig {
    /// Seconds a cached plan stays fresh
    pub ttl_seconds: u64,
    /// Upper bound on cached plans before LRU eviction
    pub max_entries: usize,
}

/// Fitness data provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Fixed seed for the synthetic provider; random per process when unset
    pub synthetic_seed: Option<u64>,
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    pub http_port: u16,
    /// Application log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Plan cache settings
    pub plan_cache: PlanCacheConfig,
    /// Provider settings
    pub provider: ProviderConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; set-but-unparseable variables
    /// are configuration errors rather than silent fallbacks.
    ///
    /// # Errors
    /// Returns a config error when a variable is present but invalid.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_var("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            plan_cache: PlanCacheConfig {
                ttl_seconds: parse_var("PLAN_CACHE_TTL_SECS", DEFAULT_PLAN_CACHE_TTL_SECS)?,
                max_entries: parse_var("PLAN_CACHE_MAX_ENTRIES", DEFAULT_PLAN_CACHE_MAX_ENTRIES)?,
            },
            provider: ProviderConfig {
                synthetic_seed: parse_optional_var("SYNTHETIC_SEED")?,
            },
        };

        info!(
            port = config.http_port,
            environment = %config.environment,
            "Configuration loaded"
        );

        Ok(config)
    }
}

/// Read an environment variable with a default for the unset case
fn env_var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_var<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    env::var(name).map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| AppError::config(format!("Invalid {name} value: {e}")))
    })
}

/// Parse an optional environment variable, `None` when unset
fn parse_optional_var<T>(name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    env::var(name).map_or(Ok(None), |raw| {
        raw.parse()
            .map(Some)
            .map_err(|e| AppError::config(format!("Invalid {name} value: {e}")))
    })
}
