// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Builds a ServerConfig once at startup from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! Environment-based configuration.
//!
//! The configuration is read once at process start and handed to every
//! collaborator through `Arc<ServerConfig>`; nothing else reads the process
//! environment.

use std::env;
use std::fmt::{self, Display, Formatter};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// Default HTTP port, matching the frontend dev-server proxy target
pub const DEFAULT_HTTP_PORT: u16 = 3001;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default frontend origin (Vite dev server)
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational output
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
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
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Token signing secrets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Access token secret
    pub jwt_secret: Option<String>,
    /// Refresh token secret
    pub jwt_refresh_secret: Option<String>,
}

/// AI provider credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiServiceConfig {
    /// `OpenAI` API key
    pub openai_api_key: Option<String>,
    /// Google AI API key
    pub google_api_key: Option<String>,
}

impl AiServiceConfig {
    /// Whether any provider credential is present
    #[must_use]
    pub const fn has_provider(&self) -> bool {
        self.openai_api_key.is_some() || self.google_api_key.is_some()
    }
}

/// Process-wide server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Log output format
    pub log_format: LogFormat,
    /// Raw `RUST_LOG` directives overriding `log_level`
    pub log_filter: Option<String>,
    /// Database connection string, consumed by the persistence collaborator
    pub database_url: Option<String>,
    /// Token signing secrets
    pub auth: AuthConfig,
    /// Browser origin allowed by CORS
    pub frontend_url: String,
    /// AI provider credentials
    pub ai: AiServiceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Pretty,
            log_filter: None,
            database_url: None,
            auth: AuthConfig::default(),
            frontend_url: DEFAULT_FRONTEND_URL.to_owned(),
            ai: AiServiceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = non_empty("NODE_ENV")
            .or_else(|| non_empty("ENVIRONMENT"))
            .map_or_else(Environment::default, |value| {
                Environment::from_str_or_default(&value)
            });

        let http_port = match non_empty("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value '{value}'"))?,
            None => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            environment,
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            http_port,
            log_level: non_empty("LOG_LEVEL")
                .map_or_else(LogLevel::default, |value| LogLevel::from_str_or_default(&value)),
            log_format: non_empty("LOG_FORMAT")
                .map_or(LogFormat::Pretty, |value| LogFormat::from_str_or_default(&value)),
            log_filter: non_empty("RUST_LOG"),
            database_url: non_empty("DATABASE_URL"),
            auth: AuthConfig {
                jwt_secret: non_empty("JWT_SECRET"),
                jwt_refresh_secret: non_empty("JWT_REFRESH_SECRET"),
            },
            frontend_url: non_empty("FRONTEND_URL")
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_owned()),
            ai: AiServiceConfig {
                openai_api_key: non_empty("OPENAI_API_KEY"),
                google_api_key: non_empty("GOOGLE_AI_API_KEY"),
            },
        })
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Log-safe configuration summary; secrets are only reported as set or unset
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Proposal Mock Server Configuration:\n\
             - Environment: {}\n\
             - Bind Address: {}\n\
             - Log Level: {} ({:?})\n\
             - Database: {}\n\
             - JWT Secrets: {}\n\
             - Frontend Origin: {}\n\
             - AI Providers: {}",
            self.environment,
            self.bind_address(),
            self.log_level,
            self.log_format,
            set_or_unset(self.database_url.is_some()),
            set_or_unset(self.auth.jwt_secret.is_some() && self.auth.jwt_refresh_secret.is_some()),
            self.frontend_url,
            set_or_unset(self.ai.has_provider()),
        )
    }
}

const fn set_or_unset(present: bool) -> &'static str {
    if present {
        "Configured"
    } else {
        "Not configured"
    }
}
