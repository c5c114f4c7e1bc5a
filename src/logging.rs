// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and output destinations from the server config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! Structured logging built on `tracing` and `tracing-subscriber`

use std::io;

use anyhow::{anyhow, Result};
use proposal_core::constants::service;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::environment::{LogLevel, ServerConfig};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse from string, falling back to pretty output
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Base log level
    pub level: LogLevel,
    /// Raw filter directives taking precedence over `level`
    pub filter: Option<String>,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment name
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            filter: None,
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service::NAME.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Derive logging settings from the server configuration
    #[must_use]
    pub fn from_server_config(config: &ServerConfig) -> Self {
        let is_production = config.environment.is_production();
        Self {
            level: config.log_level,
            filter: config.log_filter.clone(),
            format: config.log_format,
            include_location: is_production,
            include_spans: is_production,
            service_name: service::NAME.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: config.environment.to_string(),
        }
    }

    /// Build the filter: explicit directives win, noise reduction always applies
    fn env_filter(&self) -> EnvFilter {
        let base = self
            .filter
            .as_deref()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(self.level.to_string()));

        ["hyper=warn", "hyper_util=warn", "reqwest=warn", "tower_http=info"]
            .into_iter()
            .filter_map(|directive| directive.parse::<Directive>().ok())
            .fold(base, EnvFilter::add_directive)
    }

    /// Span lifecycle events emitted by every output format
    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = self.span_events();

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(false)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Proposal mock server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level.to_string(),
                "format": self.format,
                "filter": self.filter,
            }
        });
        info!("Logging configured: {}", config_summary);
    }
}

/// Initialize logging from the server configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_config(config: &ServerConfig) -> Result<()> {
    LoggingConfig::from_server_config(config).init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log user authentication events
    pub fn log_auth_event(user_id: &str, event: &str, success: bool) {
        info!(
            user.id = %user_id,
            auth.event = %event,
            auth.success = %success,
            "Authentication event"
        );
    }

    /// Log requests that matched no route
    pub fn log_unmatched_route(method: &str, path: &str) {
        warn!(
            http.method = %method,
            http.path = %path,
            http.status = 404,
            "No route matched request"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::Environment;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_production_logging_is_more_detailed() {
        let config = ServerConfig {
            environment: Environment::Production,
            log_format: LogFormat::Json,
            ..ServerConfig::default()
        };
        let logging = LoggingConfig::from_server_config(&config);
        assert!(logging.include_location);
        assert!(logging.include_spans);
        assert_eq!(logging.format, LogFormat::Json);
        assert_eq!(logging.environment, "production");
    }

    #[test]
    fn test_span_events_follow_config() {
        let quiet = LoggingConfig {
            format: LogFormat::Compact,
            include_spans: false,
            ..LoggingConfig::default()
        };
        assert_eq!(quiet.span_events(), FmtSpan::NONE);

        let traced = LoggingConfig {
            format: LogFormat::Compact,
            include_spans: true,
            ..LoggingConfig::default()
        };
        assert_eq!(traced.span_events(), FmtSpan::NEW | FmtSpan::CLOSE);
    }

    #[test]
    fn test_invalid_filter_falls_back_to_level() {
        let logging = LoggingConfig {
            filter: Some("[[not a directive".into()),
            level: LogLevel::Warn,
            ..LoggingConfig::default()
        };
        let rendered = logging.env_filter().to_string();
        assert!(rendered.contains("warn"));
    }
}
