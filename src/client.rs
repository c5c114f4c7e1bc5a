// ABOUTME: Typed HTTP client for the proposal API
// ABOUTME: Applies ApiConfig defaults and per-call RequestOptions with bounded retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! # API Client
//!
//! Transport failures and 5xx responses are retried up to the resolved retry
//! count with exponential backoff. 4xx responses are returned immediately and
//! decoded into an [`ErrorEnvelope`].

use std::time::Duration;

use proposal_core::constants::paths;
use proposal_core::models::{CompanyRecord, LoginData, LoginRequest, ServiceDescriptor};
use proposal_core::{
    ApiConfig, ContractError, DataEnvelope, ErrorEnvelope, HealthCheckResponse,
    MockHealthResponse, RateLimitInfo, RequestOptions, ResolvedRequest,
};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::middleware::rate_limit_from_headers;

/// Default delay before the first retry
pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(200);

/// Errors returned by [`ApiClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client configuration violates the contract
    #[error("invalid client configuration: {0}")]
    Config(#[from] ContractError),
    /// The request could not be sent or the response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with an error envelope
    #[error("API error {status}: {}", .envelope.message)]
    Api {
        /// HTTP status of the response
        status: u16,
        /// Decoded error body
        envelope: ErrorEnvelope,
        /// Quota state when the server sent rate limit headers
        rate_limit: Option<RateLimitInfo>,
    },
    /// The server answered with an error that is not an envelope
    #[error("unexpected response {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status of the response
        status: u16,
        /// Raw response body
        body: String,
    },
    /// A success body did not match the expected shape
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status for errors that carry one
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the proposal API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    initial_backoff: Duration,
}

impl ApiClient {
    /// Create a client from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = Client::builder()
            .user_agent(concat!("proposal-mock-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
        })
    }

    /// Override the delay before the first retry; later retries double it
    #[must_use]
    pub const fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET /health
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]
    pub async fn health(&self, options: &RequestOptions) -> Result<MockHealthResponse, ClientError> {
        self.get_json(paths::HEALTH, options).await
    }

    /// GET /health/detailed
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; additionally fails when the report does not
    /// conform to the health contract
    pub async fn detailed_health(
        &self,
        options: &RequestOptions,
    ) -> Result<HealthCheckResponse, ClientError> {
        let report: HealthCheckResponse = self.get_json(paths::HEALTH_DETAILED, options).await?;
        report.check_conformance()?;
        Ok(report)
    }

    /// GET /api/v1
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]
    pub async fn service_descriptor(
        &self,
        options: &RequestOptions,
    ) -> Result<ServiceDescriptor, ClientError> {
        self.get_json(paths::API_V1, options).await
    }

    /// POST /api/v1/auth/login
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]
    pub async fn login(
        &self,
        request: &LoginRequest,
        options: &RequestOptions,
    ) -> Result<DataEnvelope<LoginData>, ClientError> {
        let response = self
            .send(Method::POST, paths::AUTH_LOGIN, Some(request), options)
            .await?;
        decode(response).await
    }

    /// GET /api/v1/companies/basic
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]
    pub async fn basic_company(
        &self,
        options: &RequestOptions,
    ) -> Result<CompanyRecord, ClientError> {
        let envelope: DataEnvelope<CompanyRecord> =
            self.get_json(paths::COMPANIES_BASIC, options).await?;
        Ok(envelope.data)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ClientError> {
        let response = self.send(Method::GET, path, None::<&()>, options).await?;
        decode(response).await
    }

    /// Send a request with retries and return the first successful response
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when every attempt failed to reach
    /// the server, [`ClientError::Api`] or [`ClientError::UnexpectedStatus`]
    /// for 4xx responses or a 5xx after the last attempt
    pub async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<Response, ClientError> {
        options.validate()?;
        let resolved = self.config.resolve(options);
        let url = self.config.url_for(path);
        let max_attempts = resolved.max_attempts();

        let mut attempt = 1;
        loop {
            let request = self.build_request(method.clone(), &url, body, &resolved);
            let outcome = request.send().await;
            let last_attempt = attempt >= max_attempts;

            match outcome {
                Ok(response) if is_retryable(response.status()) && !last_attempt => {
                    warn!(
                        url = %url,
                        status = response.status().as_u16(),
                        attempt,
                        max_attempts,
                        "Server error, retrying"
                    );
                }
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => return Err(error_from_response(response).await),
                Err(e) if e.is_builder() => return Err(ClientError::Transport(e)),
                Err(e) if !last_attempt => {
                    warn!(url = %url, error = %e, attempt, max_attempts, "Request failed, retrying");
                }
                Err(e) => return Err(ClientError::Transport(e)),
            }

            let backoff = self.initial_backoff.saturating_mul(2_u32.saturating_pow(attempt - 1));
            tokio::time::sleep(backoff).await;
            attempt += 1;
        }
    }

    fn build_request<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        resolved: &ResolvedRequest,
    ) -> RequestBuilder {
        let mut request = self.http.request(method, url).timeout(resolved.timeout);
        for (name, value) in &resolved.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn error_from_response(response: Response) -> ClientError {
    let status = response.status();
    let rate_limit = match rate_limit_from_headers(response.headers()) {
        Ok(info) => info,
        Err(e) => {
            debug!(error = %e, "Ignoring malformed rate limit headers");
            None
        }
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return ClientError::Transport(e),
    };

    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) if envelope.matches_status(status.as_u16()) => ClientError::Api {
            status: status.as_u16(),
            envelope,
            rate_limit,
        },
        Ok(_) | Err(_) => ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        },
    }
}

/// Whether a status would be retried by [`ApiClient::send`]
#[must_use]
pub fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error()
}
