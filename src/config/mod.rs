// ABOUTME: Configuration module for the proposal mock server
// ABOUTME: Exposes the environment-derived ServerConfig and its typed parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

/// Environment-based server configuration
pub mod environment;

pub use environment::{AiServiceConfig, AuthConfig, Environment, LogLevel, ServerConfig};
