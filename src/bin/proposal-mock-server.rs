// ABOUTME: Mock backend binary for the proposal generator frontend
// ABOUTME: Loads configuration, initializes logging, and serves the mock API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! # Proposal Mock Server Binary
//!
//! Starts the development backend the frontend dev server proxies `/api` to.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use proposal_core::constants::paths;
use proposal_mock_server::{
    config::ServerConfig, logging, resources::ServerResources, server::Server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "proposal-mock-server")]
#[command(about = "Mock backend for the AI-assisted proposal generator")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_config(&config)?;
    info!("{}", config.summary());

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::in_memory(Arc::new(config)));
    if let Err(e) = Server::new(resources).run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Log every served endpoint
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  {base}{}", paths::HEALTH);
    info!("   Health (detailed): GET  {base}{}", paths::HEALTH_DETAILED);
    info!("   API Root:          GET  {base}{}", paths::API_V1);
    info!("   Login:             POST {base}{}", paths::AUTH_LOGIN);
    info!("   Company Profile:   GET  {base}{}", paths::COMPANIES_BASIC);
    info!("=== End of Endpoint List ===");
}
