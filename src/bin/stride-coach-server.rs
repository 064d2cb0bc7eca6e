// ABOUTME: Main server binary serving the Stride Coach training plan API
// ABOUTME: Loads environment configuration, wires application state, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! # Stride Coach Server Binary
//!
//! Starts the HTTP API that derives weekly mileage summaries and adaptive
//! training plans from connected fitness data.

use anyhow::Result;
use clap::Parser;
use std::env;
use std::sync::Arc;
use stride_coach::{config::environment::ServerConfig, context::AppContext, logging, routes};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Command line arguments for the server
#[derive(Parser)]
#[command(name = "stride-coach-server")]
#[command(about = "Stride Coach - Adaptive weekly training plans from fitness tracker data")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration only");
            Args { http_port: None }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Stride Coach API server");

    // Wire provider, cache, stores, and the plan service
    let context = Arc::new(AppContext::from_config(config.clone()).await?);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    // Display all available API endpoints
    display_available_endpoints(&host, &config);

    let router = routes::router(context);
    let listener = TcpListener::bind(format!("{host}:{}", config.http_port)).await?;

    info!("Server listening on http://{host}:{}", config.http_port);

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// Wait for ctrl-c before draining in-flight requests
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, stopping server");
}

/// Display all available API endpoints with their ports
fn display_available_endpoints(host: &str, config: &ServerConfig) {
    info!("=== Available API Endpoints ===");
    display_plan_endpoints(host, config.http_port);
    display_config_endpoints(host, config.http_port);
    display_monitoring_endpoints(host, config.http_port);
    info!("=== End of Endpoint List ===");
}

#[allow(clippy::cognitive_complexity)]
fn display_plan_endpoints(host: &str, port: u16) {
    info!("Training Plans:");
    info!("   Weekly Mileage:    GET http://{host}:{port}/api/users/{{user_id}}/mileage");
    info!("   Weekly Plan:       GET http://{host}:{port}/api/users/{{user_id}}/plan");
    info!("   Force Regenerate:  GET http://{host}:{port}/api/users/{{user_id}}/plan?refresh=true");
    info!("   Modifications:     GET http://{host}:{port}/api/users/{{user_id}}/modifications");
}

#[allow(clippy::cognitive_complexity)]
fn display_config_endpoints(host: &str, port: u16) {
    info!("Training Configuration:");
    info!("   Get Config:        GET http://{host}:{port}/api/users/{{user_id}}/config");
    info!("   Update Config:     PUT http://{host}:{port}/api/users/{{user_id}}/config");
}

#[allow(clippy::cognitive_complexity)]
fn display_monitoring_endpoints(host: &str, port: u16) {
    info!("Monitoring:");
    info!("   Health Check:      GET http://{host}:{port}/health");
    info!("   Readiness:         GET http://{host}:{port}/ready");
}
