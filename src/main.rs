// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use sitewatch_node::api::{start_server, ApiConfig, AppState};
use std::env;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting {}...\n", sitewatch_node::version::get_version_string());

    let api_port = env::var("API_PORT").unwrap_or_else(|_| "8080".to_string());

    let config = ApiConfig {
        listen_addr: format!("0.0.0.0:{}", api_port),
        ..Default::default()
    };

    let state = AppState::new();

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config, state).await {
            eprintln!("❌ API server error: {}", e);
        }
    });

    println!("✅ API server started on http://0.0.0.0:{}", api_port);
    println!("\nAPI Endpoints:");
    println!("  Upload page:  http://localhost:{}/", api_port);
    println!("  Health:       http://localhost:{}/health", api_port);
    println!(
        "  Analyze:      POST http://localhost:{}/api/analyze (multipart field: image)",
        api_port
    );
    println!("\nTest with curl:");
    println!(
        "  curl -X POST http://localhost:{}/api/analyze -F image=@site-photo.jpg",
        api_port
    );
    println!("\nPress Ctrl+C to shutdown...\n");

    // Wait for shutdown signal
    signal::ctrl_c().await?;

    println!("\n⏹️  Shutting down...");
    server_handle.abort();

    println!("👋 Goodbye!");
    Ok(())
}
