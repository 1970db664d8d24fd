//! Extraction server binary
//!
//! Run with: cargo run --bin jobdraft-server

use jobdraft::{config::AppConfig, server::AppServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobdraft=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::default();

    tracing::info!("Configuration loaded");
    tracing::info!("  - Max upload size: {} bytes", config.ingest.max_file_size);
    tracing::info!("  - CORS enabled: {}", config.server.enable_cors);

    let server = AppServer::new(config);

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/extract - Upload a PDF or DOCX, get normalized text");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
