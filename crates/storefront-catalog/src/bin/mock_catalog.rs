//! # Mock Catalog Server
//!
//! Serves the seed products over the catalog HTTP API for local development.
//!
//! ## Usage
//! ```bash
//! # Default address from catalog.toml / environment (127.0.0.1:8787)
//! cargo run -p storefront-catalog --bin mock-catalog
//!
//! # Custom port
//! cargo run -p storefront-catalog --bin mock-catalog -- --port 9000
//!
//! # Explicit config file
//! cargo run -p storefront-catalog --bin mock-catalog -- --config ./catalog.toml
//! ```
//!
//! Stops on Ctrl-C after in-flight requests finish.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use storefront_catalog::{CatalogConfig, MockCatalog, MockCatalogServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut port: Option<u16> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = Some(
                        args[i + 1]
                            .parse()
                            .with_context(|| format!("invalid port: {}", args[i + 1]))?,
                    );
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Storefront Mock Catalog");
                println!();
                println!("Usage: mock-catalog [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Config file (default: platform catalog.toml)");
                println!("  -p, --port <PORT>    Port to listen on (default: 8787)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let mut config = CatalogConfig::load(config_path).context("loading catalog config")?;
    if let Some(port) = port {
        config.mock.port = port;
    }

    let handle = MockCatalogServer::new(MockCatalog::seeded())
        .start_with(&config.mock)
        .await
        .context("starting mock catalog")?;

    info!(url = %handle.base_url(), "Serving seed catalog, press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("waiting for Ctrl-C")?;

    handle.shutdown().await?;
    Ok(())
}
