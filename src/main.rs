// Standard library imports
use std::path::Path;
use std::sync::Arc;

// External crate imports
use anyhow::Result;
use dotenv::dotenv;
use log::{info, warn};

// Internal crate imports
use tasty_fill_parser::config_loader::AppConfig;
use tasty_fill_parser::infrastructure::ingest::IngestRunner;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    dotenv().ok();
    // Use a more explicit Builder that doesn't check environment variables
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();
    info!("Logger initialized");

    // Load configuration from TOML file (first try relative path, then alternate path as backup)
    let config_path = Path::new("./config.toml");
    let config = match AppConfig::from_file(config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config from {}: {}", config_path.display(), e);

            // Try alternate path, then fall back to the built-in defaults
            let alt_path = Path::new("../config.toml");
            info!("Attempting to load from alternate path: {}", alt_path.display());
            match AppConfig::from_file(alt_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to load config from {}: {}", alt_path.display(), e);
                    info!("Using built-in default configuration");
                    AppConfig::default()
                }
            }
        }
    };

    // Wrap config in Arc for thread-safe sharing
    let config = Arc::new(config);
    info!(
        "Watching for {} mail, inbox: {}, output: {}",
        config.broker.sender_domain,
        config.paths.inbox_dir,
        config.paths.output_dir
    );

    // Sweep the inbox once and report
    let runner = IngestRunner::new(config);
    let summary = runner.run().await?;
    info!(
        "Sweep complete: {} files, {} stored, {} skipped, {} failed",
        summary.files, summary.stored, summary.skipped, summary.failures
    );

    Ok(())
}
