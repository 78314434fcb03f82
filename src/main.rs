use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod batch;
mod config;
mod directory;
mod export;
mod extract;
mod fetch;
mod input;
mod models;

use batch::BatchRunner;
use config::{load_config, Config};
use models::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("staff_scraper={}", config.logging.level)
                    .parse()
                    .unwrap(),
            ),
        )
        .init();

    info!("Starting staff directory scraper...");

    let urls = match input::load_target_urls(&config.files.input_path).await {
        Ok(urls) => urls,
        Err(e) => {
            error!("Could not read input file {}: {}", config.files.input_path, e);
            std::process::exit(1);
        }
    };

    if urls.is_empty() {
        warn!("Input file {} contains no usable URLs", config.files.input_path);
    }

    let summary = BatchRunner::new(config.clone()).run(&urls).await?;

    info!("Total URLs processed: {}", summary.urls_processed);
    info!("Total staff entries extracted: {}", summary.records_extracted);
    info!("URLs with errors or no data: {}", summary.failed_or_empty);
    info!("Results saved to: {}", config.files.output_path);
    info!("Errors and warnings logged to: {}", config.files.error_log_path);

    Ok(())
}
