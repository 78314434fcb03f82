use crate::config::Config;
use crate::directory::DirectoryScraper;
use crate::export::{ErrorLog, RecordSink};
use crate::fetch::{PageFetcher, Renderer};
use crate::models::{BatchSummary, Result};
use tracing::{error, info, warn};

/// Runs the whole URL list sequentially, owning the renderer session for the
/// duration of the run.
pub struct BatchRunner {
    config: Config,
}

impl BatchRunner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self, urls: &[String]) -> Result<BatchSummary> {
        // A failed browser launch degrades the run to HTTP-only fetching
        // instead of aborting it.
        let renderer = match Renderer::start(&self.config.fetch) {
            Ok(renderer) => Some(renderer),
            Err(e) => {
                warn!("Browser session unavailable, continuing HTTP-only: {}", e);
                None
            }
        };

        let result = self.process_urls(urls, renderer.as_ref()).await;

        // The session is owned here, so it is released on this path and on
        // unwinds alike, sink-open failures included.
        if renderer.is_some() {
            info!("Releasing browser session");
        }
        drop(renderer);

        result
    }

    async fn process_urls(
        &self,
        urls: &[String],
        renderer: Option<&Renderer>,
    ) -> Result<BatchSummary> {
        let mut records = RecordSink::create(&self.config.files.output_path)?;
        let mut errors = ErrorLog::create(&self.config.files.error_log_path)?;
        let scraper = DirectoryScraper::new(PageFetcher::new(&self.config.fetch)?);

        let mut summary = BatchSummary::default();
        for (i, url) in urls.iter().enumerate() {
            info!("--- URL {} of {} ---", i + 1, urls.len());
            match scraper
                .scrape_directory(url, renderer, &mut records, &mut errors)
                .await
            {
                Ok(count) if count > 0 => summary.records_extracted += count,
                Ok(_) => summary.failed_or_empty += 1,
                Err(e) => {
                    // One bad URL never stops the batch.
                    error!("Unexpected error processing {}: {}", url, e);
                    errors.unexpected(url, &e.to_string())?;
                    summary.failed_or_empty += 1;
                }
            }
            summary.urls_processed += 1;
        }

        info!("--- Scraping complete ---");
        Ok(summary)
    }
}
