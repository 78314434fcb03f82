use crate::export::{ErrorLog, RecordSink};
use crate::extract::{self, ExtractionStrategy};
use crate::fetch::{FetchError, PageFetcher, Renderer};
use crate::models::Result;
use scraper::Html;
use tracing::{info, warn};

/// Per-URL control flow: fetch, parse, run the strategy chain, write what it
/// yields. Returns the number of records written for batch statistics.
pub struct DirectoryScraper {
    fetcher: PageFetcher,
    chain: Vec<Box<dyn ExtractionStrategy>>,
}

impl DirectoryScraper {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self {
            fetcher,
            chain: extract::strategy_chain(),
        }
    }

    pub async fn scrape_directory(
        &self,
        url: &str,
        renderer: Option<&Renderer>,
        records: &mut RecordSink,
        errors: &mut ErrorLog,
    ) -> Result<usize> {
        info!("Processing URL: {}", url);

        let html = match self.fetcher.fetch(url, renderer).await {
            Ok(html) => html,
            Err(FetchError::Renderer(reason)) => {
                warn!("Renderer fetch failed for {}: {}", url, reason);
                errors.renderer_failure(url, &reason)?;
                return Ok(0);
            }
            Err(err) => {
                warn!("Could not fetch {}: {}", url, err);
                errors.unreachable(url)?;
                return Ok(0);
            }
        };

        // The parser recovers from arbitrary malformed input, so from here
        // on the only failure mode is "nothing recognized".
        let document = Html::parse_document(&html);

        let extracted = extract::run_chain(&self.chain, &document, url);
        if extracted.is_empty() {
            warn!("No staff data extracted from {} using any known format", url);
            errors.no_data(url, &self.attempted_formats())?;
            return Ok(0);
        }

        let count = extracted.len();
        for record in &extracted {
            records.append(record)?;
        }
        Ok(count)
    }

    fn attempted_formats(&self) -> Vec<&'static str> {
        self.chain.iter().map(|strategy| strategy.name()).collect()
    }
}
