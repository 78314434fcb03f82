mod renderer;

pub use renderer::Renderer;

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request failed ({0}); no renderer session available")]
    RendererUnavailable(String),
    #[error("renderer failed: {0}")]
    Renderer(String),
}

/// Retrieves raw HTML for a URL: a plain HTTP GET first, then the injected
/// browser session for pages that only materialize under JavaScript.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> crate::models::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self { client })
    }

    pub async fn fetch(
        &self,
        url: &str,
        renderer: Option<&Renderer>,
    ) -> std::result::Result<String, FetchError> {
        let request_err = match self.fetch_direct(url).await {
            Ok(html) => return Ok(html),
            Err(e) => e,
        };
        warn!("Plain HTTP fetch failed for {}: {}", url, request_err);

        let Some(renderer) = renderer else {
            return Err(FetchError::RendererUnavailable(request_err.to_string()));
        };

        info!("Falling back to browser rendering for {}", url);
        renderer
            .fetch(url)
            .map_err(|e| FetchError::Renderer(e.to_string()))
    }

    async fn fetch_direct(&self, url: &str) -> std::result::Result<String, FetchError> {
        debug!("Fetching {} over plain HTTP", url);
        let response = self.client.get(url).send().await?;
        let html = response.error_for_status()?.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
