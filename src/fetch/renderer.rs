use crate::config::FetchConfig;
use crate::models::Result;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A headless browser session, created once per batch and navigated to each
/// URL that the plain HTTP path could not fetch. Dropping it closes the
/// browser process, so ownership decides the release point.
pub struct Renderer {
    // Keeps the browser process alive for the lifetime of the session.
    _browser: Browser,
    tab: Arc<Tab>,
    settle_delay: Duration,
}

impl Renderer {
    pub fn start(config: &FetchConfig) -> Result<Self> {
        info!("Starting headless browser session...");
        let browser = Browser::new(LaunchOptions {
            headless: true,
            sandbox: false,
            window_size: Some((1920, 1080)),
            // The session must outlive long stretches of HTTP-only successes
            // between fallback uses.
            idle_browser_timeout: Duration::from_secs(3600),
            ..Default::default()
        })?;

        let tab = browser.new_tab()?;
        tab.set_user_agent(&config.user_agent, None, None)?;
        tab.set_default_timeout(Duration::from_secs(config.renderer_wait_timeout_seconds));

        info!("Browser session ready");
        Ok(Self {
            _browser: browser,
            tab,
            settle_delay: Duration::from_millis(config.renderer_settle_delay_ms),
        })
    }

    /// Navigates the persistent tab and captures the rendered document.
    /// Blocks for the bounded page-ready wait plus the fixed settle delay.
    pub fn fetch(&self, url: &str) -> Result<String> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        // "body" is the one element every renderable page has; waiting on
        // anything more specific fails on sites with unknown structure.
        self.tab.wait_for_element("body")?;
        debug!(
            "Page loaded, waiting {:?} for client-side rendering",
            self.settle_delay
        );
        std::thread::sleep(self.settle_delay);
        let html = self.tab.get_content()?;
        Ok(html)
    }
}
