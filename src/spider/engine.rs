//! Crawl engine - main page loop
//!
//! This module contains the crawl loop that drives a spider, including:
//! - Walking each start URL's pagination chain sequentially
//! - Coordinating fetching, extraction, and pagination following
//! - Emitting every extracted item to the sink in document order
//! - Handling cancellation between phases
//! - Reporting end-of-run statistics

use crate::config::Config;
use crate::output::{CrawlReport, ItemSink, JsonLinesSink};
use crate::spider::extract::{parse_page, RuleSet};
use crate::spider::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::state::CrawlPhase;
use crate::SpiderError;
use reqwest::Client;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// The crawl engine, generic over the item sink
pub struct Engine<S: ItemSink> {
    client: Client,
    rules: RuleSet,
    start_urls: Vec<Url>,
    sink: S,
    cancelled: Arc<AtomicBool>,
    report: CrawlReport,
}

impl<S: ItemSink> Engine<S> {
    /// Creates a new engine from a configuration and a sink
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `sink` - The destination for extracted items
    ///
    /// # Returns
    ///
    /// * `Ok(Engine)` - Ready to run
    /// * `Err(SpiderError)` - A selector or start URL failed to parse, or
    ///   the HTTP client could not be built
    pub fn new(config: &Config, sink: S) -> Result<Self, SpiderError> {
        let rules = RuleSet::from_config(&config.spider)?;
        let client = build_http_client(&config.user_agent)?;

        let mut start_urls = Vec::with_capacity(config.spider.start_urls.len());
        for raw in &config.spider.start_urls {
            start_urls.push(Url::parse(raw)?);
        }

        Ok(Self {
            client,
            rules,
            start_urls,
            sink,
            cancelled: Arc::new(AtomicBool::new(false)),
            report: CrawlReport::new(),
        })
    }

    /// Returns a handle that cancels the crawl when set
    ///
    /// Cancellation is observed between phases, before the next fetch; the
    /// page currently being processed finishes normally and no item is
    /// emitted twice.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Consumes the engine and returns its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs the crawl over every configured start URL
    ///
    /// Each start URL heads an independent pagination chain, processed
    /// strictly sequentially in configuration order. A chain that fails
    /// stops on its own; later chains still run.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Statistics for the finished run
    /// * `Err(SpiderError)` - The sink failed, or the loop itself broke its
    ///   transition rules
    pub async fn run(&mut self) -> Result<CrawlReport, SpiderError> {
        let start_urls = self.start_urls.clone();
        tracing::info!("Starting crawl with {} start URL(s)", start_urls.len());

        for start_url in start_urls {
            if self.cancelled.load(Ordering::Relaxed) {
                tracing::info!("Cancellation requested, skipping remaining start URLs");
                break;
            }

            tracing::info!("Crawling chain starting at {}", start_url);
            match self.crawl_chain(start_url.clone()).await {
                Ok(phase) if phase.is_success() => {
                    self.report.chains_completed += 1;
                }
                Ok(phase) => {
                    // Cancelled mid-chain; neither completed nor failed
                    tracing::info!("Chain stopped in phase '{}' by cancellation", phase);
                }
                Err(e) => {
                    tracing::error!("Chain starting at {} failed: {}", start_url, e);
                    self.report.chains_failed += 1;
                }
            }
        }

        self.sink.finalize()?;

        tracing::info!(
            "Crawl finished: {} pages fetched, {} items emitted, {} chains completed, {} failed",
            self.report.pages_fetched,
            self.report.items_emitted,
            self.report.chains_completed,
            self.report.chains_failed
        );

        Ok(self.report.clone())
    }

    /// Walks one pagination chain to its end
    ///
    /// The chain advances through the crawl phases page by page:
    /// fetch the pending URL, run the extraction rules, emit every item,
    /// then either follow the next-page link or finish. The frontier is a
    /// single slot: at most one URL is ever pending.
    async fn crawl_chain(&mut self, start_url: Url) -> Result<CrawlPhase, SpiderError> {
        let mut phase = CrawlPhase::Start;
        let mut pending = Some(start_url);

        while let Some(url) = pending.take() {
            if self.cancelled.load(Ordering::Relaxed) {
                tracing::info!("Cancellation requested, stopping before fetch of {}", url);
                return Ok(phase);
            }

            phase = phase.transition_to(CrawlPhase::Fetching)?;
            self.report.pages_fetched += 1;
            tracing::debug!("Fetching {}", url);

            let (body, final_url) = match fetch_page(&self.client, url.as_str()).await {
                FetchOutcome::Success {
                    final_url,
                    status_code,
                    body,
                } => {
                    tracing::debug!("Fetched {} (HTTP {}, {} bytes)", url, status_code, body.len());
                    (body, final_url)
                }
                FetchOutcome::ContentMismatch { content_type } => {
                    phase.transition_to(CrawlPhase::Failed)?;
                    return Err(SpiderError::MalformedDocument {
                        url: url.to_string(),
                        content_type,
                    });
                }
                FetchOutcome::HttpError { status_code } => {
                    phase.transition_to(CrawlPhase::Failed)?;
                    return Err(SpiderError::HttpStatus {
                        url: url.to_string(),
                        status: status_code,
                    });
                }
                FetchOutcome::NetworkError { error } => {
                    phase.transition_to(CrawlPhase::Failed)?;
                    return Err(SpiderError::Fetch {
                        url: url.to_string(),
                        message: error,
                    });
                }
            };

            // Pagination hrefs resolve against where the response actually
            // came from, in case the request was redirected
            let base_url = Url::parse(&final_url).unwrap_or(url);

            phase = phase.transition_to(CrawlPhase::Extracting)?;
            let parsed = parse_page(&body, &base_url, &self.rules);
            tracing::debug!("Extracted {} item(s) from {}", parsed.items.len(), base_url);

            for item in &parsed.items {
                self.sink.record_item(item)?;
                self.report.items_emitted += 1;
            }

            phase = phase.transition_to(CrawlPhase::Following)?;
            match parsed.next_page {
                Some(next_url) => {
                    tracing::debug!("Following pagination to {}", next_url);
                    pending = Some(next_url);
                }
                None => {
                    phase = phase.transition_to(CrawlPhase::Done)?;
                    tracing::info!("Pagination exhausted at {}", base_url);
                }
            }
        }

        Ok(phase)
    }
}

/// Runs a spider from a configuration, writing items as JSON lines
///
/// This is the main entry point for a configured crawl. It wires the
/// JSON-lines sink from the output configuration and walks every start
/// URL's pagination chain.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The crawl ran; per-chain failures are counted in
///   the report rather than raised
/// * `Err(SpiderError)` - Setup or sink failure
///
/// # Example
///
/// ```no_run
/// use quotewalk::config::load_config;
/// use quotewalk::spider::run_spider;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let report = run_spider(config).await?;
/// println!("{} items", report.items_emitted);
/// # Ok(())
/// # }
/// ```
pub async fn run_spider(config: Config) -> Result<CrawlReport, SpiderError> {
    let sink = JsonLinesSink::create(Path::new(&config.output.items_path))?;
    let mut engine = Engine::new(&config, sink)?;
    engine.run().await
}
