//! Spider module for page fetching and extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with error classification
//! - Selector-driven item extraction and pagination resolution
//! - The crawl loop walking each pagination chain

mod engine;
mod extract;
mod fetcher;

pub use engine::{run_spider, Engine};
pub use extract::{parse_page, Item, ParsedPage, RuleSet};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};

use crate::config::Config;
use crate::output::CrawlReport;
use crate::SpiderError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a configured spider. It will:
/// 1. Compile the selector rule set
/// 2. Build the HTTP client
/// 3. Walk each start URL's pagination chain
/// 4. Emit extracted items to the JSON-lines sink
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed; per-chain failures are in the report
/// * `Err(SpiderError)` - Setup or sink failure
pub async fn crawl(config: Config) -> Result<CrawlReport, SpiderError> {
    run_spider(config).await
}
