//! Item sink trait and crawl report types
//!
//! This module defines the trait interface for record sinks and the
//! summary structure reported at the end of a crawl.

use crate::spider::Item;
use thiserror::Error;

/// Errors that can occur while emitting items
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write item: {0}")]
    Write(String),

    #[error("Failed to serialize item: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Trait for record sinks
///
/// A sink receives every extracted item, in document order per page, as
/// soon as the page it came from has been extracted. Items emitted before
/// a later failure stay emitted; there is no rollback.
pub trait ItemSink {
    /// Records one extracted item
    ///
    /// # Arguments
    ///
    /// * `item` - The item to record
    fn record_item(&mut self, item: &Item) -> SinkResult<()>;

    /// Finalizes the sink, performing any cleanup or final writes
    fn finalize(&mut self) -> SinkResult<()>;
}

/// Summary statistics for a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Number of page fetches attempted across all chains
    pub pages_fetched: u64,

    /// Number of items emitted to the sink
    pub items_emitted: u64,

    /// Chains that ran out of pagination and finished cleanly
    pub chains_completed: u64,

    /// Chains that stopped on a fetch error or unusable document
    pub chains_failed: u64,
}

impl CrawlReport {
    /// Creates a new empty crawl report
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of chains that ran
    pub fn chains_total(&self) -> u64 {
        self.chains_completed + self.chains_failed
    }

    /// Returns the average number of items per fetched page
    pub fn items_per_page(&self) -> f64 {
        if self.pages_fetched == 0 {
            return 0.0;
        }
        self.items_emitted as f64 / self.pages_fetched as f64
    }
}
