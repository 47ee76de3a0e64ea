//! Output module for emitting extracted items
//!
//! This module handles:
//! - The sink trait every record destination implements
//! - The JSON-lines file sink (the conventional default)
//! - An in-memory sink for tests and embedding
//! - The end-of-crawl report

mod jsonl;
mod memory;
mod traits;

pub use jsonl::JsonLinesSink;
pub use memory::MemorySink;
pub use traits::{CrawlReport, ItemSink, SinkError, SinkResult};
