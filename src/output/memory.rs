//! In-memory item sink

use crate::output::traits::{ItemSink, SinkResult};
use crate::spider::Item;

/// Sink that collects items into a vector
///
/// Useful for tests and for embedding the engine in a program that wants
/// the records directly rather than a file.
#[derive(Debug, Default)]
pub struct MemorySink {
    items: Vec<Item>,
}

impl MemorySink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected items
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consumes the sink and returns the collected items
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl ItemSink for MemorySink {
    fn record_item(&mut self, item: &Item) -> SinkResult<()> {
        self.items.push(item.clone());
        Ok(())
    }

    fn finalize(&mut self) -> SinkResult<()> {
        Ok(())
    }
}
