//! JSON-lines item sink
//!
//! Writes one JSON object per line, the conventional default format for
//! scraped records.

use crate::output::traits::{ItemSink, SinkResult};
use crate::spider::Item;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sink that writes each item as one line of JSON
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
    items_written: u64,
}

impl JsonLinesSink<File> {
    /// Creates a sink writing to the given file path
    ///
    /// An existing file at the path is truncated.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the JSON-lines output file
    pub fn create(path: &Path) -> SinkResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink writing to any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            items_written: 0,
        }
    }

    /// Returns the number of items written so far
    pub fn items_written(&self) -> u64 {
        self.items_written
    }
}

impl<W: Write> ItemSink for JsonLinesSink<W> {
    fn record_item(&mut self, item: &Item) -> SinkResult<()> {
        let line = serde_json::to_string(item)?;
        writeln!(self.writer, "{}", line)?;
        self.items_written += 1;
        Ok(())
    }

    fn finalize(&mut self) -> SinkResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
