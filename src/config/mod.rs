//! Configuration module for quotewalk
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use quotewalk::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Item selector: {}", config.spider.item_selector);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, SpiderConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::load_config;
