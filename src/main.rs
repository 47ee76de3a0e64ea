//! Quotewalk main entry point
//!
//! This is the command-line interface for the quotewalk paginated scraper.

use clap::Parser;
use quotewalk::config::load_config;
use quotewalk::output::JsonLinesSink;
use quotewalk::spider::Engine;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

/// Quotewalk: a paginated quote scraper
///
/// Quotewalk fetches pages starting from the configured start URLs,
/// extracts quote records with CSS selectors, and follows each page's
/// next-page link until pagination ends. Records are written as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "quotewalk")]
#[command(version = "0.1.0")]
#[command(about = "A paginated quote scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotewalk=info,warn"),
            1 => EnvFilter::new("quotewalk=debug,info"),
            2 => EnvFilter::new("quotewalk=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &quotewalk::config::Config) {
    println!("=== Quotewalk Dry Run ===\n");

    println!("Start URLs ({}):", config.spider.start_urls.len());
    for url in &config.spider.start_urls {
        println!("  - {}", url);
    }

    println!("\nSelectors:");
    println!("  Item: {}", config.spider.item_selector);
    println!("  Text: {}", config.spider.text_selector);
    println!("  Author: {}", config.spider.author_selector);
    println!("  Tags: {}", config.spider.tag_selector);
    println!("  Next page: {}", config.spider.next_page_selector);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Items: {}", config.output.items_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would start crawling {} pagination chain(s)",
        config.spider.start_urls.len()
    );
}

/// Handles the main crawl operation
async fn handle_crawl(config: quotewalk::config::Config) -> anyhow::Result<()> {
    let items_path = config.output.items_path.clone();
    let sink = JsonLinesSink::create(Path::new(&items_path))?;
    let mut engine = Engine::new(&config, sink)?;

    // Ctrl-C stops the crawl between pages
    let cancel = engine.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping after the current page");
            cancel.store(true, Ordering::Relaxed);
        }
    });

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "Done: {} item(s) from {} page(s) written to {}",
                report.items_emitted,
                report.pages_fetched,
                items_path
            );
            if report.chains_failed > 0 {
                tracing::warn!(
                    "{} of {} chain(s) failed before pagination ended",
                    report.chains_failed,
                    report.chains_total()
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
