//! Extraction rules for turning a fetched page into quote records
//!
//! This module applies the configured CSS selectors to a page:
//! - the item selector partitions the page into quote blocks
//! - the field selectors pull text/author/tags out of each block
//! - the next-page selector locates the pagination link, resolved to an
//!   absolute URL against the page's own URL
//!
//! A selector that matches nothing is never an error: the field stays
//! `None` (or empty for tags), and a page without quote blocks simply
//! contributes zero items.

use crate::config::SpiderConfig;
use crate::url::resolve_href;
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use url::Url;

/// One extracted quote record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// The quote text; None if the text selector matched nothing
    pub text: Option<String>,

    /// The author name; None if the author selector matched nothing
    pub author: Option<String>,

    /// Tag strings in document order; empty if the tag selector matched nothing
    pub tags: Vec<String>,
}

/// The compiled selector set driving extraction and pagination
#[derive(Debug, Clone)]
pub struct RuleSet {
    item: Selector,
    text: Selector,
    author: Selector,
    tags: Selector,
    next_page: Selector,
}

impl RuleSet {
    /// Compiles the selector strings from a spider configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The spider definition holding the five selector strings
    ///
    /// # Returns
    ///
    /// * `Ok(RuleSet)` - All selectors compiled
    /// * `Err(ConfigError)` - A selector string does not parse as CSS
    pub fn from_config(config: &SpiderConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            item: compile_selector("item-selector", &config.item_selector)?,
            text: compile_selector("text-selector", &config.text_selector)?,
            author: compile_selector("author-selector", &config.author_selector)?,
            tags: compile_selector("tag-selector", &config.tag_selector)?,
            next_page: compile_selector("next-page-selector", &config.next_page_selector)?,
        })
    }
}

/// Compiles a single selector string, naming it in the error
fn compile_selector(name: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| {
        ConfigError::InvalidSelector(format!("{} '{}' does not parse: {}", name, selector, e))
    })
}

/// Everything extracted from one fetched page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Quote records in document order
    pub items: Vec<Item>,

    /// Absolute URL of the next page, if a usable pagination link exists
    pub next_page: Option<Url>,
}

/// Runs the extraction rules and the pagination lookup over page HTML
///
/// Extraction is a pure function of the HTML and the rule set: running it
/// twice over the same input yields identical ordered output.
///
/// # Arguments
///
/// * `html` - The page body
/// * `base_url` - The URL the page was fetched from, used to resolve a
///   relative next-page href
/// * `rules` - The compiled selector set
///
/// # Example
///
/// ```no_run
/// use quotewalk::config::SpiderConfig;
/// use quotewalk::spider::{parse_page, RuleSet};
/// use url::Url;
///
/// # fn example(config: &SpiderConfig) {
/// let rules = RuleSet::from_config(config).unwrap();
/// let base = Url::parse("https://quotes.toscrape.com/page/1/").unwrap();
/// let html = r#"<div class="quote"><span class="text">...</span></div>"#;
/// let parsed = parse_page(html, &base, &rules);
/// println!("{} items", parsed.items.len());
/// # }
/// ```
pub fn parse_page(html: &str, base_url: &Url, rules: &RuleSet) -> ParsedPage {
    let document = Html::parse_document(html);

    let items = document
        .select(&rules.item)
        .map(|node| extract_item(&node, rules))
        .collect();

    let next_page = document
        .select(&rules.next_page)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .and_then(|href| resolve_href(href, base_url));

    ParsedPage { items, next_page }
}

/// Applies the field selectors to one quote block
fn extract_item(node: &ElementRef, rules: &RuleSet) -> Item {
    Item {
        text: first_text(node, &rules.text),
        author: first_text(node, &rules.author),
        tags: all_text(node, &rules.tags),
    }
}

/// Trimmed text of the first match under the node, None if absent or empty
fn first_text(node: &ElementRef, selector: &Selector) -> Option<String> {
    node.select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trimmed text of every match under the node, in document order
fn all_text(node: &ElementRef, selector: &Selector) -> Vec<String> {
    node.select(selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
