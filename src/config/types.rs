use serde::Deserialize;

/// Main configuration structure for quotewalk
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub spider: SpiderConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Spider definition: where to start and what to extract
#[derive(Debug, Clone, Deserialize)]
pub struct SpiderConfig {
    /// URLs to start crawling from, each the head of an independent
    /// pagination chain
    #[serde(rename = "start-urls")]
    pub start_urls: Vec<String>,

    /// Selector matching one quote block per item on a page
    #[serde(rename = "item-selector")]
    pub item_selector: String,

    /// Selector for the quote text, relative to the item node
    #[serde(rename = "text-selector")]
    pub text_selector: String,

    /// Selector for the author name, relative to the item node
    #[serde(rename = "author-selector")]
    pub author_selector: String,

    /// Selector for the tag elements, relative to the item node
    #[serde(rename = "tag-selector")]
    pub tag_selector: String,

    /// Selector for the next-page anchor; its href ends or continues the crawl
    #[serde(rename = "next-page-selector")]
    pub next_page_selector: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON-lines item file
    #[serde(rename = "items-path")]
    pub items_path: String,
}
