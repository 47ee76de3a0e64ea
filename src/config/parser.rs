use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use quotewalk::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Start URLs: {}", config.spider.start_urls.len());
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn valid_config_content() -> &'static str {
        r#"
[spider]
start-urls = ["https://quotes.toscrape.com/page/1/"]
item-selector = "div.quote"
text-selector = "span.text"
author-selector = "small.author"
tag-selector = "div.tags a.tag"
next-page-selector = "li.next a"

[user-agent]
crawler-name = "TestSpider"
crawler-version = "1.0"
contact-url = "https://example.com/about"
contact-email = "admin@example.com"

[output]
items-path = "./items.jsonl"
"#
    }

    #[test]
    fn test_load_valid_config() {
        let file = create_temp_config(valid_config_content());
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.spider.start_urls.len(), 1);
        assert_eq!(config.spider.item_selector, "div.quote");
        assert_eq!(config.spider.next_page_selector, "li.next a");
        assert_eq!(config.user_agent.crawler_name, "TestSpider");
        assert_eq!(config.output.items_path, "./items.jsonl");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_missing_section() {
        let config_content = r#"
[spider]
start-urls = ["https://quotes.toscrape.com/page/1/"]
item-selector = "div.quote"
text-selector = "span.text"
author-selector = "small.author"
tag-selector = "div.tags a.tag"
next-page-selector = "li.next a"
"#;
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[spider]
start-urls = []
item-selector = "div.quote"
text-selector = "span.text"
author-selector = "small.author"
tag-selector = "div.tags a.tag"
next-page-selector = "li.next a"

[user-agent]
crawler-name = "TestSpider"
crawler-version = "1.0"
contact-url = "https://example.com/about"
contact-email = "admin@example.com"

[output]
items-path = "./items.jsonl"
"#;
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_config_with_bad_selector() {
        let config_content = valid_config_content().replace("div.quote", "div..[[");
        let file = create_temp_config(&config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidSelector(_)));
    }
}
