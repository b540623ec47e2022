use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub page: PageConfig,
}

/// Settings for the rendered ranking page
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Path the page is served from; the query string is appended to it
    pub path: String,
    /// Prefix for team detail links, joined with the row slug
    pub team_link_prefix: String,
    /// Text of the placeholder row shown when nothing matches
    pub empty_message: String,
    /// Id of the element holding the embedded JSON rows
    pub payload_element_id: String,
    /// Buffered notifications per rows-updated listener
    pub event_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            page: PageConfig::default(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            path: "/".to_string(),
            team_link_prefix: "teams/".to_string(),
            empty_message: "No results".to_string(),
            payload_element_id: "metric-data".to_string(),
            event_capacity: 16,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content)
}

/// Parse config TOML, falling back to defaults when it is invalid
pub fn parse(content: &str) -> Config {
    match toml::from_str(content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("CONFIG: Invalid config file, using defaults: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.page.team_link_prefix, "teams/");
        assert_eq!(config.page.empty_message, "No results");
        assert_eq!(config.page.event_capacity, 16);
    }

    #[test]
    fn test_config_from_toml_full() {
        let toml_str = r#"
log_level = "debug"
log_file = "/tmp/rankings.log"

[page]
path = "/metrics/score.html"
team_link_prefix = "../teams/"
empty_message = "Nothing matches"
payload_element_id = "rows"
event_capacity = 4
        "#;

        let config = parse(toml_str);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.page.path, "/metrics/score.html");
        assert_eq!(config.page.team_link_prefix, "../teams/");
        assert_eq!(config.page.empty_message, "Nothing matches");
        assert_eq!(config.page.payload_element_id, "rows");
        assert_eq!(config.page.event_capacity, 4);
    }

    #[test]
    fn test_config_from_toml_partial_uses_defaults() {
        let toml_str = r#"
[page]
empty_message = "Empty"
        "#;

        let config = parse(toml_str);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.page.empty_message, "Empty");
        assert_eq!(config.page.path, "/");
    }

    #[test]
    fn test_config_invalid_toml_falls_back() {
        let config = parse("page = [");
        assert_eq!(config, Config::default());
    }
}
