use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    /// Delay applied to both the search term and the filters
    pub debounce_ms: u32,
    pub sibling_count: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("api.base_url must not be empty")]
    EmptyBaseUrl,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:6021/api/v1"

[list]
debounce_ms = 500
sibling_count = 1
"#;

/// Build-time override for the API location
const BASE_URL_OVERRIDE: Option<&str> = option_env!("ADMIN_API_BASE_URL");

/// Load configuration
///
/// The embedded defaults are parsed first; `ADMIN_API_BASE_URL` set at build
/// time replaces `api.base_url`.
pub fn load_config() -> Result<Config, ConfigError> {
    parse_config(DEFAULT_CONFIG, BASE_URL_OVERRIDE)
}

fn parse_config(source: &str, base_url: Option<&str>) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(source)?;
    if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
        log::info!("Using API base URL from build environment: {}", url);
        config.api.base_url = url.to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    if config.api.base_url.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    Ok(config)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:6021/api/v1".to_string(),
            },
            list: ListConfig {
                debounce_ms: 500,
                sibling_count: contracts::shared::pagination::DEFAULT_SIBLING_COUNT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_base_url_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://api.example.com/v1/")).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert_eq!(config.list.debounce_ms, 500);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:6021/api/v1");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            parse_config("[api]\nbase_url = 1", None),
            Err(ConfigError::Parse(_))
        ));
        let empty = "[api]\nbase_url = \"\"\n[list]\ndebounce_ms = 1\nsibling_count = 1\n";
        assert!(matches!(
            parse_config(empty, None),
            Err(ConfigError::EmptyBaseUrl)
        ));
    }
}
