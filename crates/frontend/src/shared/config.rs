use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_status_hide_ms")]
    pub status_hide_ms: u32,
    #[serde(default = "default_error_hide_ms")]
    pub error_hide_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_hide_ms: default_status_hide_ms(),
            error_hide_ms: default_error_hide_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_status_hide_ms() -> u32 {
    3000
}

fn default_error_hide_ms() -> u32 {
    4000
}

fn default_log_level() -> String {
    "debug".to_string()
}

/// Used only when the embedded document cannot be read
const DEFAULT_BASE_URL: &str = "https://68a980b7b115e67576eb4f13.mockapi.io/api/v1";

/// Configuration embedded in the wasm bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Compile-time override for the REST base URL
const API_BASE_URL_OVERRIDE: Option<&str> = option_env!("EMPLOYEES_API_BASE_URL");

impl Config {
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Parse a configuration document and apply the base URL override
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if let Some(base_url) = base_url_override.filter(|v| !v.trim().is_empty()) {
        config.api.base_url = base_url.trim().to_string();
    }
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    Ok(config)
}

/// Load the embedded configuration.
///
/// There is no filesystem in the browser, so the only source is the document
/// compiled into the bundle plus the `EMPLOYEES_API_BASE_URL` build variable.
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG, API_BASE_URL_OVERRIDE)
}
