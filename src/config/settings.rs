//! Configuration settings for Coindeck.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment prefix for layered overrides, e.g. `COINDECK_API__TIMEOUT_SECS=10`.
const ENV_PREFIX: &str = "COINDECK";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Market-data API configuration.
    pub api: ApiConfig,
    /// News API configuration.
    pub news: NewsConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Local state configuration.
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    ///
    /// On first run the defaults are written out so there is a file to edit.
    pub fn load_or_default() -> crate::Result<Self> {
        let path = default_config_path();
        if !path.exists()
            && let Err(e) = Self::default().save(Some(path.clone()))
        {
            tracing::warn!(path = %path.display(), error = %e, "could not write default config");
        }
        Self::load(Some(path))
    }

    /// Load configuration from file, layered with `COINDECK_*` environment
    /// variables. Missing API keys are then filled from `COINGECKO_API_KEY`
    /// and `NEWS_API_KEY`.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        let mut config = Self::from_sources(&config_path)?;
        config.fill_api_keys(|name| std::env::var(name).ok());

        tracing::debug!(path = %config_path.display(), "configuration loaded");
        Ok(config)
    }

    fn from_sources(config_path: &Path) -> crate::Result<Self> {
        ::config::Config::builder()
            .add_source(::config::File::from(config_path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(|e| crate::Error::config(e.to_string()))
    }

    /// Fill API keys that were not configured explicitly.
    pub fn fill_api_keys(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.api.api_key.is_none() {
            self.api.api_key = lookup("COINGECKO_API_KEY").filter(|k| !k.is_empty());
        }
        if self.news.api_key.is_none() {
            self.news.api_key = lookup("NEWS_API_KEY").filter(|k| !k.is_empty());
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Market-data API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// CoinGecko API base URL.
    pub base_url: String,
    /// Demo API key sent as `x-cg-demo-api-key`.
    pub api_key: Option<String>,
    /// Quote currency for all prices.
    pub vs_currency: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Rate limit (requests per second).
    pub rate_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            api_key: None,
            vs_currency: "usd".to_string(),
            timeout_secs: 30,
            rate_limit: 5,
        }
    }
}

/// News API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// NewsAPI base URL.
    pub base_url: String,
    /// API key passed as the `apiKey` query parameter.
    pub api_key: Option<String>,
    /// Query used for the general news tab.
    pub default_query: String,
    /// Number of articles shown per list.
    pub limit: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: None,
            default_query: "cryptocurrency".to_string(),
            limit: 10,
            timeout_secs: 30,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Initial rows per page in the coin table.
    pub rows_per_page: u32,
    /// Page sizes cycled through with the rows-per-page key.
    pub rows_per_page_options: Vec<u32>,
    /// Seconds between watchlist carousel steps (0 to disable).
    pub carousel_interval_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            rows_per_page: 5,
            rows_per_page_options: vec![5, 30, 45],
            carousel_interval_secs: 3,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Open the selected coin.
    pub select: String,
    /// Back to the previous view.
    pub back: String,
    /// Refresh data.
    pub refresh: String,
    /// Switch to dashboard view.
    pub dashboard: String,
    /// Switch to news view.
    pub news: String,
    /// Open search.
    pub search: String,
    /// Star or unstar the selected coin.
    pub star: String,
    /// Next table page.
    pub next_page: String,
    /// Previous table page.
    pub prev_page: String,
    /// Cycle rows per page.
    pub rows_per_page: String,
    /// Cycle the chart time frame.
    pub time_frame: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            refresh: "r".to_string(),
            dashboard: "1".to_string(),
            news: "2".to_string(),
            search: "/".to_string(),
            star: "s".to_string(),
            next_page: "n".to_string(),
            prev_page: "p".to_string(),
            rows_per_page: "+".to_string(),
            time_frame: "t".to_string(),
        }
    }
}

/// Local state configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the watchlist file. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}
