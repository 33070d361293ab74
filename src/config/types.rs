use serde::{Deserialize, Serialize};

use crate::fetch::DEFAULT_PAGE_SIZE;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote price source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the price API (e.g., "https://coingeko.burjx.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Quote currency code sent with every page request (default: "usd").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Coins per page (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// TCP connect timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Fraction of the viewport height below the selection at which the
    /// next page is requested (default: 0.5).
    #[serde(default = "default_end_threshold")]
    pub end_threshold: f32,
}

fn default_base_url() -> String {
    "https://coingeko.burjx.com".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_end_threshold() -> f32 {
    0.5
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            currency: default_currency(),
            page_size: default_page_size(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            end_threshold: default_end_threshold(),
        }
    }
}
