//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shoppy_catalog::CatalogConfig;
use shoppy_commerce::Currency;

/// Configuration file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["shoppy.toml", ".shoppy.toml", "shoppy.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog service settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Storefront settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Checkout settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency prices are shown in.
    #[serde(default)]
    pub currency: Currency,

    /// Where the cart is kept between runs, relative to the working
    /// directory unless absolute.
    #[serde(default = "default_cart_file")]
    pub cart_file: String,

    /// Path prefix stripped from routes given to `open`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basename: Option<String>,
}

fn default_cart_file() -> String {
    ".shoppy/cart.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            cart_file: default_cart_file(),
            basename: None,
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated order placement time in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    400
}

impl CheckoutConfig {
    /// Simulated order placement time.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Generate a default shoppy.toml config file.
pub fn generate_default_config() -> String {
    r#"# ShoppyGlobe storefront configuration

[catalog]
base_url = "https://dummyjson.com"
timeout_secs = 10
# page_limit = 0        # 0 asks the service for every product

[store]
currency = "INR"
cart_file = ".shoppy/cart.json"
# basename = "/Shoppy_Globe"

[checkout]
delay_ms = 400
"#
    .to_string()
}
