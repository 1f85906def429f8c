//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_commerce::cart::{
    InventoryPolicy, PricingRules, FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS, TAX_RATE_BPS,
};
use shopfront_commerce::persist::DEFAULT_NAMESPACE;
use shopfront_commerce::search::DEFAULT_PAGE_SIZE;
use shopfront_commerce::{Currency, Money};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub cart: CartConfig,

    #[serde(default)]
    pub currency: CurrencyConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Problems that make the config unusable, then ones worth a warning.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.storage.path.trim().is_empty() {
            errors.push("storage.path is required".to_string());
        }
        if self.storage.namespace.trim().is_empty() {
            errors.push("storage.namespace is required".to_string());
        }
        if self.catalog.page_size == 0 {
            errors.push("catalog.page_size must be at least 1".to_string());
        }
        if self.pricing.tax_rate_bps > 10_000 {
            warnings.push(format!(
                "pricing.tax_rate_bps is {} (over 100%)",
                self.pricing.tax_rate_bps
            ));
        }
        if self.pricing.free_shipping_threshold_cents < 0 || self.pricing.flat_shipping_cents < 0 {
            errors.push("pricing amounts must not be negative".to_string());
        }
        if Currency::from_code(&self.currency.default).is_none() {
            warnings.push(format!(
                "currency.default '{}' is not supported, USD will be used",
                self.currency.default
            ));
        }

        (errors, warnings)
    }
}

/// Where store state is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON document path, relative to the working directory.
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Key prefix, e.g. `shopfront` gives `shopfront:cart`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_storage_path() -> String {
    ".shopfront/state.json".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            namespace: default_namespace(),
        }
    }
}

/// Tax and shipping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,

    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold_cents: i64,

    #[serde(default = "default_flat_shipping")]
    pub flat_shipping_cents: i64,
}

fn default_tax_rate_bps() -> u32 {
    TAX_RATE_BPS
}

fn default_free_shipping_threshold() -> i64 {
    FREE_SHIPPING_THRESHOLD_CENTS
}

fn default_flat_shipping() -> i64 {
    FLAT_SHIPPING_CENTS
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate_bps: default_tax_rate_bps(),
            free_shipping_threshold_cents: default_free_shipping_threshold(),
            flat_shipping_cents: default_flat_shipping(),
        }
    }
}

impl PricingConfig {
    pub fn rules(&self) -> PricingRules {
        PricingRules {
            tax_rate_bps: self.tax_rate_bps,
            free_shipping_threshold: Money::usd(self.free_shipping_threshold_cents),
            flat_shipping: Money::usd(self.flat_shipping_cents),
        }
    }
}

/// Product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Cart behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default)]
    pub inventory_policy: InventoryPolicy,
}

/// Display currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Used until the shopper picks one.
    #[serde(default = "default_currency")]
    pub default: String,
}

fn default_currency() -> String {
    Currency::USD.code().to_string()
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            default: default_currency(),
        }
    }
}

impl CurrencyConfig {
    /// The configured currency, USD if unrecognized.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.default).unwrap_or_default()
    }
}

/// Generate a default shopfront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Shopfront configuration

[storage]
path = "{path}"
namespace = "{namespace}"

[pricing]
# 1000 basis points = 10%
tax_rate_bps = {tax}
free_shipping_threshold_cents = {threshold}
flat_shipping_cents = {flat}

[catalog]
page_size = {page_size}

[cart]
# "unchecked" or "clamp_to_stock"
inventory_policy = "unchecked"

[currency]
default = "USD"
"#,
        path = default_storage_path(),
        namespace = DEFAULT_NAMESPACE,
        tax = TAX_RATE_BPS,
        threshold = FREE_SHIPPING_THRESHOLD_CENTS,
        flat = FLAT_SHIPPING_CENTS,
        page_size = DEFAULT_PAGE_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.storage.path, ".shopfront/state.json");
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.pricing.rules(), PricingRules::default());
        assert_eq!(config.cart.inventory_policy, InventoryPolicy::Unchecked);
        assert_eq!(config.currency.currency(), Currency::USD);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [pricing]
            tax_rate_bps = 825

            [cart]
            inventory_policy = "clamp_to_stock"
            "#,
        )
        .unwrap();
        assert_eq!(config.pricing.tax_rate_bps, 825);
        assert_eq!(config.pricing.flat_shipping_cents, 1_000);
        assert_eq!(config.cart.inventory_policy, InventoryPolicy::ClampToStock);
        assert_eq!(config.storage.namespace, "shopfront");
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopfront.json");
        std::fs::write(&path, r#"{"currency": {"default": "eur"}}"#).unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.currency.currency(), Currency::EUR);
    }

    #[test]
    fn test_validate() {
        let (errors, warnings) = CliConfig::default().validate();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        let mut config = CliConfig::default();
        config.catalog.page_size = 0;
        config.currency.default = "XXX".into();
        let (errors, warnings) = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(warnings.len(), 1);
    }
}
