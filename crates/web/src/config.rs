//! Application configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use bizinvoice_infra::{DEFAULT_STORAGE_KEY, KeyValueStorage};

use crate::format::CurrencyFormat;

/// Storage key the settings JSON is read from.
pub const SETTINGS_KEY: &str = "bizinvoice_settings";

/// Settings for one invoice log instance. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key the invoice list is persisted under.
    pub storage_key: String,
    pub currency: CurrencyFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency: CurrencyFormat::usd(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw).context("failed to parse app config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Read settings stored as JSON under `key`. Defaults when nothing is stored.
    pub fn from_storage(storage: &impl KeyValueStorage, key: &str) -> anyhow::Result<Self> {
        let raw = storage
            .get_item(key)
            .with_context(|| format!("failed to read app config from {key:?}"))?;
        match raw {
            Some(raw) => {
                Self::from_json(&raw).with_context(|| format!("invalid app config at {key:?}"))
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.storage_key.trim().is_empty(), "storage_key must not be empty");
        anyhow::ensure!(
            self.currency.fraction_digits <= 6,
            "currency.fraction_digits must be at most 6 (got {})",
            self.currency.fraction_digits
        );
        Ok(())
    }
}
