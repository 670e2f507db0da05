//! Application configuration management.
//!
//! Conversion rates can be declared in `config/default.toml`,
//! `config/{RUN_MODE}.toml` or `FXMONEY__`-prefixed environment variables:
//!
//! ```toml
//! [rates]
//! base_currency = "USD"
//! cross_rate = "via_base"
//!
//! [[rates.factors]]
//! currency = "EUR"
//! factor = "0.8"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::CurrencyCode;

/// Environment variable prefix for overrides (`FXMONEY__RATES__BASE_CURRENCY`).
const ENV_PREFIX: &str = "FXMONEY";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Conversion rate configuration.
    pub rates: RatesConfig,
}

/// Static conversion rates relative to one base currency.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Currency every factor is expressed against.
    pub base_currency: String,
    /// Conversion factors (1 base = `factor` units of `currency`).
    #[serde(default)]
    pub factors: Vec<FactorConfig>,
    /// Formula used when neither side of a conversion is the base currency.
    #[serde(default)]
    pub cross_rate: CrossRateMode,
}

/// A single conversion factor entry.
///
/// The factor is kept as text so that malformed values surface as a
/// configuration error when the conversion table is built.
#[derive(Debug, Clone, Deserialize)]
pub struct FactorConfig {
    /// Currency code (case-sensitive).
    pub currency: String,
    /// Units of `currency` per one unit of the base currency.
    pub factor: String,
}

/// How a conversion between two non-base currencies is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossRateMode {
    /// Convert source to base, then base to target:
    /// `amount / factor[source] * factor[target]`.
    #[default]
    ViaBase,
    /// Multiply both base-relative factors:
    /// `amount * factor[source] * factor[target]`.
    ///
    /// Does not round-trip. Only for callers that depend on the historical
    /// product formula.
    FactorProduct,
}

impl RatesConfig {
    /// Returns the validated base currency code.
    ///
    /// # Errors
    ///
    /// Returns an error if the base currency is empty.
    pub fn base_code(&self) -> Result<CurrencyCode, ConfigError> {
        CurrencyCode::new(self.base_currency.as_str())
    }
}

impl AppConfig {
    /// Loads configuration from `.env`, config files and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Builds configuration from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or misses required keys.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
