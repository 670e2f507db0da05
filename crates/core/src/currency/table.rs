//! Conversion table and rate lookup.

use std::collections::BTreeMap;
use std::str::FromStr;

use fxmoney_shared::{CrossRateMode, CurrencyCode, RatesConfig};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, trace};

use super::conversion::ConversionPath;
use super::error::{MoneyError, MoneyResult};

/// Anything that can tell how to convert between two currencies.
///
/// Implemented by [`ConversionTable`] (a fixed snapshot) and by
/// [`Exchange`](super::Exchange) (the current snapshot, possibly none).
pub trait RateSource {
    /// Resolves the conversion path from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownConversion`] if no rate path exists.
    fn resolve(&self, from: &str, to: &str) -> MoneyResult<ConversionPath>;
}

/// Static conversion factors relative to one base currency.
///
/// `factor(X)` is the number of units of `X` equal to one unit of the base.
/// A table is validated on construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionTable {
    base: CurrencyCode,
    factors: BTreeMap<CurrencyCode, Decimal>,
    cross_rate: CrossRateMode,
}

impl ConversionTable {
    /// Builds a table from typed factors.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidConfiguration`] if the base is empty, the
    /// factors are empty, a factor is not strictly positive, a currency code
    /// is empty or repeated, or the base currency appears as a factor key.
    pub fn new<I, K>(base: impl Into<String>, factors: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: Into<String>,
    {
        let base = CurrencyCode::new(base).map_err(|e| {
            MoneyError::InvalidConfiguration(format!("base currency: {e}"))
        })?;

        let mut table = BTreeMap::new();
        for (code, factor) in factors {
            let code = CurrencyCode::new(code).map_err(|e| MoneyError::configuration(&e))?;
            if code == base {
                return Err(MoneyError::InvalidConfiguration(format!(
                    "base currency {base} must not have its own factor"
                )));
            }
            if factor <= Decimal::ZERO {
                return Err(MoneyError::InvalidConfiguration(format!(
                    "factor for {code} must be positive, got {factor}"
                )));
            }
            if table.contains_key(&code) {
                return Err(MoneyError::InvalidConfiguration(format!(
                    "duplicate factor for {code}"
                )));
            }
            table.insert(code, factor);
        }

        if table.is_empty() {
            return Err(MoneyError::InvalidConfiguration(
                "conversion factors must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base,
            factors: table,
            cross_rate: CrossRateMode::default(),
        })
    }

    /// Builds a table from textual factors such as `"0.8"` or `"1e-4"`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidConfiguration`] if any factor is not a
    /// number, or for any reason listed on [`ConversionTable::new`].
    pub fn parse<I, K, V>(base: impl Into<String>, factors: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let parsed = factors
            .into_iter()
            .map(|(code, raw)| {
                let code: String = code.into();
                parse_factor(raw.as_ref())
                    .map(|factor| (code.clone(), factor))
                    .ok_or_else(|| {
                        MoneyError::InvalidConfiguration(format!(
                            "factor for {code} is not a number: {:?}",
                            raw.as_ref()
                        ))
                    })
            })
            .collect::<MoneyResult<Vec<_>>>()?;

        Self::new(base, parsed)
    }

    /// Builds a table from loaded rate configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidConfiguration`] for any invalid entry.
    pub fn from_config(config: &RatesConfig) -> MoneyResult<Self> {
        let table = Self::parse(
            config.base_currency.as_str(),
            config
                .factors
                .iter()
                .map(|entry| (entry.currency.as_str(), entry.factor.as_str())),
        )?;
        Ok(table.with_cross_rate(config.cross_rate))
    }

    /// Selects the formula used between two non-base currencies.
    #[must_use]
    pub fn with_cross_rate(mut self, mode: CrossRateMode) -> Self {
        self.cross_rate = mode;
        self
    }

    /// Returns the base currency.
    #[must_use]
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Returns the factor for a currency, if configured.
    #[must_use]
    pub fn factor(&self, currency: &str) -> Option<Decimal> {
        self.factors.get(currency).copied()
    }

    /// Returns the configured (non-base) currencies in code order.
    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.factors.keys()
    }

    /// Returns the number of configured factors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Always false: a table holds at least one factor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns the cross-rate mode.
    #[must_use]
    pub const fn cross_rate(&self) -> CrossRateMode {
        self.cross_rate
    }

    /// Returns true if `currency` is the base or has a factor.
    #[must_use]
    pub fn supports(&self, currency: &str) -> bool {
        self.base == currency || self.factors.contains_key(currency)
    }

    fn lookup(&self, currency: &str, from: &str, to: &str) -> MoneyResult<Decimal> {
        self.factor(currency).ok_or_else(|| {
            debug!(from, to, missing = currency, "unknown conversion");
            MoneyError::unknown_conversion(from, to)
        })
    }
}

impl RateSource for ConversionTable {
    fn resolve(&self, from: &str, to: &str) -> MoneyResult<ConversionPath> {
        if from == to {
            return Ok(ConversionPath::Identity);
        }

        let path = if self.base == from {
            ConversionPath::FromBase {
                factor: self.lookup(to, from, to)?,
            }
        } else if self.base == to {
            ConversionPath::ToBase {
                factor: self.lookup(from, from, to)?,
            }
        } else {
            let source = self.lookup(from, from, to)?;
            let target = self.lookup(to, from, to)?;
            ConversionPath::cross(self.cross_rate, source, target)
        };

        trace!(from, to, ?path, "resolved conversion path");
        Ok(path)
    }
}

fn parse_factor(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
