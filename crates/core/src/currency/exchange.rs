//! Shared handle over the current conversion table.

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::conversion::ConversionPath;
use super::error::{MoneyError, MoneyResult};
use super::table::{ConversionTable, RateSource};

/// Current conversion configuration, shared between clones.
///
/// Starts unconfigured: every conversion other than the identity fails with
/// [`MoneyError::UnknownConversion`]. `configure` and `install` replace the
/// whole table in one write. Readers work on an `Arc` snapshot taken under
/// the read lock, so they never observe a half-updated base/factor pair.
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    table: Arc<RwLock<Option<Arc<ConversionTable>>>>,
}

impl Exchange {
    /// Creates an unconfigured exchange.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exchange already holding `table`.
    #[must_use]
    pub fn with_table(table: ConversionTable) -> Self {
        let exchange = Self::new();
        exchange.install(table);
        exchange
    }

    /// Validates and installs a new table, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidConfiguration`] if the table is invalid.
    /// The previous table stays in place on error.
    pub fn configure<I, K>(&self, base: impl Into<String>, factors: I) -> MoneyResult<()>
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: Into<String>,
    {
        let table = ConversionTable::new(base, factors)?;
        self.install(table);
        Ok(())
    }

    /// Installs an already validated table, replacing the previous one.
    pub fn install(&self, table: ConversionTable) {
        info!(
            base = %table.base(),
            factors = table.len(),
            cross_rate = ?table.cross_rate(),
            "Conversion table configured"
        );
        *self.table.write() = Some(Arc::new(table));
    }

    /// Drops the current table.
    pub fn reset(&self) {
        info!("Conversion table cleared");
        *self.table.write() = None;
    }

    /// Returns the current table, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<ConversionTable>> {
        self.table.read().clone()
    }

    /// Returns true if a table is installed.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.table.read().is_some()
    }
}

impl RateSource for Exchange {
    fn resolve(&self, from: &str, to: &str) -> MoneyResult<ConversionPath> {
        if from == to {
            return Ok(ConversionPath::Identity);
        }
        match self.snapshot() {
            Some(table) => table.resolve(from, to),
            None => {
                debug!(from, to, "no conversion table configured");
                Err(MoneyError::unknown_conversion(from, to))
            }
        }
    }
}
