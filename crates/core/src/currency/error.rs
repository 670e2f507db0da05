//! Money error types.

use fxmoney_shared::ConfigError;
use thiserror::Error;

/// Result type alias using [`MoneyError`].
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur during money operations.
///
/// All variants describe caller misuse or missing configuration; none are
/// transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Money value could not be constructed.
    #[error("Invalid money declaration: {0}")]
    InvalidDeclaration(String),

    /// Conversion table could not be configured.
    #[error("Invalid conversion configuration: {0}")]
    InvalidConfiguration(String),

    /// No conversion rate is known for the currency pair.
    #[error("Conversion rate not specified for {from} -> {to}")]
    UnknownConversion {
        /// Source currency.
        from: String,
        /// Target currency.
        to: String,
    },

    /// Arithmetic attempted with an operand of the wrong kind.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Comparison attempted against something that is not money.
    #[error("Invalid comparison: {0}")]
    InvalidComparison(String),

    /// Money divided by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Decimal arithmetic overflowed.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl MoneyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDeclaration(_) => "INVALID_DECLARATION",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::UnknownConversion { .. } => "UNKNOWN_CONVERSION",
            Self::UnsupportedOperation(_) => "UNSUPPORTED_OPERATION",
            Self::InvalidComparison(_) => "INVALID_COMPARISON",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
        }
    }

    pub(crate) fn unknown_conversion(from: &str, to: &str) -> Self {
        Self::UnknownConversion {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Maps a currency code failure on a money value.
    pub(crate) fn declaration(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidCurrency(msg) => Self::InvalidDeclaration(msg.clone()),
            ConfigError::Load(e) => Self::InvalidDeclaration(e.to_string()),
        }
    }

    /// Maps a currency code failure on a conversion table.
    pub(crate) fn configuration(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidCurrency(msg) => Self::InvalidConfiguration(msg.clone()),
            ConfigError::Load(e) => Self::InvalidConfiguration(e.to_string()),
        }
    }
}
