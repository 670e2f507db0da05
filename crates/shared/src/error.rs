//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration or validating shared types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration sources could not be read or deserialized.
    #[error("Configuration error: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A currency code failed validation.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
}

impl ConfigError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Load(_) => "CONFIG_LOAD_ERROR",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ConfigError::InvalidCurrency(String::new()).error_code(),
            "INVALID_CURRENCY"
        );
        assert_eq!(
            ConfigError::Load(::config::ConfigError::NotFound("rates".into())).error_code(),
            "CONFIG_LOAD_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::InvalidCurrency("currency code must not be empty".into()).to_string(),
            "Invalid currency: currency code must not be empty"
        );
    }
}
