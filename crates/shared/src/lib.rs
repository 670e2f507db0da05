//! Shared types, errors, and configuration for fxmoney.
//!
//! This crate provides common pieces used by the money library:
//! - Currency codes
//! - Rate configuration loading
//! - Configuration error types

pub mod config;
pub mod error;
pub mod types;

pub use self::config::{AppConfig, CrossRateMode, FactorConfig, RatesConfig};
pub use error::ConfigError;
pub use types::CurrencyCode;
