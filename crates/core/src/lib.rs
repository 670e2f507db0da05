//! Currency-aware money values for fxmoney.
//!
//! This crate contains pure logic with ZERO I/O dependencies.
//! Amounts are decimals tagged with a currency code; cross-currency
//! operations use static conversion factors relative to one base currency.
//!
//! # Modules
//!
//! - `currency` - Money values, conversion tables and conversion paths
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fxmoney_core::currency::{Exchange, Money};
//!
//! let exchange = Exchange::new();
//! exchange.configure("USD", [("EUR", dec!(0.8))]).unwrap();
//!
//! let ten_usd = Money::new(dec!(10), "USD").unwrap();
//! let ten_eur = Money::new(dec!(10), "EUR").unwrap();
//! assert_eq!(ten_usd.add(&ten_eur, &exchange).unwrap().to_string(), "22.50 USD");
//! ```

pub mod currency;

pub use currency::{ConversionTable, Exchange, Money, MoneyError, MoneyResult};
