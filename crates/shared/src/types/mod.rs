//! Common types used across the workspace.

pub mod currency;

pub use currency::CurrencyCode;
