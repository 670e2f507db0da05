//! Currency conversion paths.
//!
//! Factors are stored relative to the base currency only
//! (1 base = factor units of the other currency), so every conversion
//! follows one of four paths:
//! - identity (source == target)
//! - from base (multiply by the target factor)
//! - to base (divide by the source factor)
//! - cross (through the base, see [`CrossRateMode`])
//!
//! Results are never rounded here. Rounding happens only for display.

use fxmoney_shared::CrossRateMode;
use rust_decimal::Decimal;

use super::error::{MoneyError, MoneyResult};

/// How an amount travels from one currency to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPath {
    /// Source and target are the same currency.
    Identity,
    /// Source is the base currency.
    FromBase {
        /// Factor of the target currency.
        factor: Decimal,
    },
    /// Target is the base currency.
    ToBase {
        /// Factor of the source currency.
        factor: Decimal,
    },
    /// Neither side is the base: source -> base -> target.
    ViaBase {
        /// Factor of the source currency.
        source: Decimal,
        /// Factor of the target currency.
        target: Decimal,
    },
    /// Neither side is the base: product of both factors.
    FactorProduct {
        /// Factor of the source currency.
        source: Decimal,
        /// Factor of the target currency.
        target: Decimal,
    },
}

impl ConversionPath {
    /// Builds the cross path for two non-base currencies.
    #[must_use]
    pub const fn cross(mode: CrossRateMode, source: Decimal, target: Decimal) -> Self {
        match mode {
            CrossRateMode::ViaBase => Self::ViaBase { source, target },
            CrossRateMode::FactorProduct => Self::FactorProduct { source, target },
        }
    }

    /// Converts an amount along this path.
    ///
    /// The to-base leg divides by the factor instead of multiplying by its
    /// inverse, so base -> X -> base reproduces the original amount exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the result does not fit in a `Decimal`.
    pub fn apply(self, amount: Decimal) -> MoneyResult<Decimal> {
        let converted = match self {
            Self::Identity => Some(amount),
            Self::FromBase { factor } => amount.checked_mul(factor),
            Self::ToBase { factor } => amount.checked_div(factor),
            Self::ViaBase { source, target } => amount
                .checked_div(source)
                .and_then(|in_base| in_base.checked_mul(target)),
            Self::FactorProduct { source, target } => amount
                .checked_mul(source)
                .and_then(|partial| partial.checked_mul(target)),
        };
        converted.ok_or(MoneyError::Overflow)
    }

    /// Returns the effective rate (1 source unit = rate target units).
    ///
    /// Returns `None` if the rate itself overflows.
    #[must_use]
    pub fn rate(self) -> Option<Decimal> {
        self.apply(Decimal::ONE).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_identity() {
        assert_eq!(ConversionPath::Identity.apply(dec!(12.34)).unwrap(), dec!(12.34));
        assert_eq!(ConversionPath::Identity.rate(), Some(Decimal::ONE));
    }

    #[test]
    fn test_from_base() {
        // 20 USD * 0.8 = 16 EUR
        let path = ConversionPath::FromBase { factor: dec!(0.8) };
        assert_eq!(path.apply(dec!(20)).unwrap(), dec!(16));
    }

    #[test]
    fn test_to_base() {
        // 10 EUR / 0.8 = 12.5 USD
        let path = ConversionPath::ToBase { factor: dec!(0.8) };
        assert_eq!(path.apply(dec!(10)).unwrap(), dec!(12.5));
        assert_eq!(path.rate(), Some(dec!(1.25)));
    }

    #[test]
    fn test_to_base_is_exact_inverse() {
        // 15 / 0.75 = 20 exactly, where 15 * (1 / 0.75) would not be
        let path = ConversionPath::ToBase { factor: dec!(0.75) };
        assert_eq!(path.apply(dec!(15)).unwrap(), dec!(20));
    }

    #[test]
    fn test_cross_via_base() {
        // base USD, EUR 0.8, GBP 0.5: 8 EUR = 10 USD = 5 GBP
        let path = ConversionPath::cross(CrossRateMode::ViaBase, dec!(0.8), dec!(0.5));
        assert_eq!(
            path,
            ConversionPath::ViaBase {
                source: dec!(0.8),
                target: dec!(0.5)
            }
        );
        assert_eq!(path.apply(dec!(8)).unwrap(), dec!(5));
    }

    #[test]
    fn test_cross_factor_product() {
        // legacy: 8 * 0.8 * 0.5 = 3.2
        let path = ConversionPath::cross(CrossRateMode::FactorProduct, dec!(0.8), dec!(0.5));
        assert_eq!(path.apply(dec!(8)).unwrap(), dec!(3.2));
    }

    #[test]
    fn test_overflow() {
        let path = ConversionPath::FromBase { factor: dec!(1000) };
        assert_eq!(path.apply(Decimal::MAX), Err(MoneyError::Overflow));
    }
}
