//! Money value type with currency-aware arithmetic.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`; conversions are never rounded.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};
use std::str::FromStr;

use fxmoney_shared::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::{MoneyError, MoneyResult};
use super::table::RateSource;

/// Decimal places shown by [`Money::format`].
const DISPLAY_DECIMALS: u32 = 2;

/// An immutable amount of money in one currency.
///
/// Every operation returns a new value. Derived equality is structural
/// (same currency, numerically equal amount); use [`Money::compare`] to
/// compare values across currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDeclaration`] if the currency is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use fxmoney_core::currency::Money;
    ///
    /// let fifty_eur = Money::new(dec!(50), "EUR").unwrap();
    /// assert_eq!(fifty_eur.to_string(), "50.00 EUR");
    /// ```
    pub fn new(amount: Decimal, currency: impl Into<String>) -> MoneyResult<Self> {
        let currency = CurrencyCode::new(currency).map_err(|e| MoneyError::declaration(&e))?;
        Ok(Self::from_code(amount, currency))
    }

    /// Creates a Money instance from an already validated currency code.
    #[must_use]
    pub const fn from_code(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Creates a Money instance from a textual amount such as `"12.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDeclaration`] if the amount is not a
    /// number or the currency is empty.
    pub fn parse(amount: &str, currency: impl Into<String>) -> MoneyResult<Self> {
        let trimmed = amount.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| {
                MoneyError::InvalidDeclaration(format!("amount must be a number, got {amount:?}"))
            })?;
        Self::new(value, currency)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self::from_code(Decimal::ZERO, currency)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Converts to another currency.
    ///
    /// Converting to the same currency returns an equal value without
    /// consulting `rates`, so it works even with no table configured.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownConversion`] if `rates` has no path, or
    /// [`MoneyError::Overflow`] if the converted amount does not fit.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use fxmoney_core::currency::{ConversionTable, Money};
    ///
    /// let rates = ConversionTable::new("EUR", [("USD", dec!(1.11))]).unwrap();
    /// let fifty_eur = Money::new(dec!(50), "EUR").unwrap();
    /// assert_eq!(fifty_eur.convert_to("USD", &rates).unwrap().to_string(), "55.50 USD");
    /// ```
    pub fn convert_to<R>(&self, currency: &str, rates: &R) -> MoneyResult<Self>
    where
        R: RateSource + ?Sized,
    {
        if self.currency == currency {
            return Ok(self.clone());
        }
        let path = rates.resolve(self.currency.as_str(), currency)?;
        let amount = path.apply(self.amount)?;
        Self::new(amount, currency)
    }

    /// Adds another amount, converted into this currency first.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` cannot be converted or the sum overflows.
    pub fn add<R>(&self, other: &Self, rates: &R) -> MoneyResult<Self>
    where
        R: RateSource + ?Sized,
    {
        let other = other.convert_to(self.currency.as_str(), rates)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Subtracts another amount, converted into this currency first.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` cannot be converted or the difference overflows.
    pub fn subtract<R>(&self, other: &Self, rates: &R) -> MoneyResult<Self>
    where
        R: RateSource + ?Sized,
    {
        let other = other.convert_to(self.currency.as_str(), rates)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Scales the amount by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] if the product does not fit.
    pub fn multiply(&self, factor: Decimal) -> MoneyResult<Self> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Divides the amount by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] if `divisor` is zero, or
    /// [`MoneyError::Overflow`] if the quotient does not fit.
    pub fn divide(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Sums `items` in `currency`, converting each one first.
    ///
    /// An empty iterator yields zero in `currency`.
    ///
    /// # Errors
    ///
    /// Returns the first conversion or overflow error.
    pub fn sum<'a, I, R>(items: I, currency: CurrencyCode, rates: &R) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        R: RateSource + ?Sized,
    {
        items
            .into_iter()
            .try_fold(Self::zero(currency), |total, item| total.add(item, rates))
    }

    /// Compares with another amount converted into this currency.
    ///
    /// The comparison is directional: `a.compare(b)` converts `b`, while
    /// `b.compare(a)` converts `a`.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` cannot be converted.
    pub fn compare<R>(&self, other: &Self, rates: &R) -> MoneyResult<Ordering>
    where
        R: RateSource + ?Sized,
    {
        let other = other.convert_to(self.currency.as_str(), rates)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Three-way comparison as `-1`, `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` cannot be converted.
    pub fn compare_to<R>(&self, other: &Self, rates: &R) -> MoneyResult<i8>
    where
        R: RateSource + ?Sized,
    {
        Ok(self.compare(other, rates)? as i8)
    }

    /// Returns true if both amounts are worth the same in this currency.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` cannot be converted.
    pub fn equals<R>(&self, other: &Self, rates: &R) -> MoneyResult<bool>
    where
        R: RateSource + ?Sized,
    {
        Ok(self.compare(other, rates)?.is_eq())
    }

    /// Returns true if this amount is worth less than `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` cannot be converted.
    pub fn less_than<R>(&self, other: &Self, rates: &R) -> MoneyResult<bool>
    where
        R: RateSource + ?Sized,
    {
        Ok(self.compare(other, rates)?.is_lt())
    }

    /// Returns true if this amount is worth more than `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` cannot be converted.
    pub fn greater_than<R>(&self, other: &Self, rates: &R) -> MoneyResult<bool>
    where
        R: RateSource + ?Sized,
    {
        Ok(self.compare(other, rates)?.is_gt())
    }

    /// Formats as `"<amount> <currency>"` with two decimals.
    ///
    /// Uses banker's rounding: `2.125` shows as `2.12`, `2.135` as `2.14`.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }

    fn with_amount(&self, amount: Decimal) -> Self {
        Self::from_code(amount, self.currency.clone())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self
            .amount
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointNearestEven);
        if shown.is_zero() {
            shown.set_sign_positive(true);
        }
        // precision pads even when the mantissa has no room to rescale
        write!(f, "{shown:.2} {}", self.currency)
    }
}

/// Scales with `Decimal`'s native operator.
///
/// # Panics
///
/// Panics on overflow. Use [`Money::multiply`] for a checked version.
impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self::from_code(self.amount * rhs, self.currency)
    }
}

impl Mul<Decimal> for &Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.clone() * rhs
    }
}

/// Divides with `Decimal`'s native operator.
///
/// # Panics
///
/// Panics when `rhs` is zero or on overflow. Use [`Money::divide`] for a
/// checked version.
impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self::from_code(self.amount / rhs, self.currency)
    }
}

impl Div<Decimal> for &Money {
    type Output = Money;

    fn div(self, rhs: Decimal) -> Self::Output {
        self.clone() / rhs
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_code(-self.amount, self.currency)
    }
}
