//! Property-based tests for money operations.
//!
//! - Conversion: base round trip, same-currency identity, cross round trip
//! - Arithmetic: exact same-currency sums, scale inverse
//! - Comparison: antisymmetry across currencies

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{ConversionTable, CrossRateMode, Exchange, Money};

/// Strategy to generate signed amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive conversion factors (0.0001 to 10000.0000).
fn factor() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate any representable amount, up to `Decimal::MAX`.
fn any_amount() -> impl Strategy<Value = Decimal> {
    const MANTISSA: i128 = 79_228_162_514_264_337_593_543_950_335;
    (-MANTISSA..=MANTISSA, 0u32..=28)
        .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(mantissa, scale))
}

/// Strategy to generate currency codes, including lowercase and long names.
fn currency() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "USD".to_string(),
        "EUR".to_string(),
        "usd".to_string(),
        "Bitcoin".to_string(),
    ])
}

fn money(amount: Decimal, currency: &str) -> Money {
    Money::new(amount, currency).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting base -> X multiplies by the factor, and X -> base restores
    /// the original amount exactly.
    #[test]
    fn prop_base_round_trip_is_exact(amount in amount(), factor in factor()) {
        let table = ConversionTable::new("USD", [("EUR", factor)]).unwrap();
        let original = money(amount, "USD");

        let in_eur = original.convert_to("EUR", &table).unwrap();
        prop_assert_eq!(in_eur.amount(), amount * factor);

        let back = in_eur.convert_to("USD", &table).unwrap();
        prop_assert_eq!(back, original);
    }

    /// Same-currency conversion is the identity for any table state.
    #[test]
    fn prop_same_currency_is_identity(
        amount in amount(),
        currency in currency(),
        configured in any::<bool>(),
    ) {
        let exchange = Exchange::new();
        if configured {
            exchange.configure("GBP", [("JPY", dec!(190))]).unwrap();
        }
        let original = money(amount, &currency);
        prop_assert_eq!(original.convert_to(&currency, &exchange).unwrap(), original);
    }

    /// Cross conversion through the base round-trips up to decimal precision.
    #[test]
    fn prop_cross_round_trip(
        amount in amount(),
        source in factor(),
        target in factor(),
    ) {
        let table = ConversionTable::new("USD", [("EUR", source), ("GBP", target)]).unwrap();
        prop_assert_eq!(table.cross_rate(), CrossRateMode::ViaBase);

        let original = money(amount, "EUR");
        let back = original
            .convert_to("GBP", &table)
            .and_then(|gbp| gbp.convert_to("EUR", &table))
            .unwrap();
        prop_assert!(
            (back.amount() - amount).abs() <= dec!(0.000000001),
            "{} round-tripped to {}",
            amount,
            back.amount()
        );
    }

    /// Same-currency addition and subtraction are exact.
    #[test]
    fn prop_same_currency_add_subtract(a in amount(), b in amount()) {
        let exchange = Exchange::new();
        let left = money(a, "EUR");
        let right = money(b, "EUR");

        prop_assert_eq!(left.add(&right, &exchange).unwrap(), money(a + b, "EUR"));
        prop_assert_eq!(left.subtract(&right, &exchange).unwrap(), money(a - b, "EUR"));
    }

    /// Cross-currency addition always yields the left-hand currency.
    #[test]
    fn prop_add_keeps_left_currency(a in amount(), b in amount(), factor in factor()) {
        let table = ConversionTable::new("USD", [("EUR", factor)]).unwrap();
        let sum = money(a, "EUR").add(&money(b, "USD"), &table).unwrap();
        prop_assert_eq!(sum.currency().as_str(), "EUR");
        prop_assert_eq!(sum.amount(), a + b * factor);
    }

    /// Multiplying then dividing by the same non-zero factor is the identity.
    #[test]
    fn prop_scale_inverse(amount in amount(), factor in factor()) {
        let original = money(amount, "USD");
        let scaled = original.multiply(factor).unwrap();
        prop_assert_eq!(scaled.divide(factor).unwrap(), original);
    }

    /// Comparing a with b is the reverse of comparing b with a.
    #[test]
    fn prop_compare_antisymmetric(a in amount(), b in amount(), factor in factor()) {
        let table = ConversionTable::new("USD", [("EUR", factor)]).unwrap();
        let left = money(a, "USD");
        let right = money(b, "EUR");

        let forward = left.compare(&right, &table).unwrap();
        let backward = right.compare(&left, &table).unwrap();
        prop_assert_eq!(forward, backward.reverse());
    }

    /// Formatting always shows two decimals and the currency code.
    #[test]
    fn prop_format_two_decimals(amount in any_amount(), currency in currency()) {
        let formatted = money(amount, &currency).format();
        let (number, code) = formatted.split_once(' ').unwrap();
        prop_assert_eq!(code, currency.as_str());
        let decimals = number.split_once('.').map(|(_, frac)| frac.len());
        prop_assert_eq!(decimals, Some(2));
    }
}
