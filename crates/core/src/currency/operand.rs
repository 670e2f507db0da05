//! Runtime-typed operands.
//!
//! The typed API on [`Money`] cannot be misused, but callers that receive
//! operands as data (JSON payloads, scripting hosts) only learn the operand
//! kind at runtime. This module checks kinds at that boundary and reports
//! mismatches as errors instead of panicking.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::error::{MoneyError, MoneyResult};
use super::money::Money;
use super::table::RateSource;

/// A runtime-typed operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A money value.
    Money(Money),
    /// A plain number.
    Number(Decimal),
    /// Anything else, described by its kind (e.g. `"string"`, `"null"`).
    Other(&'static str),
}

impl Operand {
    /// Classifies a JSON value.
    ///
    /// Numbers become [`Operand::Number`]. Objects holding both `amount` and
    /// `currency` become [`Operand::Money`]. Everything else, including
    /// numeric strings such as `"5"`, becomes [`Operand::Other`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDeclaration`] for a money object with an
    /// invalid amount or currency, or [`MoneyError::Overflow`] for a number
    /// outside the decimal range.
    pub fn from_json(value: &Value) -> MoneyResult<Self> {
        match value {
            Value::Number(n) => decimal_from_json(n).map(Self::Number),
            Value::Object(map) if map.contains_key("amount") && map.contains_key("currency") => {
                Money::from_json(value).map(Self::Money)
            }
            other => Ok(Self::Other(json_kind(other))),
        }
    }

    /// Returns the kind of this operand.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Money(_) => "money",
            Self::Number(_) => "number",
            Self::Other(kind) => *kind,
        }
    }
}

impl From<Money> for Operand {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<Decimal> for Operand {
    fn from(number: Decimal) -> Self {
        Self::Number(number)
    }
}

/// A binary money operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`, requires a money operand.
    Add,
    /// `-`, requires a money operand.
    Subtract,
    /// `*`, requires a numeric operand.
    Multiply,
    /// `/`, requires a numeric operand.
    Divide,
}

impl Operator {
    /// Returns the operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(MoneyError::UnsupportedOperation(format!(
                "unknown operator {other:?}"
            ))),
        }
    }
}

impl Money {
    /// Builds a money value from a JSON object `{"amount": 12.5, "currency": "EUR"}`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDeclaration`] if the value is not an
    /// object, the amount is not a JSON number or the currency is missing or
    /// empty.
    pub fn from_json(value: &Value) -> MoneyResult<Self> {
        let Value::Object(map) = value else {
            return Err(MoneyError::InvalidDeclaration(format!(
                "money must be an object, got {}",
                json_kind(value)
            )));
        };

        let amount = match map.get("amount") {
            Some(Value::Number(n)) => decimal_from_json(n).map_err(|_| {
                MoneyError::InvalidDeclaration(format!("amount {n} is out of range"))
            })?,
            Some(other) => {
                return Err(MoneyError::InvalidDeclaration(format!(
                    "amount must be a number, got {}",
                    json_kind(other)
                )));
            }
            None => {
                return Err(MoneyError::InvalidDeclaration(
                    "amount must be specified".to_string(),
                ));
            }
        };

        match map.get("currency") {
            Some(Value::String(code)) => Self::new(amount, code.as_str()),
            _ => Err(MoneyError::InvalidDeclaration(
                "currency must be specified".to_string(),
            )),
        }
    }

    /// Applies `op` with a runtime-typed right-hand operand.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnsupportedOperation`] if `+`/`-` receive a
    /// non-money operand or `*`/`/` receive a non-numeric one, plus any error
    /// of the underlying typed operation.
    pub fn apply<R>(&self, op: Operator, operand: &Operand, rates: &R) -> MoneyResult<Self>
    where
        R: RateSource + ?Sized,
    {
        match (op, operand) {
            (Operator::Add, Operand::Money(other)) => self.add(other, rates),
            (Operator::Subtract, Operand::Money(other)) => self.subtract(other, rates),
            (Operator::Multiply, Operand::Number(n)) => self.multiply(*n),
            (Operator::Divide, Operand::Number(n)) => self.divide(*n),
            (Operator::Add | Operator::Subtract, other) => {
                Err(MoneyError::UnsupportedOperation(format!(
                    "{op} requires a money operand, got {}",
                    other.kind()
                )))
            }
            (Operator::Multiply | Operator::Divide, other) => {
                Err(MoneyError::UnsupportedOperation(format!(
                    "{op} requires a numeric operand, got {}",
                    other.kind()
                )))
            }
        }
    }

    /// Compares with a runtime-typed operand.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidComparison`] if the operand is not money,
    /// or a conversion error.
    pub fn compare_operand<R>(&self, operand: &Operand, rates: &R) -> MoneyResult<Ordering>
    where
        R: RateSource + ?Sized,
    {
        match operand {
            Operand::Money(other) => self.compare(other, rates),
            other => Err(MoneyError::InvalidComparison(format!(
                "can only compare with money, got {}",
                other.kind()
            ))),
        }
    }
}

fn decimal_from_json(n: &serde_json::Number) -> MoneyResult<Decimal> {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| MoneyError::Overflow)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
