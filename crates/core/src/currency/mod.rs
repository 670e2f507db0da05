//! Money values and static-rate currency conversion.

pub mod conversion;
pub mod error;
pub mod exchange;
pub mod money;
pub mod operand;
pub mod table;

#[cfg(test)]
mod props;


pub use conversion::ConversionPath;
pub use error::{MoneyError, MoneyResult};
pub use exchange::Exchange;
pub use fxmoney_shared::{CrossRateMode, CurrencyCode};
pub use money::Money;
pub use operand::{Operand, Operator};
pub use table::{ConversionTable, RateSource};
