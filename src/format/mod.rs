//! Rounding, price and thousands-grouping helpers for presentation code.

mod amount;
mod error;
mod group;
mod price;
mod round;

pub use amount::Amount;
pub use error::FormatError;
pub use group::{from_formatted_amount, to_formatted_amount, GROUP_SEPARATOR};
pub use price::{format_price, symbol_fn, FromFn, PriceFormatter, Resolve, DEFAULT_DECIMALS};
pub use round::{round, sum};
