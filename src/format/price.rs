//! Price rendering with a currency symbol that may change between calls.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, RwLock};

use super::{round, Amount, FormatError};
use crate::config::FormatSettings;

pub const DEFAULT_DECIMALS: u32 = 2;

/// A value that is read at the moment it is needed.
///
/// Plain strings resolve to themselves. Shared cells and [`FromFn`] getters
/// resolve to whatever they hold at call time.
pub trait Resolve {
    fn resolve(&self) -> Cow<'_, str>;
}

impl Resolve for str {
    fn resolve(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Resolve for String {
    fn resolve(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Resolve for char {
    fn resolve(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<T: Resolve + ?Sized> Resolve for &T {
    fn resolve(&self) -> Cow<'_, str> {
        (**self).resolve()
    }
}

impl<T: Resolve + ?Sized> Resolve for Arc<T> {
    fn resolve(&self) -> Cow<'_, str> {
        (**self).resolve()
    }
}

impl Resolve for RwLock<String> {
    fn resolve(&self) -> Cow<'_, str> {
        let guard = self.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Cow::Owned(guard.clone())
    }
}

/// Resolves by calling a getter. Built with [`symbol_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a getter so it can be used wherever a [`Resolve`] is expected.
pub fn symbol_fn<F>(getter: F) -> FromFn<F>
where
    F: Fn() -> String,
{
    FromFn(getter)
}

impl<F: Fn() -> String> Resolve for FromFn<F> {
    fn resolve(&self) -> Cow<'_, str> {
        Cow::Owned((self.0)())
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Rounds `value` with [`round`] and appends the currency symbol, with no space
/// in between: `format_price(9.999, 2, "$")` is `"10$"`.
pub fn format_price(
    value: impl Into<Amount>,
    decimals: u32,
    symbol: impl Resolve,
) -> Result<String, FormatError> {
    let rounded = round(value, decimals)?;
    Ok(format!("{}{}", Amount::Number(rounded), symbol.resolve()))
}

/// A [`format_price`] with its precision and currency symbol fixed up front.
#[derive(Debug, Clone)]
pub struct PriceFormatter<S> {
    decimals: u32,
    symbol: S,
}

impl<S: Resolve> PriceFormatter<S> {
    /// Prices will be rounded to `decimals` and suffixed with `symbol`.
    pub fn new(decimals: u32, symbol: S) -> Self {
        Self { decimals, symbol }
    }

    /// Fractional digits kept by [`format`](Self::format).
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// The symbol as it resolves right now.
    pub fn symbol(&self) -> Cow<'_, str> {
        self.symbol.resolve()
    }

    /// Renders `value` as a price, e.g. `"19.99€"`.
    pub fn format(&self, value: impl Into<Amount>) -> Result<String, FormatError> {
        format_price(value, self.decimals, &self.symbol)
    }
}

impl PriceFormatter<String> {
    /// A formatter for the `[format]` section of the site config.
    pub fn from_settings(settings: &FormatSettings) -> Self {
        Self::new(settings.decimals, settings.currency_symbol.clone())
    }
}
