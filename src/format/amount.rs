//! The loosely-typed numeric input accepted by every formatting helper.

use std::fmt;

use super::FormatError;

/// A value that is meant to be a number but may arrive as text, or not at all.
///
/// Conversion to `f64` happens at the boundary via [`Amount::to_number`], which
/// reports unparseable text instead of producing `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
    Absent,
}

impl Amount {
    /// Returns `true` for the values that count as zero without parsing:
    /// `Absent`, `0`, `NaN` and the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Amount::Number(n) => *n == 0.0 || n.is_nan(),
            Amount::Text(s) => s.is_empty(),
            Amount::Absent => true,
        }
    }

    /// Resolves the amount to a number. Blank amounts are `0.0`.
    pub fn to_number(&self) -> Result<f64, FormatError> {
        if self.is_blank() {
            return Ok(0.0);
        }
        match self {
            Amount::Number(n) => Ok(*n),
            Amount::Text(s) => parse_decimal(s),
            Amount::Absent => Ok(0.0),
        }
    }
}

/// Parses a plain decimal literal (`12`, `-3.5`, `.25`, `1e3`).
///
/// Surrounding whitespace is ignored. Named values such as `inf` or `NaN` are rejected.
pub(crate) fn parse_decimal(input: &str) -> Result<f64, FormatError> {
    let trimmed = input.trim();
    let invalid = || {
        tracing::debug!(input, "rejecting non-numeric amount");
        FormatError::InvalidNumber {
            input: input.to_string(),
        }
    };

    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return Err(invalid());
    }

    trimmed.parse::<f64>().map_err(|_| invalid())
}

/// Magnitudes outside `[1e-6, 1e21)` are written in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;
const EXPONENT_UPPER: f64 = 1e21;

/// Renders a number the way a browser would stringify it: no trailing `.0`,
/// no negative zero, and `1e+21` / `1.5e-7` outside the plain range.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        f.write_str("0")
    } else if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.abs() >= EXPONENT_UPPER || n.abs() < EXPONENT_LOWER {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exp),
        }
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write_number(f, *n),
            Amount::Text(s) => f.write_str(s),
            Amount::Absent => Ok(()),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Amount {
                fn from(value: $ty) -> Self {
                    Amount::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

impl From<&String> for Amount {
    fn from(value: &String) -> Self {
        Amount::Text(value.clone())
    }
}

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value.map_or(Amount::Absent, Into::into)
    }
}
