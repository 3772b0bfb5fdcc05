use super::{Amount, FormatError};

/// Precision of the intermediate rounding step applied before the requested one.
const INTERMEDIATE_DECIMALS: u32 = 3;

/// Rounds `value` to `decimals` fractional digits.
///
/// The value is first rounded to three decimals (ties toward positive infinity),
/// then to the requested precision (ties away from zero). Because of the first
/// step, inputs with more than three decimals may round differently than a
/// single direct rounding would: `round(0.0049, 2)` is `0.01`, not `0.0`.
///
/// Blank input (absent, zero, `NaN`, empty text) yields `0.0`. Text that is not
/// a decimal number is an error.
pub fn round(value: impl Into<Amount>, decimals: u32) -> Result<f64, FormatError> {
    let amount = value.into();
    if amount.is_blank() {
        return Ok(0.0);
    }

    let parsed = amount.to_number()?;
    let scale = 10f64.powi(INTERMEDIATE_DECIMALS as i32);
    let coarse = round_half_up(parsed * scale) / scale;

    let rounded = if decimals >= INTERMEDIATE_DECIMALS {
        coarse
    } else {
        round_to_fixed(coarse, decimals)
    };

    Ok(if rounded == 0.0 { 0.0 } else { rounded })
}

/// Sums the values, treating blank ones as zero.
///
/// ```
/// use storefront_kit::format::{sum, Amount};
///
/// let total = sum([Amount::from(1), Amount::from(0), Amount::Absent, Amount::from(3)])?;
/// assert_eq!(total, 4.0);
/// # Ok::<(), storefront_kit::format::FormatError>(())
/// ```
pub fn sum<I>(values: I) -> Result<f64, FormatError>
where
    I: IntoIterator,
    I::Item: Into<Amount>,
{
    values.into_iter().try_fold(0.0, |acc, value| {
        let amount: Amount = value.into();
        amount.to_number().map(|n| acc + n)
    })
}

/// Nearest integer, with halves going up.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to `decimals` digits on the exact binary value, ties away from zero.
///
/// `decimals` must be small enough for `2^(decimals + 1)` to be exact.
fn round_to_fixed(x: f64, decimals: u32) -> f64 {
    let magnitude = x.abs();

    // A tie at `decimals` digits is exactly M / 2^(decimals + 1) with M odd.
    let half_steps = magnitude * f64::from(1u32 << (decimals + 1));
    let fixed = if half_steps.fract() == 0.0 && half_steps % 2.0 == 1.0 {
        let factor = 10f64.powi(decimals as i32);
        (magnitude * factor).ceil() / factor
    } else {
        format!("{:.*}", decimals as usize, magnitude)
            .parse::<f64>()
            .unwrap_or(magnitude)
    };

    fixed.copysign(x)
}
