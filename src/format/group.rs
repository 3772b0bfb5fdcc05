//! Thousands grouping with `.` as the separator.

use super::amount::parse_decimal;
use super::{Amount, FormatError};

/// Character placed between groups of three digits.
pub const GROUP_SEPARATOR: char = '.';

/// Inserts a `.` before every complete group of three digits, counted from the
/// end of each digit run: `1234567` becomes `"1.234.567"`.
///
/// Every digit run is grouped on its own and a decimal point is not treated
/// specially, so fractional input groups its fraction too:
/// `"1234.5678"` becomes `"1.234.5.678"`.
pub fn to_formatted_amount(value: impl Into<Amount>) -> String {
    group_digits(&value.into().to_string(), GROUP_SEPARATOR)
}

/// Reverses [`to_formatted_amount`] for whole numbers by stripping every `.`.
///
/// An empty input is `0.0`. Since `.` is always read as a separator, fractional
/// values do not survive the round trip.
pub fn from_formatted_amount(value: impl Into<Amount>) -> Result<f64, FormatError> {
    let raw = value.into().to_string();
    if raw.is_empty() {
        return Ok(0.0);
    }

    let digits: String = raw.chars().filter(|&c| c != GROUP_SEPARATOR).collect();
    parse_decimal(&digits)
}

fn group_digits(raw: &str, separator: char) -> String {
    let chars: Vec<char> = raw.chars().collect();

    // Digits remaining in the current run, from each position to its end.
    let mut run_left = vec![0usize; chars.len() + 1];
    for i in (0..chars.len()).rev() {
        if chars[i].is_ascii_digit() {
            run_left[i] = run_left[i + 1] + 1;
        }
    }

    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, &ch) in chars.iter().enumerate() {
        // Only split inside a word, never right after a sign or other punctuation.
        if i > 0 && is_word_char(chars[i - 1]) && run_left[i] > 0 && run_left[i] % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_formatted_amount() {
        assert_eq!(to_formatted_amount(1234567), "1.234.567");
        assert_eq!(to_formatted_amount(1000), "1.000");
        assert_eq!(to_formatted_amount(999), "999");
        assert_eq!(to_formatted_amount(0), "0");
        assert_eq!(to_formatted_amount("12345"), "12.345");
    }

    #[test]
    fn test_to_formatted_amount_negative() {
        assert_eq!(to_formatted_amount(-1234), "-1.234");
        assert_eq!(to_formatted_amount(-123), "-123");
    }

    #[test]
    fn test_to_formatted_amount_groups_fraction_too() {
        assert_eq!(to_formatted_amount("1234.5678"), "1.234.5.678");
        assert_eq!(to_formatted_amount(1234.5), "1.234.5");
    }

    #[test]
    fn test_to_formatted_amount_exponent_form_is_not_grouped() {
        assert_eq!(to_formatted_amount(1e21), "1e+21");
        assert_eq!(to_formatted_amount(1e-7), "1e-7");
        assert_eq!(to_formatted_amount(1e20), "100.000.000.000.000.000.000");
        assert_eq!(to_formatted_amount(0.000001), "0.000.001");
    }

    #[test]
    fn test_from_formatted_amount() {
        assert_eq!(from_formatted_amount("1.234.567").unwrap(), 1234567.0);
        assert_eq!(from_formatted_amount("999").unwrap(), 999.0);
        assert_eq!(from_formatted_amount(42).unwrap(), 42.0);
        assert_eq!(from_formatted_amount("").unwrap(), 0.0);
        assert_eq!(from_formatted_amount(Amount::Absent).unwrap(), 0.0);
    }

    #[test]
    fn test_from_formatted_amount_drops_fraction_separator() {
        assert_eq!(from_formatted_amount("12.5").unwrap(), 125.0);
    }

    #[test]
    fn test_from_formatted_amount_rejects_garbage() {
        assert!(from_formatted_amount("1.2x4").is_err());
    }

    #[test]
    fn test_whole_numbers_round_trip() {
        for n in [7u64, 1_000, 65_536, 1_234_567_890] {
            let grouped = to_formatted_amount(n);
            assert_eq!(from_formatted_amount(grouped).unwrap(), n as f64);
        }
    }
}
