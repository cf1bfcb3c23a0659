//! Numeric literal parsing and formatting.
//!
//! SNBT numeric literals carry optional type suffixes: a width suffix
//! (`b`/`s`/`i`/`l` for byte/short/int/long) optionally preceded by a
//! signedness suffix (`u`/`s`). [`parse_int`] validates the value against the
//! suffixed width and reinterprets unsigned upper-half values as their
//! two's-complement negatives, because that is how the game stores them.
//! [`parse_float`] accepts an optional `d`/`f` suffix and range-checks the
//! magnitude against the suffixed type.
//!
//! Formatting is the other half of the contract: [`format_int`] appends `L`
//! to values outside the 32-bit unsigned range, and [`format_float`] rounds
//! to a configured number of decimal places while keeping at least one
//! fractional digit, so `1.0` never degrades to the integer-looking `1`.
//!
//! ## Examples
//!
//! ```rust
//! use snbt::number::{format_int, parse_int};
//!
//! assert_eq!(parse_int("0x10").unwrap(), 16);
//! assert_eq!(parse_int("100_000").unwrap(), 100_000);
//! assert_eq!(parse_int("255ub").unwrap(), -1);
//! assert!(parse_int("200b").is_err());
//!
//! assert_eq!(format_int(12), "12");
//! assert_eq!(format_int(5_000_000_000), "5000000000L");
//! ```

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static INT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(0[xX][0-9a-fA-F_]+|0[bB][01_]+|[0-9][0-9_]*)([uUsS]?)([bBsSiIlL]?)$")
        .unwrap()
});

static FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?(?:[0-9][0-9_]*)?\.?[0-9][0-9_]*(?:[eE][+-]?[0-9]+)?)([dDfF]?)$").unwrap()
});

/// Formats an integer as SNBT text.
///
/// Values whose magnitude exceeds the 32-bit unsigned range get an `L`
/// suffix, since the game will otherwise reject them as int overflow.
///
/// # Examples
///
/// ```rust
/// use snbt::number::format_int;
///
/// assert_eq!(format_int(-17), "-17");
/// assert_eq!(format_int(0xFFFF_FFFF), "4294967295");
/// assert_eq!(format_int(0x1_0000_0000), "4294967296L");
/// ```
#[must_use]
pub fn format_int(value: i64) -> String {
    if value.unsigned_abs() > 0xFFFF_FFFF {
        format!("{value}L")
    } else {
        value.to_string()
    }
}

/// Formats a float rounded to `precision` decimal places.
///
/// The result always keeps a fractional part (`1.0`, never `1`). No type
/// suffix is appended; the serializer adds one based on context.
///
/// # Examples
///
/// ```rust
/// use snbt::number::format_float;
///
/// assert_eq!(format_float(1.0, 3), "1.0");
/// assert_eq!(format_float(1.12345, 3), "1.123");
/// assert_eq!(format_float(1.111, 1), "1.1");
/// ```
#[must_use]
pub fn format_float(value: f64, precision: u32) -> String {
    let scale = 10f64.powi(precision.max(1) as i32);
    let scaled = value * scale;
    // Magnitudes near f64::MAX overflow to infinity when scaled; emit the
    // value unrounded instead of "inf".
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };
    let mut out = rounded.to_string();
    if !out.contains('.') && !out.contains('e') && rounded.is_finite() {
        out.push_str(".0");
    }
    out
}

/// Parses an SNBT integer literal.
///
/// Accepts an optional sign, an optional `0x` (hex) or `0b` (binary) prefix,
/// digits with `_` separators, an optional signedness suffix (`u`/`s`), and
/// an optional width suffix (`b`/`s`/`i`/`l`).
///
/// When a width suffix is present the value is range-checked against that
/// width; with a `u` suffix the unsigned upper half of the range maps to the
/// two's-complement negative the game actually stores. A signedness suffix
/// without a width suffix is an error, because there is nothing to check it
/// against. With no suffix at all the value is returned unchecked.
///
/// # Errors
///
/// [`Error::NotANumber`] for malformed text, [`Error::OutOfRange`] when the
/// value exceeds the suffixed width (or `i64` itself), and
/// [`Error::MissingWidth`] for a signedness suffix with no width suffix.
///
/// # Examples
///
/// ```rust
/// use snbt::number::parse_int;
///
/// assert_eq!(parse_int("-42").unwrap(), -42);
/// assert_eq!(parse_int("0b1010").unwrap(), 10);
/// assert_eq!(parse_int("127b").unwrap(), 127);
/// assert_eq!(parse_int("200ub").unwrap(), -56);
/// assert!(parse_int("200u").is_err());
/// ```
pub fn parse_int(text: &str) -> Result<i64> {
    let caps = INT_RE
        .captures(text)
        .ok_or_else(|| Error::not_a_number(text))?;
    let negative = &caps[1] == "-";
    let digits = caps[2].replace('_', "");
    let mut signedness = caps[3].to_ascii_lowercase();
    let mut width = caps[4].to_ascii_lowercase();
    // A lone trailing 's' is the short width, not signedness.
    if width.is_empty() && signedness == "s" {
        width = std::mem::take(&mut signedness);
    }

    let magnitude = parse_magnitude(&digits).ok_or_else(|| Error::not_a_number(text))?;
    let value: i128 = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };

    let (bits, kind) = match width.as_str() {
        "b" => (8, "byte"),
        "s" => (16, "short"),
        "i" => (32, "int"),
        "l" => (64, "long"),
        _ => {
            if !signedness.is_empty() {
                return Err(Error::missing_width(text));
            }
            return i64::try_from(value).map_err(|_| Error::out_of_range(text, "long"));
        }
    };

    if signedness == "u" {
        let max: i128 = (1 << bits) - 1;
        if value < 0 || value > max {
            return Err(Error::out_of_range(text, kind));
        }
        // Upper half of the unsigned range is the negative signed range.
        let half: i128 = 1 << (bits - 1);
        let signed = if value >= half {
            value - (1 << bits)
        } else {
            value
        };
        Ok(signed as i64)
    } else {
        let half: i128 = 1 << (bits - 1);
        if value < -half || value >= half {
            return Err(Error::out_of_range(text, kind));
        }
        Ok(value as i64)
    }
}

fn parse_magnitude(digits: &str) -> Option<u128> {
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u128::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        u128::from_str_radix(bin, 2).ok()
    } else {
        digits.parse().ok()
    }
}

/// Parses an SNBT float literal.
///
/// Accepts an optional sign, a decimal mantissa with `_` separators, an
/// optional exponent, and an optional `d`/`f` suffix. A suffix range-checks
/// the magnitude against that type; without one the value is unchecked.
///
/// # Errors
///
/// [`Error::NotANumber`] for malformed text and [`Error::OutOfRange`] when
/// the magnitude exceeds the suffixed type.
///
/// # Examples
///
/// ```rust
/// use snbt::number::parse_float;
///
/// assert_eq!(parse_float("2.5").unwrap(), 2.5);
/// assert_eq!(parse_float("1_000.25f").unwrap(), 1000.25);
/// assert_eq!(parse_float("-1e3d").unwrap(), -1000.0);
/// assert!(parse_float("1e40f").is_err());
/// ```
pub fn parse_float(text: &str) -> Result<f64> {
    let caps = FLOAT_RE
        .captures(text)
        .ok_or_else(|| Error::not_a_number(text))?;
    let mantissa = caps[1].replace('_', "");
    let suffix = caps[2].to_ascii_lowercase();

    let value: f64 = mantissa.parse().map_err(|_| Error::not_a_number(text))?;
    match suffix.as_str() {
        "f" => {
            if value.abs() > f64::from(f32::MAX) {
                return Err(Error::out_of_range(text, "float"));
            }
        }
        "d" => {
            if value.is_infinite() {
                return Err(Error::out_of_range(text, "double"));
            }
        }
        _ => {}
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(-1), "-1");
        assert_eq!(format_int(4_294_967_295), "4294967295");
        assert_eq!(format_int(4_294_967_296), "4294967296L");
        assert_eq!(format_int(-4_294_967_296), "-4294967296L");
        assert_eq!(format_int(i64::MIN), "-9223372036854775808L");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0, 3), "1.0");
        assert_eq!(format_float(1.1, 3), "1.1");
        assert_eq!(format_float(1.12345, 3), "1.123");
        assert_eq!(format_float(-2.5, 3), "-2.5");
        assert_eq!(format_float(5.555, 1), "5.6");
        assert_eq!(format_float(100.0, 2), "100.0");
    }

    #[test]
    fn test_format_float_huge_magnitude() {
        let text = format_float(f64::MAX, 3);
        assert!(!text.contains("inf"));
        assert_eq!(text.parse::<f64>().unwrap(), f64::MAX);

        let text = format_float(-f64::MAX, 3);
        assert!(text.starts_with('-'));
        assert_eq!(text.parse::<f64>().unwrap(), -f64::MAX);
    }

    #[test]
    fn test_parse_int_plain() {
        assert_eq!(parse_int("0").unwrap(), 0);
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(parse_int("-42").unwrap(), -42);
        assert_eq!(parse_int("+7").unwrap(), 7);
        assert_eq!(parse_int("1_000_000").unwrap(), 1_000_000);
    }

    #[test]
    fn test_parse_int_bases() {
        assert_eq!(parse_int("0x10").unwrap(), 16);
        assert_eq!(parse_int("0xFF").unwrap(), 255);
        assert_eq!(parse_int("0b1010").unwrap(), 10);
        assert_eq!(parse_int("-0x10").unwrap(), -16);
        // Trailing hex digit that looks like a width suffix stays a digit.
        assert_eq!(parse_int("0x2b").unwrap(), 43);
    }

    #[test]
    fn test_parse_int_width_suffixes() {
        assert_eq!(parse_int("127b").unwrap(), 127);
        assert_eq!(parse_int("-128b").unwrap(), -128);
        assert_eq!(parse_int("100s").unwrap(), 100);
        assert_eq!(parse_int("40000i").unwrap(), 40_000);
        assert_eq!(parse_int("40000l").unwrap(), 40_000);
        assert!(matches!(
            parse_int("200b"),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_int("40000s"),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_int_unsigned_suffixes() {
        assert_eq!(parse_int("200ub").unwrap(), -56);
        assert_eq!(parse_int("255ub").unwrap(), -1);
        assert_eq!(parse_int("127ub").unwrap(), 127);
        assert_eq!(parse_int("65535us").unwrap(), -1);
        assert_eq!(parse_int("40000us").unwrap(), 40_000 - 65_536);
        assert!(matches!(
            parse_int("-1ub"),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_int("256ub"),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_int_signed_suffix() {
        assert_eq!(parse_int("100sb").unwrap(), 100);
        assert!(matches!(
            parse_int("200u"),
            Err(Error::MissingWidth { .. })
        ));
        assert!(matches!(
            parse_int("200su"),
            Err(Error::NotANumber { .. })
        ));
    }

    #[test]
    fn test_parse_int_short_suffix_is_width() {
        // A lone trailing 's' reads as the short width, not signedness.
        assert_eq!(parse_int("200s").unwrap(), 200);
        assert_eq!(parse_int("200ss").unwrap(), 200);
    }

    #[test]
    fn test_parse_int_long_range() {
        assert_eq!(parse_int("9223372036854775807l").unwrap(), i64::MAX);
        assert_eq!(parse_int("-9223372036854775808l").unwrap(), i64::MIN);
        assert_eq!(parse_int("18446744073709551615ul").unwrap(), -1);
        assert!(parse_int("9223372036854775808l").is_err());
        assert!(parse_int("18446744073709551616ul").is_err());
    }

    #[test]
    fn test_parse_int_rejects_garbage() {
        assert!(matches!(parse_int(""), Err(Error::NotANumber { .. })));
        assert!(matches!(parse_int("abc"), Err(Error::NotANumber { .. })));
        assert!(matches!(parse_int("1.5"), Err(Error::NotANumber { .. })));
        assert!(matches!(parse_int("12x"), Err(Error::NotANumber { .. })));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("2.5").unwrap(), 2.5);
        assert_eq!(parse_float("-0.25").unwrap(), -0.25);
        assert_eq!(parse_float(".5").unwrap(), 0.5);
        assert_eq!(parse_float("1e3").unwrap(), 1000.0);
        assert_eq!(parse_float("1_000.5").unwrap(), 1000.5);
        assert_eq!(parse_float("2.5f").unwrap(), 2.5);
        assert_eq!(parse_float("2.5d").unwrap(), 2.5);
    }

    #[test]
    fn test_parse_float_range() {
        assert!(matches!(
            parse_float("1e40f"),
            Err(Error::OutOfRange { .. })
        ));
        assert!(parse_float("1e40").is_ok());
        assert!(parse_float("1e40d").is_ok());
    }

    #[test]
    fn test_parse_float_rejects_garbage() {
        assert!(matches!(parse_float(""), Err(Error::NotANumber { .. })));
        assert!(matches!(parse_float("abc"), Err(Error::NotANumber { .. })));
        assert!(matches!(
            parse_float("1.2.3"),
            Err(Error::NotANumber { .. })
        ));
    }

    #[test]
    fn test_float_roundtrip_precision() {
        for &v in &[0.0, 1.5, -2.25, 123.456, 0.001] {
            let text = format_float(v, 3);
            let back = parse_float(&text).unwrap();
            assert!((back - v).abs() < 1e-3, "{v} -> {text} -> {back}");
        }
    }
}
