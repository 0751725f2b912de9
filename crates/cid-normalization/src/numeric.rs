//! Numeric coercion utilities.

use std::borrow::Cow;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Reads a token as an unsigned integer and returns its canonical decimal form.
///
/// Leading zeros disappear (`"007"` becomes `"7"`, `"000"` becomes `"0"`) and
/// a leading `+` is accepted. There is no width limit. Returns `None` for empty
/// strings, other signs and non-digits.
pub fn coerce_unsigned(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        Some("0".to_string())
    } else {
        Some(significant.to_string())
    }
}

/// Removes the float artifacts spreadsheets add to integer cells.
///
/// `"12345678.0"` and `"ID:12345678.00"` lose their zero fraction;
/// `"1.2345678E7"` becomes `"12345678"` when the value is an exact integer.
/// Anything else is returned unchanged.
pub fn strip_float_artifact(chunk: &str) -> Cow<'_, str> {
    if let Some((int_part, fraction)) = chunk.rsplit_once('.')
        && !fraction.is_empty()
        && fraction.bytes().all(|b| b == b'0')
        && int_part.ends_with(|c: char| c.is_ascii_digit())
    {
        return Cow::Borrowed(int_part);
    }
    if let Some(expanded) = expand_exponent(chunk) {
        return Cow::Owned(expanded);
    }
    Cow::Borrowed(chunk)
}

fn expand_exponent(chunk: &str) -> Option<String> {
    let lower = chunk.to_ascii_lowercase();
    let (mantissa, exponent) = lower.split_once('e')?;
    let mantissa_ok = !mantissa.is_empty()
        && mantissa.starts_with(|c: char| c.is_ascii_digit())
        && mantissa.chars().all(|c| c.is_ascii_digit() || c == '.');
    let exponent = exponent.strip_prefix('+').unwrap_or(exponent);
    let exponent_ok = !exponent.is_empty() && exponent.chars().all(|c| c.is_ascii_digit());
    if !mantissa_ok || !exponent_ok {
        return None;
    }
    let value = chunk.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value > MAX_EXACT_F64 {
        return None;
    }
    Some((value as u64).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_strips_leading_zeros() {
        assert_eq!(coerce_unsigned("00042").as_deref(), Some("42"));
        assert_eq!(coerce_unsigned(" 7 ").as_deref(), Some("7"));
        assert_eq!(coerce_unsigned("+5").as_deref(), Some("5"));
        assert_eq!(coerce_unsigned("000").as_deref(), Some("0"));
    }

    #[test]
    fn coerce_has_no_width_limit() {
        assert_eq!(
            coerce_unsigned("0001234567890123456789012345").as_deref(),
            Some("1234567890123456789012345")
        );
    }

    #[test]
    fn coerce_rejects_non_integers() {
        assert_eq!(coerce_unsigned(""), None);
        assert_eq!(coerce_unsigned("-1"), None);
        assert_eq!(coerce_unsigned("ID:12"), None);
        assert_eq!(coerce_unsigned("12.5"), None);
        assert_eq!(coerce_unsigned("+"), None);
        assert_eq!(coerce_unsigned("1 2"), None);
    }

    #[test]
    fn strips_trailing_zero_fraction() {
        assert_eq!(strip_float_artifact("12345678.0"), "12345678");
        assert_eq!(strip_float_artifact("ID:555.00"), "ID:555");
        assert_eq!(strip_float_artifact("12.5"), "12.5");
        assert_eq!(strip_float_artifact("v.0"), "v.0");
        assert_eq!(strip_float_artifact("100."), "100.");
    }

    #[test]
    fn expands_scientific_notation() {
        assert_eq!(strip_float_artifact("1.2345678E7"), "12345678");
        assert_eq!(strip_float_artifact("5e+3"), "5000");
        assert_eq!(strip_float_artifact("1.5e0"), "1.5e0");
        assert_eq!(strip_float_artifact("e5"), "e5");
        assert_eq!(strip_float_artifact("9e30"), "9e30");
    }
}
