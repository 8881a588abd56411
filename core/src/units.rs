/// Metric conversion for unit-bearing compendium fields.
///
/// Fixed linear formulas at the scale used by the localized compendia:
/// feet scale by 0.3 to meters, miles by 1.5 to kilometers, pounds halve to
/// kilograms. Lengths round to two decimals; weights use integer division.
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("expected a numeric measurement, got {0:?}")]
    NotANumber(String),
}

/// Signature shared by the three scalar conversions.
pub type UnitFn = fn(f64) -> f64;

/// Round-half-up to two decimals, nudged by epsilon so values landing on an
/// exact .xx5 boundary after binary representation do not round down.
fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

pub fn feet_to_meters(feet: f64) -> f64 {
    round2(feet * 0.3)
}

pub fn miles_to_kilometers(miles: f64) -> f64 {
    round2(miles * 1.5)
}

pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds.trunc() / 2.0
}

/// Leading-integer parse: optional sign after leading whitespace, then
/// decimal digits. Trailing garbage ("30 ft.") is ignored, matching how the
/// source data embeds units in strings.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .count();
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| n * sign)
}

/// Extract the integral magnitude a conversion applies to, or `None` when
/// the field is empty in a way that must pass through untouched (null,
/// zero, blank string).
fn integral_magnitude(value: &Value) -> Result<Option<f64>, ConversionError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let raw = n.as_f64().unwrap_or(0.0);
            if raw == 0.0 {
                Ok(None)
            } else {
                Ok(Some(raw.trunc()))
            }
        }
        Value::String(s) => {
            if s.trim().is_empty() {
                return Ok(None);
            }
            match parse_leading_int(s) {
                Some(0) => Ok(None),
                Some(n) => Ok(Some(n as f64)),
                None => Err(ConversionError::NotANumber(s.clone())),
            }
        }
        other => Err(ConversionError::NotANumber(other.to_string())),
    }
}

/// Apply a scalar conversion to a JSON field value. Missing-data shapes
/// (null, zero, empty string) come back unchanged; anything non-numeric is a
/// `ConversionError` for the caller to report.
pub fn convert_value(value: &Value, convert: UnitFn) -> Result<Value, ConversionError> {
    match integral_magnitude(value)? {
        None => Ok(value.clone()),
        Some(magnitude) => {
            let converted = convert(magnitude);
            let number = serde_json::Number::from_f64(converted)
                .ok_or_else(|| ConversionError::NotANumber(converted.to_string()))?;
            Ok(Value::Number(number))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feet_scale_to_meters() {
        assert_eq!(feet_to_meters(10.0), 3.0);
        assert_eq!(feet_to_meters(30.0), 9.0);
        assert_eq!(feet_to_meters(5.0), 1.5);
        assert_eq!(feet_to_meters(1.0), 0.3);
    }

    #[test]
    fn miles_scale_to_kilometers() {
        assert_eq!(miles_to_kilometers(2.0), 3.0);
        assert_eq!(miles_to_kilometers(1.0), 1.5);
    }

    #[test]
    fn pounds_halve_with_integer_division() {
        assert_eq!(pounds_to_kilograms(10.0), 5.0);
        assert_eq!(pounds_to_kilograms(11.0), 5.5);
        assert_eq!(pounds_to_kilograms(11.9), 5.5);
    }

    #[test]
    fn falsy_values_pass_through() {
        assert_eq!(convert_value(&json!(0), feet_to_meters).unwrap(), json!(0));
        assert_eq!(
            convert_value(&Value::Null, feet_to_meters).unwrap(),
            Value::Null
        );
        assert_eq!(convert_value(&json!(""), feet_to_meters).unwrap(), json!(""));
    }

    #[test]
    fn numbers_are_truncated_before_converting() {
        assert_eq!(
            convert_value(&json!(10.9), feet_to_meters).unwrap(),
            json!(3.0)
        );
    }

    #[test]
    fn strings_parse_their_leading_integer() {
        assert_eq!(
            convert_value(&json!("30 ft."), feet_to_meters).unwrap(),
            json!(9.0)
        );
        assert_eq!(
            convert_value(&json!("  20"), feet_to_meters).unwrap(),
            json!(6.0)
        );
    }

    #[test]
    fn non_numeric_strings_are_errors() {
        let err = convert_value(&json!("touch"), feet_to_meters).unwrap_err();
        assert_eq!(err, ConversionError::NotANumber("touch".into()));
    }

    #[test]
    fn structured_values_are_errors() {
        assert!(convert_value(&json!({ "value": 10 }), feet_to_meters).is_err());
        assert!(convert_value(&json!([10]), feet_to_meters).is_err());
    }
}
