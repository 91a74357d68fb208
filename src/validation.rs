// 📐 Input Validation - raw form text → typed measurement
// Field parsing never fails loudly: unparseable input is "absent" (None).
// Request validation collects every problem before rejecting the request as a whole.

use crate::error::{BmiError, FieldError, Result};
use crate::units::HeightInput;
use std::fmt;

// ============================================================================
// FIELD PARSING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    Float,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => f.write_str("integer"),
            NumericKind::Float => f.write_str("number"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

/// Parse `raw` as the requested kind, or `None` when it doesn't parse.
pub fn parse(raw: &str, kind: NumericKind) -> Option<Number> {
    match kind {
        NumericKind::Integer => parse_int(raw).map(Number::Integer),
        NumericKind::Float => parse_float(raw).map(Number::Float),
    }
}

pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Non-finite values (`nan`, `inf`) count as absent.
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// REQUEST VALIDATION
// ============================================================================

/// Form text exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMeasurement {
    pub name: String,
    pub age: String,
    pub height_feet: String,
    pub height_inches: String,
    pub height_cm: String,
    pub weight: String,
}

/// A validated request, height already normalized to meters.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub age: i64,
    pub height: f64,
    pub weight: f64,
}

pub fn validate(raw: &RawMeasurement) -> Result<Measurement> {
    let mut errors = Vec::new();

    let age = parse_int(&raw.age);
    if age.is_none() {
        errors.push(FieldError::new("age", format!("'{}' is not a valid {}", raw.age, NumericKind::Integer)));
    }

    let weight = parse_float(&raw.weight);
    if weight.is_none() {
        errors.push(FieldError::new("weight", format!("'{}' is not a valid {}", raw.weight, NumericKind::Float)));
    }

    let height_input = HeightInput {
        feet: parse_int(&raw.height_feet),
        inches: parse_int(&raw.height_inches),
        centimeters: parse_float(&raw.height_cm),
    };
    if !height_input.is_present() {
        errors.push(FieldError::new("height", BmiError::MissingHeight.to_string()));
    }

    match (age, weight, errors.is_empty()) {
        (Some(age), Some(weight), true) => Ok(Measurement {
            name: raw.name.clone(),
            age,
            height: height_input.to_meters()?,
            weight,
        }),
        _ => Err(BmiError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(age: &str, feet: &str, inches: &str, cm: &str, weight: &str) -> RawMeasurement {
        RawMeasurement {
            name: "Sam".to_string(),
            age: age.to_string(),
            height_feet: feet.to_string(),
            height_inches: inches.to_string(),
            height_cm: cm.to_string(),
            weight: weight.to_string(),
        }
    }

    fn failed_fields(err: BmiError) -> Vec<String> {
        match err {
            BmiError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_absent() {
        assert_eq!(parse("", NumericKind::Integer), None);
        assert_eq!(parse("abc", NumericKind::Float), None);
        assert_eq!(parse("1.5", NumericKind::Integer), None);
        assert_eq!(parse("nan", NumericKind::Float), None);
        assert_eq!(parse("inf", NumericKind::Float), None);
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse(" 42 ", NumericKind::Integer), Some(Number::Integer(42)));
        assert_eq!(parse("72.5", NumericKind::Float), Some(Number::Float(72.5)));
        assert_eq!(parse("70", NumericKind::Float), Some(Number::Float(70.0)));
    }

    #[test]
    fn test_valid_metric_request() {
        let m = validate(&raw("30", "", "", "180", "75")).unwrap();

        assert_eq!(m.name, "Sam");
        assert_eq!(m.age, 30);
        assert_eq!(m.height, 180.0 * 0.01);
        assert_eq!(m.weight, 75.0);
    }

    #[test]
    fn test_valid_imperial_request_without_inches() {
        let m = validate(&raw("30", "6", "", "", "80")).unwrap();
        assert_eq!(m.height, 6.0 * 0.3048);
    }

    #[test]
    fn test_invalid_age_rejects_request() {
        let err = validate(&raw("abc", "5", "10", "", "70")).unwrap_err();
        assert_eq!(failed_fields(err), ["age"]);
    }

    #[test]
    fn test_all_failures_collected() {
        let err = validate(&raw("", "", "11", "tall", "heavy")).unwrap_err();
        assert_eq!(failed_fields(err), ["age", "weight", "height"]);
    }

    #[test]
    fn test_invalid_centimeters_fall_back_to_feet() {
        let m = validate(&raw("30", "5", "10", "abc", "70")).unwrap();
        assert_eq!(m.height, 5.0 * 0.3048 + 10.0 * 0.0254);
    }
}
