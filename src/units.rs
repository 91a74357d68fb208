// 📏 Unit Converter - height normalization
// Feet/inches or centimeters → meters. Centimeters always win when present.

use crate::error::{BmiError, Result};

pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_INCH: f64 = 0.0254;
pub const METERS_PER_CENTIMETER: f64 = 0.01;

/// Height as entered, before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeightInput {
    pub feet: Option<i64>,
    pub inches: Option<i64>,
    pub centimeters: Option<f64>,
}

impl HeightInput {
    pub fn imperial(feet: i64, inches: i64) -> Self {
        HeightInput {
            feet: Some(feet),
            inches: Some(inches),
            centimeters: None,
        }
    }

    pub fn metric(centimeters: f64) -> Self {
        HeightInput {
            feet: None,
            inches: None,
            centimeters: Some(centimeters),
        }
    }

    /// Whether either representation can produce a height.
    pub fn is_present(&self) -> bool {
        self.centimeters.is_some() || self.feet.is_some()
    }

    pub fn to_meters(&self) -> Result<f64> {
        to_meters(self.feet, self.inches, self.centimeters)
    }
}

/// Convert a height to meters.
///
/// Missing inches count as zero as long as feet are present.
pub fn to_meters(feet: Option<i64>, inches: Option<i64>, centimeters: Option<f64>) -> Result<f64> {
    if let Some(cm) = centimeters {
        return Ok(cm * METERS_PER_CENTIMETER);
    }

    match feet {
        Some(ft) => Ok(ft as f64 * METERS_PER_FOOT + inches.unwrap_or(0) as f64 * METERS_PER_INCH),
        None => Err(BmiError::MissingHeight),
    }
}
