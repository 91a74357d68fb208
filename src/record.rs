// 🧾 BMI Record - one persisted calculation outcome
// Immutable once created: bmi is derived from weight/height, category from bmi.

use crate::bmi::{self, Category};
use crate::error::Result;
use crate::validation::Measurement;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    pub name: String,
    pub age: i64,

    /// Meters
    pub height: f64,

    /// Kilograms
    pub weight: f64,

    pub bmi: f64,
    pub category: Category,
}

impl BmiRecord {
    /// Compute a record from a validated measurement.
    pub fn from_measurement(measurement: &Measurement) -> Result<Self> {
        let result = bmi::compute(measurement.weight, measurement.height)?;

        Ok(BmiRecord {
            name: measurement.name.clone(),
            age: measurement.age,
            height: measurement.height,
            weight: measurement.weight,
            bmi: result.bmi,
            category: result.category,
        })
    }

    /// Multi-line greeting shown after a successful calculation.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Hello {},", self.name),
            format!("Your BMI is {:.2},", self.bmi),
            format!("which is considered {}.", self.category),
        ]
    }
}
