// ⚖️ BMI Engine - formula and category classification
// Classification rules as data: ordered (predicate, category) pairs, first match wins.

use crate::error::{BmiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// CLASSIFICATION RULES
// ============================================================================

pub struct CategoryRule {
    pub id: &'static str,
    pub matches: fn(f64) -> bool,
    pub category: Category,
}

/// Evaluated in order. Values in [24.9, 25.0) and [29.9, ∞) match nothing
/// and take `DEFAULT_CATEGORY`.
pub const CATEGORY_RULES: [CategoryRule; 3] = [
    CategoryRule {
        id: "underweight",
        matches: is_underweight,
        category: Category::Underweight,
    },
    CategoryRule {
        id: "normal",
        matches: is_normal,
        category: Category::Normal,
    },
    CategoryRule {
        id: "overweight",
        matches: is_overweight,
        category: Category::Overweight,
    },
];

fn is_underweight(bmi: f64) -> bool {
    bmi < 18.5
}

fn is_normal(bmi: f64) -> bool {
    (18.5..24.9).contains(&bmi)
}

fn is_overweight(bmi: f64) -> bool {
    (25.0..29.9).contains(&bmi)
}

pub const DEFAULT_CATEGORY: Category = Category::Obese;

pub fn classify(bmi: f64) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|rule| (rule.matches)(bmi))
        .map(|rule| rule.category)
        .unwrap_or(DEFAULT_CATEGORY)
}

// ============================================================================
// COMPUTATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: Category,
}

/// `weight` in kilograms, `height` in meters.
pub fn compute(weight: f64, height: f64) -> Result<BmiResult> {
    if !height.is_finite() || height <= 0.0 {
        return Err(BmiError::InvalidHeight(height));
    }

    // JSON has no representation for inf/NaN
    let bmi = weight / (height * height);
    if !bmi.is_finite() {
        return Err(BmiError::NonFiniteBmi(bmi));
    }

    let category = classify(bmi);

    tracing::debug!(weight, height, bmi, %category, "computed bmi");

    Ok(BmiResult { bmi, category })
}
