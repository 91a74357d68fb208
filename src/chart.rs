// 📊 Chart Renderer - category distribution across saved records
// Pure aggregation. Drawing is left to the presentation layer.

use crate::bmi::Category;
use crate::error::{BmiError, Result};
use crate::record::BmiRecord;

pub const CHART_TITLE: &str = "BMI Categories Distribution";

/// Record count per category, always holding all four categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDistribution {
    counts: [usize; 4],
}

impl CategoryDistribution {
    pub fn count(&self, category: Category) -> usize {
        self.counts[index(category)]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// (category, count) in display order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.count(*c)))
    }

    fn add(&mut self, category: Category) {
        self.counts[index(category)] += 1;
    }
}

fn index(category: Category) -> usize {
    match category {
        Category::Underweight => 0,
        Category::Normal => 1,
        Category::Overweight => 2,
        Category::Obese => 3,
    }
}

pub fn aggregate(records: &[BmiRecord]) -> CategoryDistribution {
    let mut distribution = CategoryDistribution::default();
    for record in records {
        distribution.add(record.category);
    }
    distribution
}

// ============================================================================
// CHART MODEL
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: Category,
    pub count: usize,
    pub percent: f64,
}

impl ChartSlice {
    /// One-decimal percentage label, e.g. `33.3%`.
    pub fn label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub distribution: CategoryDistribution,
    /// Non-empty categories only
    pub slices: Vec<ChartSlice>,
}

pub fn render(records: &[BmiRecord]) -> Result<Chart> {
    if records.is_empty() {
        return Err(BmiError::NoData);
    }

    let distribution = aggregate(records);
    let total = distribution.total() as f64;

    let slices = distribution
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| ChartSlice {
            category,
            count,
            percent: count as f64 * 100.0 / total,
        })
        .collect();

    tracing::info!(records = records.len(), "chart rendered");

    Ok(Chart {
        title: CHART_TITLE,
        distribution,
        slices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Category) -> BmiRecord {
        BmiRecord {
            name: String::new(),
            age: 20,
            height: 1.0,
            weight: 20.0,
            bmi: 20.0,
            category,
        }
    }

    fn sample() -> Vec<BmiRecord> {
        vec![
            record(Category::Normal),
            record(Category::Obese),
            record(Category::Normal),
        ]
    }

    #[test]
    fn test_empty_is_no_data() {
        assert!(matches!(render(&[]), Err(BmiError::NoData)));
    }

    #[test]
    fn test_counts_default_to_zero() {
        let distribution = aggregate(&sample());

        assert_eq!(distribution.count(Category::Underweight), 0);
        assert_eq!(distribution.count(Category::Normal), 2);
        assert_eq!(distribution.count(Category::Overweight), 0);
        assert_eq!(distribution.count(Category::Obese), 1);
        assert_eq!(distribution.total(), 3);
        assert_eq!(distribution.iter().count(), 4);
    }

    #[test]
    fn test_slices_skip_empty_categories() {
        let chart = render(&sample()).unwrap();

        assert_eq!(chart.title, "BMI Categories Distribution");
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.slices[0].category, Category::Normal);
        assert_eq!(chart.slices[0].label(), "66.7%");
        assert_eq!(chart.slices[1].category, Category::Obese);
        assert_eq!(chart.slices[1].label(), "33.3%");

        let total: f64 = chart.slices.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_is_idempotent() {
        let records = sample();
        assert_eq!(render(&records).unwrap(), render(&records).unwrap());
    }
}
