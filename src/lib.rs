// BMI Tracker - Core Library
// Exposes the calculation, storage and charting pieces to the terminal UI and tests

pub mod error;
pub mod units;        // Unit Converter
pub mod bmi;          // BMI Engine
pub mod validation;   // Input Validator
pub mod record;
pub mod store;        // Record Store
pub mod chart;        // Chart Renderer
pub mod calculator;
pub mod config;

// Re-export commonly used types
pub use error::{BmiError, FieldError, Result, INVALID_INPUT_MESSAGE, NO_DATA_MESSAGE};
pub use units::{to_meters, HeightInput};
pub use bmi::{classify, compute, BmiResult, Category, CATEGORY_RULES, DEFAULT_CATEGORY};
pub use validation::{parse, parse_float, parse_int, validate, Measurement, Number, NumericKind, RawMeasurement};
pub use record::BmiRecord;
pub use store::{JsonFileStore, MemoryStore, RecordStore};
pub use chart::{aggregate, render, CategoryDistribution, Chart, ChartSlice};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
