// 🧮 Calculator - the two user actions over an injected record store
// validate → convert → compute → persist, and read → aggregate → chart.

use crate::chart::{self, Chart};
use crate::error::Result;
use crate::record::BmiRecord;
use crate::store::RecordStore;
use crate::validation::{self, RawMeasurement};

/// Validate and compute without persisting anything.
pub fn evaluate(raw: &RawMeasurement) -> Result<BmiRecord> {
    let outcome = validation::validate(raw).and_then(|m| BmiRecord::from_measurement(&m));

    if let Err(err) = &outcome {
        tracing::warn!(error = %err, "calculation request rejected");
    }
    outcome
}

/// Compute a record and append it to `store`.
/// A rejected request leaves the store untouched.
pub fn calculate_and_save<S: RecordStore + ?Sized>(store: &mut S, raw: &RawMeasurement) -> Result<BmiRecord> {
    let record = evaluate(raw)?;
    store.append(record.clone())?;
    Ok(record)
}

/// Chart of every saved record.
pub fn show_graph<S: RecordStore + ?Sized>(store: &S) -> Result<Chart> {
    let records = store.read_all()?;
    chart::render(&records)
}
