// 💾 Record Store - append-only collection of BMI records
// JSON array on disk, rewritten in full on every append.
//
// Limitations: a crash mid-write can leave a truncated file, and there is no
// locking, so two processes sharing one file can lose each other's appends.

use crate::error::{BmiError, Result};
use crate::record::BmiRecord;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub trait RecordStore {
    /// Append one record, preserving insertion order.
    fn append(&mut self, record: BmiRecord) -> Result<()>;

    /// Every saved record in insertion order.
    /// Fails with `StoreUnavailable` before the first append.
    fn read_all(&self) -> Result<Vec<BmiRecord>>;
}

// ============================================================================
// JSON FILE STORE
// ============================================================================

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<BmiRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<BmiRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn save(&self, records: &[BmiRecord]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;

        fs::write(&self.path, buf)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn append(&mut self, record: BmiRecord) -> Result<()> {
        let mut records = if self.path.exists() {
            self.load()?
        } else {
            Vec::new()
        };

        records.push(record);
        self.save(&records)?;

        tracing::info!(path = %self.path.display(), total = records.len(), "record saved");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<BmiRecord>> {
        if !self.path.exists() {
            return Err(BmiError::StoreUnavailable(self.path.clone()));
        }

        let records = self.load()?;
        tracing::debug!(path = %self.path.display(), total = records.len(), "records loaded");
        Ok(records)
    }
}

// ============================================================================
// MEMORY STORE
// ============================================================================

/// Same semantics as the file store, without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Option<Vec<BmiRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: BmiRecord) -> Result<()> {
        self.records.get_or_insert_with(Vec::new).push(record);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<BmiRecord>> {
        self.records
            .clone()
            .ok_or_else(|| BmiError::StoreUnavailable(PathBuf::from("<memory>")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::Category;
    use tempfile::TempDir;

    fn record(name: &str, weight: f64) -> BmiRecord {
        BmiRecord {
            name: name.to_string(),
            age: 40,
            height: 1.8,
            weight,
            bmi: weight / (1.8 * 1.8),
            category: crate::bmi::classify(weight / (1.8 * 1.8)),
        }
    }

    #[test]
    fn test_file_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("bmi_data.json"));

        let written: Vec<_> = (0..5).map(|i| record(&format!("p{}", i), 50.0 + i as f64 * 15.0)).collect();
        for r in &written {
            store.append(r.clone()).unwrap();
        }

        assert_eq!(store.read_all().unwrap(), written);
    }

    #[test]
    fn test_duplicates_allowed() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("bmi_data.json"));

        store.append(record("same", 70.0)).unwrap();
        store.append(record("same", 70.0)).unwrap();

        assert_eq!(store.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nothing.json"));

        assert!(matches!(store.read_all(), Err(BmiError::StoreUnavailable(_))));
    }

    #[test]
    fn test_file_is_indented_json_array() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("bmi_data.json"));
        store.append(record("Kim", 100.0)).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n    {\n        \"name\": \"Kim\""));
        assert!(content.contains("\"category\": \"Obese\""));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bmi_data.json");
        fs::write(
            &path,
            r#"[{"name": "old", "age": 50, "height": 1.6, "weight": 40.0, "bmi": 15.625, "category": "Underweight"}]"#,
        )
        .unwrap();

        let mut store = JsonFileStore::new(&path);
        store.append(record("new", 70.0)).unwrap();

        let records = store.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "old");
        assert_eq!(records[0].category, Category::Underweight);
        assert_eq!(records[1].name, "new");
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bmi_data.json");
        fs::write(&path, "[{\"name\": ").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.read_all(), Err(BmiError::Serialization(_))));
        assert!(matches!(store.append(record("x", 70.0)), Err(BmiError::Serialization(_))));
    }

    #[test]
    fn test_memory_store_semantics() {
        let mut store = MemoryStore::new();
        assert!(matches!(store.read_all(), Err(BmiError::StoreUnavailable(_))));
        assert!(store.is_empty());

        store.append(record("a", 60.0)).unwrap();
        store.append(record("b", 90.0)).unwrap();

        let names: Vec<_> = store.read_all().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(store.len(), 2);
    }
}
