pub mod csv;

pub use csv::write_csv;

use crate::error::Result;
use crate::types::OpgRecord;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Upsert-keyed-by-title record store
///
/// A recurring title supersedes the earlier record; records are never
/// merged. Each hand-off is independent and atomic from the caller's
/// point of view.
pub trait RecordStore {
    /// Inserts a record, replacing any earlier record with the same title
    fn upsert(&mut self, record: OpgRecord) -> Result<()>;
}

/// JSON-file-backed record store
///
/// Holds a title-keyed map in memory, loaded on open and written back
/// on [`JsonStore::flush`]. Suitable for datasets of the size this tool
/// targets (hundreds to low thousands of radiographs).
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    records: BTreeMap<String, OpgRecord>,
}

impl JsonStore {
    /// Opens a store, loading existing records when the file exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let text = fs::read_to_string(&path)?;
            serde_json::from_str(&text)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, records })
    }

    /// Writes the current records back to the backing file
    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for a title, if stored
    pub fn get(&self, title: &str) -> Option<&OpgRecord> {
        self.records.get(title)
    }

    /// All records, ordered by title
    pub fn records(&self) -> impl Iterator<Item = &OpgRecord> {
        self.records.values()
    }
}

impl RecordStore for JsonStore {
    fn upsert(&mut self, record: OpgRecord) -> Result<()> {
        self.records.insert(record.title.clone(), record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sex;
    use tempfile::tempdir;

    fn record(title: &str, age: u32) -> OpgRecord {
        OpgRecord {
            title: title.to_string(),
            age: Some(age),
            sex: Some(Sex::F),
            length_13: Some(20.5),
            length_23: None,
            length_33: Some(19.0),
            length_43: Some(19.8),
            distance_13_23: None,
            distance_33_43: Some(28.2),
        }
    }

    #[test]
    fn test_upsert_supersedes_by_title() {
        let dir = tempdir().unwrap();
        let mut store = JsonStore::open(dir.path().join("opg.json")).unwrap();

        store.upsert(record("0001-14-ani-F", 14)).unwrap();
        store.upsert(record("0001-14-ani-F", 15)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("0001-14-ani-F").unwrap().age, Some(15));
    }

    #[test]
    fn test_flush_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("opg.json");

        let mut store = JsonStore::open(&path).unwrap();
        store.upsert(record("b-title", 9)).unwrap();
        store.upsert(record("a-title", 11)).unwrap();
        store.flush().unwrap();

        let reloaded = JsonStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("a-title").unwrap().age, Some(11));

        // Ordered by title
        let titles: Vec<&str> = reloaded.records().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a-title", "b-title"]);
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }
}
