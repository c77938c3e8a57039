// ===== artiforge/src/store.rs =====
//! Embedded weight store: the local cache of published per-character weight
//! rows. Upsert-by-id semantics, CSV import, JSON persistence, and a
//! `snapshot()` boundary handing the engine a plain read-only map.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::AfResult;
use crate::weights::{CharacterStatWeight, WeightTable};

#[derive(Debug, Clone, Default)]
pub struct WeightStore {
    rows: BTreeMap<u64, CharacterStatWeight>,
}

impl WeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the row for its character id. Returns `true`
    /// when an existing row was replaced.
    pub fn upsert(&mut self, row: CharacterStatWeight) -> bool {
        self.rows.insert(row.id, row).is_some()
    }

    pub fn upsert_all(&mut self, rows: impl IntoIterator<Item = CharacterStatWeight>) {
        for row in rows {
            self.upsert(row);
        }
    }

    pub fn get(&self, id: u64) -> Option<&CharacterStatWeight> {
        self.rows.get(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &CharacterStatWeight> {
        self.rows.values()
    }

    /// Imports rows from a published weight CSV (header columns match
    /// [`CharacterStatWeight`] field names). Returns the number of rows
    /// ingested.
    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> AfResult<usize> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut count = 0;
        for row in reader.deserialize::<CharacterStatWeight>() {
            self.upsert(row?);
            count += 1;
        }
        info!("Imported {} weight rows from {:?}", count, path.as_ref());
        Ok(count)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> AfResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let rows: Vec<CharacterStatWeight> = serde_json::from_str(&content)?;
        debug!("Loaded {} weight rows from {:?}", rows.len(), path.as_ref());
        let mut store = Self::new();
        store.upsert_all(rows);
        Ok(store)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> AfResult<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let rows: Vec<&CharacterStatWeight> = self.rows.values().collect();
        fs::write(path.as_ref(), serde_json::to_string_pretty(&rows)?)?;
        Ok(())
    }

    /// Resolves the store into the plain mapping the engine consumes.
    /// Mutating the store afterwards cannot affect a snapshot already
    /// handed out.
    pub fn snapshot(&self) -> WeightTable {
        self.rows
            .values()
            .map(|row| (row.id, row.to_profile()))
            .collect()
    }
}
