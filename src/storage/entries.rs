//! Entry repository for JSON storage
//!
//! Holds the ledger in memory newest-first and writes through to
//! entries.json on every mutation. A failed write is reported to the caller
//! but the in-memory mutation stands; the next successful save persists it.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{KilnError, KilnResult};
use crate::models::{Entry, EntryId};

use super::file_io::{read_json_lenient, write_json_atomic};

/// Serializable entry data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EntryData {
    entries: Vec<Entry>,
}

/// Repository for entry persistence
///
/// Entries are kept newest-first; new entries are prepended.
pub struct EntryStore {
    path: PathBuf,
    data: RwLock<Vec<Entry>>,
}

impl EntryStore {
    /// Create a new entry store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk
    ///
    /// A missing file loads as an empty ledger. A malformed file also loads
    /// as empty and returns a warning message rather than an error.
    pub fn load(&self) -> KilnResult<Option<String>> {
        let (file_data, warning): (EntryData, _) = read_json_lenient(&self.path);

        let mut data = self
            .data
            .write()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.entries;

        Ok(warning)
    }

    /// Save entries to disk
    pub fn save(&self) -> KilnResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = EntryData {
            entries: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append a new entry at the head of the ledger and persist
    pub fn append(&self, entry: Entry) -> KilnResult<()> {
        {
            let mut data = self
                .data
                .write()
                .map_err(|e| KilnError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            data.insert(0, entry);
        }
        self.save()
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> KilnResult<Option<Entry>> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all entries, newest first
    pub fn all(&self) -> KilnResult<Vec<Entry>> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Replace the entire ledger and persist (snapshot restore)
    pub fn replace_all(&self, entries: Vec<Entry>) -> KilnResult<()> {
        {
            let mut data = self
                .data
                .write()
                .map_err(|e| KilnError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            *data = entries;
        }
        self.save()
    }

    /// Mark a sale settled
    ///
    /// Returns `Ok(false)` when no entry has this ID. Fails with
    /// `InvalidEntryKind` when the entry exists but is not a sale.
    pub fn mark_paid(&self, id: EntryId) -> KilnResult<bool> {
        let found = {
            let mut data = self
                .data
                .write()
                .map_err(|e| KilnError::Storage(format!("Failed to acquire write lock: {}", e)))?;

            match data.iter_mut().find(|e| e.id == id) {
                Some(entry) => {
                    if !entry.is_sale() {
                        return Err(KilnError::InvalidEntryKind {
                            id: id.to_string(),
                            kind: entry.kind.to_string(),
                        });
                    }
                    entry.settle();
                    true
                }
                None => false,
            }
        };

        if found {
            self.save()?;
        }
        Ok(found)
    }

    /// Undo a settlement, restoring the original due from the recorded
    /// amount and paid amount
    ///
    /// Returns `Ok(false)` when no entry has this ID. Fails with
    /// `InvalidEntryKind` when the entry exists but is not a sale.
    pub fn undo_paid(&self, id: EntryId) -> KilnResult<bool> {
        let found = {
            let mut data = self
                .data
                .write()
                .map_err(|e| KilnError::Storage(format!("Failed to acquire write lock: {}", e)))?;

            match data.iter_mut().find(|e| e.id == id) {
                Some(entry) => {
                    if !entry.is_sale() {
                        return Err(KilnError::InvalidEntryKind {
                            id: id.to_string(),
                            kind: entry.kind.to_string(),
                        });
                    }
                    entry.unsettle();
                    true
                }
                None => false,
            }
        };

        if found {
            self.save()?;
        }
        Ok(found)
    }

    /// Count entries
    pub fn count(&self) -> KilnResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SaleItem};
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, EntryStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("entries.json");
        let store = EntryStore::new(path);
        (temp_dir, store)
    }

    fn test_sale(challan_no: u32, paid_taka: i64) -> Entry {
        Entry::sale(
            challan_no,
            "Karim Traders",
            "Bogura",
            None,
            vec![SaleItem::new("১ নং মেশিন", 100, Money::from_taka(10))],
            Money::from_taka(paid_taka),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_file_loads_empty_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("entries.json");
        std::fs::write(&path, "{ broken").unwrap();

        let store = EntryStore::new(path);
        let warning = store.load().unwrap();
        assert!(warning.is_some());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_append_prepends_newest_first() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.append(test_sale(1001, 0)).unwrap();
        store.append(test_sale(1002, 0)).unwrap();

        let entries = store.all().unwrap();
        assert_eq!(entries[0].challan_no, Some(1002));
        assert_eq!(entries[1].challan_no, Some(1001));
    }

    #[test]
    fn test_append_persists_immediately() {
        let (temp_dir, store) = create_test_store();
        store.load().unwrap();
        store.append(test_sale(1001, 0)).unwrap();

        let store2 = EntryStore::new(temp_dir.path().join("entries.json"));
        store2.load().unwrap();
        assert_eq!(store2.count().unwrap(), 1);
    }

    #[test]
    fn test_mark_paid_settles_sale() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let sale = test_sale(1001, 400);
        let id = sale.id;
        store.append(sale).unwrap();

        assert!(store.mark_paid(id).unwrap());

        let settled = store.get(id).unwrap().unwrap();
        assert!(settled.is_settled);
        assert_eq!(settled.due(), Money::zero());
        assert_eq!(settled.paid_amount, Some(Money::from_taka(400)));
    }

    #[test]
    fn test_mark_paid_missing_id_is_noop() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();
        assert!(!store.mark_paid(EntryId::new()).unwrap());
    }

    #[test]
    fn test_mark_paid_rejects_non_sale() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let expense =
            Entry::expense(Money::from_taka(500), "Diesel", "fuel", Utc::now()).unwrap();
        let id = expense.id;
        store.append(expense).unwrap();

        let err = store.mark_paid(id).unwrap_err();
        assert!(matches!(err, KilnError::InvalidEntryKind { .. }));
    }

    #[test]
    fn test_undo_paid_restores_original_due() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let sale = test_sale(1001, 400);
        let id = sale.id;
        store.append(sale).unwrap();

        store.mark_paid(id).unwrap();
        assert!(store.undo_paid(id).unwrap());

        let restored = store.get(id).unwrap().unwrap();
        assert!(!restored.is_settled);
        assert_eq!(restored.due(), Money::from_taka(600));
    }

    #[test]
    fn test_settlement_survives_reload() {
        let (temp_dir, store) = create_test_store();
        store.load().unwrap();

        let sale = test_sale(1001, 0);
        let id = sale.id;
        store.append(sale).unwrap();
        store.mark_paid(id).unwrap();

        let store2 = EntryStore::new(temp_dir.path().join("entries.json"));
        store2.load().unwrap();
        assert!(store2.get(id).unwrap().unwrap().is_settled);
    }

    #[test]
    fn test_replace_all() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();
        store.append(test_sale(1001, 0)).unwrap();

        store.replace_all(vec![test_sale(2001, 0), test_sale(2002, 0)]).unwrap();

        let entries = store.all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].challan_no, Some(2001));
    }
}
