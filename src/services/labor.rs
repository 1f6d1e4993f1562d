//! Labor service
//!
//! Records the two labor entry kinds. An advance (dadon) is cash handed to
//! a contractor ahead of the season; labor work is payment owed for work
//! performed and counts as a cost of production.

use chrono::NaiveDate;

use crate::error::{KilnError, KilnResult};
use crate::models::{Entry, Money};
use crate::services::sales::timestamp_for;
use crate::storage::Storage;

/// Service for recording labor payments
pub struct LaborService<'a> {
    storage: &'a Storage,
}

impl<'a> LaborService<'a> {
    /// Create a new labor service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an advance paid to a contractor
    pub fn advance(
        &self,
        amount: Money,
        contractor_name: &str,
        date: Option<NaiveDate>,
    ) -> KilnResult<Entry> {
        let entry = Entry::labor_advance(amount, contractor_name.trim(), timestamp_for(date))
            .map_err(|e| KilnError::Validation(e.to_string()))?;

        self.storage.entries.append(entry.clone())?;
        Ok(entry)
    }

    /// Record payment for labor work performed
    pub fn work(
        &self,
        amount: Money,
        description: &str,
        date: Option<NaiveDate>,
    ) -> KilnResult<Entry> {
        let entry = Entry::labor_work(amount, description.trim(), timestamp_for(date))
            .map_err(|e| KilnError::Validation(e.to_string()))?;

        self.storage.entries.append(entry.clone())?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KilnPaths;
    use crate::models::EntryKind;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KilnPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_advance_entry() {
        let (_temp_dir, storage) = test_storage();
        let service = LaborService::new(&storage);

        let entry = service
            .advance(Money::from_taka(2000), "Rahim Majhi", None)
            .unwrap();

        assert_eq!(entry.kind, EntryKind::LaborAdvance);
        assert_eq!(entry.description, "Advance: Rahim Majhi");
    }

    #[test]
    fn test_work_entry() {
        let (_temp_dir, storage) = test_storage();
        let service = LaborService::new(&storage);

        let entry = service
            .work(Money::from_taka(1500), "Kiln loading, week 3", None)
            .unwrap();

        assert_eq!(entry.kind, EntryKind::LaborWork);
        assert_eq!(entry.category, "labor");
    }

    #[test]
    fn test_blank_contractor_rejected() {
        let (_temp_dir, storage) = test_storage();
        let service = LaborService::new(&storage);

        let err = service.advance(Money::from_taka(2000), "  ", None).unwrap_err();
        assert!(err.is_validation());
    }
}
