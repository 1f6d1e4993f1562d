//! Sales service
//!
//! Creates sale memos: assigns challan numbers, resolves buyer addresses
//! from the party directory, and appends the finished entry to the ledger.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::error::{KilnError, KilnResult};
use crate::models::{Entry, Money, SaleItem};
use crate::services::challan::{challan_in_use, next_challan_no};
use crate::storage::Storage;

/// Input for creating a sale
#[derive(Debug, Clone)]
pub struct NewSale {
    /// Buyer name (free text; the directory is only a convenience)
    pub customer_name: String,
    /// Buyer address; looked up from the directory when empty
    pub customer_address: Option<String>,
    /// Delivery vehicle number
    pub vehicle_no: Option<String>,
    /// Line items
    pub items: Vec<SaleItem>,
    /// Cash collected now
    pub paid_amount: Money,
    /// Memo date; defaults to today
    pub date: Option<NaiveDate>,
    /// Explicit challan number; defaults to the next sequential one
    pub challan_no: Option<u32>,
}

/// A sale that was recorded, with a note when its challan number collides
/// with an existing memo
#[derive(Debug, Clone)]
pub struct RecordedSale {
    pub entry: Entry,
    pub duplicate_challan: bool,
}

/// Service for recording sales
pub struct SalesService<'a> {
    storage: &'a Storage,
}

impl<'a> SalesService<'a> {
    /// Create a new sales service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a sale
    ///
    /// A duplicate challan number is accepted but flagged on the result so
    /// the caller can warn the operator.
    pub fn create(&self, input: NewSale) -> KilnResult<RecordedSale> {
        let entries = self.storage.entries.all()?;

        let challan_no = input.challan_no.unwrap_or_else(|| next_challan_no(&entries));
        let duplicate_challan = challan_in_use(&entries, challan_no);

        // Fall back to the directory address when none was given
        let address = match input.customer_address {
            Some(addr) => addr,
            None => self
                .storage
                .customers
                .find_by_name(input.customer_name.trim())?
                .map(|c| c.address)
                .unwrap_or_default(),
        };

        let entry = Entry::sale(
            challan_no,
            input.customer_name.trim(),
            address,
            input.vehicle_no.filter(|v| !v.trim().is_empty()),
            input.items,
            input.paid_amount,
            timestamp_for(input.date),
        )
        .map_err(|e| KilnError::Validation(e.to_string()))?;

        self.storage.entries.append(entry.clone())?;

        Ok(RecordedSale {
            entry,
            duplicate_challan,
        })
    }
}

/// Resolve an optional memo date to a concrete instant
///
/// A given date maps to local midnight of that day so day bucketing puts the
/// entry where the operator expects; no date means now.
pub fn timestamp_for(date: Option<NaiveDate>) -> DateTime<Utc> {
    match date {
        Some(d) => {
            let naive = d.and_time(chrono::NaiveTime::MIN);
            match Local.from_local_datetime(&naive).earliest() {
                Some(local) => local.with_timezone(&Utc),
                None => Utc::now(),
            }
        }
        None => Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KilnPaths;
    use crate::models::Customer;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KilnPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn brick_items() -> Vec<SaleItem> {
        vec![SaleItem::new("১ নং মেশিন", 100, Money::from_taka(10))]
    }

    fn new_sale(name: &str) -> NewSale {
        NewSale {
            customer_name: name.to_string(),
            customer_address: None,
            vehicle_no: None,
            items: brick_items(),
            paid_amount: Money::zero(),
            date: None,
            challan_no: None,
        }
    }

    #[test]
    fn test_first_sale_gets_base_challan() {
        let (_temp_dir, storage) = test_storage();
        let service = SalesService::new(&storage);

        let recorded = service.create(new_sale("Karim")).unwrap();
        assert_eq!(recorded.entry.challan_no, Some(1001));
        assert!(!recorded.duplicate_challan);
    }

    #[test]
    fn test_challan_numbers_are_sequential() {
        let (_temp_dir, storage) = test_storage();
        let service = SalesService::new(&storage);

        service.create(new_sale("Karim")).unwrap();
        let second = service.create(new_sale("Rahim")).unwrap();
        assert_eq!(second.entry.challan_no, Some(1002));
    }

    #[test]
    fn test_duplicate_challan_flagged_but_recorded() {
        let (_temp_dir, storage) = test_storage();
        let service = SalesService::new(&storage);

        service.create(new_sale("Karim")).unwrap();

        let mut input = new_sale("Rahim");
        input.challan_no = Some(1001);
        let recorded = service.create(input).unwrap();

        assert!(recorded.duplicate_challan);
        assert_eq!(storage.entries.count().unwrap(), 2);
    }

    #[test]
    fn test_address_resolved_from_directory() {
        let (_temp_dir, storage) = test_storage();
        storage
            .customers
            .append(Customer::new("Karim Traders", "Sherpur, Bogura"))
            .unwrap();

        let service = SalesService::new(&storage);
        let recorded = service.create(new_sale("Karim Traders")).unwrap();

        assert_eq!(
            recorded.entry.customer_address.as_deref(),
            Some("Sherpur, Bogura")
        );
    }

    #[test]
    fn test_explicit_address_wins() {
        let (_temp_dir, storage) = test_storage();
        storage
            .customers
            .append(Customer::new("Karim Traders", "Sherpur"))
            .unwrap();

        let service = SalesService::new(&storage);
        let mut input = new_sale("Karim Traders");
        input.customer_address = Some("Dhunat".to_string());
        let recorded = service.create(input).unwrap();

        assert_eq!(recorded.entry.customer_address.as_deref(), Some("Dhunat"));
    }

    #[test]
    fn test_overpayment_rejected() {
        let (_temp_dir, storage) = test_storage();
        let service = SalesService::new(&storage);

        let mut input = new_sale("Karim");
        input.paid_amount = Money::from_taka(5000);
        let err = service.create(input).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(storage.entries.count().unwrap(), 0);
    }

    #[test]
    fn test_backdated_sale_buckets_to_given_day() {
        let (_temp_dir, storage) = test_storage();
        let service = SalesService::new(&storage);

        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let mut input = new_sale("Karim");
        input.date = Some(date);
        let recorded = service.create(input).unwrap();

        assert_eq!(recorded.entry.local_day(), date);
    }
}
