//! Challan (memo) number assignment
//!
//! Challan numbers are sequential integers assigned to sales. The next
//! number is always recomputed from the ledger, never cached, so it stays
//! correct after imports and restores.

use crate::models::Entry;

/// First challan number issued on an empty ledger
pub const CHALLAN_BASE: u32 = 1001;

/// Compute the next challan number from the current ledger
///
/// One greater than the highest existing sale challan number; sales without
/// a number count as zero. An empty ledger starts at [`CHALLAN_BASE`].
pub fn next_challan_no(entries: &[Entry]) -> u32 {
    let max = entries
        .iter()
        .filter(|e| e.is_sale())
        .map(|e| e.challan_no.unwrap_or(0))
        .max();

    match max {
        Some(n) => n + 1,
        None => CHALLAN_BASE,
    }
}

/// Check whether a challan number is already used by some sale
///
/// Duplicates are allowed (an operator may re-issue a memo number on
/// purpose) but callers should warn before accepting one.
pub fn challan_in_use(entries: &[Entry], challan_no: u32) -> bool {
    entries
        .iter()
        .any(|e| e.is_sale() && e.challan_no == Some(challan_no))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SaleItem};
    use chrono::Utc;

    fn sale_with_challan(challan_no: u32) -> Entry {
        Entry::sale(
            challan_no,
            "Karim",
            "Bogura",
            None,
            vec![SaleItem::new("১ নং মেশিন", 100, Money::from_taka(10))],
            Money::zero(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_ledger_starts_at_base() {
        assert_eq!(next_challan_no(&[]), 1001);
    }

    #[test]
    fn test_next_is_max_plus_one() {
        let entries = vec![sale_with_challan(1001), sale_with_challan(1005)];
        assert_eq!(next_challan_no(&entries), 1006);
    }

    #[test]
    fn test_non_sales_ignored() {
        let entries =
            vec![Entry::expense(Money::from_taka(500), "Diesel", "fuel", Utc::now()).unwrap()];
        assert_eq!(next_challan_no(&entries), 1001);
    }

    #[test]
    fn test_numbering_resumes_above_imported_sales() {
        // after a snapshot restore the highest number may be far ahead
        let entries = vec![sale_with_challan(5000)];
        assert_eq!(next_challan_no(&entries), 5001);
    }

    #[test]
    fn test_sale_missing_challan_counts_as_zero() {
        let mut sale = sale_with_challan(1001);
        sale.challan_no = None;
        assert_eq!(next_challan_no(&[sale]), 1);
    }

    #[test]
    fn test_challan_in_use() {
        let entries = vec![sale_with_challan(1001)];
        assert!(challan_in_use(&entries, 1001));
        assert!(!challan_in_use(&entries, 1002));
    }
}
