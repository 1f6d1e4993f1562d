//! Due report
//!
//! Lists sales that carry an open due, plus recently settled ones so the
//! operator can verify (or undo) a settlement. Totals only count open dues.

use crate::models::{Entry, Money};

/// Open and settled dues across the ledger
#[derive(Debug, Clone)]
pub struct DueReport {
    /// Sales with an open due or a past settlement, newest first
    pub rows: Vec<Entry>,
    /// Sum of open dues
    pub total_due: Money,
    /// Number of sales still owing
    pub open_count: usize,
}

impl DueReport {
    /// Compute the report over a newest-first ledger
    pub fn compute(entries: &[Entry]) -> Self {
        Self::build(entries, |_| true)
    }

    /// Compute the report filtered by a case-insensitive substring of the
    /// buyer name or the challan number
    pub fn search(entries: &[Entry], query: &str) -> Self {
        let query = query.trim().to_lowercase();
        Self::build(entries, |e| {
            if query.is_empty() {
                return true;
            }
            let name_match = e
                .customer_name
                .as_deref()
                .map(|n| n.to_lowercase().contains(&query))
                .unwrap_or(false);
            let challan_match = e
                .challan_no
                .map(|n| n.to_string().contains(&query))
                .unwrap_or(false);
            name_match || challan_match
        })
    }

    fn build<F: Fn(&Entry) -> bool>(entries: &[Entry], filter: F) -> Self {
        let rows: Vec<Entry> = entries
            .iter()
            .filter(|e| (e.has_open_due() || (e.is_sale() && e.is_settled)) && filter(e))
            .cloned()
            .collect();

        let total_due = rows
            .iter()
            .filter(|e| e.has_open_due())
            .map(Entry::due)
            .sum();
        let open_count = rows.iter().filter(|e| e.has_open_due()).count();

        Self {
            rows,
            total_due,
            open_count,
        }
    }
}
