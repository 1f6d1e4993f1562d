//! Daily sales report
//!
//! Buckets sales by local calendar day so a memo written at 11 pm stays on
//! the operator's day, not the UTC one.

use chrono::NaiveDate;

use crate::models::{Entry, Money};

/// Sales recorded on one local calendar day
#[derive(Debug, Clone)]
pub struct DailySales {
    pub day: NaiveDate,
    /// Sales for the day, newest first
    pub sales: Vec<Entry>,
    pub total_amount: Money,
    pub total_collected: Money,
    pub total_due: Money,
    pub total_bricks: u64,
}

impl DailySales {
    /// Compute the report for one day from a newest-first ledger
    pub fn compute(entries: &[Entry], day: NaiveDate) -> Self {
        let sales: Vec<Entry> = entries
            .iter()
            .filter(|e| e.is_sale() && e.local_day() == day)
            .cloned()
            .collect();

        let total_amount = sales.iter().map(|e| e.amount).sum();
        let total_collected = sales.iter().map(Entry::collected).sum();
        let total_due = sales.iter().map(Entry::due).sum();
        let total_bricks = sales.iter().map(Entry::brick_count).sum();

        Self {
            day,
            sales,
            total_amount,
            total_collected,
            total_due,
            total_bricks,
        }
    }

    /// Check if the day had no sales
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
