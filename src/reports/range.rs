//! Sales range report
//!
//! Summarizes sales over an inclusive local date range: today, last 7 days,
//! last 30 days, or any custom window.

use chrono::{Duration, Local, NaiveDate};

use crate::models::{Entry, Money};

/// Sales summary over an inclusive date range
#[derive(Debug, Clone)]
pub struct SalesRangeReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Matching sales, newest first
    pub sales: Vec<Entry>,
    pub total_amount: Money,
    pub total_collected: Money,
    pub total_due: Money,
    pub total_bricks: u64,
    /// Distinct buyer names, exact match, sorted
    pub customers: Vec<String>,
}

impl SalesRangeReport {
    /// Compute the report over `[start, end]` (both inclusive)
    pub fn compute(entries: &[Entry], start: NaiveDate, end: NaiveDate) -> Self {
        let sales: Vec<Entry> = entries
            .iter()
            .filter(|e| {
                if !e.is_sale() {
                    return false;
                }
                let day = e.local_day();
                day >= start && day <= end
            })
            .cloned()
            .collect();

        let total_amount = sales.iter().map(|e| e.amount).sum();
        let total_collected = sales.iter().map(Entry::collected).sum();
        let total_due = sales.iter().map(Entry::due).sum();
        let total_bricks = sales.iter().map(Entry::brick_count).sum();

        let mut customers: Vec<String> = sales
            .iter()
            .filter_map(|e| e.customer_name.clone())
            .collect();
        customers.sort();
        customers.dedup();

        Self {
            start,
            end,
            sales,
            total_amount,
            total_collected,
            total_due,
            total_bricks,
            customers,
        }
    }

    /// Report for today only
    pub fn today(entries: &[Entry]) -> Self {
        let today = Local::now().date_naive();
        Self::compute(entries, today, today)
    }

    /// Report for the last `days` days ending today (inclusive)
    pub fn last_days(entries: &[Entry], days: i64) -> Self {
        let today = Local::now().date_naive();
        let start = today - Duration::days(days.saturating_sub(1).max(0));
        Self::compute(entries, start, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SaleItem;
    use chrono::{TimeZone, Utc};

    fn sale_on(day: NaiveDate, challan: u32, name: &str, qty: u32) -> Entry {
        let local = Local
            .from_local_datetime(&day.and_time(chrono::NaiveTime::MIN))
            .earliest()
            .unwrap();
        Entry::sale(
            challan,
            name,
            "Bogura",
            None,
            vec![SaleItem::new("১ নং মেশিন", qty, Money::from_taka(10))],
            Money::zero(),
            local.with_timezone(&Utc),
        )
        .unwrap()
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_range_is_inclusive_both_ends() {
        let entries = vec![
            sale_on(d(10), 1001, "Karim", 100),
            sale_on(d(15), 1002, "Rahim", 100),
            sale_on(d(20), 1003, "Salam", 100),
        ];

        let report = SalesRangeReport::compute(&entries, d(10), d(20));
        assert_eq!(report.sales.len(), 3);

        let report = SalesRangeReport::compute(&entries, d(11), d(19));
        assert_eq!(report.sales.len(), 1);
    }

    #[test]
    fn test_totals_and_bricks() {
        let entries = vec![
            sale_on(d(10), 1001, "Karim", 100),
            sale_on(d(11), 1002, "Rahim", 250),
        ];

        let report = SalesRangeReport::compute(&entries, d(10), d(11));
        assert_eq!(report.total_bricks, 350);
        assert_eq!(report.total_amount, Money::from_taka(3500));
    }

    #[test]
    fn test_distinct_customers_exact_match() {
        let entries = vec![
            sale_on(d(10), 1001, "Karim", 100),
            sale_on(d(11), 1002, "karim", 100),
            sale_on(d(12), 1003, "Karim", 100),
        ];

        let report = SalesRangeReport::compute(&entries, d(10), d(12));
        // case differs, so these are two distinct names
        assert_eq!(report.customers, vec!["Karim".to_string(), "karim".to_string()]);
    }

    #[test]
    fn test_empty_range() {
        let entries = vec![sale_on(d(10), 1001, "Karim", 100)];
        let report = SalesRangeReport::compute(&entries, d(20), d(25));
        assert!(report.sales.is_empty());
        assert!(report.customers.is_empty());
        assert_eq!(report.total_amount, Money::zero());
    }
}
