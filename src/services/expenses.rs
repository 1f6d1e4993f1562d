//! Expense service

use chrono::NaiveDate;

use crate::error::{KilnError, KilnResult};
use crate::models::{Entry, Money};
use crate::services::sales::timestamp_for;
use crate::storage::Storage;

/// Service for recording business expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense
    pub fn create(
        &self,
        amount: Money,
        description: &str,
        category: &str,
        date: Option<NaiveDate>,
    ) -> KilnResult<Entry> {
        let category = if category.trim().is_empty() {
            "general"
        } else {
            category.trim()
        };

        let entry = Entry::expense(amount, description.trim(), category, timestamp_for(date))
            .map_err(|e| KilnError::Validation(e.to_string()))?;

        self.storage.entries.append(entry.clone())?;
        Ok(entry)
    }
}
