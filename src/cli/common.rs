//! Shared helpers for CLI command handlers

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{KilnError, KilnResult};
use crate::models::{EntryId, Money};
use crate::storage::Storage;

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> KilnResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| KilnError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Parse a money argument (taka, optional decimal paisa)
pub fn parse_money(s: &str) -> KilnResult<Money> {
    Money::parse(s).map_err(|e| KilnError::Validation(e.to_string()))
}

/// Resolve an entry reference to an ID
///
/// Operators know sales by challan number, so a plain integer looks up the
/// newest sale with that number. Anything else must be an entry UUID.
pub fn resolve_entry_ref(storage: &Storage, reference: &str) -> KilnResult<EntryId> {
    let reference = reference.trim();

    if let Ok(challan_no) = reference.parse::<u32>() {
        let entries = storage.entries.all()?;
        return entries
            .iter()
            .find(|e| e.is_sale() && e.challan_no == Some(challan_no))
            .map(|e| e.id)
            .ok_or_else(|| KilnError::entry_not_found(format!("challan #{}", challan_no)));
    }

    EntryId::from_str(reference)
        .map_err(|_| KilnError::Validation(format!("Invalid entry reference '{}'", reference)))
}
