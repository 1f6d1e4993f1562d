//! Terminal display formatting for kiln-ledger

pub mod entry;
pub mod memo;
pub mod report;

pub use entry::{format_entry_details, format_entry_register, format_entry_row};
pub use memo::format_memo;
pub use report::{format_customers, format_daily, format_due, format_range, format_summary};
