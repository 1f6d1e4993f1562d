//! Export functionality for kiln-ledger
//!
//! Full-ledger JSON snapshots live in [`crate::snapshot`]; this module
//! covers tabular exports.

pub mod csv;

pub use csv::write_entries_csv;
