//! CSV export
//!
//! Writes ledger entries as CSV for spreadsheet use. Amounts are written in
//! decimal taka without the currency symbol so they import as numbers.

use std::io::Write;

use crate::error::{KilnError, KilnResult};
use crate::models::{Entry, Money};

/// Write entries as CSV
pub fn write_entries_csv<W: Write>(writer: W, entries: &[Entry]) -> KilnResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "date",
        "kind",
        "challan_no",
        "customer",
        "address",
        "vehicle",
        "description",
        "category",
        "bricks",
        "amount",
        "paid",
        "due",
        "status",
        "settled",
    ])
    .map_err(csv_err)?;

    for entry in entries {
        wtr.write_record([
            entry.local_day().format("%Y-%m-%d").to_string(),
            entry.kind.to_string(),
            entry
                .challan_no
                .map(|n| n.to_string())
                .unwrap_or_default(),
            entry.customer_name.clone().unwrap_or_default(),
            entry.customer_address.clone().unwrap_or_default(),
            entry.vehicle_no.clone().unwrap_or_default(),
            entry.description.clone(),
            entry.category.clone(),
            if entry.is_sale() {
                entry.brick_count().to_string()
            } else {
                String::new()
            },
            decimal(entry.amount),
            entry.paid_amount.map(decimal).unwrap_or_default(),
            entry.due_amount.map(decimal).unwrap_or_default(),
            entry
                .payment_status
                .map(|s| s.to_string())
                .unwrap_or_default(),
            if entry.is_sale() {
                entry.is_settled.to_string()
            } else {
                String::new()
            },
        ])
        .map_err(csv_err)?;
    }

    wtr.flush()
        .map_err(|e| KilnError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}

fn decimal(m: Money) -> String {
    if m.is_negative() {
        format!("-{}.{:02}", m.taka().abs(), m.paisa_part())
    } else {
        format!("{}.{:02}", m.taka(), m.paisa_part())
    }
}

fn csv_err(e: csv::Error) -> KilnError {
    KilnError::Export(format!("Failed to write CSV: {}", e))
}
