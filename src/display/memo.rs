//! Printable memo rendering
//!
//! Renders a sale as a plain-text cash memo suitable for a dot-matrix or
//! thermal printer: business header, challan number, buyer details, the
//! item table, and the paid/due footer.

use crate::config::Settings;
use crate::models::Entry;

const MEMO_WIDTH: usize = 58;

/// Render a sale entry as a printable cash memo
pub fn format_memo(entry: &Entry, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&center(&settings.business_name));
    output.push_str(&center("CASH MEMO"));
    output.push_str(&"=".repeat(MEMO_WIDTH));
    output.push('\n');

    if let Some(no) = entry.challan_no {
        output.push_str(&format!(
            "Challan No: {:<20} Date: {}\n",
            no,
            entry.local_day().format(&settings.date_format)
        ));
    } else {
        output.push_str(&format!(
            "Date: {}\n",
            entry.local_day().format(&settings.date_format)
        ));
    }

    if let Some(name) = &entry.customer_name {
        output.push_str(&format!("Name:    {}\n", name));
    }
    if let Some(address) = &entry.customer_address {
        if !address.is_empty() {
            output.push_str(&format!("Address: {}\n", address));
        }
    }
    if let Some(vehicle) = &entry.vehicle_no {
        output.push_str(&format!("Vehicle: {}\n", vehicle));
    }

    output.push_str(&"-".repeat(MEMO_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>8} {:>12} {:>14}\n",
        "Item", "Qty", "Rate", "Amount"
    ));
    output.push_str(&"-".repeat(MEMO_WIDTH));
    output.push('\n');

    for item in &entry.items {
        output.push_str(&format!(
            "{:<20} {:>8} {:>12} {:>14}\n",
            item.brick_type,
            item.quantity,
            item.unit_rate.to_string(),
            item.line_total().to_string()
        ));
    }

    output.push_str(&"-".repeat(MEMO_WIDTH));
    output.push('\n');
    output.push_str(&format!("{:>43} {:>14}\n", "Total:", entry.amount.to_string()));
    output.push_str(&format!("{:>43} {:>14}\n", "Paid:", entry.collected().to_string()));
    output.push_str(&format!("{:>43} {:>14}\n", "Due:", entry.due().to_string()));

    output.push_str(&"=".repeat(MEMO_WIDTH));
    output.push('\n');
    output.push_str(&center("Thank you"));

    output
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= MEMO_WIDTH {
        return format!("{}\n", text);
    }
    let pad = (MEMO_WIDTH - len) / 2;
    format!("{}{}\n", " ".repeat(pad), text)
}
