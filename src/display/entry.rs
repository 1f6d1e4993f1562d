//! Entry display formatting
//!
//! Formats ledger entries for terminal display as register rows and
//! detail views.

use crate::models::{Entry, PaymentStatus};

/// Format a single entry for display (register row)
pub fn format_entry_row(entry: &Entry) -> String {
    let status_icon = if entry.is_settled {
        "✓"
    } else if entry.payment_status == Some(PaymentStatus::Due) {
        "!"
    } else {
        " "
    };

    let challan = entry
        .challan_no
        .map(|n| format!("#{}", n))
        .unwrap_or_default();

    let who = entry
        .customer_name
        .as_deref()
        .unwrap_or(&entry.description);

    format!(
        "{} {} {:6} {:5} {:20} {:>12} {:>12}",
        status_icon,
        entry.local_day().format("%Y-%m-%d"),
        entry.kind.to_string(),
        challan,
        truncate(who, 20),
        entry.amount,
        entry.due(),
    )
}

/// Format a list of entries as a register
pub fn format_entry_register(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:1} {:10} {:6} {:5} {:20} {:>12} {:>12}\n",
        "", "Date", "Kind", "No", "Customer/Description", "Amount", "Due"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry));
        output.push('\n');
    }

    output
}

/// Format entry details for display
pub fn format_entry_details(entry: &Entry) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:    {}\n", entry.id));
    output.push_str(&format!(
        "Date:     {}\n",
        entry.local_day().format("%Y-%m-%d")
    ));
    output.push_str(&format!("Kind:     {}\n", entry.kind));

    if let Some(no) = entry.challan_no {
        output.push_str(&format!("Challan:  #{}\n", no));
    }
    if let Some(name) = &entry.customer_name {
        output.push_str(&format!("Customer: {}\n", name));
    }
    if let Some(address) = &entry.customer_address {
        if !address.is_empty() {
            output.push_str(&format!("Address:  {}\n", address));
        }
    }
    if let Some(vehicle) = &entry.vehicle_no {
        output.push_str(&format!("Vehicle:  {}\n", vehicle));
    }

    if !entry.items.is_empty() {
        output.push_str("Items:\n");
        for item in &entry.items {
            output.push_str(&format!(
                "  {} x {} @ {} = {}\n",
                item.brick_type,
                item.quantity,
                item.unit_rate,
                item.line_total()
            ));
        }
    } else {
        output.push_str(&format!("Details:  {}\n", entry.description));
        output.push_str(&format!("Category: {}\n", entry.category));
    }

    output.push_str(&format!("Amount:   {}\n", entry.amount));

    if entry.is_sale() {
        output.push_str(&format!("Paid:     {}\n", entry.collected()));
        output.push_str(&format!("Due:      {}\n", entry.due()));
        let status = if entry.is_settled {
            "SETTLED".to_string()
        } else {
            entry
                .payment_status
                .map(|s| s.to_string())
                .unwrap_or_default()
        };
        output.push_str(&format!("Status:   {}\n", status));
    }

    output
}

/// Truncate a string to a maximum number of characters, padding short ones
///
/// Works on characters rather than bytes because names are often Bengali.
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = chars[..max_len.saturating_sub(3)].iter().collect();
        format!("{}...", cut)
    }
}
