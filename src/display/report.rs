//! Report display formatting

use crate::display::entry::{format_entry_row, truncate};
use crate::models::Customer;
use crate::reports::{BusinessSummary, DailySales, DueReport, SalesRangeReport};

/// Format the business summary dashboard
pub fn format_summary(summary: &BusinessSummary) -> String {
    let mut output = String::new();

    output.push_str("Business Summary\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("{:<20} {:>18}\n", "Total Sales:", summary.total_sales.to_string()));
    output.push_str(&format!(
        "{:<20} {:>18}\n",
        "Total Expenses:",
        summary.total_expenses.to_string()
    ));
    output.push_str(&format!("{:<20} {:>18}\n", "Profit:", summary.profit.to_string()));
    output.push_str(&format!("{:<20} {:>18}\n", "Net Cash:", summary.net_cash.to_string()));
    output.push_str(&format!("{:<20} {:>18}\n", "Outstanding Due:", summary.total_due.to_string()));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("{} entries\n", summary.entry_count));

    output
}

/// Format a daily sales report
pub fn format_daily(report: &DailySales) -> String {
    let mut output = String::new();

    output.push_str(&format!("Sales for {}\n", report.day.format("%Y-%m-%d")));
    output.push_str(&"=".repeat(74));
    output.push('\n');

    if report.is_empty() {
        output.push_str("No sales on this day.\n");
        return output;
    }

    for sale in &report.sales {
        output.push_str(&format_entry_row(sale));
        output.push('\n');
    }

    output.push_str(&"-".repeat(74));
    output.push('\n');
    output.push_str(&format!(
        "{} memos, {} bricks\n",
        report.sales.len(),
        report.total_bricks
    ));
    output.push_str(&format!(
        "Total: {}   Collected: {}   Due: {}\n",
        report.total_amount, report.total_collected, report.total_due
    ));

    output
}

/// Format a sales range report
pub fn format_range(report: &SalesRangeReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Sales {} to {}\n",
        report.start.format("%Y-%m-%d"),
        report.end.format("%Y-%m-%d")
    ));
    output.push_str(&"=".repeat(74));
    output.push('\n');

    if report.sales.is_empty() {
        output.push_str("No sales in this range.\n");
        return output;
    }

    for sale in &report.sales {
        output.push_str(&format_entry_row(sale));
        output.push('\n');
    }

    output.push_str(&"-".repeat(74));
    output.push('\n');
    output.push_str(&format!(
        "{} memos, {} bricks, {} buyers\n",
        report.sales.len(),
        report.total_bricks,
        report.customers.len()
    ));
    output.push_str(&format!(
        "Total: {}   Collected: {}   Due: {}\n",
        report.total_amount, report.total_collected, report.total_due
    ));
    output.push_str(&format!("Buyers: {}\n", report.customers.join(", ")));

    output
}

/// Format the due report
pub fn format_due(report: &DueReport) -> String {
    if report.rows.is_empty() {
        return "No dues found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:1} {:10} {:5} {:20} {:>12} {:>12} {:>12}\n",
        "", "Date", "No", "Customer", "Amount", "Paid", "Due"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for entry in &report.rows {
        let icon = if entry.is_settled { "✓" } else { "!" };
        let challan = entry
            .challan_no
            .map(|n| format!("#{}", n))
            .unwrap_or_default();
        output.push_str(&format!(
            "{} {} {:5} {:20} {:>12} {:>12} {:>12}\n",
            icon,
            entry.local_day().format("%Y-%m-%d"),
            challan,
            truncate(entry.customer_name.as_deref().unwrap_or(""), 20),
            entry.amount,
            entry.collected(),
            entry.due(),
        ));
    }

    output.push_str(&"-".repeat(78));
    output.push('\n');
    output.push_str(&format!(
        "{} open, total due {}\n",
        report.open_count, report.total_due
    ));

    output
}

/// Format the party directory
pub fn format_customers(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No parties found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:25} {:30} {:12}\n", "Name", "Address", "ID"));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for customer in customers {
        output.push_str(&format!(
            "{} {} {}\n",
            truncate(&customer.name, 25),
            truncate(&customer.address, 30),
            customer.id
        ));
    }

    output
}
