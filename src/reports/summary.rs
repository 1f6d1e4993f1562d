//! Business summary report
//!
//! The four headline figures shown on the dashboard. Profit is accrual
//! based (full invoiced sales minus production costs) while net cash only
//! counts money actually collected, and treats advances as cash out but not
//! as a cost. The two figures diverge on purpose; that gap is the working
//! capital tied up in dues and advances.

use crate::models::{Entry, EntryKind, Money};

/// Headline figures over the whole ledger
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessSummary {
    /// Gross invoiced sales
    pub total_sales: Money,
    /// Expenses plus labor work (costs of production)
    pub total_expenses: Money,
    /// Accrual profit: sales minus costs
    pub profit: Money,
    /// Cash position: collected sales minus expenses minus advances
    pub net_cash: Money,
    /// Outstanding dues across all sales
    pub total_due: Money,
    /// Number of entries considered
    pub entry_count: usize,
}

impl BusinessSummary {
    /// Compute the summary over a set of entries
    pub fn compute(entries: &[Entry]) -> Self {
        let mut total_sales = Money::zero();
        let mut total_expenses = Money::zero();
        let mut collected = Money::zero();
        let mut plain_expenses = Money::zero();
        let mut advances = Money::zero();
        let mut total_due = Money::zero();

        for entry in entries {
            match entry.kind {
                EntryKind::Sale => {
                    total_sales += entry.amount;
                    collected += entry.collected();
                    total_due += entry.due();
                }
                EntryKind::Expense => {
                    total_expenses += entry.amount;
                    plain_expenses += entry.amount;
                }
                EntryKind::LaborWork => {
                    total_expenses += entry.amount;
                }
                EntryKind::LaborAdvance => {
                    advances += entry.amount;
                }
            }
        }

        Self {
            total_sales,
            total_expenses,
            profit: total_sales - total_expenses,
            net_cash: collected - plain_expenses - advances,
            total_due,
            entry_count: entries.len(),
        }
    }
}
