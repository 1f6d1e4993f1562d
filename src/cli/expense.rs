//! Expense CLI commands

use clap::Subcommand;

use crate::display::format_entry_register;
use crate::error::KilnResult;
use crate::models::EntryKind;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::common::{parse_date, parse_money};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount in taka
        amount: String,

        /// What the money was spent on
        description: String,

        /// Category label
        #[arg(short, long, default_value = "general")]
        category: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    List {
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> KilnResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = parse_money(&amount)?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let service = ExpenseService::new(storage);
            let entry = service.create(amount, &description, &category, date)?;
            println!("Recorded expense: {} ({})", entry.amount, entry.description);
        }

        ExpenseCommands::List { limit } => {
            let entries = storage.entries.all()?;
            let expenses: Vec<_> = entries
                .into_iter()
                .filter(|e| e.kind == EntryKind::Expense)
                .take(limit)
                .collect();
            print!("{}", format_entry_register(&expenses));
        }
    }

    Ok(())
}
