//! Labor CLI commands

use clap::Subcommand;

use crate::display::format_entry_register;
use crate::error::KilnResult;
use crate::models::EntryKind;
use crate::services::LaborService;
use crate::storage::Storage;

use super::common::{parse_date, parse_money};

/// Labor subcommands
#[derive(Subcommand)]
pub enum LaborCommands {
    /// Record an advance (dadon) paid to a contractor
    Advance {
        /// Amount in taka
        amount: String,

        /// Contractor name
        contractor: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Record payment for labor work performed
    Work {
        /// Amount in taka
        amount: String,

        /// What the work was
        description: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List labor entries (advances and work)
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a labor command
pub fn handle_labor_command(storage: &Storage, cmd: LaborCommands) -> KilnResult<()> {
    let service = LaborService::new(storage);

    match cmd {
        LaborCommands::Advance {
            amount,
            contractor,
            date,
        } => {
            let amount = parse_money(&amount)?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let entry = service.advance(amount, &contractor, date)?;
            println!("Recorded {}: {}", entry.description, entry.amount);
        }

        LaborCommands::Work {
            amount,
            description,
            date,
        } => {
            let amount = parse_money(&amount)?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let entry = service.work(amount, &description, date)?;
            println!("Recorded labor work: {} ({})", entry.amount, entry.description);
        }

        LaborCommands::List { limit } => {
            let entries = storage.entries.all()?;
            let labor: Vec<_> = entries
                .into_iter()
                .filter(|e| {
                    matches!(e.kind, EntryKind::LaborAdvance | EntryKind::LaborWork)
                })
                .take(limit)
                .collect();
            print!("{}", format_entry_register(&labor));
        }
    }

    Ok(())
}
