//! Due management CLI commands

use clap::Subcommand;

use crate::display::format_due;
use crate::error::KilnResult;
use crate::reports::DueReport;
use crate::services::SettlementService;
use crate::storage::Storage;

use super::common::resolve_entry_ref;

/// Due subcommands
#[derive(Subcommand)]
pub enum DueCommands {
    /// List open dues and recent settlements
    List {
        /// Filter by buyer name or challan number
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Mark a sale's due as fully settled
    #[command(name = "mark-paid")]
    MarkPaid {
        /// Challan number or entry ID
        reference: String,
    },

    /// Undo a settlement, restoring the original due
    Undo {
        /// Challan number or entry ID
        reference: String,
    },
}

/// Handle a due command
pub fn handle_due_command(storage: &Storage, cmd: DueCommands) -> KilnResult<()> {
    match cmd {
        DueCommands::List { query } => {
            let entries = storage.entries.all()?;
            let report = match query {
                Some(q) => DueReport::search(&entries, &q),
                None => DueReport::compute(&entries),
            };
            print!("{}", format_due(&report));
        }

        DueCommands::MarkPaid { reference } => {
            let id = resolve_entry_ref(storage, &reference)?;
            let service = SettlementService::new(storage);

            match service.mark_paid(id)? {
                Some(entry) => println!(
                    "Settled challan #{} ({} collected at sale, {} written off as received)",
                    entry.challan_no.unwrap_or_default(),
                    entry.collected(),
                    entry.amount - entry.collected()
                ),
                None => println!("No entry found for '{}'. Nothing changed.", reference),
            }
        }

        DueCommands::Undo { reference } => {
            let id = resolve_entry_ref(storage, &reference)?;
            let service = SettlementService::new(storage);

            match service.undo_paid(id)? {
                Some(entry) => println!(
                    "Reopened challan #{}: due is {} again",
                    entry.challan_no.unwrap_or_default(),
                    entry.due()
                ),
                None => println!("No entry found for '{}'. Nothing changed.", reference),
            }
        }
    }

    Ok(())
}
