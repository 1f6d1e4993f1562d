//! Backup CLI commands
//!
//! Snapshot export and import. Import is a wholesale replace, so it demands
//! --force and writes a safety snapshot of the current ledger first.

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{KilnError, KilnResult};
use crate::snapshot::Snapshot;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Export the full ledger as a JSON snapshot
    Export {
        /// Output path (defaults to a timestamped file in the backup directory)
        output: Option<PathBuf>,
    },

    /// Replace the ledger with a previously exported snapshot
    Import {
        /// Snapshot file to import
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(storage: &Storage, cmd: BackupCommands) -> KilnResult<()> {
    match cmd {
        BackupCommands::Export { output } => {
            let path = match output {
                Some(p) => p,
                None => default_snapshot_path(storage),
            };

            let snapshot = Snapshot::from_storage(storage)?;
            let entry_count = snapshot.entries.len();
            let customer_count = snapshot.customers.len();

            let file = File::create(&path).map_err(|e| {
                KilnError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            snapshot.write_to(file)?;

            println!(
                "Exported {} entries and {} parties to {}",
                entry_count,
                customer_count,
                path.display()
            );
        }

        BackupCommands::Import { file, force } => {
            let reader = File::open(&file).map_err(|e| {
                KilnError::Io(format!("Failed to open {}: {}", file.display(), e))
            })?;

            // Parse and validate fully before touching any state
            let snapshot = Snapshot::read_from(reader)?;

            println!("Snapshot: {}", file.display());
            println!("  Version:   {}", snapshot.version);
            println!(
                "  Taken:     {}",
                snapshot.exported_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("  Entries:   {}", snapshot.entries.len());
            println!("  Parties:   {}", snapshot.customers.len());
            println!();

            if !force {
                println!("WARNING: importing replaces ALL current data!");
                println!("To proceed, run again with --force:");
                println!("  kiln backup import {} --force", file.display());
                return Ok(());
            }

            // Safety snapshot of what is about to be replaced
            let safety_path = default_snapshot_path(storage);
            let current = Snapshot::from_storage(storage)?;
            let safety_file = File::create(&safety_path).map_err(|e| {
                KilnError::Export(format!(
                    "Failed to create safety snapshot {}: {}",
                    safety_path.display(),
                    e
                ))
            })?;
            current.write_to(safety_file)?;
            println!("Current ledger saved to {}", safety_path.display());

            let entry_count = snapshot.entries.len();
            let customer_count = snapshot.customers.len();
            snapshot.restore(storage)?;
            println!(
                "Import complete: {} entries, {} parties.",
                entry_count, customer_count
            );
        }
    }

    Ok(())
}

fn default_snapshot_path(storage: &Storage) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    storage
        .paths()
        .backup_dir()
        .join(format!("kiln-ledger-{}.json", stamp))
}
