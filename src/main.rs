use anyhow::Result;
use clap::{Parser, Subcommand};

use kiln_ledger::cli::{
    handle_backup_command, handle_customer_command, handle_due_command, handle_expense_command,
    handle_labor_command, handle_report_command, handle_sale_command,
};
use kiln_ledger::config::{paths::KilnPaths, settings::Settings};
use kiln_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kiln",
    version,
    about = "Ledger and settlement engine for a brick field",
    long_about = "kiln-ledger keeps the books of a small brick-manufacturing \
                  business from the command line: sale memos with challan \
                  numbers, expenses, labor advances, due settlement, and \
                  daily reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and inspect sales
    #[command(subcommand)]
    Sale(kiln_ledger::cli::SaleCommands),

    /// Manage the party directory
    #[command(subcommand, alias = "party")]
    Customer(kiln_ledger::cli::CustomerCommands),

    /// Record expenses
    #[command(subcommand)]
    Expense(kiln_ledger::cli::ExpenseCommands),

    /// Record labor advances and work
    #[command(subcommand)]
    Labor(kiln_ledger::cli::LaborCommands),

    /// Track and settle dues
    #[command(subcommand)]
    Due(kiln_ledger::cli::DueCommands),

    /// Reports and CSV export
    #[command(subcommand)]
    Report(kiln_ledger::cli::ReportCommands),

    /// Export and import ledger snapshots
    #[command(subcommand)]
    Backup(kiln_ledger::cli::BackupCommands),

    /// Initialize the ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = KilnPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    for warning in storage.load_all()? {
        eprintln!("Warning: {}", warning);
    }

    match cli.command {
        Some(Commands::Sale(cmd)) => {
            handle_sale_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Customer(cmd)) => {
            handle_customer_command(&storage, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, cmd)?;
        }
        Some(Commands::Labor(cmd)) => {
            handle_labor_command(&storage, cmd)?;
        }
        Some(Commands::Due(cmd)) => {
            handle_due_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing kiln-ledger at: {}", paths.data_dir().display());
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Record your first sale with:");
            println!("  kiln sale add \"Buyer Name\" --item \"১ নং মেশিন:1000:12\" --paid 5000");
        }
        Some(Commands::Config) => {
            println!("kiln-ledger Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Business name:   {}", settings.business_name);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("kiln-ledger - brick field books from the command line");
            println!();
            println!("Run 'kiln --help' for usage information.");
            println!("Run 'kiln init' to set up a new ledger.");
        }
    }

    Ok(())
}
