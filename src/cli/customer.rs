//! Customer (party) CLI commands

use clap::Subcommand;

use crate::display::format_customers;
use crate::error::{KilnError, KilnResult};
use crate::models::Customer;
use crate::storage::Storage;

/// Customer subcommands
#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Add a party to the directory
    Add {
        /// Party name
        name: String,

        /// Party address
        #[arg(short, long, default_value = "")]
        address: String,
    },

    /// List all parties
    List,

    /// Search parties by name or address
    Search {
        /// Case-insensitive substring
        query: String,
    },
}

/// Handle a customer command
pub fn handle_customer_command(storage: &Storage, cmd: CustomerCommands) -> KilnResult<()> {
    match cmd {
        CustomerCommands::Add { name, address } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(KilnError::Validation("Party name cannot be empty".into()));
            }
            if storage.customers.find_by_name(name)?.is_some() {
                eprintln!("Note: a party named '{}' already exists.", name);
            }

            let customer = Customer::new(name, address.trim());
            storage.customers.append(customer.clone())?;
            println!("Added party: {} ({})", customer.name, customer.id);
        }

        CustomerCommands::List => {
            let customers = storage.customers.search("")?;
            print!("{}", format_customers(&customers));
        }

        CustomerCommands::Search { query } => {
            let customers = storage.customers.search(&query)?;
            print!("{}", format_customers(&customers));
        }
    }

    Ok(())
}
