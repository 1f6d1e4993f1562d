//! Sale CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_register, format_memo};
use crate::error::{KilnError, KilnResult};
use crate::models::{Money, SaleItem, BRICK_TYPES};
use crate::services::{NewSale, SalesService};
use crate::storage::Storage;

use super::common::{parse_date, parse_money, resolve_entry_ref};

/// Sale subcommands
#[derive(Subcommand)]
pub enum SaleCommands {
    /// Record a new sale
    Add {
        /// Buyer name
        customer: String,

        /// Line item as TYPE:QTY:RATE, repeatable (e.g. "১ নং মেশিন:1000:12")
        #[arg(short, long = "item", required = true)]
        items: Vec<String>,

        /// Cash collected now (defaults to 0, everything due)
        #[arg(short, long)]
        paid: Option<String>,

        /// Buyer address (defaults to the directory entry, if any)
        #[arg(short, long)]
        address: Option<String>,

        /// Delivery vehicle number
        #[arg(short, long)]
        vehicle: Option<String>,

        /// Memo date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Explicit challan number (defaults to the next sequential one)
        #[arg(short = 'n', long)]
        challan: Option<u32>,

        /// Print the cash memo after recording
        #[arg(long)]
        print: bool,
    },

    /// List sales
    List {
        /// Number of sales to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show full details of a sale by challan number or ID
    Show {
        /// Challan number or entry ID
        reference: String,
    },

    /// Print the cash memo for a sale
    Memo {
        /// Challan number or entry ID
        reference: String,
    },

    /// List the default brick types
    Types,
}

/// Handle a sale command
pub fn handle_sale_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SaleCommands,
) -> KilnResult<()> {
    match cmd {
        SaleCommands::Add {
            customer,
            items,
            paid,
            address,
            vehicle,
            date,
            challan,
            print,
        } => {
            let items = items
                .iter()
                .map(|s| parse_item(s))
                .collect::<KilnResult<Vec<_>>>()?;
            let paid_amount = match paid {
                Some(p) => parse_money(&p)?,
                None => Money::zero(),
            };
            let date = date.as_deref().map(parse_date).transpose()?;

            let service = SalesService::new(storage);
            let recorded = service.create(NewSale {
                customer_name: customer,
                customer_address: address,
                vehicle_no: vehicle,
                items,
                paid_amount,
                date,
                challan_no: challan,
            })?;

            if recorded.duplicate_challan {
                eprintln!(
                    "Warning: challan #{} is already in use.",
                    recorded.entry.challan_no.unwrap_or_default()
                );
            }

            println!(
                "Recorded sale #{}: {} (paid {}, due {})",
                recorded.entry.challan_no.unwrap_or_default(),
                recorded.entry.amount,
                recorded.entry.collected(),
                recorded.entry.due()
            );

            if print {
                println!();
                print!("{}", format_memo(&recorded.entry, settings));
            }
        }

        SaleCommands::List { limit } => {
            let entries = storage.entries.all()?;
            let sales: Vec<_> = entries
                .into_iter()
                .filter(|e| e.is_sale())
                .take(limit)
                .collect();
            print!("{}", format_entry_register(&sales));
        }

        SaleCommands::Show { reference } => {
            let id = resolve_entry_ref(storage, &reference)?;
            let entry = storage
                .entries
                .get(id)?
                .ok_or_else(|| KilnError::entry_not_found(reference))?;
            print!("{}", format_entry_details(&entry));
        }

        SaleCommands::Memo { reference } => {
            let id = resolve_entry_ref(storage, &reference)?;
            let entry = storage
                .entries
                .get(id)?
                .ok_or_else(|| KilnError::entry_not_found(reference.clone()))?;
            if !entry.is_sale() {
                return Err(KilnError::InvalidEntryKind {
                    id: reference,
                    kind: entry.kind.to_string(),
                });
            }
            print!("{}", format_memo(&entry, settings));
        }

        SaleCommands::Types => {
            println!("Brick types:");
            for brick_type in BRICK_TYPES {
                println!("  {}", brick_type);
            }
        }
    }

    Ok(())
}

/// Parse a TYPE:QTY:RATE item argument
///
/// Splits from the right so brick type names may contain anything but a
/// trailing ":qty:rate".
fn parse_item(s: &str) -> KilnResult<SaleItem> {
    let mut parts = s.rsplitn(3, ':');
    let rate = parts.next();
    let qty = parts.next();
    let brick_type = parts.next();

    match (brick_type, qty, rate) {
        (Some(brick_type), Some(qty), Some(rate)) if !brick_type.trim().is_empty() => {
            let quantity: u32 = qty.trim().parse().map_err(|_| {
                KilnError::Validation(format!("Invalid quantity '{}' in item '{}'", qty, s))
            })?;
            let unit_rate = parse_money(rate)?;
            Ok(SaleItem::new(brick_type.trim(), quantity, unit_rate))
        }
        _ => Err(KilnError::Validation(format!(
            "Invalid item '{}', expected TYPE:QTY:RATE",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let item = parse_item("১ নং মেশিন:1000:12").unwrap();
        assert_eq!(item.brick_type, "১ নং মেশিন");
        assert_eq!(item.quantity, 1000);
        assert_eq!(item.unit_rate, Money::from_taka(12));
    }

    #[test]
    fn test_parse_item_decimal_rate() {
        let item = parse_item("ঘুড়িয়া:500:8.50").unwrap();
        assert_eq!(item.unit_rate, Money::from_paisa(850));
    }

    #[test]
    fn test_parse_item_rejects_garbage() {
        assert!(parse_item("no-colons-here").is_err());
        assert!(parse_item("type:abc:10").is_err());
        assert!(parse_item(":100:10").is_err());
    }
}
