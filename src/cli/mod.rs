//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod common;
pub mod customer;
pub mod due;
pub mod expense;
pub mod labor;
pub mod report;
pub mod sale;

pub use backup::{handle_backup_command, BackupCommands};
pub use customer::{handle_customer_command, CustomerCommands};
pub use due::{handle_due_command, DueCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use labor::{handle_labor_command, LaborCommands};
pub use report::{handle_report_command, ReportCommands};
pub use sale::{handle_sale_command, SaleCommands};
