//! kiln-ledger - Ledger and settlement engine for a brick field
//!
//! This library keeps the books of a small brick-manufacturing business:
//! sale memos with sequential challan numbers, expenses, labor advances
//! (dadon), due settlement, and reporting.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, customers, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic (sales, settlement, challan numbering)
//! - `reports`: Aggregation (summary, daily, range, due)
//! - `snapshot`: Full-ledger JSON export and import
//! - `export`: CSV export
//! - `display`: Terminal formatting, including printable cash memos
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use kiln_ledger::config::{paths::KilnPaths, settings::Settings};
//!
//! let paths = KilnPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod snapshot;
pub mod storage;

pub use error::KilnError;
