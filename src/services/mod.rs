//! Business logic services for kiln-ledger

pub mod challan;
pub mod expenses;
pub mod labor;
pub mod sales;
pub mod settlement;

pub use challan::{challan_in_use, next_challan_no, CHALLAN_BASE};
pub use expenses::ExpenseService;
pub use labor::LaborService;
pub use sales::{NewSale, RecordedSale, SalesService};
pub use settlement::SettlementService;
