//! Domain models for kiln-ledger

pub mod customer;
pub mod entry;
pub mod ids;
pub mod money;

pub use customer::Customer;
pub use entry::{Entry, EntryKind, EntryValidationError, PaymentStatus, SaleItem, SettlementState, BRICK_TYPES};
pub use ids::{CustomerId, EntryId};
pub use money::{Money, MoneyParseError};
