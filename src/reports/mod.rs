//! Report generation for kiln-ledger

pub mod daily;
pub mod due;
pub mod range;
pub mod summary;

pub use daily::DailySales;
pub use due::DueReport;
pub use range::SalesRangeReport;
pub use summary::BusinessSummary;
