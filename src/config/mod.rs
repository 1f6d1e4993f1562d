//! Configuration and path management for kiln-ledger

pub mod paths;
pub mod settings;

pub use paths::KilnPaths;
pub use settings::Settings;
