//! Customer (party) model
//!
//! Buyers are recorded once in the directory and their name and address are
//! copied onto each sale at creation time, so later edits to the directory
//! never rewrite history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::CustomerId;

/// A buyer in the party directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,

    /// Party name
    pub name: String,

    /// Party address
    #[serde(default)]
    pub address: String,

    /// When this party was added to the directory
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            address: address.into(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match against name or address
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.address.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_case_insensitive() {
        let customer = Customer::new("Karim Traders", "Sherpur, Bogura");
        assert!(customer.matches("karim"));
        assert!(customer.matches("KARIM"));
        assert!(customer.matches("Traders"));
    }

    #[test]
    fn test_matches_address() {
        let customer = Customer::new("Karim Traders", "Sherpur, Bogura");
        assert!(customer.matches("bogura"));
        assert!(customer.matches("Sherpur"));
    }

    #[test]
    fn test_no_match() {
        let customer = Customer::new("Karim Traders", "Sherpur, Bogura");
        assert!(!customer.matches("rahim"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let customer = Customer::new("Karim Traders", "Bogura");
        let json = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer, deserialized);
    }

    #[test]
    fn test_missing_address_defaults_empty() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Karim Traders",
            "created_at": "2025-01-15T10:00:00Z"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.address, "");
    }
}
