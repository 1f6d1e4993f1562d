//! Customer directory repository for JSON storage
//!
//! Append-only party directory backed by customers.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{KilnError, KilnResult};
use crate::models::{Customer, CustomerId};

use super::file_io::{read_json_lenient, write_json_atomic};

/// Serializable customer data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CustomerData {
    customers: Vec<Customer>,
}

/// Repository for the party directory
pub struct CustomerDirectory {
    path: PathBuf,
    data: RwLock<Vec<Customer>>,
}

impl CustomerDirectory {
    /// Create a new customer directory
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load customers from disk, treating missing or malformed files as empty
    pub fn load(&self) -> KilnResult<Option<String>> {
        let (file_data, warning): (CustomerData, _) = read_json_lenient(&self.path);

        let mut data = self
            .data
            .write()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.customers;

        Ok(warning)
    }

    /// Save customers to disk
    pub fn save(&self) -> KilnResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CustomerData {
            customers: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Add a customer at the head of the directory and persist
    pub fn append(&self, customer: Customer) -> KilnResult<()> {
        {
            let mut data = self
                .data
                .write()
                .map_err(|e| KilnError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            data.insert(0, customer);
        }
        self.save()
    }

    /// Get a customer by ID
    pub fn get(&self, id: CustomerId) -> KilnResult<Option<Customer>> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|c| c.id == id).cloned())
    }

    /// Get all customers
    pub fn all(&self) -> KilnResult<Vec<Customer>> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Search by case-insensitive substring of name or address,
    /// sorted by name ascending. An empty query returns everyone.
    pub fn search(&self, query: &str) -> KilnResult<Vec<Customer>> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches: Vec<_> = data
            .iter()
            .filter(|c| query.trim().is_empty() || c.matches(query.trim()))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matches)
    }

    /// Find the first customer with this exact name
    pub fn find_by_name(&self, name: &str) -> KilnResult<Option<Customer>> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|c| c.name == name).cloned())
    }

    /// Replace the entire directory and persist (snapshot restore)
    pub fn replace_all(&self, customers: Vec<Customer>) -> KilnResult<()> {
        {
            let mut data = self
                .data
                .write()
                .map_err(|e| KilnError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            *data = customers;
        }
        self.save()
    }

    /// Count customers
    pub fn count(&self) -> KilnResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| KilnError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_directory() -> (TempDir, CustomerDirectory) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("customers.json");
        let directory = CustomerDirectory::new(path);
        (temp_dir, directory)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, directory) = create_test_directory();
        assert!(directory.load().unwrap().is_none());
        assert_eq!(directory.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_reload() {
        let (temp_dir, directory) = create_test_directory();
        directory.load().unwrap();

        directory.append(Customer::new("Karim Traders", "Bogura")).unwrap();

        let directory2 = CustomerDirectory::new(temp_dir.path().join("customers.json"));
        directory2.load().unwrap();
        assert_eq!(directory2.count().unwrap(), 1);
    }

    #[test]
    fn test_search_matches_name_and_address() {
        let (_temp_dir, directory) = create_test_directory();
        directory.load().unwrap();

        directory.append(Customer::new("Karim Traders", "Sherpur")).unwrap();
        directory.append(Customer::new("Rahim Bricks", "Bogura Sadar")).unwrap();
        directory.append(Customer::new("Salam & Sons", "Dhunat")).unwrap();

        assert_eq!(directory.search("karim").unwrap().len(), 1);
        assert_eq!(directory.search("bogura").unwrap().len(), 1);
        assert_eq!(directory.search("xyz").unwrap().len(), 0);
    }

    #[test]
    fn test_search_sorted_by_name() {
        let (_temp_dir, directory) = create_test_directory();
        directory.load().unwrap();

        directory.append(Customer::new("Zahir", "Bogura")).unwrap();
        directory.append(Customer::new("Abul", "Bogura")).unwrap();

        let results = directory.search("bogura").unwrap();
        assert_eq!(results[0].name, "Abul");
        assert_eq!(results[1].name, "Zahir");
    }

    #[test]
    fn test_empty_query_returns_all() {
        let (_temp_dir, directory) = create_test_directory();
        directory.load().unwrap();

        directory.append(Customer::new("Karim", "Bogura")).unwrap();
        directory.append(Customer::new("Rahim", "Sherpur")).unwrap();

        assert_eq!(directory.search("").unwrap().len(), 2);
    }

    #[test]
    fn test_find_by_name_exact() {
        let (_temp_dir, directory) = create_test_directory();
        directory.load().unwrap();

        directory.append(Customer::new("Karim Traders", "Bogura")).unwrap();

        assert!(directory.find_by_name("Karim Traders").unwrap().is_some());
        assert!(directory.find_by_name("karim traders").unwrap().is_none());
    }
}
