//! In-memory person repository
//!
//! People live only for the lifetime of the process. The repository keeps
//! them in insertion order so lists and totals are stable.

use std::sync::RwLock;

use crate::error::DebtError;
use crate::models::{Person, PersonId, TransactionId};

/// Repository holding every person and, through them, every transaction
pub struct PersonRepository {
    data: RwLock<Vec<Person>>,
}

impl PersonRepository {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
        }
    }

    /// Get a person by ID
    pub fn get(&self, id: PersonId) -> Result<Option<Person>, DebtError> {
        let data = self
            .data
            .read()
            .map_err(|e| DebtError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|p| p.id() == id).cloned())
    }

    /// Get all people in insertion order
    pub fn get_all(&self) -> Result<Vec<Person>, DebtError> {
        let data = self
            .data
            .read()
            .map_err(|e| DebtError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get the first person with this name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Person>, DebtError> {
        let data = self
            .data
            .read()
            .map_err(|e| DebtError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let wanted = name.trim().to_lowercase();
        Ok(data.iter().find(|p| p.name.to_lowercase() == wanted).cloned())
    }

    /// Find the person owning a transaction
    pub fn owner_of(&self, txn_id: TransactionId) -> Result<Option<PersonId>, DebtError> {
        let data = self
            .data
            .read()
            .map_err(|e| DebtError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .find(|p| p.transaction(txn_id).is_some())
            .map(|p| p.id()))
    }

    /// Insert a new person or replace an existing one in place
    pub fn upsert(&self, person: Person) -> Result<(), DebtError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DebtError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|p| p.id() == person.id()) {
            Some(existing) => *existing = person,
            None => data.push(person),
        }
        Ok(())
    }

    /// Remove a person, returning it if it existed
    pub fn delete(&self, id: PersonId) -> Result<Option<Person>, DebtError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DebtError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data
            .iter()
            .position(|p| p.id() == id)
            .map(|index| data.remove(index)))
    }

    pub fn count(&self) -> Result<usize, DebtError> {
        let data = self
            .data
            .read()
            .map_err(|e| DebtError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

impl Default for PersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionKind};

    #[test]
    fn test_insertion_order_preserved() {
        let repo = PersonRepository::new();
        for name in ["Zed", "Alice", "Mike"] {
            repo.upsert(Person::new(name)).unwrap();
        }

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Zed", "Alice", "Mike"]);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let repo = PersonRepository::new();
        let mut alice = Person::new("Alice");
        repo.upsert(alice.clone()).unwrap();
        repo.upsert(Person::new("Bob")).unwrap();

        alice.rename("Alicia");
        repo.upsert(alice.clone()).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Alicia");
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let repo = PersonRepository::new();
        repo.upsert(Person::new("Alice")).unwrap();

        assert!(repo.get_by_name("  aLiCe ").unwrap().is_some());
        assert!(repo.get_by_name("Bob").unwrap().is_none());
    }

    #[test]
    fn test_owner_of() {
        let repo = PersonRepository::new();
        let mut alice = Person::new("Alice");
        let txn_id = alice.add_transaction(NewTransaction {
            kind: TransactionKind::Debit,
            title: "Lunch".into(),
            description: "Tacos".into(),
            amount: Money::from_cents(1200),
        })
        .unwrap();
        let alice_id = alice.id();
        repo.upsert(alice).unwrap();
        repo.upsert(Person::new("Bob")).unwrap();

        assert_eq!(repo.owner_of(txn_id).unwrap(), Some(alice_id));
        assert_eq!(repo.owner_of(TransactionId::new()).unwrap(), None);
    }

    #[test]
    fn test_delete() {
        let repo = PersonRepository::new();
        let alice = Person::new("Alice");
        let id = alice.id();
        repo.upsert(alice).unwrap();

        assert!(repo.delete(id).unwrap().is_some());
        assert!(repo.delete(id).unwrap().is_none());
        assert!(repo.get(id).unwrap().is_none());
    }
}
