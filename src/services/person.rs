//! Person service
//!
//! Adds validation and audit logging around the person repository.

use crate::audit::EntityType;
use crate::error::{DebtError, DebtResult};
use crate::models::{FieldBinding, Money, Person, PersonId};
use crate::storage::Storage;

/// Balances summed across everyone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebtTotals {
    pub people: usize,
    pub you_owe: Money,
    pub they_owe: Money,
    pub net: Money,
}

/// Service for person management
pub struct PersonService<'a> {
    storage: &'a Storage,
}

impl<'a> PersonService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new person with no transactions
    pub fn create(&self, name: &str) -> DebtResult<Person> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DebtError::Validation("Person name cannot be empty".into()));
        }

        let person = Person::new(name);
        self.storage.people.upsert(person.clone())?;

        self.storage.log_create(
            EntityType::Person,
            person.id().to_string(),
            Some(person.name.clone()),
            &person,
        )?;

        Ok(person)
    }

    pub fn get(&self, id: PersonId) -> DebtResult<Option<Person>> {
        self.storage.people.get(id)
    }

    /// Find a person by name (case-insensitive) or ID
    pub fn find(&self, identifier: &str) -> DebtResult<Option<Person>> {
        if let Some(person) = self.storage.people.get_by_name(identifier)? {
            return Ok(Some(person));
        }

        if let Ok(id) = identifier.trim().parse::<PersonId>() {
            return self.storage.people.get(id);
        }

        // Short display ids ("per-1a2b3c4d")
        let prefix = identifier.trim().trim_start_matches("per-");
        Ok(self
            .storage
            .people
            .get_all()?
            .into_iter()
            .find(|p| p.id().matches_prefix(prefix)))
    }

    /// List everyone in the order they were added
    pub fn list(&self) -> DebtResult<Vec<Person>> {
        self.storage.people.get_all()
    }

    /// Write one text field through its binding
    pub fn edit_field(
        &self,
        id: PersonId,
        binding: FieldBinding<Person>,
        value: &str,
    ) -> DebtResult<Person> {
        let mut person = self
            .storage
            .people
            .get(id)?
            .ok_or_else(|| DebtError::person_not_found(id.to_string()))?;

        let before = person.clone();
        binding.set(&mut person, value)?;
        if binding.get(&person) == binding.get(&before) {
            return Ok(before);
        }

        self.storage.people.upsert(person.clone())?;
        self.storage.log_update(
            EntityType::Person,
            person.id().to_string(),
            Some(person.name.clone()),
            &before,
            &person,
        )?;

        Ok(person)
    }

    /// Zero every transaction, then remove the person
    pub fn delete(&self, id: PersonId) -> DebtResult<Person> {
        let mut person = self
            .storage
            .people
            .get(id)?
            .ok_or_else(|| DebtError::person_not_found(id.to_string()))?;

        person.settle_all()?;
        self.storage.people.upsert(person.clone())?;
        self.storage.people.delete(id)?;

        self.storage.log_delete(
            EntityType::Person,
            person.id().to_string(),
            Some(person.name.clone()),
            &person,
        )?;

        Ok(person)
    }

    /// Sum the balances of everyone
    pub fn totals(&self) -> DebtResult<DebtTotals> {
        let people = self.storage.people.get_all()?;

        let overflow = || DebtError::Validation("Combined totals are out of range".into());
        let mut you_owe = Money::zero();
        let mut they_owe = Money::zero();
        for person in &people {
            you_owe = you_owe
                .checked_add(person.money_you_owe())
                .ok_or_else(overflow)?;
            they_owe = they_owe
                .checked_add(person.money_they_owe())
                .ok_or_else(overflow)?;
        }
        let net = you_owe.checked_sub(they_owe).ok_or_else(overflow)?;

        Ok(DebtTotals {
            people: people.len(),
            you_owe,
            they_owe,
            net,
        })
    }
}
