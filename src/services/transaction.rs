//! Transaction service
//!
//! All amount changes go through the owning [`Person`] so every edit is
//! folded into that person's running totals as a delta.

use tracing::debug;

use crate::audit::EntityType;
use crate::error::{DebtError, DebtResult};
use crate::models::{
    check_amount, FieldBinding, Money, NewTransaction, Person, PersonId, Transaction, TransactionDraft,
    TransactionId,
};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a transaction to a person and apply its amount
    pub fn create(&self, person_id: PersonId, new: NewTransaction) -> DebtResult<Transaction> {
        check_amount(new.amount)?;

        let mut person = self.person(person_id)?;
        let txn_id = person.add_transaction(new)?;
        let txn = person
            .transaction(txn_id)
            .cloned()
            .ok_or_else(|| DebtError::transaction_not_found(txn_id.to_string()))?;

        self.storage.people.upsert(person)?;
        self.storage.log_create(
            EntityType::Transaction,
            txn.id().to_string(),
            Some(txn.title.clone()),
            &txn,
        )?;

        debug!(transaction = %txn.id(), person = %person_id, amount = %txn.amount(), "created transaction");
        Ok(txn)
    }

    /// Validate a form draft, then create it
    pub fn create_from_draft(
        &self,
        person_id: PersonId,
        draft: &TransactionDraft,
    ) -> DebtResult<Transaction> {
        let new = draft.validate()?;
        self.create(person_id, new)
    }

    pub fn get(&self, id: TransactionId) -> DebtResult<Option<Transaction>> {
        match self.storage.people.owner_of(id)? {
            Some(owner) => Ok(self
                .storage
                .people
                .get(owner)?
                .and_then(|p| p.transaction(id).cloned())),
            None => Ok(None),
        }
    }

    /// Find one of a person's transactions by ID prefix or title
    pub fn find(&self, person_id: PersonId, identifier: &str) -> DebtResult<Option<Transaction>> {
        let person = self.person(person_id)?;
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<TransactionId>() {
            return Ok(person.transaction(id).cloned());
        }

        let prefix = identifier.trim_start_matches("txn-");
        if let Some(txn) = person.transactions().iter().find(|t| t.id().matches_prefix(prefix)) {
            return Ok(Some(txn.clone()));
        }

        let wanted = identifier.to_lowercase();
        Ok(person
            .transactions()
            .iter()
            .find(|t| t.title.to_lowercase() == wanted)
            .cloned())
    }

    /// A person's transactions in creation order
    pub fn list_for(&self, person_id: PersonId) -> DebtResult<Vec<Transaction>> {
        Ok(self.person(person_id)?.transactions().to_vec())
    }

    /// Change an amount; the difference is applied to the owner's totals
    pub fn set_amount(&self, id: TransactionId, amount: Money) -> DebtResult<Transaction> {
        check_amount(amount)?;

        let mut person = self.owner(id)?;
        let before = person
            .transaction(id)
            .cloned()
            .ok_or_else(|| DebtError::transaction_not_found(id.to_string()))?;

        let delta = person.set_transaction_amount(id, amount)?;
        if delta.is_zero() {
            return Ok(before);
        }

        let after = person
            .transaction(id)
            .cloned()
            .ok_or_else(|| DebtError::transaction_not_found(id.to_string()))?;
        let person_id = person.id();
        self.storage.people.upsert(person)?;

        self.storage.log_update(
            EntityType::Transaction,
            after.id().to_string(),
            Some(after.title.clone()),
            &before,
            &after,
        )?;

        debug!(transaction = %id, person = %person_id, delta = %delta, "amount changed");
        Ok(after)
    }

    /// Write one text field through its binding
    pub fn edit_field(
        &self,
        id: TransactionId,
        binding: FieldBinding<Transaction>,
        value: &str,
    ) -> DebtResult<Transaction> {
        let mut person = self.owner(id)?;
        let txn = person
            .transaction_mut(id)
            .ok_or_else(|| DebtError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();
        binding.set(txn, value)?;
        if binding.get(txn) == binding.get(&before) {
            return Ok(before);
        }
        let after = txn.clone();

        self.storage.people.upsert(person)?;
        self.storage.log_update(
            EntityType::Transaction,
            after.id().to_string(),
            Some(after.title.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Reverse a transaction's amount, then remove it
    pub fn delete(&self, id: TransactionId) -> DebtResult<Transaction> {
        let mut person = self.owner(id)?;
        let before = person
            .transaction(id)
            .cloned()
            .ok_or_else(|| DebtError::transaction_not_found(id.to_string()))?;

        let removed = person.delete_transaction(id)?;
        self.storage.people.upsert(person)?;

        self.storage.log_delete(
            EntityType::Transaction,
            removed.id().to_string(),
            Some(removed.title.clone()),
            &before,
        )?;

        Ok(removed)
    }

    fn person(&self, id: PersonId) -> DebtResult<Person> {
        self.storage
            .people
            .get(id)?
            .ok_or_else(|| DebtError::person_not_found(id.to_string()))
    }

    fn owner(&self, txn_id: TransactionId) -> DebtResult<Person> {
        let owner = self
            .storage
            .people
            .owner_of(txn_id)?
            .ok_or_else(|| DebtError::transaction_not_found(txn_id.to_string()))?;
        self.person(owner)
    }
}
